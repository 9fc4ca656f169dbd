mod backend;
mod cli_messages;
mod config;
mod consts;
mod dispatcher;
mod environment;
mod events;
mod logging;
mod render;
mod request;
mod session;
mod ui;

use crate::backend::BackendClient;
use crate::config::{Config, get_config_path};
use crate::consts::cli_consts::BACKEND_URL_ENV;
use crate::dispatcher::{Dispatcher, Submission};
use crate::environment::Environment;
use crate::session::{run_headless_mode, run_tui_mode};
use clap::{Parser, Subcommand};
use std::error::Error;
use std::sync::Arc;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Base URL of the review backend
    #[arg(long, global = true, value_name = "URL", env = BACKEND_URL_ENV)]
    backend_url: Option<String>,

    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Open the interactive review dashboard
    Start {
        /// Disable background colors in the dashboard
        #[arg(long = "no-background-color", action = clap::ArgAction::SetTrue)]
        no_background_color: bool,
    },
    /// Review a single file and print the review as HTML
    ReviewFile {
        #[arg(long, value_name = "PATH")]
        file_path: String,

        /// Print the markdown source instead of HTML
        #[arg(long)]
        raw: bool,
    },
    /// Review a project folder and print the response as JSON
    ReviewFolder {
        #[arg(long, value_name = "PATH")]
        project_path: String,

        /// Files or folders to skip, as the backend expects them
        #[arg(long, value_name = "LIST", default_value = "")]
        ignore_files: String,

        /// Extensions to review, as the backend expects them
        #[arg(long, value_name = "LIST", default_value = "")]
        file_extensions: String,
    },
    /// Ask the backend for a fix to an error and print the response as JSON
    FixBug {
        #[arg(long, value_name = "PATH")]
        file_path: String,

        #[arg(long, value_name = "MESSAGE")]
        error_msg: String,
    },
    /// Inspect or remove the saved configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the config file path and its content
    Show,
    /// Delete the config file
    Clear,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    // Headless commands run without a config when no home directory is known.
    let config_path = get_config_path();
    let config = Config::load_or_default(config_path.as_deref().ok());

    // Flag or env var first, then the saved config.
    let environment = Environment::resolve(
        args.backend_url
            .as_deref()
            .or(config.backend_url.as_deref()),
    );

    let submission = match args.command {
        Command::Start {
            no_background_color,
        } => {
            let config_path = config_path?;
            let dispatcher = build_dispatcher(environment.clone())?;
            return run_tui_mode(
                environment,
                config,
                &config_path,
                dispatcher,
                !no_background_color,
            )
            .await;
        }
        Command::Config { action } => {
            let config_path = config_path?;
            return match action {
                ConfigAction::Show => {
                    println!("{}", config_path.display());
                    println!("{}", serde_json::to_string_pretty(&config)?);
                    Ok(())
                }
                ConfigAction::Clear => {
                    Config::clear(&config_path)
                        .map_err(|e| format!("Failed to clear config: {}", e))?;
                    print_cmd_info!("Config cleared", "{}", config_path.display());
                    Ok(())
                }
            };
        }
        Command::ReviewFile { file_path, raw } => (Submission::FileReview { file_path }, raw),
        Command::ReviewFolder {
            project_path,
            ignore_files,
            file_extensions,
        } => (
            Submission::FolderReview {
                project_path,
                ignore_files,
                file_extensions,
            },
            false,
        ),
        Command::FixBug {
            file_path,
            error_msg,
        } => (
            Submission::BugFix {
                file_path,
                error_msg,
            },
            false,
        ),
    };

    if let Err(e) = logging::init_console_logger() {
        print_cmd_warn!("Logger unavailable", "{}", e);
    }
    let (submission, raw) = submission;
    let dispatcher = build_dispatcher(environment)?;
    tracing::debug!("Backend: {}", dispatcher.backend_url());
    if !run_headless_mode(&dispatcher, submission, raw).await? {
        std::process::exit(1);
    }
    Ok(())
}

fn build_dispatcher(environment: Environment) -> Result<Dispatcher, Box<dyn Error>> {
    let client = BackendClient::new(environment).map_err(|e| {
        print_cmd_error!("Failed to create HTTP client", &e.to_string());
        e
    })?;
    Ok(Dispatcher::new(Arc::new(client)))
}
