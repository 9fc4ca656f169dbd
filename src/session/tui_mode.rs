//! TUI mode execution

use super::messages::{print_session_exit_success, print_session_shutdown, print_session_starting};
use crate::config::Config;
use crate::dispatcher::Dispatcher;
use crate::environment::Environment;
use crate::ui::{self, App};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::path::Path;
use std::{error::Error, io};

/// Runs the application in TUI mode
///
/// This function handles:
/// 1. Terminal setup and cleanup
/// 2. UI application initialization and execution
/// 3. Saving the form values back to the config file
pub async fn run_tui_mode(
    environment: Environment,
    config: Config,
    config_path: &Path,
    dispatcher: Dispatcher,
    with_background: bool,
) -> Result<(), Box<dyn Error>> {
    print_session_starting(&environment);

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    // Initialize the terminal with Crossterm backend
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(environment, config, dispatcher, with_background);
    let result = ui::run(&mut terminal, &mut app).await;

    // Clean up the terminal after running the application
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result?;

    print_session_shutdown();
    app.config()
        .save(config_path)
        .map_err(|e| format!("Failed to save config: {}", e))?;
    print_session_exit_success();

    Ok(())
}
