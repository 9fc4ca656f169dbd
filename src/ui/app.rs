//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::config::Config;
use crate::consts::cli_consts::{splash_duration, tick_rate};
use crate::dispatcher::{Dispatcher, Submission};
use crate::environment::Environment;
use crate::events::{Event as ActionEvent, EventSender};
use crate::ui::dashboard::{DashboardState, KeyOutcome, render_dashboard};
use crate::ui::splash::render_splash;
use crossterm::event::{self, Event, KeyCode};
use ratatui::{Frame, Terminal, backend::Backend};
use std::time::Instant;
use tokio::sync::mpsc;

/// The different screens in the application.
#[derive(Debug)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// The three forms with their result elements.
    Dashboard(Box<DashboardState>),
}

/// Application state
pub struct App {
    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// The backend requests are sent to.
    environment: Environment,

    /// Saved form values, refreshed from the forms on exit.
    config: Config,

    /// Sends one request per submission.
    dispatcher: Dispatcher,

    /// Handed to every in-flight action to report its resolution.
    event_sender: EventSender,

    /// Receives resolutions from in-flight actions.
    event_receiver: mpsc::Receiver<ActionEvent>,

    /// Whether to draw a background color
    with_background_color: bool,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        environment: Environment,
        config: Config,
        dispatcher: Dispatcher,
        with_background_color: bool,
    ) -> Self {
        let (sender, event_receiver) =
            mpsc::channel::<ActionEvent>(crate::consts::cli_consts::EVENT_QUEUE_SIZE);
        Self {
            current_screen: Screen::Splash,
            environment,
            config,
            dispatcher,
            event_sender: EventSender::new(sender),
            event_receiver,
            with_background_color,
        }
    }

    fn show_dashboard(&mut self) {
        self.current_screen = Screen::Dashboard(Box::new(DashboardState::new(
            self.environment.clone(),
            &self.config,
            self.with_background_color,
        )));
    }

    /// Fires one request for the submission on its own task.
    ///
    /// Nothing is deduplicated: pressing a button twice sends two requests.
    fn submit(&mut self, submission: Submission) {
        if let Screen::Dashboard(state) = &mut self.current_screen {
            state.add_event(ActionEvent::dispatched(
                submission.action(),
                submission.target(),
            ));
        }
        let dispatcher = self.dispatcher.clone();
        let sink = self.event_sender.clone();
        tokio::spawn(async move {
            dispatcher.submit(&submission, &sink).await;
        });
    }

    /// The configuration with the latest form values.
    pub fn config(&self) -> Config {
        let mut config = self.config.clone();
        if let Screen::Dashboard(state) = &self.current_screen {
            state.store_into(&mut config);
        }
        config
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> std::io::Result<()> {
    let splash_start = Instant::now();

    loop {
        // Queue all resolved actions for processing
        while let Ok(event) = app.event_receiver.try_recv() {
            if let Screen::Dashboard(state) = &mut app.current_screen {
                state.add_event(event);
            }
        }

        if let Screen::Dashboard(state) = &mut app.current_screen {
            state.update();
        }
        terminal.draw(|f| render(f, &app.current_screen, &app.environment))?;

        if matches!(app.current_screen, Screen::Splash) && splash_start.elapsed() >= splash_duration()
        {
            app.show_dashboard();
            continue;
        }

        // Poll for key events
        if event::poll(tick_rate())? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }

                match &mut app.current_screen {
                    Screen::Splash => {
                        if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                            return Ok(());
                        }
                        // Any other key skips the splash screen
                        app.show_dashboard();
                    }
                    Screen::Dashboard(state) => match state.handle_key(key) {
                        KeyOutcome::Quit => return Ok(()),
                        KeyOutcome::Submit(submission) => app.submit(submission),
                        KeyOutcome::None => {}
                    },
                }
            }
        }
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, screen: &Screen, environment: &Environment) {
    match screen {
        Screen::Splash => render_splash(f, environment),
        Screen::Dashboard(state) => render_dashboard(f, state),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MockBackend;
    use crate::events::EventType;
    use serde_json::json;
    use std::sync::Arc;

    fn app(backend: MockBackend) -> App {
        let mut app = App::new(
            Environment::Local,
            Config::default(),
            Dispatcher::new(Arc::new(backend)),
            false,
        );
        app.show_dashboard();
        app
    }

    #[tokio::test]
    async fn submit_logs_dispatch_and_delivers_one_resolution() {
        let mut backend = MockBackend::new();
        backend
            .expect_review_folder()
            .times(1)
            .returning(|_, _, _| Ok(json!({"ok": true})));
        let mut app = app(backend);

        app.submit(Submission::FolderReview {
            project_path: "/proj".to_string(),
            ignore_files: String::new(),
            file_extensions: String::new(),
        });

        let event = app.event_receiver.recv().await.unwrap();
        assert_eq!(event.event_type, EventType::Success);
        assert_eq!(event.result.unwrap().text(), "{\n  \"ok\": true\n}");

        let Screen::Dashboard(state) = &mut app.current_screen else {
            panic!("dashboard expected");
        };
        state.update();
        assert_eq!(state.activity_logs.len(), 1);
        assert_eq!(state.activity_logs[0].event_type, EventType::Dispatched);
    }

    #[test]
    fn config_reflects_current_form_values() {
        let mut app = app(MockBackend::new());
        if let Screen::Dashboard(state) = &mut app.current_screen {
            state.forms[2].fields[1].value = "IndexError".to_string();
        }
        assert_eq!(app.config().error_msg, "IndexError");
    }
}
