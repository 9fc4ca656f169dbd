//! Dashboard state management
//!
//! Forms, result elements, in-flight counters and the activity log

use super::form::{Focus, Form, forms_from_config, store_forms};
use crate::config::Config;
use crate::consts::cli_consts::{MAX_ACTIVITY_LOGS, RESULT_SCROLL_STEP};
use crate::dispatcher::{Action, Submission};
use crate::environment::Environment;
use crate::events::Event;
use crate::logging::{LogLevel, get_rust_log_level};
use crate::render::ResultView;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::{HashMap, VecDeque};

/// What a key press asks the application to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    None,
    Quit,
    Submit(Submission),
}

/// A result element: the latest view shown for an action, and its scroll offset.
#[derive(Debug, Clone, Default)]
pub struct ResultPane {
    pub view: Option<ResultView>,
    pub scroll: u16,
}

#[derive(Debug)]
pub struct DashboardState {
    /// The backend requests are sent to.
    pub environment: Environment,
    pub forms: Vec<Form>,
    pub focus: Focus,
    pub results: HashMap<Action, ResultPane>,
    /// Requests sent but not yet resolved, per action
    pub in_flight: HashMap<Action, usize>,
    /// Queue of events waiting to be processed
    pub pending_events: VecDeque<Event>,
    /// Activity logs for display
    pub activity_logs: VecDeque<Event>,
    /// Lowest level the activity log shows, from `RUST_LOG` at startup
    pub log_threshold: LogLevel,
    /// Whether to enable background colors
    pub with_background_color: bool,
    /// Animation tick counter
    pub tick: usize,
}

impl DashboardState {
    pub fn new(environment: Environment, config: &Config, with_background_color: bool) -> Self {
        Self {
            environment,
            forms: forms_from_config(config),
            focus: Focus::default(),
            results: HashMap::new(),
            in_flight: HashMap::new(),
            pending_events: VecDeque::new(),
            activity_logs: VecDeque::new(),
            log_threshold: get_rust_log_level(),
            with_background_color,
            tick: 0,
        }
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: Event) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Add an event to the processing queue
    pub fn add_event(&mut self, event: Event) {
        self.pending_events.push_back(event);
    }

    pub fn result(&self, action: Action) -> Option<&ResultPane> {
        self.results.get(&action)
    }

    pub fn in_flight(&self, action: Action) -> usize {
        self.in_flight.get(&action).copied().unwrap_or(0)
    }

    pub fn focused_action(&self) -> Option<Action> {
        self.forms.get(self.focus.form).map(|f| f.action)
    }

    /// Writes the current form values into the configuration.
    pub fn store_into(&self, config: &mut Config) {
        store_forms(&self.forms, config);
    }

    /// Applies a key press to the forms.
    pub fn handle_key(&mut self, key: KeyEvent) -> KeyOutcome {
        if key.code == KeyCode::Esc
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        {
            return KeyOutcome::Quit;
        }

        let on_button = self.focus.on_button(&self.forms);
        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.focus = self.focus.next(&self.forms);
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = self.focus.prev(&self.forms);
            }
            KeyCode::PageDown => self.scroll_focused(true),
            KeyCode::PageUp => self.scroll_focused(false),
            KeyCode::Enter => {
                if let Some(form) = self.forms.get(self.focus.form) {
                    return KeyOutcome::Submit(form.submission());
                }
            }
            KeyCode::Char('q') if on_button => return KeyOutcome::Quit,
            KeyCode::Char(c) if !on_button => {
                if let Some(field) = self.focused_field_mut() {
                    field.push(c);
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = self.focused_field_mut() {
                    field.pop();
                }
            }
            _ => {}
        }
        KeyOutcome::None
    }

    fn focused_field_mut(&mut self) -> Option<&mut String> {
        self.forms
            .get_mut(self.focus.form)
            .and_then(|form| form.fields.get_mut(self.focus.slot))
            .map(|field| &mut field.value)
    }

    fn scroll_focused(&mut self, down: bool) {
        let Some(action) = self.focused_action() else {
            return;
        };
        let pane = self.results.entry(action).or_default();
        pane.scroll = if down {
            pane.scroll.saturating_add(RESULT_SCROLL_STEP)
        } else {
            pane.scroll.saturating_sub(RESULT_SCROLL_STEP)
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> DashboardState {
        DashboardState::new(Environment::Local, &Config::default(), false)
    }

    fn press(state: &mut DashboardState, code: KeyCode) -> KeyOutcome {
        state.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn typing_edits_the_focused_field() {
        let mut state = state();
        for c in "ab.py".chars() {
            press(&mut state, KeyCode::Char(c));
        }
        press(&mut state, KeyCode::Backspace);
        assert_eq!(state.forms[0].fields[0].value, "ab.p");
    }

    #[test]
    fn enter_submits_the_focused_form_once() {
        let mut state = state();
        for c in "x y.py".chars() {
            press(&mut state, KeyCode::Char(c));
        }
        press(&mut state, KeyCode::Tab);
        assert_eq!(
            press(&mut state, KeyCode::Enter),
            KeyOutcome::Submit(Submission::FileReview {
                file_path: "x y.py".to_string()
            })
        );
    }

    #[test]
    fn q_types_into_fields_but_quits_on_buttons() {
        let mut state = state();
        assert_eq!(press(&mut state, KeyCode::Char('q')), KeyOutcome::None);
        assert_eq!(state.forms[0].fields[0].value, "q");
        press(&mut state, KeyCode::Tab);
        assert_eq!(press(&mut state, KeyCode::Char('q')), KeyOutcome::Quit);
        assert_eq!(press(&mut state, KeyCode::Esc), KeyOutcome::Quit);
    }

    #[test]
    fn page_keys_scroll_the_focused_result() {
        let mut state = state();
        press(&mut state, KeyCode::PageDown);
        press(&mut state, KeyCode::PageDown);
        press(&mut state, KeyCode::PageUp);
        assert_eq!(
            state.result(Action::FileReview).unwrap().scroll,
            RESULT_SCROLL_STEP
        );
    }
}
