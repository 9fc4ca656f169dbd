//! Event System
//!
//! Events sent from in-flight actions to the interactive UI

use crate::dispatcher::{Action, ResultSink};
use crate::logging::{LogLevel, should_log};
use crate::render::ResultView;
use chrono::Local;
use std::fmt::Display;
use tokio::sync::mpsc;

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Dispatched,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub action: Action,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
    /// Content for the action's result element, set once the request resolves
    pub result: Option<ResultView>,
}

impl Event {
    fn new(action: Action, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            action,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
            result: None,
        }
    }

    pub fn dispatched(action: Action, target: &str) -> Self {
        Self::new(
            action,
            format!("{} requested for {}", action, target),
            EventType::Dispatched,
            LogLevel::Info,
        )
    }

    pub fn resolved(action: Action, view: &ResultView) -> Self {
        let mut event = if view.is_error() {
            Self::new(
                action,
                format!("{} failed: {}", action, view.text()),
                EventType::Error,
                LogLevel::Error,
            )
        } else {
            Self::new(
                action,
                format!("{} completed", action),
                EventType::Success,
                LogLevel::Info,
            )
        };
        event.result = Some(view.clone());
        event
    }

    /// Whether the activity log shows this event at the given threshold.
    /// Completions are always shown.
    pub fn should_display(&self, threshold: LogLevel) -> bool {
        self.event_type == EventType::Success || should_log(self.log_level, threshold)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.event_type, self.timestamp, self.msg)
    }
}

/// Forwards resolved actions to the UI as events.
#[derive(Clone)]
pub struct EventSender {
    sender: mpsc::Sender<Event>,
}

impl EventSender {
    pub fn new(sender: mpsc::Sender<Event>) -> Self {
        Self { sender }
    }

    pub async fn send_event(&self, event: Event) {
        let _ = self.sender.send(event).await;
    }
}

#[async_trait::async_trait]
impl ResultSink for EventSender {
    async fn show(&self, action: Action, view: &ResultView) {
        self.send_event(Event::resolved(action, view)).await;
    }
}
