//! Dashboard state update logic
//!
//! Contains all methods for updating dashboard state from events

use super::state::DashboardState;
use crate::events::{Event, EventType};

impl DashboardState {
    /// Advance the animation tick and apply queued events.
    pub fn update(&mut self) {
        self.tick += 1;

        while let Some(event) = self.pending_events.pop_front() {
            self.process_event(&event);
            self.add_to_activity_log(event);
        }
    }

    fn process_event(&mut self, event: &Event) {
        let in_flight = self.in_flight.entry(event.action).or_insert(0);
        match event.event_type {
            EventType::Dispatched => *in_flight += 1,
            EventType::Success | EventType::Error => {
                *in_flight = in_flight.saturating_sub(1);
                // Latest resolution wins; earlier views of the action are replaced.
                if let Some(view) = &event.result {
                    let pane = self.results.entry(event.action).or_default();
                    pane.view = Some(view.clone());
                    pane.scroll = 0;
                }
            }
        }
    }
}
