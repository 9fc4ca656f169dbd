//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::dispatcher::Action;
use ratatui::prelude::Color;

/// Get a ratatui color for an action
pub fn get_action_color(action: Action) -> Color {
    match action {
        Action::FileReview => Color::Cyan,
        Action::FolderReview => Color::Yellow,
        Action::BugFix => Color::Green,
    }
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract from "YYYY-MM-DD HH:MM:SS" format
    let mut parts = timestamp.split(' ');
    if let (Some(date_part), Some(time_part)) = (parts.next(), parts.next()) {
        if let (Some(month_day), Some(hour_min)) = (date_part.get(5..10), time_part.get(0..5)) {
            return format!("{} {}", month_day, hour_min);
        }
    }
    timestamp.to_string()
}

/// Shorten reqwest's verbose error text for the activity log.
pub fn clean_http_error_message(msg: &str) -> String {
    if msg.contains("error sending request") || msg.contains("Connection refused") {
        if let Some((head, _)) = msg.split_once("Request failed:") {
            return format!("{}backend unreachable", head);
        }
        return "Backend unreachable".to_string();
    }
    msg.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_timestamp_keeps_month_day_hour_minute() {
        assert_eq!(format_compact_timestamp("2025-03-14 09:26:53"), "03-14 09:26");
        assert_eq!(format_compact_timestamp("garbage"), "garbage");
    }

    #[test]
    fn connection_errors_are_shortened() {
        let msg = "Bug fix failed: Error: Request failed: error sending request for url (http://localhost:8000/bug_fixer?file_path=a)";
        assert_eq!(
            clean_http_error_message(msg),
            "Bug fix failed: Error: backend unreachable"
        );
        assert_eq!(clean_http_error_message("File review completed"), "File review completed");
    }
}
