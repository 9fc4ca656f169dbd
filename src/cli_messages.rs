//! CLI command messaging system
//!
//! Consistent coloured status lines for headless commands. Status lines go to
//! stderr so stdout carries only the result element.

use crate::dispatcher::Action;

pub const COLOR_INFO: &str = "\x1b[1;33m";
pub const COLOR_WARN: &str = "\x1b[1;91m";
pub const COLOR_ERROR: &str = "\x1b[1;31m";
pub const COLOR_SUCCESS: &str = "\x1b[1;32m";
pub const COLOR_RESET: &str = "\x1b[0m";

fn status_line(color: &str, tag: &str, title: &str, details: &str) -> String {
    if details.is_empty() {
        format!("{}[{}]{} {}", color, tag, COLOR_RESET, title)
    } else {
        format!("{}[{}]{} {}\t {}", color, tag, COLOR_RESET, title, details)
    }
}

/// Print CLI command info message
pub fn print_info(title: &str, details: &str) {
    eprintln!("{}", status_line(COLOR_INFO, "INFO", title, details));
}

/// Print CLI command warn message
pub fn print_warn(title: &str, details: &str) {
    eprintln!("{}", status_line(COLOR_WARN, "WARN", title, details));
}

/// Print CLI command error
pub fn print_error(title: &str, details: Option<&str>) {
    eprintln!("{}", status_line(COLOR_ERROR, "ERROR", title, ""));
    if let Some(details) = details {
        eprintln!("{}", status_line(COLOR_ERROR, "ERROR", "Details:", details));
    }
}

/// Print CLI command success
pub fn print_success(title: &str, details: &str) {
    eprintln!("{}", status_line(COLOR_SUCCESS, "SUCCESS", title, details));
}

/// Status line closing a headless action.
pub fn print_action_outcome(action: Action, failed: bool) {
    if failed {
        print_error(&format!("{} failed.", action), None);
    } else {
        print_success(&format!("{} complete.", action), "");
    }
}

#[macro_export]
macro_rules! print_cmd_info {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_info($title, &format!($($details)*))
    };
}

#[macro_export]
macro_rules! print_cmd_warn {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_warn($title, &format!($($details)*))
    };
}

#[macro_export]
macro_rules! print_cmd_error {
    ($title:expr) => {
        $crate::cli_messages::print_error($title, None)
    };
    ($title:expr, $details:expr) => {
        $crate::cli_messages::print_error($title, Some($details))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_line_omits_empty_details() {
        assert_eq!(
            status_line(COLOR_INFO, "INFO", "Backend", ""),
            "\x1b[1;33m[INFO]\x1b[0m Backend"
        );
        assert_eq!(
            status_line(COLOR_WARN, "WARN", "Backend", "http://localhost:8000"),
            "\x1b[1;91m[WARN]\x1b[0m Backend\t http://localhost:8000"
        );
    }
}
