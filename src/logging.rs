//! Log levels and the stderr subscriber for headless runs

use std::env;
use tracing_subscriber::EnvFilter;

/// Directive used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_LOG_FILTER: &str = "codepulse=info";

/// Target prefix of this crate's own log events.
const CRATE_TARGET: &str = "codepulse";

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
}

impl LogLevel {
    fn parse(level: &str) -> Option<Self> {
        match level.trim().to_lowercase().as_str() {
            "trace" => Some(LogLevel::Trace),
            "debug" => Some(LogLevel::Debug),
            "info" => Some(LogLevel::Info),
            "warn" | "warning" => Some(LogLevel::Warn),
            "error" => Some(LogLevel::Error),
            _ => None,
        }
    }
}

pub fn get_rust_log_level() -> LogLevel {
    let rust_log = env::var("RUST_LOG").unwrap_or_default();
    parse_rust_log_level(&rust_log)
}

/// The level `RUST_LOG` sets for this crate.
///
/// A `codepulse...=<level>` directive wins over a bare `<level>`; other
/// targets are ignored. Defaults to info.
pub fn parse_rust_log_level(rust_log: &str) -> LogLevel {
    let mut global = None;
    for directive in rust_log.split(',').map(str::trim) {
        match directive.split_once('=') {
            Some((target, level)) if target.starts_with(CRATE_TARGET) => {
                if let Some(level) = LogLevel::parse(level) {
                    return level;
                }
            }
            Some(_) => {}
            None => global = global.or_else(|| LogLevel::parse(directive)),
        }
    }
    global.unwrap_or(LogLevel::Info)
}

pub fn should_log(event_level: LogLevel, threshold: LogLevel) -> bool {
    event_level >= threshold
}

/// Per-target filter from `RUST_LOG`, or [`DEFAULT_LOG_FILTER`].
fn console_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Installs the stderr subscriber, filtered by `RUST_LOG`.
///
/// Only for headless commands: in the interactive UI the terminal owns the screen.
pub fn init_console_logger() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let rust_log = env::var("RUST_LOG").ok();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(console_filter(rust_log.as_deref()))
        .with_target(false)
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_parse_rust_log_level() {
        assert_eq!(parse_rust_log_level("debug"), LogLevel::Debug);
        assert_eq!(parse_rust_log_level("info"), LogLevel::Info);
        assert_eq!(parse_rust_log_level("warn"), LogLevel::Warn);
        assert_eq!(parse_rust_log_level("error"), LogLevel::Error);
        assert_eq!(parse_rust_log_level("trace"), LogLevel::Trace);

        // Test with module-specific formats
        assert_eq!(parse_rust_log_level("codepulse=debug"), LogLevel::Debug);
        assert_eq!(
            parse_rust_log_level("reqwest=info,codepulse::ui=debug"),
            LogLevel::Debug
        );
        assert_eq!(parse_rust_log_level("reqwest=trace,warn"), LogLevel::Warn);

        // Test default
        assert_eq!(parse_rust_log_level(""), LogLevel::Info);
        assert_eq!(parse_rust_log_level("invalid"), LogLevel::Info);
    }

    #[test]
    fn test_should_log() {
        assert!(should_log(LogLevel::Error, LogLevel::Debug));
        assert!(should_log(LogLevel::Warn, LogLevel::Warn));
        assert!(!should_log(LogLevel::Debug, LogLevel::Error));
        assert!(!should_log(LogLevel::Info, LogLevel::Error));
    }

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn capture(rust_log: Option<&str>, emit: impl FnOnce()) -> String {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_env_filter(console_filter(rust_log))
            .with_ansi(false)
            .finish();
        tracing::subscriber::with_default(subscriber, emit);
        let bytes = captured.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn crate_directive_does_not_enable_dependency_debug_output() {
        let out = capture(Some("codepulse=debug"), || {
            tracing::debug!(target: "hyper_util::client", "pool checkout");
            tracing::debug!(target: "codepulse::backend::client", "GET /review_file");
        });
        assert!(out.contains("GET /review_file"));
        assert!(!out.contains("pool checkout"));
    }

    #[test]
    fn default_filter_keeps_crate_info_and_hides_debug() {
        let out = capture(None, || {
            tracing::info!(target: "codepulse::dispatcher", "Bug fix: main.py");
            tracing::debug!(target: "codepulse::dispatcher", "Backend: local");
            tracing::info!(target: "reqwest::connect", "connecting");
        });
        assert!(out.contains("Bug fix: main.py"));
        assert!(!out.contains("Backend: local"));
        assert!(!out.contains("connecting"));
    }
}
