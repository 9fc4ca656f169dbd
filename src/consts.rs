pub mod cli_consts {
    //! CLI Configuration Constants

    use std::time::Duration;

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity log.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Buffer size of the channel carrying events from in-flight actions to the UI.
    pub const EVENT_QUEUE_SIZE: usize = 100;

    // =============================================================================
    // UI CONFIGURATION
    // =============================================================================

    /// How long the splash screen stays up without a key press (milliseconds)
    pub const SPLASH_DURATION_MS: u64 = 2_000;

    /// Key polling interval of the UI loop (milliseconds)
    pub const TICK_RATE_MS: u64 = 100;

    /// Lines scrolled by PageUp/PageDown in a result pane
    pub const RESULT_SCROLL_STEP: u16 = 5;

    pub const fn splash_duration() -> Duration {
        Duration::from_millis(SPLASH_DURATION_MS)
    }

    pub const fn tick_rate() -> Duration {
        Duration::from_millis(TICK_RATE_MS)
    }

    // =============================================================================
    // ENVIRONMENT VARIABLES
    // =============================================================================

    /// Overrides the backend base URL.
    pub const BACKEND_URL_ENV: &str = "CODEPULSE_BACKEND_URL";
}
