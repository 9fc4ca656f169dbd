//! Interactive dashboard: one form and result element per action

pub mod components;
pub mod form;
pub mod markdown;
pub mod renderer;
pub mod state;
pub mod updaters;
pub mod utils;

pub use renderer::render_dashboard;
pub use state::{DashboardState, KeyOutcome};
