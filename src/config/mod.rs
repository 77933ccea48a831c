//! Configuration module for the dashboard.

// Can all be private now because we have a public re-export.
mod api;
mod dashboard;
mod debug;
mod persistence;
mod plot;

// Public
pub mod constants;

// Re-export commonly used items
pub use api::{API, ApiConfig};
pub use constants::{DEFAULT_TICKER, NOTIFICATION_TTL, TABLE_ROW_COUNT};
pub use dashboard::{DashboardConfig, StalePredictionPolicy};
pub use debug::DF;
pub use persistence::PERSISTENCE;
pub use plot::PLOT_CONFIG;
