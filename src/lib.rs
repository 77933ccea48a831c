#![allow(clippy::collapsible_if)]
#![allow(clippy::type_complexity)]

// Core modules
pub mod app;
pub mod config;
pub mod data;
pub mod domain;
pub mod engine;
pub mod models;
pub mod projection;
pub mod ui;
pub mod utils;

// Re-export commonly used types outside of crate (for main.rs and tests/)
pub use app::App;
pub use config::{DashboardConfig, PERSISTENCE, StalePredictionPolicy};
pub use data::{ApiResponse, HttpTransport, Transport};
pub use domain::{Period, Ticker};
pub use engine::{Command, DashboardEngine, Dispatch, Operation, Rejection, RequestCoordinator};

// CLI argument parsing
use clap::Parser;

use crate::config::{API, DEFAULT_TICKER};

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Root URL of the prediction server
    #[arg(long, default_value = API.client.base_url)]
    pub api_base_url: String,

    /// Ticker loaded at start-up
    #[arg(long, default_value = DEFAULT_TICKER)]
    pub ticker: String,

    /// History period loaded at start-up
    #[arg(long, value_enum, default_value_t = Period::OneYear)]
    pub period: Period,

    /// What a new history load does to an existing prediction
    #[arg(long, value_enum, default_value_t = StalePredictionPolicy::ClearOnTickerChange)]
    pub stale_predictions: StalePredictionPolicy,

    /// Clear the summary card when there is nothing left to compare
    #[arg(long, default_value_t = false)]
    pub reset_summary: bool,
}

impl Cli {
    /// Launch settings for a browser build served by the prediction server itself.
    pub fn for_origin(origin: impl Into<String>) -> Self {
        Self {
            api_base_url: origin.into(),
            ticker: DEFAULT_TICKER.to_string(),
            period: Period::default(),
            stale_predictions: StalePredictionPolicy::default(),
            reset_summary: false,
        }
    }

    /// Overlays the command line onto the built-in defaults.
    pub fn dashboard_config(&self) -> DashboardConfig {
        DashboardConfig {
            default_ticker: self.ticker.clone(),
            default_period: self.period,
            stale_predictions: self.stale_predictions,
            reset_summary_when_empty: self.reset_summary,
            ..DashboardConfig::default()
        }
    }
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_defaults_match_built_in_config() {
        let cli = Cli::parse_from(["stock-sight"]);
        assert_eq!(cli.api_base_url, "http://127.0.0.1:5000");
        assert_eq!(cli.dashboard_config(), DashboardConfig::default());
    }

    #[test]
    fn unknown_period_is_refused_by_the_parser() {
        assert!(Cli::try_parse_from(["stock-sight", "--period", "7y"]).is_err());
        let cli = Cli::try_parse_from(["stock-sight", "--period", "ytd"]).unwrap();
        assert_eq!(cli.period, Period::YearToDate);
    }

    #[test]
    fn cli_overrides_reach_the_config() {
        let cli = Cli::parse_from([
            "stock-sight",
            "--ticker",
            "MSFT",
            "--period",
            "6mo",
            "--stale-predictions",
            "keep",
            "--reset-summary",
        ]);
        let config = cli.dashboard_config();
        assert_eq!(config.default_ticker, "MSFT");
        assert_eq!(config.default_period, Period::SixMonths);
        assert_eq!(config.stale_predictions, StalePredictionPolicy::Keep);
        assert!(config.reset_summary_when_empty);
    }
}
