use std::time::Duration;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum_macros::Display;

use crate::config::constants::{DEFAULT_TICKER, NOTIFICATION_TTL, TABLE_ROW_COUNT};
use crate::domain::Period;

/// What happens to an existing prediction series when a new history arrives.
///
/// A prediction is only meaningful against the history it was made from, but the
/// page this replaces simply left it on the chart. The choice is explicit here.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, ValueEnum, Serialize, Deserialize,
)]
pub enum StalePredictionPolicy {
    /// Never clear. Matches the legacy page.
    Keep,
    /// Clear when the loaded history belongs to a different ticker.
    #[default]
    ClearOnTickerChange,
    /// Clear on every successful history load.
    ClearOnReload,
}

/// Runtime settings for the dashboard core. Built from defaults, then overridden by CLI args.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    pub default_ticker: String,
    pub default_period: Period,
    pub stale_predictions: StalePredictionPolicy,
    /// Clear the summary card when either series is empty instead of keeping stale figures.
    pub reset_summary_when_empty: bool,
    /// Predict stays locked until a training run succeeds.
    pub require_training_before_predict: bool,
    pub table_rows: usize,
    pub notification_ttl: Duration,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            default_ticker: DEFAULT_TICKER.to_string(),
            default_period: Period::OneYear,
            stale_predictions: StalePredictionPolicy::default(),
            reset_summary_when_empty: false,
            require_training_before_predict: true,
            table_rows: TABLE_ROW_COUNT,
            notification_ttl: NOTIFICATION_TTL,
        }
    }
}
