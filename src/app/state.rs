// src/app/state.rs

use serde::{Deserialize, Serialize};

use crate::config::DashboardConfig;
use crate::config::constants::form::{DEFAULT_EPOCHS, DEFAULT_PREDICTION_DAYS, DEFAULT_TIME_STEP};
use crate::domain::Period;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum AppState {
    /// First frame not yet drawn; the startup load has not been dispatched.
    #[default]
    Starting,
    Running,
}

/// Raw widget values. Only the numeric training/prediction fields survive a restart;
/// ticker and period always start from the launch configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormState {
    #[serde(skip)]
    pub ticker: String,
    #[serde(skip)]
    pub period: Period,
    pub time_step: u32,
    pub epochs: u32,
    pub days: u32,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            ticker: String::new(),
            period: Period::default(),
            time_step: DEFAULT_TIME_STEP,
            epochs: DEFAULT_EPOCHS,
            days: DEFAULT_PREDICTION_DAYS,
        }
    }
}

impl FormState {
    pub fn seeded(&self, config: &DashboardConfig) -> Self {
        Self {
            ticker: config.default_ticker.clone(),
            period: config.default_period,
            ..self.clone()
        }
    }
}
