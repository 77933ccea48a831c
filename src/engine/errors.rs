use thiserror::Error;

use crate::config::constants::messages::{HISTORY_FALLBACK, PREDICT_FALLBACK, TRAIN_FALLBACK};
use crate::engine::Operation;

/// Failure before an envelope could be read at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected HTTP status {0}")]
    Status(u16),
    #[error("response body is not JSON: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => TransportError::Status(status.as_u16()),
            None => TransportError::Network(err.to_string()),
        }
    }
}

pub type DashboardResult<T> = Result<T, DashboardError>;

/// Every way an operation can fail. None of them are fatal to the page:
/// each one ends its operation and turns into a single alert.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DashboardError {
    /// `/history` answered `success: false`.
    #[error("{0}")]
    DataLoad(String),
    /// `/train` answered `success: false`.
    #[error("{0}")]
    Training(String),
    /// `/predict` answered `success: false`.
    #[error("{0}")]
    Prediction(String),
    #[error("malformed {operation} response: {reason}")]
    MalformedResponse { operation: Operation, reason: String },
    #[error("{operation} transport failure: {source}")]
    Transport {
        operation: Operation,
        #[source]
        source: TransportError,
    },
    #[error("{0}")]
    InvalidInput(String),
}

impl DashboardError {
    pub fn malformed(operation: Operation, reason: impl Into<String>) -> Self {
        Self::MalformedResponse {
            operation,
            reason: reason.into(),
        }
    }

    pub fn transport(operation: Operation, source: TransportError) -> Self {
        Self::Transport { operation, source }
    }

    /// True for failures with no usable envelope. Their cause is logged, never shown.
    pub fn is_transport_tier(&self) -> bool {
        matches!(self, Self::MalformedResponse { .. } | Self::Transport { .. })
    }

    /// Text for the alert. Server-supplied text is passed through verbatim;
    /// transport-tier failures get the generic per-operation fallback.
    pub fn user_message(&self) -> String {
        match self {
            Self::DataLoad(msg) => format!("Error loading stock data: {}", msg),
            Self::Training(msg) | Self::Prediction(msg) | Self::InvalidInput(msg) => {
                format!("Error: {}", msg)
            }
            Self::MalformedResponse { operation, .. } | Self::Transport { operation, .. } => {
                match operation {
                    Operation::LoadHistory => {
                        format!("Error loading stock data: {}", HISTORY_FALLBACK)
                    }
                    Operation::Train => format!("Error: {}", TRAIN_FALLBACK),
                    Operation::Predict => format!("Error: {}", PREDICT_FALLBACK),
                }
            }
        }
    }
}
