use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

use crate::data::ApiResponse;
use crate::domain::{Period, Ticker};
use crate::engine::TransportError;
use crate::models::NotificationId;

/// The three outbound operation families. Each has its own pending slot and control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize, Deserialize)]
pub enum Operation {
    #[strum(serialize = "history")]
    LoadHistory,
    #[strum(serialize = "train")]
    Train,
    #[strum(serialize = "predict")]
    Predict,
}

/// A UI event, already lifted out of the widget layer.
/// Raw strings are validated by the coordinator, not by the widgets.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// The ticker input changed. Only affects the chart title on the next projection.
    SelectTicker(String),
    LoadHistory { ticker: String, period: Period },
    TrainModel {
        ticker: String,
        time_step: u32,
        epochs: u32,
    },
    RequestPrediction { days: u32 },
    DismissNotification(NotificationId),
}

/// Identifies one outbound request. Strictly increasing per coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ticket(pub(crate) u64);

/// A validated request, ready for the wire.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiRequest {
    History { ticker: Ticker, period: Period },
    Train {
        ticker: Ticker,
        time_step: u32,
        epochs: u32,
    },
    Predict { days: u32 },
}

impl ApiRequest {
    pub fn operation(&self) -> Operation {
        match self {
            ApiRequest::History { .. } => Operation::LoadHistory,
            ApiRequest::Train { .. } => Operation::Train,
            ApiRequest::Predict { .. } => Operation::Predict,
        }
    }
}

/// Request handed to the worker
#[derive(Debug, Clone)]
pub struct Outbound {
    pub ticket: Ticket,
    pub request: ApiRequest,
}

/// The result returned by the worker
#[derive(Debug, Clone)]
pub struct Completion {
    pub ticket: Ticket,
    pub operation: Operation,
    pub duration_ms: u128,
    pub response: Result<ApiResponse, TransportError>,
}

/// What `dispatch` did with a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// A request went to the outbox.
    Issued(Ticket),
    /// A history load is already in flight; this one goes out when it settles.
    Deferred,
    /// Handled locally, nothing sent.
    Applied,
    Rejected(Rejection),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The control is disabled because the same operation is pending.
    Busy(Operation),
    /// Predict before any successful training.
    Locked(Operation),
    InvalidInput,
}
