mod coordinator;
mod core;
mod errors;
mod messages;
mod state;
mod worker;

pub use coordinator::RequestCoordinator;
pub use core::DashboardEngine;
pub use errors::{DashboardError, DashboardResult, TransportError};
pub use messages::{
    ApiRequest, Command, Completion, Dispatch, Operation, Outbound, Rejection, Ticket,
};
pub use state::{InFlight, RequestState};
pub use worker::{RepaintHook, Worker};
