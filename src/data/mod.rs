mod envelope;
mod provider;

pub use envelope::{parse_history, parse_prediction, parse_train};
pub use provider::{ApiResponse, HttpTransport, Transport};
