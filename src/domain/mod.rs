// Domain types and value objects
mod points;
mod ticker;

pub use points::{HistoricalPoint, PredictionPoint, PricePoint};
pub use ticker::{Period, Ticker};
