use chrono::NaiveDate;

/// One trading day as returned by `/history`.
/// The chart only needs `close`; the table shows the rest.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoricalPoint {
    pub date: NaiveDate,

    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,

    pub volume: f64,
}

impl HistoricalPoint {
    // A constructor for convenience
    pub fn new(date: NaiveDate, open: f64, high: f64, low: f64, close: f64, volume: f64) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    pub fn to_price_point(&self) -> PricePoint {
        PricePoint {
            timestamp: self.date,
            value: self.close,
        }
    }
}

/// One forecast day as returned by `/predict`.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionPoint {
    pub date: NaiveDate,
    pub price: f64,
}

impl PredictionPoint {
    pub fn new(date: NaiveDate, price: f64) -> Self {
        Self { date, price }
    }

    pub fn to_price_point(&self) -> PricePoint {
        PricePoint {
            timestamp: self.date,
            value: self.price,
        }
    }
}

/// Chart-ready point. Always derived, never stored on its own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricePoint {
    pub timestamp: NaiveDate,
    pub value: f64,
}
