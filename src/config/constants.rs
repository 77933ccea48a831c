use std::time::Duration;

// Top Level Constants
pub const DEFAULT_TICKER: &str = "AAPL";

/// Rows shown in the recent-history table.
pub const TABLE_ROW_COUNT: usize = 10;

/// How long an alert stays on screen before it removes itself.
pub const NOTIFICATION_TTL: Duration = Duration::from_millis(5000);

/// Locale convention for table dates (en-US short date, no zero padding).
pub const TABLE_DATE_FORMAT: &str = "%-m/%-d/%Y";

/// Date format used on the wire by all three endpoints.
pub const WIRE_DATE_FORMAT: &str = "%Y-%m-%d";

pub mod form {
    pub const DEFAULT_TIME_STEP: u32 = 60;
    pub const DEFAULT_EPOCHS: u32 = 50;
    pub const DEFAULT_PREDICTION_DAYS: u32 = 30;

    pub const MAX_TIME_STEP: u32 = 365;
    pub const MAX_EPOCHS: u32 = 1000;
    pub const MAX_PREDICTION_DAYS: u32 = 365;
}

pub mod messages {
    pub const TRAIN_OK: &str = "Model trained successfully!";
    pub const PREDICT_OK: &str = "Prediction completed!";

    pub const HISTORY_FALLBACK: &str = "Failed to load stock data";
    pub const TRAIN_FALLBACK: &str = "Failed to train model";
    pub const PREDICT_FALLBACK: &str = "Failed to get predictions";
}
