use std::sync::LazyLock;

// Glyphs from egui's bundled emoji font
pub const ICON_CHART: &str = "📈";
pub const ICON_TRAIN: &str = "🔧";
pub const ICON_PREDICT: &str = "🔮";
pub const ICON_RELOAD: &str = "⟳";
pub const ICON_CLOSE: &str = "🗙";
pub const ICON_UP: &str = "⏶";
pub const ICON_DOWN: &str = "⏷";

pub struct UiText {
    pub app_title: String,

    // --- Controls panel ---
    pub label_ticker: String,
    pub label_period: String,
    pub button_load: String,

    pub heading_train: String,
    pub label_time_step: String,
    pub label_epochs: String,
    pub button_train: String,
    pub busy_training: String,

    pub heading_predict: String,
    pub label_days: String,
    pub button_predict: String,
    pub busy_predicting: String,
    pub hint_predict_locked: String,

    pub busy_loading: String,

    // --- Summary card ---
    pub heading_summary: String,
    pub label_current: String,
    pub label_predicted: String,
    pub label_change: String,
    pub summary_empty: String,

    // --- Table ---
    pub heading_table: String,
    pub col_date: String,
    pub col_open: String,
    pub col_high: String,
    pub col_low: String,
    pub col_close: String,
    pub col_volume: String,
    pub table_empty: String,

    // --- Plot ---
    pub plot_x_axis: String,
    pub plot_y_axis: String,
    pub plot_waiting: String,

    pub icon_close: String,
    pub icon_up: String,
    pub icon_down: String,

    pub error_no_engine: String,
}

pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| UiText {
    app_title: ICON_CHART.to_string() + " Stock Sight",

    label_ticker: "Ticker".to_string(),
    label_period: "Period".to_string(),
    button_load: ICON_RELOAD.to_string() + " Load Data",

    heading_train: ICON_TRAIN.to_string() + " Train Model",
    label_time_step: "Time step".to_string(),
    label_epochs: "Epochs".to_string(),
    button_train: "Train".to_string(),
    busy_training: "Training...".to_string(),

    heading_predict: ICON_PREDICT.to_string() + " Predict",
    label_days: "Days".to_string(),
    button_predict: "Predict".to_string(),
    busy_predicting: "Predicting...".to_string(),
    hint_predict_locked: "Train a model first".to_string(),

    busy_loading: "Loading...".to_string(),

    heading_summary: "Prediction Summary".to_string(),
    label_current: "Current Price".to_string(),
    label_predicted: "Predicted Price".to_string(),
    label_change: "Change".to_string(),
    summary_empty: "No prediction yet".to_string(),

    heading_table: "Recent History".to_string(),
    col_date: "Date".to_string(),
    col_open: "Open".to_string(),
    col_high: "High".to_string(),
    col_low: "Low".to_string(),
    col_close: "Close".to_string(),
    col_volume: "Volume".to_string(),
    table_empty: "No data loaded".to_string(),

    plot_x_axis: "Date".to_string(),
    plot_y_axis: "Price ($)".to_string(),
    plot_waiting: "Waiting for data...".to_string(),

    icon_close: ICON_CLOSE.to_string(),
    icon_up: ICON_UP.to_string(),
    icon_down: ICON_DOWN.to_string(),

    error_no_engine: "Could not create the HTTP client. See the log for details.".to_string(),
});
