//! Chart and semantic colour configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    pub historical_color: Color32,
    pub historical_line_width: f32,
    pub predicted_color: Color32,
    pub predicted_line_width: f32,

    pub plot_height_pct: f32, // Share of the central panel given to the chart (rest is the table)

    // --- SEMANTIC COLORS ---
    pub color_positive: Color32,
    pub color_negative: Color32,

    pub color_info: Color32,
    pub color_success: Color32,
    pub color_danger: Color32,

    pub color_text_neutral: Color32,
    pub color_text_subdued: Color32,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    historical_color: Color32::from_rgb(13, 110, 253), // bootstrap primary blue
    historical_line_width: 2.0,
    predicted_color: Color32::from_rgb(220, 53, 69), // bootstrap danger red
    predicted_line_width: 2.0,

    plot_height_pct: 0.62,

    color_positive: Color32::from_rgb(25, 135, 84),
    color_negative: Color32::from_rgb(220, 53, 69),

    color_info: Color32::from_rgb(13, 202, 240),
    color_success: Color32::from_rgb(25, 135, 84),
    color_danger: Color32::from_rgb(220, 53, 69),

    color_text_neutral: Color32::WHITE,
    color_text_subdued: Color32::GRAY,
};
