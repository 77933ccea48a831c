use eframe::egui::{Color32, CornerRadius, Frame, Margin, Stroke};

pub use crate::ui::ui_text::UI_TEXT;

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
    pub card: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub side_panel_width: f32,
    pub table_row_height: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::LIGHT_GRAY,
        heading: Color32::WHITE,
        subsection_heading: Color32::from_rgb(110, 168, 254),
        central_panel: Color32::from_rgb(24, 26, 31),
        side_panel: Color32::from_rgb(33, 37, 41),
        card: Color32::from_rgb(43, 48, 53),
    },
    side_panel_width: 240.0,
    table_row_height: 20.0,
};

impl UiConfig {
    /// Frame for the controls panel (standard padding)
    pub fn side_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.side_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(10),
            ..Default::default()
        }
    }

    /// Frame for the title bar
    pub fn top_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.side_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::symmetric(10, 6),
            ..Default::default()
        }
    }

    pub fn central_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.central_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(10),
            ..Default::default()
        }
    }

    /// Rounded box for the summary card and each alert.
    pub fn card_frame(&self, fill: Color32) -> Frame {
        Frame {
            fill,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(8),
            corner_radius: CornerRadius::same(4),
            ..Default::default()
        }
    }
}
