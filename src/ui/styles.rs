use eframe::egui::{Color32, RichText, Ui};

use crate::config::PLOT_CONFIG;
use crate::models::AlertLevel;
use crate::projection::Sentiment;
use crate::ui::UI_CONFIG;

pub(crate) fn colored_subsection_heading(text: impl Into<String>) -> RichText {
    RichText::new(text.into()).color(UI_CONFIG.colors.subsection_heading)
}

pub trait LevelColor {
    fn color(&self) -> Color32;
}

impl LevelColor for AlertLevel {
    fn color(&self) -> Color32 {
        match self {
            Self::Info => PLOT_CONFIG.color_info,
            Self::Success => PLOT_CONFIG.color_success,
            Self::Danger => PLOT_CONFIG.color_danger,
        }
    }
}

impl LevelColor for Sentiment {
    fn color(&self) -> Color32 {
        match self {
            Self::Positive => PLOT_CONFIG.color_positive,
            Self::Negative => PLOT_CONFIG.color_negative,
        }
    }
}

pub fn apply_opacity(color: Color32, factor: f32) -> Color32 {
    color.linear_multiply(factor)
}

pub(crate) trait UiStyleExt {
    fn label_subdued(&mut self, text: impl Into<String>);
    fn metric(&mut self, label: &str, value: &str, color: Color32);
    fn label_subheader(&mut self, text: impl Into<String>);
}

impl UiStyleExt for Ui {
    fn label_subdued(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(PLOT_CONFIG.color_text_subdued));
    }

    fn metric(&mut self, label: &str, value: &str, color: Color32) {
        self.vertical(|ui| {
            ui.label_subdued(label);
            ui.label(RichText::new(value).strong().size(18.0).color(color));
        });
    }

    fn label_subheader(&mut self, text: impl Into<String>) {
        self.label(colored_subsection_heading(text));
    }
}
