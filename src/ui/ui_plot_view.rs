use eframe::egui::{RichText, Ui};
use egui_plot::{Axis, AxisHints, Legend, Line, LineStyle, Plot, PlotPoints};

use crate::config::PLOT_CONFIG;
use crate::domain::PricePoint;
use crate::projection::{ChartSink, SeriesIndex};
use crate::ui::UI_TEXT;
use crate::ui::styles::UiStyleExt;
use crate::utils::{TimeUtils, format_price};

/// The price chart. Holds only what the chart projector last pushed into it.
#[derive(Default)]
pub struct PlotView {
    historical: Vec<[f64; 2]>,
    predicted: Vec<[f64; 2]>,
    title: String,
    /// Set by `redraw`; the next frame refits the axes to the new data.
    needs_fit: bool,
}

fn to_plot_points(points: &[PricePoint]) -> Vec<[f64; 2]> {
    points
        .iter()
        .map(|p| [TimeUtils::date_to_plot_x(p.timestamp), p.value])
        .collect()
}

impl ChartSink for PlotView {
    fn set_series(&mut self, index: SeriesIndex, points: Vec<PricePoint>) {
        let converted = to_plot_points(&points);
        match index {
            SeriesIndex::Historical => self.historical = converted,
            SeriesIndex::Predicted => self.predicted = converted,
        }
    }

    fn set_title(&mut self, text: String) {
        self.title = text;
    }

    fn redraw(&mut self) {
        self.needs_fit = true;
    }
}

fn create_time_axis() -> AxisHints<'static> {
    AxisHints::new(Axis::X)
        .label(UI_TEXT.plot_x_axis.as_str())
        .formatter(|mark, _range| {
            TimeUtils::plot_x_to_date(mark.value)
                .map(|d| d.format("%b %d %Y").to_string())
                .unwrap_or_default()
        })
}

fn create_price_axis() -> AxisHints<'static> {
    AxisHints::new(Axis::Y)
        .label(UI_TEXT.plot_y_axis.as_str())
        .formatter(|mark, _range| format!("${:.0}", mark.value))
}

impl PlotView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn show(&mut self, ui: &mut Ui, height: f32) {
        ui.label(RichText::new(&self.title).heading());

        if self.historical.is_empty() && self.predicted.is_empty() {
            ui.label_subdued(UI_TEXT.plot_waiting.as_str());
            return;
        }

        let mut plot = Plot::new("price_plot")
            .height(height)
            .legend(Legend::default())
            .custom_x_axes(vec![create_time_axis()])
            .custom_y_axes(vec![create_price_axis()])
            .label_formatter(|name, value| {
                if name.is_empty() {
                    return String::new();
                }
                let date = TimeUtils::plot_x_to_date(value.x)
                    .map(TimeUtils::format_table_date)
                    .unwrap_or_default();
                format!("{}\n{}\n{}", name, date, format_price(value.y))
            });

        if self.needs_fit {
            plot = plot.reset();
            self.needs_fit = false;
        }

        let historical = self.historical.clone();
        let predicted = self.predicted.clone();

        plot.show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(
                    SeriesIndex::Historical.to_string(),
                    PlotPoints::new(historical),
                )
                .color(PLOT_CONFIG.historical_color)
                .width(PLOT_CONFIG.historical_line_width),
            );
            plot_ui.line(
                Line::new(
                    SeriesIndex::Predicted.to_string(),
                    PlotPoints::new(predicted),
                )
                .color(PLOT_CONFIG.predicted_color)
                .width(PLOT_CONFIG.predicted_line_width)
                .style(LineStyle::Dashed { length: 8.0 }),
            );
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn sink_converts_dates_to_plot_x() {
        let mut view = PlotView::new();
        let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        view.set_series(
            SeriesIndex::Predicted,
            vec![PricePoint {
                timestamp: date,
                value: 190.1,
            }],
        );
        view.set_title("AAPL Stock Price History & Prediction".into());
        view.redraw();

        assert!(view.historical.is_empty());
        assert_eq!(view.predicted, vec![[TimeUtils::date_to_plot_x(date), 190.1]]);
        assert_eq!(view.title(), "AAPL Stock Price History & Prediction");
        assert!(view.needs_fit);
    }
}
