use strum_macros::Display;

use crate::config::DF;
use crate::domain::PricePoint;
use crate::models::SeriesStore;

/// The two lines on the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum SeriesIndex {
    #[strum(serialize = "Historical Prices")]
    Historical = 0,
    #[strum(serialize = "Predicted Prices")]
    Predicted = 1,
}

/// Opaque rendering target. Only the chart projector calls it.
pub trait ChartSink {
    fn set_series(&mut self, index: SeriesIndex, points: Vec<PricePoint>);
    fn set_title(&mut self, text: String);
    fn redraw(&mut self);
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartSeries {
    pub historical: Vec<PricePoint>,
    pub predicted: Vec<PricePoint>,
}

pub struct ChartProjector;

impl ChartProjector {
    pub fn series(store: &SeriesStore) -> ChartSeries {
        ChartSeries {
            historical: store
                .historical()
                .iter()
                .map(|p| p.to_price_point())
                .collect(),
            predicted: store
                .predicted()
                .iter()
                .map(|p| p.to_price_point())
                .collect(),
        }
    }

    pub fn title(selected_ticker: &str) -> String {
        format!(
            "{} Stock Price History & Prediction",
            selected_ticker.trim().to_uppercase()
        )
    }

    /// Pushes both series and a fresh title to `sink`, then asks for a redraw.
    /// The title is rebuilt every time so a ticker edit shows up even when the
    /// store itself has not changed.
    pub fn project<S: ChartSink>(store: &SeriesStore, selected_ticker: &str, sink: &mut S) {
        let ChartSeries {
            historical,
            predicted,
        } = Self::series(store);

        if DF.log_projections {
            log::info!(
                "CHART: {} historical / {} predicted points for {}",
                historical.len(),
                predicted.len(),
                selected_ticker
            );
        }

        sink.set_series(SeriesIndex::Historical, historical);
        sink.set_series(SeriesIndex::Predicted, predicted);
        sink.set_title(Self::title(selected_ticker));
        sink.redraw();
    }
}

/// A sink with no screen. Keeps whatever was last projected.
#[derive(Debug, Clone, Default)]
pub struct HeadlessChart {
    pub series: ChartSeries,
    pub title: String,
    pub redraws: usize,
}

impl ChartSink for HeadlessChart {
    fn set_series(&mut self, index: SeriesIndex, points: Vec<PricePoint>) {
        match index {
            SeriesIndex::Historical => self.series.historical = points,
            SeriesIndex::Predicted => self.series.predicted = points,
        }
    }

    fn set_title(&mut self, text: String) {
        self.title = text;
    }

    fn redraw(&mut self) {
        self.redraws += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StalePredictionPolicy;
    use crate::domain::{HistoricalPoint, PredictionPoint, Ticker};
    use chrono::NaiveDate;

    fn store() -> SeriesStore {
        let d = |day| NaiveDate::from_ymd_opt(2024, 1, day).unwrap();
        let mut store = SeriesStore::new();
        store.replace_historical(
            Ticker::parse("AAPL").unwrap(),
            vec![
                HistoricalPoint::new(d(2), 187.1, 188.4, 183.9, 185.6, 82e6),
                HistoricalPoint::new(d(3), 184.2, 185.9, 183.4, 184.3, 58e6),
            ],
            StalePredictionPolicy::Keep,
        );
        store.replace_predicted(vec![PredictionPoint::new(d(4), 190.1)]);
        store
    }

    #[test]
    fn historical_uses_close_and_predicted_uses_price() {
        let series = ChartProjector::series(&store());
        assert_eq!(series.historical.len(), 2);
        assert_eq!(series.historical[1].value, 184.3);
        assert_eq!(series.predicted.len(), 1);
        assert_eq!(series.predicted[0].value, 190.1);
    }

    #[test]
    fn projecting_twice_is_identical() {
        let store = store();
        let mut sink = HeadlessChart::default();
        ChartProjector::project(&store, "AAPL", &mut sink);
        let first = sink.series.clone();
        ChartProjector::project(&store, "AAPL", &mut sink);
        assert_eq!(sink.series, first);
        assert_eq!(sink.redraws, 2);
    }

    #[test]
    fn title_follows_selected_ticker_not_store() {
        let store = store();
        let mut sink = HeadlessChart::default();
        ChartProjector::project(&store, "msft", &mut sink);
        assert_eq!(sink.title, "MSFT Stock Price History & Prediction");
    }

    #[test]
    fn empty_store_projects_empty_series() {
        let mut sink = HeadlessChart::default();
        ChartProjector::project(&SeriesStore::new(), "AAPL", &mut sink);
        assert!(sink.series.historical.is_empty());
        assert!(sink.series.predicted.is_empty());
        assert_eq!(sink.redraws, 1);
    }
}
