use strum_macros::Display;

use crate::models::SeriesStore;
use crate::utils::{format_pct, format_price, round2};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Sentiment {
    #[strum(serialize = "positive")]
    Positive,
    #[strum(serialize = "negative")]
    Negative,
}

/// Raw numbers behind the summary card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryFigures {
    pub current: f64,
    pub predicted: f64,
    /// Percent change rounded to two decimals.
    pub change_pct: f64,
}

impl SummaryFigures {
    /// Follows the rounded change, so "0.00%" is never shown as a loss.
    pub fn sentiment(&self) -> Sentiment {
        if self.change_pct >= 0.0 {
            Sentiment::Positive
        } else {
            Sentiment::Negative
        }
    }
}

/// The summary card as displayed.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryView {
    pub current_price: String,
    pub predicted_price: String,
    pub change_pct: String,
    pub sentiment: Sentiment,
}

impl From<SummaryFigures> for SummaryView {
    fn from(figures: SummaryFigures) -> Self {
        Self {
            current_price: format_price(figures.current),
            predicted_price: format_price(figures.predicted),
            change_pct: format_pct(figures.change_pct),
            sentiment: figures.sentiment(),
        }
    }
}

pub struct SummaryProjector;

impl SummaryProjector {
    /// Compares the last close with the first predicted price.
    /// None when either series is empty or the last close is zero.
    pub fn figures(store: &SeriesStore) -> Option<SummaryFigures> {
        let current = store.last_close()?;
        let predicted = store.first_prediction()?;
        if current == 0.0 {
            return None;
        }
        Some(SummaryFigures {
            current,
            predicted,
            change_pct: round2((predicted - current) / current * 100.0),
        })
    }

    /// Updates `view` in place. With nothing to compare the previous figures stay,
    /// unless `reset_when_empty` is set.
    pub fn project(store: &SeriesStore, view: &mut Option<SummaryView>, reset_when_empty: bool) {
        match Self::figures(store) {
            Some(figures) => *view = Some(figures.into()),
            None if reset_when_empty => *view = None,
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StalePredictionPolicy;
    use crate::domain::{HistoricalPoint, PredictionPoint, Ticker};
    use chrono::NaiveDate;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    fn store(last_close: f64, predictions: &[f64]) -> SeriesStore {
        let mut store = SeriesStore::new();
        store.replace_historical(
            Ticker::parse("AAPL").unwrap(),
            vec![
                HistoricalPoint::new(day(1), 180.0, 181.0, 179.0, 180.5, 1e6),
                HistoricalPoint::new(day(4), 187.0, 189.0, 186.0, last_close, 1e6),
            ],
            StalePredictionPolicy::Keep,
        );
        store.replace_predicted(
            predictions
                .iter()
                .enumerate()
                .map(|(i, p)| PredictionPoint::new(day(5 + i as u32), *p))
                .collect(),
        );
        store
    }

    #[test]
    fn five_day_prediction_after_188() {
        let store = store(188.0, &[190.1, 190.8, 191.2, 190.4, 192.0]);
        let mut view = None;
        SummaryProjector::project(&store, &mut view, false);
        let view = view.unwrap();
        assert_eq!(view.current_price, "$188.00");
        assert_eq!(view.predicted_price, "$190.10");
        assert_eq!(view.change_pct, "1.12%");
        assert_eq!(view.sentiment, Sentiment::Positive);
    }

    #[test]
    fn sentiment_matches_sign_of_change() {
        for (current, predicted) in [(100.0, 99.0), (100.0, 100.0), (100.0, 101.0), (50.0, 12.5)] {
            let figures = SummaryProjector::figures(&store(current, &[predicted])).unwrap();
            let positive = figures.sentiment() == Sentiment::Positive;
            assert_eq!(positive, predicted >= current);
            assert_eq!(figures.change_pct >= 0.0, positive);
        }
    }

    #[test]
    fn change_that_rounds_to_zero_is_positive() {
        let mut view = None;
        SummaryProjector::project(&store(100.0, &[99.999]), &mut view, false);
        let view = view.unwrap();
        assert_eq!(view.change_pct, "0.00%");
        assert_eq!(view.sentiment, Sentiment::Positive);

        let figures = SummaryProjector::figures(&store(100.0, &[99.99])).unwrap();
        assert_eq!(format_pct(figures.change_pct), "-0.01%");
        assert_eq!(figures.sentiment(), Sentiment::Negative);
    }

    #[test]
    fn empty_prediction_keeps_previous_view() {
        let mut view = None;
        SummaryProjector::project(&store(188.0, &[190.1]), &mut view, false);
        let before = view.clone();

        SummaryProjector::project(&store(188.0, &[]), &mut view, false);
        assert_eq!(view, before);

        SummaryProjector::project(&store(188.0, &[]), &mut view, true);
        assert_eq!(view, None);
    }
}
