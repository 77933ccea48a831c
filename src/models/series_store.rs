use crate::config::StalePredictionPolicy;
use crate::domain::{HistoricalPoint, PredictionPoint, Ticker};

/// The two series currently on screen.
///
/// Both sequences are replaced wholesale, never patched. `ticker` names the symbol
/// whose history is loaded, so a prediction can be recognised as belonging to a
/// different chart.
#[derive(Debug, Clone, Default)]
pub struct SeriesStore {
    ticker: Option<Ticker>,
    historical: Vec<HistoricalPoint>,
    predicted: Vec<PredictionPoint>,
}

impl SeriesStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ticker(&self) -> Option<&Ticker> {
        self.ticker.as_ref()
    }

    pub fn historical(&self) -> &[HistoricalPoint] {
        &self.historical
    }

    pub fn predicted(&self) -> &[PredictionPoint] {
        &self.predicted
    }

    /// Swaps in a freshly loaded history.
    /// Returns true if the prediction series was dropped because of `policy`.
    pub fn replace_historical(
        &mut self,
        ticker: Ticker,
        points: Vec<HistoricalPoint>,
        policy: StalePredictionPolicy,
    ) -> bool {
        let drop_prediction = match policy {
            StalePredictionPolicy::Keep => false,
            StalePredictionPolicy::ClearOnTickerChange => {
                self.ticker.as_ref().is_some_and(|current| *current != ticker)
            }
            StalePredictionPolicy::ClearOnReload => true,
        } && !self.predicted.is_empty();

        if drop_prediction {
            self.predicted.clear();
        }
        self.ticker = Some(ticker);
        self.historical = points;
        drop_prediction
    }

    pub fn replace_predicted(&mut self, points: Vec<PredictionPoint>) {
        self.predicted = points;
    }

    pub fn last_close(&self) -> Option<f64> {
        self.historical.last().map(|p| p.close)
    }

    pub fn first_prediction(&self) -> Option<f64> {
        self.predicted.first().map(|p| p.price)
    }
}
