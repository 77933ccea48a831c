mod chart;
mod summary;
mod table;

pub use chart::{ChartProjector, ChartSeries, ChartSink, HeadlessChart, SeriesIndex};
pub use summary::{Sentiment, SummaryFigures, SummaryProjector, SummaryView};
pub use table::{TableProjector, TableRow};
