use crate::domain::HistoricalPoint;
use crate::utils::{TimeUtils, format_price, format_volume};

/// One display row of the recent-history table. Every cell is preformatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub date: String,
    pub open: String,
    pub high: String,
    pub low: String,
    pub close: String,
    pub volume: String,
}

impl From<&HistoricalPoint> for TableRow {
    fn from(p: &HistoricalPoint) -> Self {
        Self {
            date: TimeUtils::format_table_date(p.date),
            open: format_price(p.open),
            high: format_price(p.high),
            low: format_price(p.low),
            close: format_price(p.close),
            volume: format_volume(p.volume),
        }
    }
}

pub struct TableProjector;

impl TableProjector {
    /// The last `limit` points, most recent first.
    pub fn project(historical: &[HistoricalPoint], limit: usize) -> Vec<TableRow> {
        let start = historical.len().saturating_sub(limit);
        historical[start..].iter().rev().map(TableRow::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Days, NaiveDate};

    fn series(n: usize) -> Vec<HistoricalPoint> {
        let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        (0..n)
            .map(|i| {
                let c = 100.0 + i as f64;
                HistoricalPoint::new(
                    start + Days::new(i as u64),
                    c - 0.5,
                    c + 1.0,
                    c - 1.0,
                    c,
                    1_000_000.0 + i as f64,
                )
            })
            .collect()
    }

    #[test]
    fn length_is_min_of_limit_and_input() {
        for n in [1, 3, 10, 11, 252] {
            assert_eq!(TableProjector::project(&series(n), 10).len(), n.min(10));
        }
        assert!(TableProjector::project(&[], 10).is_empty());
    }

    #[test]
    fn rows_are_most_recent_first() {
        let rows = TableProjector::project(&series(252), 10);
        assert_eq!(rows[0].close, "$351.00");
        assert_eq!(rows[9].close, "$342.00");
        let data = series(252);
        assert_eq!(rows[0].date, TimeUtils::format_table_date(data[251].date));
    }

    #[test]
    fn cells_are_formatted() {
        let p = HistoricalPoint::new(
            NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            187.15,
            188.44,
            183.885,
            185.64,
            82_488_700.0,
        );
        let row = TableRow::from(&p);
        assert_eq!(row.date, "1/2/2024");
        assert_eq!(row.open, "$187.15");
        assert_eq!(row.high, "$188.44");
        assert_eq!(row.close, "$185.64");
        assert_eq!(row.volume, "82,488,700");
    }

    #[test]
    fn projection_is_idempotent() {
        let data = series(30);
        assert_eq!(
            TableProjector::project(&data, 10),
            TableProjector::project(&data, 10)
        );
    }
}
