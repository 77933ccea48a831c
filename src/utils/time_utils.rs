use chrono::{DateTime, NaiveDate};

use crate::config::constants::{TABLE_DATE_FORMAT, WIRE_DATE_FORMAT};

/// Monotonic clock that works natively and in the browser.
pub type AppInstant = web_time::Instant;

pub struct TimeUtils;

impl TimeUtils {
    pub const SECS_IN_D: i64 = 86_400;

    /// Parses a wire date. Accepts the plain `YYYY-MM-DD` the server sends, and
    /// falls back to RFC 3339 timestamps (the calendar date is kept, time dropped).
    pub fn parse_wire_date(raw: &str) -> Option<NaiveDate> {
        let raw = raw.trim();
        NaiveDate::parse_from_str(raw, WIRE_DATE_FORMAT)
            .ok()
            .or_else(|| {
                DateTime::parse_from_rfc3339(raw)
                    .ok()
                    .map(|dt| dt.date_naive())
            })
    }

    /// Locale-style short date for table rows, e.g. `1/2/2024`.
    pub fn format_table_date(date: NaiveDate) -> String {
        date.format(TABLE_DATE_FORMAT).to_string()
    }

    /// Calendar date to plot x-coordinate (seconds since epoch at midnight UTC).
    pub fn date_to_plot_x(date: NaiveDate) -> f64 {
        date.and_hms_opt(0, 0, 0)
            .map(|dt| dt.and_utc().timestamp() as f64)
            .unwrap_or(0.0)
    }

    /// Inverse of `date_to_plot_x`, used by the axis formatter.
    pub fn plot_x_to_date(x: f64) -> Option<NaiveDate> {
        DateTime::from_timestamp(x as i64, 0).map(|dt| dt.date_naive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_dates_parse_in_both_shapes() {
        let d = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        assert_eq!(TimeUtils::parse_wire_date("2024-01-02"), Some(d));
        assert_eq!(TimeUtils::parse_wire_date(" 2024-01-02 "), Some(d));
        assert_eq!(
            TimeUtils::parse_wire_date("2024-01-02T00:00:00-05:00"),
            Some(d)
        );
        assert_eq!(TimeUtils::parse_wire_date("02/01/2024"), None);
        assert_eq!(TimeUtils::parse_wire_date(""), None);
    }

    #[test]
    fn table_dates_are_unpadded_month_day_year() {
        let d = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        assert_eq!(TimeUtils::format_table_date(d), "1/2/2024");
        let d = NaiveDate::from_ymd_opt(2023, 12, 29).unwrap();
        assert_eq!(TimeUtils::format_table_date(d), "12/29/2023");
    }

    #[test]
    fn plot_x_maps_back_to_the_same_day() {
        let d = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let x = TimeUtils::date_to_plot_x(d);
        assert_eq!(x % TimeUtils::SECS_IN_D as f64, 0.0);
        assert_eq!(TimeUtils::plot_x_to_date(x), Some(d));
    }
}
