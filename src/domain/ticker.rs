use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use crate::engine::DashboardError;

const MAX_TICKER_LEN: usize = 12;

/// An upper-cased exchange symbol, e.g. `AAPL`, `BRK-B`, `^GSPC`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ticker(String);

impl Ticker {
    /// Normalizes raw form input. Whitespace is trimmed and letters are upper-cased
    /// before validation.
    pub fn parse(raw: &str) -> Result<Self, DashboardError> {
        let symbol = raw.trim().to_uppercase();
        if symbol.is_empty() {
            return Err(DashboardError::InvalidInput(
                "Ticker symbol is required".to_string(),
            ));
        }
        if symbol.len() > MAX_TICKER_LEN {
            return Err(DashboardError::InvalidInput(format!(
                "Ticker symbol '{}' is too long",
                symbol
            )));
        }
        if let Some(bad) = symbol
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '^' | '=')))
        {
            return Err(DashboardError::InvalidInput(format!(
                "Ticker symbol '{}' contains invalid character '{}'",
                symbol, bad
            )));
        }
        Ok(Self(symbol))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Ticker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// History lookback accepted by the `/history` endpoint.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Display,
    EnumString,
    EnumIter,
    ValueEnum,
    Serialize,
    Deserialize,
)]
pub enum Period {
    #[strum(serialize = "1d")]
    #[value(name = "1d")]
    OneDay,
    #[strum(serialize = "5d")]
    #[value(name = "5d")]
    FiveDays,
    #[strum(serialize = "1mo")]
    #[value(name = "1mo")]
    OneMonth,
    #[strum(serialize = "3mo")]
    #[value(name = "3mo")]
    ThreeMonths,
    #[strum(serialize = "6mo")]
    #[value(name = "6mo")]
    SixMonths,
    #[default]
    #[strum(serialize = "1y")]
    #[value(name = "1y")]
    OneYear,
    #[strum(serialize = "2y")]
    #[value(name = "2y")]
    TwoYears,
    #[strum(serialize = "5y")]
    #[value(name = "5y")]
    FiveYears,
    #[strum(serialize = "10y")]
    #[value(name = "10y")]
    TenYears,
    #[strum(serialize = "ytd")]
    #[value(name = "ytd")]
    YearToDate,
    #[strum(serialize = "max")]
    #[value(name = "max")]
    Max,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn ticker_is_trimmed_and_uppercased() {
        let t = Ticker::parse("  aapl ").unwrap();
        assert_eq!(t.as_str(), "AAPL");
        assert_eq!(Ticker::parse("brk-b").unwrap().as_str(), "BRK-B");
        assert_eq!(Ticker::parse("^gspc").unwrap().as_str(), "^GSPC");
    }

    #[test]
    fn ticker_rejects_empty_and_garbage() {
        assert!(matches!(
            Ticker::parse("   "),
            Err(DashboardError::InvalidInput(_))
        ));
        assert!(Ticker::parse("AA PL").is_err());
        assert!(Ticker::parse("AAPL&x=1").is_err());
        assert!(Ticker::parse("ABCDEFGHIJKLMN").is_err());
    }

    #[test]
    fn period_tokens_match_server_vocabulary() {
        assert_eq!(Period::default().to_string(), "1y");
        assert_eq!("6mo".parse::<Period>().unwrap(), Period::SixMonths);
        assert_eq!("ytd".parse::<Period>().unwrap(), Period::YearToDate);
        assert!("7y".parse::<Period>().is_err());
        assert_eq!(Period::iter().count(), 11);
    }

    #[test]
    fn cli_names_match_server_tokens() {
        for period in Period::iter() {
            let name = period.to_possible_value().unwrap();
            assert_eq!(name.get_name(), period.to_string());
        }
        assert_eq!(
            <Period as ValueEnum>::from_str("10y", false).unwrap(),
            Period::TenYears
        );
    }
}
