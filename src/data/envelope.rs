//! Response envelopes of the three endpoints.
//!
//! Every body is `{ success, ... }`. Two tiers of failure are kept apart:
//! `success: false` is an application failure carrying optional server text;
//! anything that stops us reading an envelope at all (bad status, non-JSON,
//! missing or misshapen fields) is transport/malformed and never shows raw.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::constants::messages::{HISTORY_FALLBACK, PREDICT_FALLBACK, TRAIN_FALLBACK};
use crate::data::ApiResponse;
use crate::domain::{HistoricalPoint, PredictionPoint};
use crate::engine::{DashboardError, DashboardResult, Operation, TransportError};
use crate::utils::TimeUtils;

/// A JSON number, or a string holding one. pandas/yfinance output occasionally
/// arrives stringified, and the old client simply ran everything through parseFloat.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum Numeric {
    Number(f64),
    Text(String),
}

impl Numeric {
    fn value(&self) -> Option<f64> {
        let v = match self {
            Numeric::Number(n) => *n,
            Numeric::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        v.is_finite().then_some(v)
    }
}

#[derive(Debug, Deserialize)]
struct HistoryRow {
    date: String,
    open: Numeric,
    high: Numeric,
    low: Numeric,
    close: Numeric,
    volume: Numeric,
}

#[derive(Debug, Deserialize)]
struct HistoryEnvelope {
    success: bool,
    data: Option<Vec<HistoryRow>>,
    error: Option<String>,
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TrainEnvelope {
    success: bool,
    message: Option<String>,
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PredictionArrays {
    dates: Vec<String>,
    prices: Vec<Numeric>,
}

#[derive(Debug, Deserialize)]
struct PredictEnvelope {
    success: bool,
    predictions: Option<PredictionArrays>,
    error: Option<String>,
    message: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct TrainBody<'a> {
    pub ticker: &'a str,
    pub time_step: u32,
    pub epochs: u32,
}

#[derive(Debug, Serialize)]
pub(crate) struct PredictBody {
    pub days: u32,
}

/// Status and JSON check. Failures here are transport-tier.
fn decode(operation: Operation, response: &ApiResponse) -> DashboardResult<Value> {
    if !(200..300).contains(&response.status) {
        return Err(DashboardError::transport(
            operation,
            TransportError::Status(response.status),
        ));
    }
    serde_json::from_str(&response.body).map_err(|e| {
        DashboardError::transport(operation, TransportError::Decode(e.to_string()))
    })
}

/// Envelope shape check. Valid JSON of the wrong shape is a malformed response.
fn shape<T: DeserializeOwned>(operation: Operation, value: Value) -> DashboardResult<T> {
    serde_json::from_value(value).map_err(|e| DashboardError::malformed(operation, e.to_string()))
}

/// First non-blank server text, else the per-operation fallback.
fn server_text(candidates: [Option<String>; 2], fallback: &str) -> String {
    candidates
        .into_iter()
        .flatten()
        .map(|s| s.trim().to_string())
        .find(|s| !s.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

fn number(operation: Operation, row: usize, field: &str, raw: &Numeric) -> DashboardResult<f64> {
    raw.value().ok_or_else(|| {
        DashboardError::malformed(operation, format!("row {}: '{}' is not a number", row, field))
    })
}

/// `GET /history` → points sorted by date ascending.
pub fn parse_history(response: &ApiResponse) -> DashboardResult<Vec<HistoricalPoint>> {
    let op = Operation::LoadHistory;
    let envelope: HistoryEnvelope = shape(op, decode(op, response)?)?;

    if !envelope.success {
        return Err(DashboardError::DataLoad(server_text(
            [envelope.error, envelope.message],
            HISTORY_FALLBACK,
        )));
    }

    let rows = envelope
        .data
        .ok_or_else(|| DashboardError::malformed(op, "success without 'data'"))?;

    let mut points = rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let date = TimeUtils::parse_wire_date(&row.date).ok_or_else(|| {
                DashboardError::malformed(op, format!("row {}: bad date '{}'", i, row.date))
            })?;
            let volume = number(op, i, "volume", &row.volume)?;
            if volume < 0.0 {
                return Err(DashboardError::malformed(
                    op,
                    format!("row {}: negative volume", i),
                ));
            }
            Ok(HistoricalPoint::new(
                date,
                number(op, i, "open", &row.open)?,
                number(op, i, "high", &row.high)?,
                number(op, i, "low", &row.low)?,
                number(op, i, "close", &row.close)?,
                volume,
            ))
        })
        .collect::<DashboardResult<Vec<_>>>()?;

    // Stable: equal dates keep server order
    points.sort_by_key(|p| p.date);
    Ok(points)
}

/// `POST /train` → the server's success message, if any.
pub fn parse_train(response: &ApiResponse) -> DashboardResult<Option<String>> {
    let op = Operation::Train;
    let envelope: TrainEnvelope = shape(op, decode(op, response)?)?;

    if envelope.success {
        Ok(envelope.message)
    } else {
        Err(DashboardError::Training(server_text(
            [envelope.message, envelope.error],
            TRAIN_FALLBACK,
        )))
    }
}

/// `POST /predict` → `dates[i]` zipped with `prices[i]`, in response order.
pub fn parse_prediction(response: &ApiResponse) -> DashboardResult<Vec<PredictionPoint>> {
    let op = Operation::Predict;
    let envelope: PredictEnvelope = shape(op, decode(op, response)?)?;

    if !envelope.success {
        return Err(DashboardError::Prediction(server_text(
            [envelope.error, envelope.message],
            PREDICT_FALLBACK,
        )));
    }

    let arrays = envelope
        .predictions
        .ok_or_else(|| DashboardError::malformed(op, "success without 'predictions'"))?;

    if arrays.dates.len() != arrays.prices.len() {
        return Err(DashboardError::malformed(
            op,
            format!(
                "{} dates but {} prices",
                arrays.dates.len(),
                arrays.prices.len()
            ),
        ));
    }

    arrays
        .dates
        .iter()
        .zip(arrays.prices.iter())
        .enumerate()
        .map(|(i, (date, price))| {
            let date = TimeUtils::parse_wire_date(date).ok_or_else(|| {
                DashboardError::malformed(op, format!("entry {}: bad date '{}'", i, date))
            })?;
            Ok(PredictionPoint::new(date, number(op, i, "price", price)?))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ok(body: &str) -> ApiResponse {
        ApiResponse {
            status: 200,
            body: body.to_string(),
        }
    }

    #[test]
    fn history_rows_are_parsed_and_sorted() {
        let resp = ok(r#"{
            "success": true,
            "data": [
                {"date": "2024-01-03", "open": 184.2, "high": 185.9, "low": 183.4, "close": 184.25, "volume": 58414500},
                {"date": "2024-01-02", "open": "187.15", "high": "188.44", "low": "183.89", "close": "185.64", "volume": "82488700"}
            ]
        }"#);
        let points = parse_history(&resp).unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].date, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
        assert_eq!(points[0].close, 185.64);
        assert_eq!(points[0].volume, 82_488_700.0);
        assert_eq!(points[1].close, 184.25);
    }

    #[test]
    fn history_failure_carries_server_text_or_fallback() {
        let err = parse_history(&ok(
            r#"{"success": false, "error": "Failed to fetch historical data"}"#,
        ))
        .unwrap_err();
        assert_eq!(
            err,
            DashboardError::DataLoad("Failed to fetch historical data".into())
        );

        let err = parse_history(&ok(r#"{"success": false}"#)).unwrap_err();
        assert_eq!(err, DashboardError::DataLoad(HISTORY_FALLBACK.into()));
    }

    #[test]
    fn history_shape_violations_are_malformed() {
        for body in [
            r#"{"success": true}"#,
            r#"{"data": []}"#,
            r#"{"success": true, "data": [{"date": "not a date", "open": 1, "high": 1, "low": 1, "close": 1, "volume": 1}]}"#,
            r#"{"success": true, "data": [{"date": "2024-01-02", "open": "abc", "high": 1, "low": 1, "close": 1, "volume": 1}]}"#,
            r#"{"success": true, "data": [{"date": "2024-01-02", "open": 1, "high": 1, "low": 1, "close": 1, "volume": -4}]}"#,
        ] {
            let err = parse_history(&ok(body)).unwrap_err();
            assert!(
                matches!(err, DashboardError::MalformedResponse { operation: Operation::LoadHistory, .. }),
                "{} -> {:?}",
                body,
                err
            );
        }
    }

    #[test]
    fn bad_status_and_non_json_are_transport_failures() {
        let err = parse_train(&ApiResponse {
            status: 500,
            body: "<html>Internal Server Error</html>".into(),
        })
        .unwrap_err();
        assert_eq!(
            err,
            DashboardError::transport(Operation::Train, TransportError::Status(500))
        );

        let err = parse_prediction(&ok("<html>oops</html>")).unwrap_err();
        assert!(matches!(
            err,
            DashboardError::Transport {
                operation: Operation::Predict,
                source: TransportError::Decode(_)
            }
        ));
    }

    #[test]
    fn train_failure_prefers_message() {
        let err = parse_train(&ok(r#"{"success": false, "message": "insufficient data"}"#))
            .unwrap_err();
        assert_eq!(err, DashboardError::Training("insufficient data".into()));

        let err = parse_train(&ok(r#"{"success": false, "message": "  "}"#)).unwrap_err();
        assert_eq!(err, DashboardError::Training(TRAIN_FALLBACK.into()));

        let msg = parse_train(&ok(
            r#"{"success": true, "message": "Model trained successfully"}"#,
        ))
        .unwrap();
        assert_eq!(msg.as_deref(), Some("Model trained successfully"));
    }

    #[test]
    fn predictions_zip_positionally() {
        let points = parse_prediction(&ok(r#"{
            "success": true,
            "predictions": {"dates": ["2024-01-03", "2024-01-02"], "prices": [191.5, 190.1]}
        }"#))
        .unwrap();
        assert_eq!(points.len(), 2);
        // Response order is kept, no re-sorting
        assert_eq!(points[0].date, NaiveDate::from_ymd_opt(2024, 1, 3).unwrap());
        assert_eq!(points[0].price, 191.5);
        assert_eq!(points[1].price, 190.1);
    }

    #[test]
    fn misaligned_predictions_are_malformed() {
        let err = parse_prediction(&ok(r#"{
            "success": true,
            "predictions": {"dates": ["2024-01-02", "2024-01-03"], "prices": [190.1]}
        }"#))
        .unwrap_err();
        assert_eq!(
            err,
            DashboardError::malformed(Operation::Predict, "2 dates but 1 prices")
        );

        let err = parse_prediction(&ok(r#"{"success": true}"#)).unwrap_err();
        assert!(err.is_transport_tier());
    }

    #[test]
    fn prediction_failure_uses_error_field() {
        let err = parse_prediction(&ok(
            r#"{"success": false, "error": "Model not found. Please train the model first."}"#,
        ))
        .unwrap_err();
        assert_eq!(
            err.user_message(),
            "Error: Model not found. Please train the model first."
        );
    }
}
