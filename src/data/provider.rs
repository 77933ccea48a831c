#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use async_trait::async_trait;

use crate::config::API;
use crate::data::envelope::{PredictBody, TrainBody};
use crate::engine::{ApiRequest, TransportError};

/// Raw HTTP answer. Interpreting it is the coordinator's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

/// Abstract interface for reaching the prediction server.
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait Transport: Send + Sync {
    async fn send(&self, request: &ApiRequest) -> Result<ApiResponse, TransportError>;
}

/// `reqwest` client for the three JSON endpoints.
#[derive(Clone)]
pub struct HttpTransport {
    base_url: String,
    http: reqwest::Client,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>) -> Result<Self, TransportError> {
        let builder = reqwest::Client::builder();

        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder
            .user_agent(API.client.user_agent)
            .connect_timeout(Duration::from_millis(API.client.connect_timeout_ms));

        let http = builder.build()?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl Transport for HttpTransport {
    async fn send(&self, request: &ApiRequest) -> Result<ApiResponse, TransportError> {
        let builder = match request {
            ApiRequest::History { ticker, period } => {
                let period = period.to_string();
                self.http
                    .get(self.url(API.paths.history))
                    .query(&[("ticker", ticker.as_str()), ("period", period.as_str())])
            }
            ApiRequest::Train {
                ticker,
                time_step,
                epochs,
            } => self.http.post(self.url(API.paths.train)).json(&TrainBody {
                ticker: ticker.as_str(),
                time_step: *time_step,
                epochs: *epochs,
            }),
            ApiRequest::Predict { days } => self
                .http
                .post(self.url(API.paths.predict))
                .json(&PredictBody { days: *days }),
        };

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(ApiResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_ignored() {
        let t = HttpTransport::new("http://localhost:5000/").unwrap();
        assert_eq!(t.url(API.paths.history), "http://localhost:5000/history");
    }

    #[test]
    fn request_bodies_use_snake_case_fields() {
        let body = serde_json::to_value(TrainBody {
            ticker: "AAPL",
            time_step: 60,
            epochs: 50,
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({"ticker": "AAPL", "time_step": 60, "epochs": 50})
        );
        let body = serde_json::to_value(PredictBody { days: 5 }).unwrap();
        assert_eq!(body, serde_json::json!({"days": 5}));
    }

    #[tokio::test]
    async fn unreachable_server_is_a_network_error() {
        // Port 9 (discard) on loopback is practically never served
        let t = HttpTransport::new("http://127.0.0.1:9").unwrap();
        let err = t.send(&ApiRequest::Predict { days: 1 }).await.unwrap_err();
        assert!(matches!(err, TransportError::Network(_)), "{:?}", err);
    }
}
