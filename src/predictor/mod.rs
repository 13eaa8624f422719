//! Price Predictor boundary adapter.
//!
//! The predictor is an external collaborator. Its answer is optional: every
//! failure mode collapses into `None`, and callers fall back to a default price.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::domain::ItemCreate;

/// Estimates a price for an item that is about to be created.
#[async_trait]
pub trait PricePredictor: Send + Sync {
    /// Returns the predicted price, or `None` when no prediction is available.
    async fn predict(&self, item: &ItemCreate) -> Option<f64>;
}

/// Wire body expected by the prediction endpoint.
#[derive(Debug, Serialize)]
struct PredictionRequest<'a> {
    name: &'a str,
    item_description: &'a str,
    category_name: &'a str,
}

impl<'a> From<&'a ItemCreate> for PredictionRequest<'a> {
    fn from(item: &'a ItemCreate) -> Self {
        Self {
            name: &item.name,
            item_description: &item.description,
            category_name: &item.category,
        }
    }
}

/// Reasons a prediction was unavailable. Logged, never surfaced.
#[derive(Debug, Error)]
enum PredictionError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("unexpected status {0}")]
    Status(StatusCode),
    #[error("response body is not JSON: {0}")]
    Body(String),
    #[error("response has no predicted_price field")]
    MissingPrice,
    #[error("predicted_price is not a finite number: {0}")]
    InvalidPrice(Value),
}

/// [`PricePredictor`] backed by an HTTP endpoint.
#[derive(Debug, Clone)]
pub struct HttpPricePredictor {
    client: reqwest::Client,
    url: String,
}

impl HttpPricePredictor {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    async fn fetch(&self, item: &ItemCreate) -> Result<f64, PredictionError> {
        let response = self
            .client
            .post(&self.url)
            .json(&PredictionRequest::from(item))
            .send()
            .await
            .map_err(|e| PredictionError::Network(e.to_string()))?;

        // Only a plain 200 counts; other 2xx codes are treated as failures.
        if response.status() != StatusCode::OK {
            return Err(PredictionError::Status(response.status()));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| PredictionError::Body(e.to_string()))?;

        parse_price(&body)
    }
}

#[async_trait]
impl PricePredictor for HttpPricePredictor {
    #[instrument(skip(self, item), fields(url = %self.url, item_name = %item.name))]
    async fn predict(&self, item: &ItemCreate) -> Option<f64> {
        match self.fetch(item).await {
            Ok(price) => {
                debug!(price, "Prediction received");
                Some(price)
            }
            Err(e) => {
                warn!(error = %e, "Prediction unavailable");
                None
            }
        }
    }
}

/// Extracts `predicted_price` from a response body.
///
/// Numeric strings are accepted as well as JSON numbers.
fn parse_price(body: &Value) -> Result<f64, PredictionError> {
    let raw = body
        .get("predicted_price")
        .ok_or(PredictionError::MissingPrice)?;

    let price = match raw {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    price
        .filter(|p| p.is_finite())
        .ok_or_else(|| PredictionError::InvalidPrice(raw.clone()))
}
