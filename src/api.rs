//! API client for the Meridian Python backend
//!
//! One async method per backend operation. Each method performs a single
//! HTTP request and returns the parsed JSON body; no retry, no caching.
//! Callers own user-facing error messaging.

#![allow(dead_code)]

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

/// Errors surfaced by the client. `Server` carries the HTTP status and
/// whatever body text the backend returned with it.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    Network(String),
    Parse(String),
    Server(u16, String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "network error: {}", msg),
            ApiError::Parse(msg) => write!(f, "response parse error: {}", msg),
            ApiError::Server(status, msg) => write!(f, "server error {}: {}", status, msg),
        }
    }
}

impl std::error::Error for ApiError {}

/// API client for the Meridian backend
#[derive(Clone)]
pub struct MeridianClient {
    base_url: String,
    client: reqwest::Client,
}

impl MeridianClient {
    /// Create a new client against the default localhost backend
    pub fn new() -> Self {
        Self::with_url("http://localhost:8000".to_string())
    }

    /// Create a new client with a custom base URL
    pub fn with_url(base_url: String) -> Self {
        // Connect timeout only; long-running summarization requests are
        // left unbounded on purpose.
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .build()
            .expect("failed to construct HTTP client");

        Self { base_url, client }
    }

    /// Convenience constructor returning a shared handle
    pub fn new_shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn parse<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Server(status.as_u16(), body));
        }
        response
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    /// Scrape the given URLs and summarize them around `topic`.
    ///
    /// The response is a flat map of URL to summary text, plus a
    /// `"timestamp"` entry stamped by the backend.
    pub async fn news_summary(
        &self,
        urls: &[String],
        topic: &str,
    ) -> Result<HashMap<String, String>, ApiError> {
        let url = format!("{}/api/news", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&NewsRequest {
                urls: urls.to_vec(),
                topic: topic.to_string(),
            })
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Self::parse(response).await
    }

    /// Fetch a FRED series as an ordered sequence of points
    pub async fn macro_series(
        &self,
        series_id: &str,
        label: &str,
        years: u32,
    ) -> Result<Vec<MacroPoint>, ApiError> {
        let url = format!("{}/api/macro/data", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&MacroSeriesRequest {
                series_id: series_id.to_string(),
                label: label.to_string(),
                years,
            })
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Self::parse(response).await
    }

    /// Ask the backend to synthesize a narrative conclusion across all
    /// indicator groups
    pub async fn synthesize_macro(
        &self,
        grouped_indicators: HashMap<String, Vec<[String; 3]>>,
        analysis_focus: &str,
    ) -> Result<SynthesisResponse, ApiError> {
        let url = format!("{}/api/macro/synthesize", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&SynthesisRequest {
                grouped_indicators,
                analysis_focus: analysis_focus.to_string(),
            })
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Self::parse(response).await
    }

    /// Fetch the descriptive/valuation snapshot for a ticker
    pub async fn stock_overview(&self, ticker: &str) -> Result<StockOverview, ApiError> {
        let url = format!("{}/api/stock/{}/overview", self.base_url, ticker);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Self::parse(response).await
    }

    /// Fetch daily price history for a ticker
    pub async fn stock_history(
        &self,
        ticker: &str,
        period: &str,
        interval: &str,
    ) -> Result<Vec<PricePoint>, ApiError> {
        let url = format!("{}/api/stock/{}/history", self.base_url, ticker);
        let response = self
            .client
            .get(&url)
            .query(&[("period", period), ("interval", interval)])
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Self::parse(response).await
    }

    /// Fetch one financial statement for a ticker. `statement` is the
    /// backend path segment (`income`, `balance_sheet`, `cash_flow`).
    pub async fn stock_financials(
        &self,
        ticker: &str,
        statement: &str,
        source: &str,
    ) -> Result<Vec<FinancialPeriod>, ApiError> {
        let url = format!(
            "{}/api/stock/{}/financials/{}",
            self.base_url, ticker, statement
        );
        let response = self
            .client
            .get(&url)
            .query(&[("source", source)])
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Self::parse(response).await
    }
}

impl Default for MeridianClient {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Request types
// =============================================================================

#[derive(Debug, Serialize)]
pub struct NewsRequest {
    pub urls: Vec<String>,
    pub topic: String,
}

#[derive(Debug, Serialize)]
pub struct MacroSeriesRequest {
    pub series_id: String,
    pub label: String,
    pub years: u32,
}

#[derive(Debug, Serialize)]
pub struct SynthesisRequest {
    /// group name -> [label, series_id, unit] triples
    pub grouped_indicators: HashMap<String, Vec<[String; 3]>>,
    pub analysis_focus: String,
}

// =============================================================================
// Response types
// =============================================================================

#[derive(Debug, Deserialize, Clone)]
pub struct SynthesisResponse {
    pub conclusion: String,
}

/// One sample of a macro time series. Field names on the wire are
/// capitalized by the backend's DataFrame export.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct MacroPoint {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Value")]
    pub value: f64,
    #[serde(rename = "Series")]
    pub series: String,
}

/// Descriptive/valuation snapshot for a single equity ticker. The backend
/// passes through whatever the upstream provider knows, so everything
/// descriptive is optional.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct StockOverview {
    pub name: Option<String>,
    pub ticker: String,
    pub sector: Option<String>,
    pub industry: Option<String>,
    pub description: Option<String>,
    pub market_cap: Option<f64>,
    pub pe_ratio: Option<f64>,
    pub dividend_yield: Option<f64>,
    pub fifty_two_week_high: Option<f64>,
    pub fifty_two_week_low: Option<f64>,
    pub price: Option<f64>,
    pub currency: Option<String>,
    pub website: Option<String>,
}

impl StockOverview {
    /// Header line, e.g. "Apple Inc. (AAPL)"
    pub fn headline(&self) -> String {
        match &self.name {
            Some(name) => format!("{} ({})", name, self.ticker),
            None => self.ticker.clone(),
        }
    }
}

/// One day of price history
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PricePoint {
    pub date: String,
    pub open: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub close: f64,
    pub volume: Option<f64>,
}

/// One reporting period of a financial statement: a date plus a bag of
/// named metrics whose keys depend on the statement and source.
#[derive(Debug, Deserialize, Clone)]
pub struct FinancialPeriod {
    pub date: String,
    #[serde(flatten)]
    pub metrics: serde_json::Map<String, serde_json::Value>,
}

impl FinancialPeriod {
    /// Numeric metric lookup; nulls and non-numeric values read as None
    pub fn metric(&self, name: &str) -> Option<f64> {
        self.metrics.get(name).and_then(|v| v.as_f64())
    }
}
