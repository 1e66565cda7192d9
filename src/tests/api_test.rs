//! Unit tests for the API client module
//!
//! Covers client construction, request serialization, response parsing,
//! and error display.

use crate::api::*;
use std::collections::HashMap;

// ============================================================================
// CLIENT CONSTRUCTION
// ============================================================================

#[test]
fn test_client_default_base_url() {
    let client = MeridianClient::new();
    assert_eq!(client.base_url(), "http://localhost:8000");
}

#[test]
fn test_client_with_custom_url() {
    let client = MeridianClient::with_url("http://backend:9000".to_string());
    assert_eq!(client.base_url(), "http://backend:9000");
}

#[test]
fn test_client_new_shared() {
    let client = MeridianClient::new_shared();
    assert_eq!(std::sync::Arc::strong_count(&client), 1);
}

// ============================================================================
// REQUEST SERIALIZATION
// ============================================================================

#[test]
fn test_news_request_serialization() {
    let request = NewsRequest {
        urls: vec![
            "https://www.cnbc.com/market-insider/".to_string(),
            "https://finance.yahoo.com/topic/stock-market-news/".to_string(),
        ],
        topic: "Market Open & Key Movers".to_string(),
    };

    let json: serde_json::Value = serde_json::to_value(&request).unwrap();
    assert_eq!(json["urls"].as_array().unwrap().len(), 2);
    assert_eq!(json["topic"], "Market Open & Key Movers");
}

#[test]
fn test_macro_series_request_serialization() {
    let request = MacroSeriesRequest {
        series_id: "FEDFUNDS".to_string(),
        label: "Federal Funds Rate (Current)".to_string(),
        years: 5,
    };

    let json: serde_json::Value = serde_json::to_value(&request).unwrap();
    assert_eq!(json["series_id"], "FEDFUNDS");
    assert_eq!(json["label"], "Federal Funds Rate (Current)");
    assert_eq!(json["years"], 5);
}

#[test]
fn test_synthesis_request_serialization() {
    let mut grouped = HashMap::new();
    grouped.insert(
        "Monetary".to_string(),
        vec![[
            "Federal Funds Rate (Current)".to_string(),
            "FEDFUNDS".to_string(),
            "Percent".to_string(),
        ]],
    );

    let request = SynthesisRequest {
        grouped_indicators: grouped,
        analysis_focus: "recession risk".to_string(),
    };

    let json: serde_json::Value = serde_json::to_value(&request).unwrap();
    let triple = &json["grouped_indicators"]["Monetary"][0];
    assert_eq!(triple[0], "Federal Funds Rate (Current)");
    assert_eq!(triple[1], "FEDFUNDS");
    assert_eq!(triple[2], "Percent");
    assert_eq!(json["analysis_focus"], "recession risk");
}

// ============================================================================
// RESPONSE PARSING
// ============================================================================

#[test]
fn test_stock_overview_parsing() {
    let json_str = r#"{
        "name": "Apple Inc.",
        "ticker": "AAPL",
        "sector": "Technology",
        "industry": "Consumer Electronics",
        "description": "Apple designs smartphones.",
        "market_cap": 2950000000000.0,
        "pe_ratio": 29.5,
        "dividend_yield": 0.0055,
        "fifty_two_week_high": 199.62,
        "fifty_two_week_low": 124.17,
        "price": 190.0,
        "currency": "USD",
        "website": "https://www.apple.com"
    }"#;
    let overview: StockOverview = serde_json::from_str(json_str).unwrap();

    assert_eq!(overview.ticker, "AAPL");
    assert_eq!(overview.headline(), "Apple Inc. (AAPL)");
    assert!((overview.price.unwrap() - 190.0).abs() < f64::EPSILON);
    assert!((overview.market_cap.unwrap() - 2.95e12).abs() < 1.0);
}

#[test]
fn test_stock_overview_null_fields() {
    // The backend passes provider nulls through untouched
    let json_str = r#"{
        "name": null,
        "ticker": "XYZ",
        "sector": null,
        "industry": null,
        "description": null,
        "market_cap": null,
        "pe_ratio": null,
        "dividend_yield": null,
        "fifty_two_week_high": null,
        "fifty_two_week_low": null,
        "price": null,
        "currency": "USD",
        "website": null
    }"#;
    let overview: StockOverview = serde_json::from_str(json_str).unwrap();

    assert_eq!(overview.headline(), "XYZ");
    assert!(overview.price.is_none());
    assert!(overview.pe_ratio.is_none());
}

#[test]
fn test_price_point_parsing() {
    let json_str = r#"[
        {"date": "2024-01-02", "open": 187.15, "high": 188.44, "low": 183.89, "close": 185.64, "volume": 82488700.0},
        {"date": "2024-01-03", "open": 184.22, "high": 185.88, "low": 183.43, "close": 184.25, "volume": 58414500.0}
    ]"#;
    let history: Vec<PricePoint> = serde_json::from_str(json_str).unwrap();

    assert_eq!(history.len(), 2);
    assert_eq!(history[0].date, "2024-01-02");
    assert!((history[1].close - 184.25).abs() < f64::EPSILON);
}

#[test]
fn test_macro_point_wire_field_names() {
    // DataFrame export capitalizes the keys
    let json_str = r#"[{"Date": "2020-03-01", "Value": 0.65, "Series": "Federal Funds Rate (Current)"}]"#;
    let points: Vec<MacroPoint> = serde_json::from_str(json_str).unwrap();

    assert_eq!(points[0].date, "2020-03-01");
    assert!((points[0].value - 0.65).abs() < f64::EPSILON);
    assert_eq!(points[0].series, "Federal Funds Rate (Current)");
}

#[test]
fn test_financial_period_flattened_metrics() {
    let json_str = r#"{
        "date": "2023-12-31",
        "Total Revenue": 383285000000.0,
        "Net Income": 96995000000.0,
        "Operating Income": null
    }"#;
    let period: FinancialPeriod = serde_json::from_str(json_str).unwrap();

    assert_eq!(period.date, "2023-12-31");
    assert!((period.metric("Total Revenue").unwrap() - 3.83285e11).abs() < 1.0);
    assert!(period.metric("Operating Income").is_none());
    assert!(period.metric("Gross Profit").is_none());
}

#[test]
fn test_news_summary_response_shape() {
    // Flat map: URL -> summary text, plus a timestamp entry
    let json_str = r#"{
        "https://www.cnbc.com/market-insider/": "- Futures point higher",
        "timestamp": "2025-03-14 08:30:00"
    }"#;
    let map: HashMap<String, String> = serde_json::from_str(json_str).unwrap();

    assert_eq!(map.len(), 2);
    assert_eq!(map["timestamp"], "2025-03-14 08:30:00");
}

#[test]
fn test_synthesis_response_parsing() {
    let json_str = r#"{"conclusion": "**Summary of Key Trends:** rates remain restrictive."}"#;
    let response: SynthesisResponse = serde_json::from_str(json_str).unwrap();

    assert!(response.conclusion.contains("Key Trends"));
}

// ============================================================================
// API ERRORS
// ============================================================================

#[test]
fn test_api_error_display() {
    let network = ApiError::Network("connection refused".to_string());
    assert!(network.to_string().contains("connection refused"));

    let parse = ApiError::Parse("expected value".to_string());
    assert!(parse.to_string().contains("parse"));

    let server = ApiError::Server(404, "Stock not found".to_string());
    let rendered = server.to_string();
    assert!(rendered.contains("404"));
    assert!(rendered.contains("Stock not found"));
}

#[test]
fn test_api_error_equality() {
    assert_eq!(
        ApiError::Server(500, "boom".to_string()),
        ApiError::Server(500, "boom".to_string())
    );
    assert_ne!(
        ApiError::Network("a".to_string()),
        ApiError::Parse("a".to_string())
    );
}
