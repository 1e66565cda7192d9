//! Tests for the stock view's search policies and display helpers

use crate::api::{ApiError, PricePoint, StockOverview};
use crate::stock::*;

fn overview(ticker: &str, name: &str, price: f64) -> StockOverview {
    StockOverview {
        name: Some(name.to_string()),
        ticker: ticker.to_string(),
        price: Some(price),
        ..Default::default()
    }
}

fn year_of_history() -> Vec<PricePoint> {
    (0..252)
        .map(|i| PricePoint {
            date: format!("2024-{:02}-{:02}", (i / 21) % 12 + 1, i % 21 + 1),
            open: None,
            high: None,
            low: None,
            close: 150.0 + (i as f64) * 0.1,
            volume: None,
        })
        .collect()
}

// ============================================================================
// FAIL-TOGETHER PAIR
// ============================================================================

#[test]
fn test_search_outcome_both_succeed() {
    let result = search_outcome(
        Ok(overview("AAPL", "Apple Inc.", 190.0)),
        Ok(year_of_history()),
    );

    let (overview, history) = result.unwrap();
    assert_eq!(overview.headline(), "Apple Inc. (AAPL)");
    assert_eq!(format_price(overview.price), "$190.00");
    assert_eq!(history.len(), 252);
}

#[test]
fn test_search_outcome_overview_failure_discards_history() {
    let result = search_outcome(
        Err(ApiError::Server(404, "Stock not found".to_string())),
        Ok(year_of_history()),
    );

    assert_eq!(result.unwrap_err(), SEARCH_FAILED_MESSAGE);
}

#[test]
fn test_search_outcome_history_failure_discards_overview() {
    let result = search_outcome(
        Ok(overview("AAPL", "Apple Inc.", 190.0)),
        Err(ApiError::Network("timed out".to_string())),
    );

    assert_eq!(result.unwrap_err(), SEARCH_FAILED_MESSAGE);
}

#[test]
fn test_search_outcome_both_fail_single_message() {
    let result = search_outcome(
        Err(ApiError::Network("refused".to_string())),
        Err(ApiError::Network("refused".to_string())),
    );

    // One generic banner regardless of how many requests failed
    assert_eq!(result.unwrap_err(), SEARCH_FAILED_MESSAGE);
}

// ============================================================================
// INPUT NORMALIZATION + FORMATTING
// ============================================================================

#[test]
fn test_normalize_ticker() {
    assert_eq!(normalize_ticker(" aapl "), "AAPL");
    assert_eq!(normalize_ticker("brk.b"), "BRK.B");
    assert_eq!(normalize_ticker(""), "");
    assert_eq!(normalize_ticker("  "), "");
}

#[test]
fn test_format_price() {
    assert_eq!(format_price(Some(190.0)), "$190.00");
    assert_eq!(format_price(Some(0.5)), "$0.50");
    assert_eq!(format_price(None), "—");
}

// ============================================================================
// TABS + STATEMENTS
// ============================================================================

#[test]
fn test_stock_tab_defaults_to_overview() {
    assert_eq!(StockTab::default(), StockTab::Overview);
    assert_eq!(StockTab::all().len(), 3);
}

#[test]
fn test_statement_paths_match_backend_segments() {
    assert_eq!(StatementType::Income.path(), "income");
    assert_eq!(StatementType::BalanceSheet.path(), "balance_sheet");
    assert_eq!(StatementType::CashFlow.path(), "cash_flow");
}

#[test]
fn test_statement_default_is_income() {
    // The search-time financials fetch uses the default statement
    assert_eq!(StatementType::default(), StatementType::Income);
    assert!(StatementType::Income.key_metrics().contains(&"Total Revenue"));
    assert!(StatementType::Income.key_metrics().contains(&"Net Income"));
}

#[test]
fn test_each_statement_has_key_metrics() {
    for statement in StatementType::all() {
        assert!(!statement.key_metrics().is_empty());
    }
}

#[test]
fn test_no_financials_message_text() {
    assert_eq!(NO_FINANCIALS_MESSAGE, "No financial data available from this source.");
}
