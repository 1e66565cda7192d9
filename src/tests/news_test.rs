//! Tests for briefing input parsing and response reassembly

use crate::news::*;
use std::collections::HashMap;

// ============================================================================
// URL PARSING
// ============================================================================

#[test]
fn test_parse_url_lines_trims_and_drops_blanks() {
    let input = "https://www.cnbc.com/market-insider/\n\n  https://finance.yahoo.com/topic/stock-market-news/  \n";
    let urls = parse_url_lines(input);

    assert_eq!(
        urls,
        vec![
            "https://www.cnbc.com/market-insider/".to_string(),
            "https://finance.yahoo.com/topic/stock-market-news/".to_string(),
        ]
    );
}

#[test]
fn test_parse_url_lines_drops_duplicates_preserving_order() {
    let input = "https://a.com\nhttps://b.com\nhttps://a.com";
    let urls = parse_url_lines(input);

    assert_eq!(urls, vec!["https://a.com", "https://b.com"]);
}

#[test]
fn test_parse_url_lines_whitespace_only_input() {
    assert!(parse_url_lines("\n  \n\t\n").is_empty());
}

// ============================================================================
// SOURCE NAMES
// ============================================================================

#[test]
fn test_source_name_strips_scheme_www_and_tld() {
    assert_eq!(source_name("https://www.cnbc.com/market-insider/"), "CNBC");
    assert_eq!(
        source_name("https://finance.yahoo.com/topic/stock-market-news/"),
        "FINANCE.YAHOO"
    );
}

#[test]
fn test_source_name_degenerate_inputs() {
    assert_eq!(source_name("http://localhost/news"), "LOCALHOST");
    assert_eq!(source_name(""), "SOURCE");
}

// ============================================================================
// BRIEFING REASSEMBLY
// ============================================================================

#[test]
fn test_briefing_one_entry_per_url_plus_timestamp() {
    let requested = vec![
        "https://a.com".to_string(),
        "https://b.com".to_string(),
    ];
    let mut map = HashMap::new();
    map.insert("https://a.com".to_string(), "- Story A".to_string());
    map.insert("https://b.com".to_string(), "- Story B".to_string());
    map.insert("timestamp".to_string(), "2025-03-14 08:30:00".to_string());

    let briefing = Briefing::from_response(&requested, map);

    assert_eq!(briefing.timestamp.as_deref(), Some("2025-03-14 08:30:00"));
    assert_eq!(briefing.items.len(), 2);
    // Cards render in request order, not map order
    assert_eq!(briefing.items[0].0, "https://a.com");
    assert_eq!(briefing.items[1].0, "https://b.com");
}

#[test]
fn test_briefing_skips_urls_the_backend_dropped() {
    let requested = vec![
        "https://a.com".to_string(),
        "https://b.com".to_string(),
    ];
    let mut map = HashMap::new();
    map.insert("https://b.com".to_string(), "- Story B".to_string());
    map.insert("timestamp".to_string(), "2025-03-14 08:30:00".to_string());

    let briefing = Briefing::from_response(&requested, map);

    assert_eq!(briefing.items.len(), 1);
    assert_eq!(briefing.items[0].0, "https://b.com");
}

#[test]
fn test_briefing_without_timestamp() {
    let requested = vec!["https://a.com".to_string()];
    let mut map = HashMap::new();
    map.insert("https://a.com".to_string(), "- Story A".to_string());

    let briefing = Briefing::from_response(&requested, map);

    assert!(briefing.timestamp.is_none());
    assert_eq!(briefing.items.len(), 1);
}

#[test]
fn test_request_sent_with_exactly_the_non_blank_urls() {
    // Two lines and a blank line: the request carries exactly two URLs
    let input = "https://a.com\n\nhttps://b.com";
    let urls = parse_url_lines(input);

    assert_eq!(urls.len(), 2);
    assert!(!urls.iter().any(|u| u.is_empty()));
}
