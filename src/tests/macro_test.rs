//! Tests for the indicator catalog and synthesis payload

use crate::macro_view::*;
use std::collections::HashSet;

// ============================================================================
// CATALOG INTEGRITY
// ============================================================================

#[test]
fn test_catalog_has_three_groups() {
    assert_eq!(INDICATOR_GROUPS.len(), 3);
    assert!(INDICATOR_GROUPS[0].0.contains("Leading"));
    assert!(INDICATOR_GROUPS[1].0.contains("Monetary"));
    assert!(INDICATOR_GROUPS[2].0.contains("Lagging"));
}

#[test]
fn test_no_group_is_empty() {
    for (group, indicators) in INDICATOR_GROUPS {
        assert!(!indicators.is_empty(), "group {} is empty", group);
    }
}

#[test]
fn test_series_ids_are_unique() {
    let mut seen = HashSet::new();
    for (_, indicators) in INDICATOR_GROUPS {
        for indicator in *indicators {
            assert!(
                seen.insert(indicator.series_id),
                "duplicate series id {}",
                indicator.series_id
            );
        }
    }
}

#[test]
fn test_known_series_present() {
    let ids: Vec<&str> = INDICATOR_GROUPS
        .iter()
        .flat_map(|(_, indicators)| indicators.iter().map(|i| i.series_id))
        .collect();

    for expected in ["FEDFUNDS", "DGS10", "UNRATE", "SP500", "CPILFESL"] {
        assert!(ids.contains(&expected), "missing series {}", expected);
    }
}

// ============================================================================
// SYNTHESIS PAYLOAD
// ============================================================================

#[test]
fn test_grouped_payload_covers_every_indicator() {
    let payload = grouped_payload();

    assert_eq!(payload.len(), INDICATOR_GROUPS.len());
    for (group, indicators) in INDICATOR_GROUPS {
        let triples = payload.get(*group).expect("missing group");
        assert_eq!(triples.len(), indicators.len());
    }
}

#[test]
fn test_grouped_payload_triple_order_is_label_id_unit() {
    let payload = grouped_payload();
    let (group, indicators) = INDICATOR_GROUPS[1];
    let triples = &payload[group];

    assert_eq!(triples[0][0], indicators[0].label);
    assert_eq!(triples[0][1], indicators[0].series_id);
    assert_eq!(triples[0][2], indicators[0].unit);
}

// ============================================================================
// YEAR RANGES
// ============================================================================

#[test]
fn test_year_range_default_is_five() {
    assert_eq!(YearRange::default(), YearRange::Five);
    assert_eq!(YearRange::default().years(), 5);
}

#[test]
fn test_year_range_values_ascend() {
    let years: Vec<u32> = YearRange::all().iter().map(|r| r.years()).collect();
    let mut sorted = years.clone();
    sorted.sort_unstable();

    assert_eq!(years, sorted);
    assert_eq!(*years.first().unwrap(), 1);
    assert_eq!(*years.last().unwrap(), 50);
}

#[test]
fn test_year_range_labels() {
    assert_eq!(YearRange::One.label(), "1Y");
    assert_eq!(YearRange::Fifty.label(), "50Y");
}
