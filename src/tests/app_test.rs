//! Tests for application-level state types

use crate::app::{ActiveView, LoadingState};

// ============================================================================
// LOADING STATE
// ============================================================================

#[test]
fn test_loading_state_default_is_not_started() {
    let state: LoadingState<Vec<String>> = LoadingState::default();
    assert_eq!(state, LoadingState::NotStarted);
    assert!(!state.is_loading());
    assert!(!state.is_loaded());
    assert!(!state.is_error());
}

#[test]
fn test_loading_state_predicates() {
    let loading: LoadingState<()> = LoadingState::Loading;
    assert!(loading.is_loading());

    let loaded = LoadingState::Loaded(3u32);
    assert!(loaded.is_loaded());
    assert_eq!(loaded.as_loaded(), Some(&3));

    let error: LoadingState<u32> = LoadingState::Error("boom".to_string());
    assert!(error.is_error());
    assert_eq!(error.as_loaded(), None);
}

#[test]
fn test_loading_state_error_replaces_data() {
    // A refetch that fails must not leave stale Loaded data behind
    let mut state = LoadingState::Loaded(vec![1, 2, 3]);
    state = LoadingState::Loading;
    assert_eq!(state.as_loaded(), None);
    state = LoadingState::Error("gone".to_string());
    assert!(state.is_error());
}

// ============================================================================
// NAVIGATION
// ============================================================================

#[test]
fn test_default_view_is_briefing() {
    assert_eq!(ActiveView::default(), ActiveView::Briefing);
}

#[test]
fn test_all_views_have_distinct_labels() {
    let labels: Vec<&str> = ActiveView::all().iter().map(|v| v.label()).collect();
    let mut deduped = labels.clone();
    deduped.dedup();

    assert_eq!(labels.len(), 3);
    assert_eq!(labels, deduped);
}
