//! Tests for search filter state and its query-parameter round trip.

use chrono::TimeZone;
use chrono::Utc;
use server_core::common::{DateRange, FilterState, Sentiment, UrgencyBand};

fn reparse(state: &FilterState) -> FilterState {
    let pairs = state.to_query_pairs();
    FilterState::from_query_pairs(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())))
}

#[test]
fn full_filter_round_trips_losslessly() {
    let state = FilterState {
        date_range: Some(DateRange {
            from: Utc.with_ymd_and_hms(2025, 8, 1, 0, 0, 0).unwrap(),
            to: Utc.with_ymd_and_hms(2025, 8, 18, 23, 59, 59).unwrap(),
        }),
        categories: vec![
            "Environment and Disaster".to_string(),
            "Transportation".to_string(),
        ],
        urgency_level: vec![UrgencyBand::High, UrgencyBand::Medium],
        sentiment: vec![Sentiment::Negative, Sentiment::Neutral],
        region: vec!["Jakarta Utara".to_string()],
    };

    assert_eq!(reparse(&state), state);
}

#[test]
fn empty_filter_round_trips_to_empty() {
    let state = FilterState::default();
    assert!(state.is_empty());
    assert_eq!(reparse(&state), state);
}

#[test]
fn unknown_keys_are_ignored() {
    let state = FilterState::from_query_pairs([
        ("category", "Economy"),
        ("bogus", "value"),
        ("urgency", "High"),
    ]);
    assert_eq!(state.categories, vec!["Economy".to_string()]);
    assert_eq!(state.urgency_level, vec![UrgencyBand::High]);
}
