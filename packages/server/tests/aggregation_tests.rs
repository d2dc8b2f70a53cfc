//! Tests for the aggregation routines over collected records.

use chrono::{Duration, Utc};
use server_core::common::UrgencyBand;
use server_core::domains::analytics::topics::rollup_topics;
use server_core::domains::engagement::ChatLog;
use uuid::Uuid;

fn log(topic: &str, urgency: i32, sentiment: &str) -> ChatLog {
    ChatLog {
        id: Uuid::new_v4(),
        user_id: "u-1".to_string(),
        username: Some("warga".to_string()),
        message_text: "laporan".to_string(),
        bot_response: Some("diterima".to_string()),
        response_time_ms: 1000,
        created_at: Utc::now() - Duration::hours(1),
        region: Some("Jakarta Pusat".to_string()),
        topic: Some(topic.to_string()),
        urgency,
        sentiment: Some(sentiment.to_string()),
    }
}

#[test]
fn one_record_per_band_classifies_one_each() {
    let bands: Vec<UrgencyBand> = [85, 60, 30]
        .iter()
        .map(|&urgency| UrgencyBand::classify(urgency))
        .collect();
    assert_eq!(
        bands,
        vec![UrgencyBand::High, UrgencyBand::Medium, UrgencyBand::Low]
    );
}

#[test]
fn top_n_truncation_keeps_count_order_with_first_seen_tie_break() {
    // 20 topics, each with a single log: all tie on count, so the first
    // five seen must survive the cut in their original order.
    let logs: Vec<ChatLog> = (0..20).map(|i| log(&format!("t{i}"), 50, "Neutral")).collect();

    let rollup = rollup_topics(&logs, 5);
    assert_eq!(rollup.len(), 5);
    let names: Vec<&str> = rollup.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["t0", "t1", "t2", "t3", "t4"]);
}

#[test]
fn higher_counts_rank_ahead_of_earlier_topics() {
    let mut logs = vec![log("first", 50, "Neutral")];
    logs.push(log("second", 80, "Negative"));
    logs.push(log("second", 90, "Negative"));

    let rollup = rollup_topics(&logs, 10);
    assert_eq!(rollup[0].name, "second");
    assert_eq!(rollup[0].count, 2);
}
