// Topic rollup over recent chat interactions.

use serde::Serialize;

use crate::common::Sentiment;
use crate::domains::analytics::OrderedGroups;
use crate::domains::engagement::ChatLog;

/// One topic bucket: interaction count, rounded average urgency, and a
/// weighted 0-100 sentiment score rendered with two decimals.
#[derive(Debug, Clone, Serialize)]
pub struct TopicRollup {
    pub name: String,
    pub count: usize,
    pub urgency: i32,
    pub sentiment: String,
}

#[derive(Default)]
struct TopicAcc {
    count: usize,
    urgency_sum: i64,
    sentiment_score_sum: u64,
}

/// Group chat logs by topic, sort by count descending (first-seen order
/// breaks ties), and keep the top `top_n`.
pub fn rollup_topics(logs: &[ChatLog], top_n: usize) -> Vec<TopicRollup> {
    let mut groups: OrderedGroups<TopicAcc> = OrderedGroups::new();
    for log in logs {
        let topic = log.topic.as_deref().unwrap_or(crate::common::UNKNOWN_LABEL);
        let acc = groups.entry(topic);
        acc.count += 1;
        acc.urgency_sum += log.urgency as i64;
        acc.sentiment_score_sum +=
            Sentiment::parse_opt(log.sentiment.as_deref()).score() as u64;
    }

    let mut rollups: Vec<TopicRollup> = groups
        .into_vec()
        .into_iter()
        .map(|(name, acc)| TopicRollup {
            name,
            count: acc.count,
            urgency: (acc.urgency_sum as f64 / acc.count as f64).round() as i32,
            sentiment: format!(
                "{:.2}",
                acc.sentiment_score_sum as f64 / acc.count as f64
            ),
        })
        .collect();

    rollups.sort_by(|a, b| b.count.cmp(&a.count));
    rollups.truncate(top_n);
    rollups
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn log(topic: &str, urgency: i32, sentiment: &str) -> ChatLog {
        ChatLog {
            id: Uuid::new_v4(),
            user_id: "u".to_string(),
            username: None,
            message_text: String::new(),
            bot_response: None,
            response_time_ms: 0,
            created_at: Utc::now(),
            region: None,
            topic: Some(topic.to_string()),
            urgency,
            sentiment: Some(sentiment.to_string()),
        }
    }

    #[test]
    fn rollup_averages_and_scores() {
        let logs = vec![
            log("Flooding", 80, "Negative"),
            log("Flooding", 60, "Neutral"),
            log("Transit", 40, "Positive"),
        ];
        let rollups = rollup_topics(&logs, 9);
        assert_eq!(rollups[0].name, "Flooding");
        assert_eq!(rollups[0].count, 2);
        assert_eq!(rollups[0].urgency, 70);
        assert_eq!(rollups[0].sentiment, "25.00");
        assert_eq!(rollups[1].sentiment, "100.00");
    }

    #[test]
    fn top_n_truncation_with_first_seen_tie_break() {
        // 20 distinct topics, one log each: all tie on count, so the first
        // five seen must survive a limit of 5 in order.
        let logs: Vec<ChatLog> = (0..20).map(|i| log(&format!("t{i}"), 50, "Neutral")).collect();
        let rollups = rollup_topics(&logs, 5);
        assert_eq!(rollups.len(), 5);
        let names: Vec<&str> = rollups.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["t0", "t1", "t2", "t3", "t4"]);
    }

    #[test]
    fn missing_topic_buckets_to_unknown() {
        let mut orphan = log("x", 10, "Neutral");
        orphan.topic = None;
        let rollups = rollup_topics(&[orphan], 9);
        assert_eq!(rollups[0].name, "Unknown");
    }
}
