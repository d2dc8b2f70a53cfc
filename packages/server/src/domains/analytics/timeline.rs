// Crisis timeline: high-urgency events across both sources, newest first.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::common::Sentiment;
use crate::domains::analytics::DocSummary;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CrisisEvent {
    pub title: String,
    pub urgency: i32,
    pub topic: String,
    pub sentiment: Sentiment,
    pub timestamp: DateTime<Utc>,
    pub platform: &'static str,
    pub region: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    pub engagement: f64,
    pub keywords: Vec<String>,
}

/// Project urgent records onto the timeline. `topic` of `None` or `"all"`
/// upstream means no topic filter; the caller resolves that before here.
pub fn crisis_timeline(
    docs: &[DocSummary],
    min_urgency: i32,
    topic: Option<&str>,
    limit: usize,
) -> Vec<CrisisEvent> {
    let mut events: Vec<CrisisEvent> = docs
        .iter()
        .filter(|doc| doc.urgency >= min_urgency)
        .filter(|doc| topic.is_none_or(|t| doc.topic_label() == t))
        .map(|doc| CrisisEvent {
            title: doc.content.clone(),
            urgency: doc.urgency,
            topic: doc.topic_label().to_string(),
            sentiment: doc.sentiment,
            timestamp: doc.created_at,
            platform: doc.platform.as_str(),
            region: doc.region_label().to_string(),
            link: doc.link.clone(),
            engagement: doc.engagement,
            keywords: doc.keywords.clone(),
        })
        .collect();

    events.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    events.truncate(limit);
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Platform;
    use chrono::Duration;
    use uuid::Uuid;

    fn doc(urgency: i32, topic: &str, age_hours: i64) -> DocSummary {
        DocSummary {
            id: Uuid::new_v4(),
            platform: Platform::News,
            username: "u".to_string(),
            content: format!("{topic} event"),
            created_at: Utc::now() - Duration::hours(age_hours),
            region: None,
            topic: Some(topic.to_string()),
            urgency,
            sentiment: Sentiment::Negative,
            engagement: 1.0,
            link: None,
            keywords: vec![],
        }
    }

    #[test]
    fn filters_by_urgency_and_topic_then_sorts_newest_first() {
        let docs = vec![
            doc(90, "flood", 5),
            doc(60, "flood", 1),
            doc(95, "crime", 2),
            doc(85, "flood", 0),
        ];
        let events = crisis_timeline(&docs, 70, Some("flood"), 50);
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].urgency, 85); // newest first, not highest first
        assert_eq!(events[1].urgency, 90);
    }

    #[test]
    fn limit_truncates() {
        let docs: Vec<DocSummary> = (0..10).map(|i| doc(80, "t", i)).collect();
        assert_eq!(crisis_timeline(&docs, 70, None, 3).len(), 3);
    }
}
