// Cross-platform urgency dashboard aggregation.
//
// The dashboard uses a four-way split (critical >= 80, high 61-79,
// medium 31-60, low < 31) that is distinct from the three-band search
// filter classification in `common::types`.

use serde::Serialize;

use crate::common::Sentiment;
use crate::domains::analytics::{DocSummary, OrderedGroups};

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UrgencyCounts {
    pub avg_urgency: i32,
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicUrgency {
    pub topic: String,
    pub avg_urgency: f64,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentUrgency {
    pub sentiment: &'static str,
    pub avg_urgency: f64,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceBreakdown {
    pub social: UrgencyCounts,
    pub news: UrgencyCounts,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UrgencyDashboard {
    pub overall: UrgencyCounts,
    pub by_topic: Vec<TopicUrgency>,
    pub by_sentiment: Vec<SentimentUrgency>,
    pub breakdown: SourceBreakdown,
}

/// Four-way urgency counts plus rounded average over a record set.
pub fn urgency_counts<'a, I>(docs: I) -> UrgencyCounts
where
    I: IntoIterator<Item = &'a DocSummary>,
{
    let mut counts = UrgencyCounts::default();
    let mut sum: i64 = 0;
    let mut total = 0usize;
    for doc in docs {
        sum += doc.urgency as i64;
        total += 1;
        match doc.urgency {
            u if u >= 80 => counts.critical += 1,
            u if u >= 61 => counts.high += 1,
            u if u >= 31 => counts.medium += 1,
            _ => counts.low += 1,
        }
    }
    if total > 0 {
        counts.avg_urgency = (sum as f64 / total as f64).round() as i32;
    }
    counts
}

/// Top topics by average urgency descending, capped at `top_n`.
pub fn urgency_by_topic(docs: &[&DocSummary], top_n: usize) -> Vec<TopicUrgency> {
    #[derive(Default)]
    struct Acc {
        sum: i64,
        count: usize,
    }
    let mut groups: OrderedGroups<Acc> = OrderedGroups::new();
    for doc in docs {
        let acc = groups.entry(doc.topic_label());
        acc.sum += doc.urgency as i64;
        acc.count += 1;
    }
    let mut topics: Vec<TopicUrgency> = groups
        .into_vec()
        .into_iter()
        .map(|(topic, acc)| TopicUrgency {
            topic,
            avg_urgency: acc.sum as f64 / acc.count as f64,
            count: acc.count,
        })
        .collect();
    topics.sort_by(|a, b| b.avg_urgency.total_cmp(&a.avg_urgency));
    topics.truncate(top_n);
    topics
}

/// Average urgency per sentiment label, in label order of first sight.
pub fn urgency_by_sentiment(docs: &[&DocSummary]) -> Vec<SentimentUrgency> {
    #[derive(Default)]
    struct Acc {
        sum: i64,
        count: usize,
        sentiment: Option<Sentiment>,
    }
    let mut groups: OrderedGroups<Acc> = OrderedGroups::new();
    for doc in docs {
        let acc = groups.entry(doc.sentiment.as_str());
        acc.sum += doc.urgency as i64;
        acc.count += 1;
        acc.sentiment.get_or_insert(doc.sentiment);
    }
    groups
        .into_vec()
        .into_iter()
        .map(|(_, acc)| SentimentUrgency {
            sentiment: acc.sentiment.unwrap_or(Sentiment::Neutral).as_str(),
            avg_urgency: acc.sum as f64 / acc.count as f64,
            count: acc.count,
        })
        .collect()
}

/// Full dashboard: overall and per-source counts, top-10 topics, sentiment
/// averages over the combined record set.
pub fn urgency_dashboard(social: &[DocSummary], news: &[DocSummary]) -> UrgencyDashboard {
    let combined: Vec<&DocSummary> = social.iter().chain(news.iter()).collect();
    UrgencyDashboard {
        overall: urgency_counts(combined.iter().copied()),
        by_topic: urgency_by_topic(&combined, 10),
        by_sentiment: urgency_by_sentiment(&combined),
        breakdown: SourceBreakdown {
            social: urgency_counts(social.iter()),
            news: urgency_counts(news.iter()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Platform;
    use chrono::Utc;
    use uuid::Uuid;

    fn doc(topic: &str, urgency: i32, sentiment: Sentiment) -> DocSummary {
        DocSummary {
            id: Uuid::new_v4(),
            platform: Platform::Social,
            username: "u".to_string(),
            content: String::new(),
            created_at: Utc::now(),
            region: None,
            topic: Some(topic.to_string()),
            urgency,
            sentiment,
            engagement: 0.0,
            link: None,
            keywords: vec![],
        }
    }

    #[test]
    fn four_way_split() {
        let docs = vec![
            doc("a", 85, Sentiment::Negative),
            doc("a", 70, Sentiment::Neutral),
            doc("b", 45, Sentiment::Neutral),
            doc("b", 10, Sentiment::Positive),
        ];
        let counts = urgency_counts(docs.iter());
        assert_eq!(counts.critical, 1);
        assert_eq!(counts.high, 1);
        assert_eq!(counts.medium, 1);
        assert_eq!(counts.low, 1);
        assert_eq!(counts.avg_urgency, 53);
    }

    #[test]
    fn topics_sorted_by_avg_urgency() {
        let docs = vec![
            doc("calm", 20, Sentiment::Neutral),
            doc("hot", 90, Sentiment::Negative),
            doc("hot", 80, Sentiment::Negative),
        ];
        let refs: Vec<&DocSummary> = docs.iter().collect();
        let topics = urgency_by_topic(&refs, 10);
        assert_eq!(topics[0].topic, "hot");
        assert_eq!(topics[0].count, 2);
        assert!((topics[0].avg_urgency - 85.0).abs() < f64::EPSILON);
    }

    #[test]
    fn dashboard_breakdown_separates_sources() {
        let social = vec![doc("a", 90, Sentiment::Negative)];
        let news = vec![doc("a", 10, Sentiment::Positive)];
        let dashboard = urgency_dashboard(&social, &news);
        assert_eq!(dashboard.breakdown.social.critical, 1);
        assert_eq!(dashboard.breakdown.news.low, 1);
        assert_eq!(dashboard.overall.avg_urgency, 50);
    }
}
