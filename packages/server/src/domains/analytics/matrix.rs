// Topic matrix: per-topic urgency/frequency bubbles with quadrant tags.

use serde::Serialize;

use crate::common::{Platform, Sentiment};
use crate::domains::analytics::{DocSummary, OrderedGroups};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicBubble {
    pub topic: String,
    pub urgency: i32,
    pub frequency: usize,
    pub engagement: i64,
    pub sentiment: &'static str,
    pub platforms: Vec<&'static str>,
    pub quadrant: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatrixStats {
    pub total_topics: usize,
    pub avg_urgency: i32,
    pub avg_frequency: i32,
    pub critical_topics: usize,
    pub high_priority_topics: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatrixThresholds {
    pub urgency: ThresholdPair,
    pub frequency: ThresholdPair,
}

#[derive(Debug, Clone, Serialize)]
pub struct ThresholdPair {
    pub high: i64,
    pub medium: i64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicMatrix {
    pub bubbles: Vec<TopicBubble>,
    pub stats: MatrixStats,
    pub thresholds: MatrixThresholds,
}

#[derive(Default)]
struct TopicAcc {
    urgency_sum: f64,
    engagement_sum: f64,
    frequency: usize,
    sentiments: [usize; 3],
    social: bool,
    news: bool,
}

/// Classify a bubble by urgency against 60 and frequency against
/// max(2, topics/4).
fn quadrant(urgency: f64, frequency: usize, total_topics: usize) -> &'static str {
    let urgency_threshold = 60.0;
    let frequency_threshold = if total_topics > 0 {
        (total_topics as f64 / 4.0).max(2.0)
    } else {
        2.0
    };
    match (
        urgency >= urgency_threshold,
        frequency as f64 >= frequency_threshold,
    ) {
        (true, true) => "critical",
        (true, false) => "monitor",
        (false, true) => "trending",
        (false, false) => "routine",
    }
}

/// Fold both sources into per-topic bubbles. Records without a topic are
/// skipped; averages are frequency-weighted across sources.
pub fn topic_matrix(docs: &[DocSummary]) -> TopicMatrix {
    let mut groups: OrderedGroups<TopicAcc> = OrderedGroups::new();
    for doc in docs {
        let Some(topic) = doc.topic.as_deref() else {
            continue;
        };
        let acc = groups.entry(topic);
        acc.urgency_sum += doc.urgency as f64;
        acc.engagement_sum += doc.engagement;
        acc.frequency += 1;
        match doc.sentiment {
            Sentiment::Positive => acc.sentiments[0] += 1,
            Sentiment::Neutral => acc.sentiments[1] += 1,
            Sentiment::Negative => acc.sentiments[2] += 1,
        }
        match doc.platform {
            Platform::Social => acc.social = true,
            Platform::News => acc.news = true,
        }
    }

    let total_topics = groups.len();
    let bubbles: Vec<TopicBubble> = groups
        .into_vec()
        .into_iter()
        .map(|(topic, acc)| {
            let avg_urgency = acc.urgency_sum / acc.frequency as f64;
            let dominant = match acc
                .sentiments
                .iter()
                .enumerate()
                .max_by_key(|(_, count)| **count)
                .map(|(index, _)| index)
            {
                Some(0) => "Positive",
                Some(2) => "Negative",
                _ => "Neutral",
            };
            let mut platforms = Vec::new();
            if acc.news {
                platforms.push(Platform::News.as_str());
            }
            if acc.social {
                platforms.push(Platform::Social.as_str());
            }
            TopicBubble {
                quadrant: quadrant(avg_urgency, acc.frequency, total_topics),
                topic,
                urgency: avg_urgency.round() as i32,
                frequency: acc.frequency,
                engagement: (acc.engagement_sum / acc.frequency as f64).round() as i64,
                sentiment: dominant,
                platforms,
            }
        })
        .collect();

    let total = bubbles.len();
    let avg_urgency = if total > 0 {
        (bubbles.iter().map(|b| b.urgency as f64).sum::<f64>() / total as f64).round() as i32
    } else {
        0
    };
    let avg_frequency = if total > 0 {
        (bubbles.iter().map(|b| b.frequency as f64).sum::<f64>() / total as f64).round() as i32
    } else {
        0
    };
    let stats = MatrixStats {
        total_topics: total,
        avg_urgency,
        avg_frequency,
        critical_topics: bubbles.iter().filter(|b| b.urgency >= 80).count(),
        high_priority_topics: bubbles
            .iter()
            .filter(|b| b.urgency >= 61 && b.urgency < 80)
            .count(),
    };
    let thresholds = MatrixThresholds {
        urgency: ThresholdPair {
            high: 70,
            medium: 50,
        },
        frequency: ThresholdPair {
            high: (stats.avg_frequency as f64 * 1.5).ceil() as i64,
            medium: stats.avg_frequency as i64,
        },
    };

    TopicMatrix {
        bubbles,
        stats,
        thresholds,
    }
}
