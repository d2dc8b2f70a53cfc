// Per-source dashboard metrics.
//
// The dashboard endpoint serves one source at a time; news and social have
// different metric panels so they get separate summary structs. Metrics are
// computed over the full record set, content is paginated separately.

use serde::Serialize;

use crate::common::Sentiment;
use crate::domains::analytics::OrderedGroups;
use crate::domains::news::NewsArticle;
use crate::domains::posts::Post;

const URGENT_THRESHOLD: i32 = 80;

/// Topics counted as government mentions in news metrics.
const GOVERNMENT_TOPICS: [&str; 2] = [
    "Government and Public Policy",
    "Politics & Public Policy",
];

#[derive(Debug, Clone, Serialize)]
pub struct TopicShare {
    pub topic: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsMetrics {
    pub total_articles: usize,
    pub urgent_articles: usize,
    pub government_mentions: usize,
    pub public_sentiment: f64,
    pub regional_impact: usize,
    pub topic_distribution: Vec<TopicShare>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialMetrics {
    pub total_posts: usize,
    pub urgent_posts: usize,
    pub total_engagements: i64,
    pub citizen_reach: i64,
    pub active_discussions: usize,
    pub public_response: f64,
    pub avg_engagement_rate: f64,
}

pub fn news_metrics(articles: &[NewsArticle]) -> NewsMetrics {
    let total = articles.len();
    let urgent = articles
        .iter()
        .filter(|a| a.urgency >= URGENT_THRESHOLD)
        .count();
    let government = articles
        .iter()
        .filter(|a| {
            a.topic
                .as_deref()
                .is_some_and(|topic| GOVERNMENT_TOPICS.contains(&topic))
        })
        .count();
    let positive = articles
        .iter()
        .filter(|a| Sentiment::parse_opt(a.sentiment.as_deref()) == Sentiment::Positive)
        .count();
    let regional = articles
        .iter()
        .filter(|a| a.region.as_deref() == Some("DKI Jakarta"))
        .count();

    let mut topics: OrderedGroups<usize> = OrderedGroups::new();
    for article in articles {
        *topics.entry(article.topic.as_deref().unwrap_or("Unknown")) += 1;
    }
    let topic_distribution = topics
        .into_vec()
        .into_iter()
        .map(|(topic, count)| TopicShare { topic, count })
        .collect();

    NewsMetrics {
        total_articles: total,
        urgent_articles: urgent,
        government_mentions: government,
        public_sentiment: if total > 0 {
            (positive as f64 / total as f64) * 100.0
        } else {
            0.0
        },
        regional_impact: regional,
        topic_distribution,
    }
}

pub fn social_metrics(posts: &[Post]) -> SocialMetrics {
    let total = posts.len();
    let urgent = posts
        .iter()
        .filter(|p| p.urgency >= URGENT_THRESHOLD)
        .count();
    let total_engagements: i64 = posts.iter().map(|p| p.like_count).sum();
    let active_discussions = posts.iter().filter(|p| p.like_count > 10).count();
    let positive = posts
        .iter()
        .filter(|p| Sentiment::parse_opt(p.sentiment.as_deref()) == Sentiment::Positive)
        .count();

    SocialMetrics {
        total_posts: total,
        urgent_posts: urgent,
        total_engagements,
        // like_count doubles as the reach proxy until impressions land.
        citizen_reach: total_engagements,
        active_discussions,
        public_response: if total > 0 {
            (positive as f64 / total as f64) * 100.0
        } else {
            0.0
        },
        avg_engagement_rate: if total > 0 {
            total_engagements as f64 / total as f64
        } else {
            0.0
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn article(urgency: i32, topic: &str, sentiment: &str, region: &str) -> NewsArticle {
        NewsArticle {
            id: Uuid::new_v4(),
            title: "judul".to_string(),
            description: None,
            content: None,
            creator: None,
            url: None,
            keywords: vec![],
            created_at: Utc::now(),
            region: Some(region.to_string()),
            topic: Some(topic.to_string()),
            urgency,
            sentiment: Some(sentiment.to_string()),
            engagement_rate: 0.0,
        }
    }

    fn post(urgency: i32, like_count: i64, sentiment: &str) -> Post {
        Post {
            id: Uuid::new_v4(),
            username: "warga".to_string(),
            caption: "laporan".to_string(),
            hashtags: vec![],
            mentions: vec![],
            keywords: vec![],
            created_at: Utc::now(),
            region: None,
            topic: None,
            urgency,
            sentiment: Some(sentiment.to_string()),
            like_count,
            link: None,
            thumbnail_url: None,
            post_type: None,
        }
    }

    #[test]
    fn news_metrics_counts() {
        let articles = vec![
            article(85, "Government and Public Policy", "Positive", "DKI Jakarta"),
            article(40, "Transportasi", "Negative", "Jakarta Barat"),
            article(90, "Politics & Public Policy", "Neutral", "DKI Jakarta"),
            article(10, "Transportasi", "Positive", "DKI Jakarta"),
        ];
        let metrics = news_metrics(&articles);
        assert_eq!(metrics.total_articles, 4);
        assert_eq!(metrics.urgent_articles, 2);
        assert_eq!(metrics.government_mentions, 2);
        assert_eq!(metrics.regional_impact, 3);
        assert_eq!(metrics.public_sentiment, 50.0);
        let transport = metrics
            .topic_distribution
            .iter()
            .find(|t| t.topic == "Transportasi")
            .unwrap();
        assert_eq!(transport.count, 2);
    }

    #[test]
    fn social_metrics_counts() {
        let posts = vec![
            post(85, 500, "Positive"),
            post(20, 5, "Negative"),
            post(60, 50, "Neutral"),
        ];
        let metrics = social_metrics(&posts);
        assert_eq!(metrics.total_posts, 3);
        assert_eq!(metrics.urgent_posts, 1);
        assert_eq!(metrics.total_engagements, 555);
        assert_eq!(metrics.citizen_reach, 555);
        assert_eq!(metrics.active_discussions, 2);
        assert_eq!(metrics.avg_engagement_rate, 185.0);
    }

    #[test]
    fn empty_sets_do_not_divide_by_zero() {
        assert_eq!(news_metrics(&[]).public_sentiment, 0.0);
        assert_eq!(social_metrics(&[]).avg_engagement_rate, 0.0);
    }
}
