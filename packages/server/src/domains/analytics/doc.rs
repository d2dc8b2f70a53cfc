// Flattened cross-platform view of a monitored record.
//
// Posts and news articles carry different field sets; the aggregation
// routines only need this common projection.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::common::{Platform, Sentiment, UNKNOWN_LABEL};
use crate::domains::news::NewsArticle;
use crate::domains::posts::Post;

#[derive(Debug, Clone, Serialize)]
pub struct DocSummary {
    pub id: Uuid,
    pub platform: Platform,
    pub username: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub region: Option<String>,
    pub topic: Option<String>,
    pub urgency: i32,
    pub sentiment: Sentiment,
    /// like_count for posts, engagement_rate for news.
    pub engagement: f64,
    pub link: Option<String>,
    pub keywords: Vec<String>,
}

impl DocSummary {
    pub fn topic_label(&self) -> &str {
        self.topic.as_deref().unwrap_or(UNKNOWN_LABEL)
    }

    pub fn region_label(&self) -> &str {
        self.region.as_deref().unwrap_or(UNKNOWN_LABEL)
    }
}

impl From<&Post> for DocSummary {
    fn from(post: &Post) -> Self {
        DocSummary {
            id: post.id,
            platform: Platform::Social,
            username: post.username.clone(),
            content: post.caption.clone(),
            created_at: post.created_at,
            region: post.region.clone(),
            topic: post.topic.clone(),
            urgency: post.urgency,
            sentiment: Sentiment::parse_opt(post.sentiment.as_deref()),
            engagement: post.like_count as f64,
            link: post.link.clone(),
            keywords: post.keywords.clone(),
        }
    }
}

impl From<&NewsArticle> for DocSummary {
    fn from(article: &NewsArticle) -> Self {
        DocSummary {
            id: article.id,
            platform: Platform::News,
            username: article
                .creator
                .clone()
                .unwrap_or_else(|| UNKNOWN_LABEL.to_string()),
            content: article.title.clone(),
            created_at: article.created_at,
            region: article.region.clone(),
            topic: article.topic.clone(),
            urgency: article.urgency,
            sentiment: Sentiment::parse_opt(article.sentiment.as_deref()),
            engagement: article.engagement_rate,
            link: article.url.clone(),
            keywords: article.keywords.clone(),
        }
    }
}
