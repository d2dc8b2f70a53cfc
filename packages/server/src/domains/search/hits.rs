// Search hit envelope.
//
// Clients consume hits in the collector's document shape: an `_id` plus a
// `_source` payload whose field names follow the collector's schema
// (`post_caption`, `urgency_level`, `link_post`, ...).

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::domains::news::NewsArticle;
use crate::domains::posts::Post;

#[derive(Debug, Clone, Serialize)]
pub struct SearchHit {
    #[serde(rename = "_id")]
    pub id: Uuid,
    #[serde(rename = "_source")]
    pub source: HitSource,
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum HitSource {
    News(NewsHit),
    Post(PostHit),
}

#[derive(Debug, Clone, Serialize)]
pub struct NewsHit {
    pub title: String,
    pub description: Option<String>,
    pub link_post: Option<String>,
    pub post_created_at: DateTime<Utc>,
    pub sentiment: Option<String>,
    pub topic: Option<String>,
    pub urgency_level: i32,
    pub region: Option<String>,
    pub creator: Option<String>,
    pub engagement_rate: f64,
    pub contextual_keywords: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PostHit {
    pub post_caption: String,
    pub link_post: Option<String>,
    pub thumbnail_url: Option<String>,
    pub username: String,
    pub post_created_at: DateTime<Utc>,
    pub topic: Option<String>,
    pub sentiment: Option<String>,
    pub urgency_level: i32,
    pub region: Option<String>,
    pub like_count: i64,
    pub post_hashtags: Vec<String>,
    pub post_mentions: Vec<String>,
    pub contextual_keywords: Vec<String>,
    pub post_type: Option<String>,
}

impl From<&NewsArticle> for SearchHit {
    fn from(article: &NewsArticle) -> Self {
        SearchHit {
            id: article.id,
            source: HitSource::News(NewsHit {
                title: article.title.clone(),
                description: article.description.clone(),
                link_post: article.url.clone(),
                post_created_at: article.created_at,
                sentiment: article.sentiment.clone(),
                topic: article.topic.clone(),
                urgency_level: article.urgency,
                region: article.region.clone(),
                creator: article.creator.clone(),
                engagement_rate: article.engagement_rate,
                contextual_keywords: article.keywords.clone(),
            }),
        }
    }
}

impl From<&Post> for SearchHit {
    fn from(post: &Post) -> Self {
        SearchHit {
            id: post.id,
            source: HitSource::Post(PostHit {
                post_caption: post.caption.clone(),
                link_post: post.link.clone(),
                thumbnail_url: post.thumbnail_url.clone(),
                username: post.username.clone(),
                post_created_at: post.created_at,
                topic: post.topic.clone(),
                sentiment: post.sentiment.clone(),
                urgency_level: post.urgency,
                region: post.region.clone(),
                like_count: post.like_count,
                post_hashtags: post.hashtags.clone(),
                post_mentions: post.mentions.clone(),
                contextual_keywords: post.keywords.clone(),
                post_type: post.post_type.clone(),
            }),
        }
    }
}
