use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// A collected social post. Records are ingested by an external collector;
/// this service only reads them.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Post {
    pub id: Uuid,
    pub username: String,
    pub caption: String,
    pub hashtags: Vec<String>,
    pub mentions: Vec<String>,
    pub keywords: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub region: Option<String>,
    pub topic: Option<String>,
    pub urgency: i32,
    pub sentiment: Option<String>,
    pub like_count: i64,
    pub link: Option<String>,
    pub thumbnail_url: Option<String>,
    pub post_type: Option<String>,
}

impl Post {
    /// Posts created within [from, to], newest first.
    pub async fn find_in_range(
        from: DateTime<Utc>,
        to: DateTime<Utc>,
        pool: &PgPool,
    ) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            r#"
            SELECT * FROM posts
            WHERE created_at >= $1 AND created_at <= $2
            ORDER BY created_at DESC
            "#,
        )
        .bind(from)
        .bind(to)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    /// Posts since `since` that carry at least one hashtag or mention,
    /// optionally restricted to a region. Feeds the network graph builder.
    pub async fn find_tagged_since(
        since: DateTime<Utc>,
        region: Option<&str>,
        limit: i64,
        pool: &PgPool,
    ) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            r#"
            SELECT * FROM posts
            WHERE created_at >= $1
              AND (cardinality(hashtags) > 0 OR cardinality(mentions) > 0)
              AND ($2::text IS NULL OR region = $2)
            ORDER BY created_at DESC
            LIMIT $3
            "#,
        )
        .bind(since)
        .bind(region)
        .bind(limit)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    pub async fn find_all(pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM posts ORDER BY created_at DESC")
            .fetch_all(pool)
            .await
            .map_err(Into::into)
    }

    pub async fn count_in_range(
        from: DateTime<Utc>,
        to: DateTime<Utc>,
        pool: &PgPool,
    ) -> Result<i64> {
        let (count,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM posts WHERE created_at >= $1 AND created_at < $2",
        )
        .bind(from)
        .bind(to)
        .fetch_one(pool)
        .await?;
        Ok(count)
    }
}
