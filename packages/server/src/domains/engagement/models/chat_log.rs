use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// One citizen chatbot interaction, written by the chatbot pipeline.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ChatLog {
    pub id: Uuid,
    pub user_id: String,
    pub username: Option<String>,
    pub message_text: String,
    pub bot_response: Option<String>,
    pub response_time_ms: i64,
    pub created_at: DateTime<Utc>,
    pub region: Option<String>,
    pub topic: Option<String>,
    pub urgency: i32,
    pub sentiment: Option<String>,
}

impl ChatLog {
    pub async fn find_since(since: DateTime<Utc>, pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            r#"
            SELECT * FROM chat_logs
            WHERE created_at >= $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(since)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    /// Latest logs, optionally matched case-insensitively against the
    /// message, the bot response, or the user id.
    pub async fn find_latest(
        search: Option<&str>,
        limit: i64,
        pool: &PgPool,
    ) -> Result<Vec<Self>> {
        let pattern = search.map(|s| format!("%{}%", s));
        sqlx::query_as::<_, Self>(
            r#"
            SELECT * FROM chat_logs
            WHERE $1::text IS NULL
               OR message_text ILIKE $1
               OR bot_response ILIKE $1
               OR user_id ILIKE $1
            ORDER BY created_at DESC
            LIMIT $2
            "#,
        )
        .bind(pattern)
        .bind(limit)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }
}
