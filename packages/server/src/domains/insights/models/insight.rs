use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::common::Platform;

/// A single derived insight produced by a summarization call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightRecord {
    #[serde(default)]
    pub topic: Option<String>,
    pub main_issue: String,
    pub problem: String,
    pub suggestion: String,
    pub urgency_score: i32,
}

/// An append-only batch of insights generated for one platform on one day.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct InsightBatch {
    pub id: Uuid,
    pub platform: String,
    pub generated_for: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub insights: Json<Vec<InsightRecord>>,
}

impl InsightBatch {
    /// Most recent batch for a platform, if any.
    pub async fn find_latest(platform: Platform, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>(
            r#"
            SELECT * FROM insight_batches
            WHERE platform = $1
            ORDER BY created_at DESC
            LIMIT 1
            "#,
        )
        .bind(platform.as_str())
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
    }

    /// The batch's insights sorted by urgency descending, capped at `limit`.
    pub fn top_insights(&self, limit: usize) -> Vec<InsightRecord> {
        let mut insights = self.insights.0.clone();
        insights.sort_by(|a, b| b.urgency_score.cmp(&a.urgency_score));
        insights.truncate(limit);
        insights
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(issue: &str, urgency: i32) -> InsightRecord {
        InsightRecord {
            topic: None,
            main_issue: issue.to_string(),
            problem: String::new(),
            suggestion: String::new(),
            urgency_score: urgency,
        }
    }

    #[test]
    fn top_insights_sorts_and_caps() {
        let batch = InsightBatch {
            id: Uuid::new_v4(),
            platform: "Social".to_string(),
            generated_for: NaiveDate::from_ymd_opt(2025, 8, 20).unwrap(),
            created_at: Utc::now(),
            insights: Json(vec![record("a", 40), record("b", 90), record("c", 70)]),
        };
        let top = batch.top_insights(2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].main_issue, "b");
        assert_eq!(top[1].main_issue, "c");
    }
}
