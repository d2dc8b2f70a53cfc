// Citizen engagement: chat-log overview metrics and the raw log feed.

use axum::extract::{Extension, Query};
use axum::Json;
use chrono::{Duration, Utc};
use serde::Deserialize;
use serde_json::json;

use crate::domains::engagement::overview::{engagement_overview, EngagementOverview};
use crate::domains::engagement::ChatLog;
use crate::server::app::AppState;
use crate::server::error::ApiError;
use crate::server::routes::fetch;

const LOGS_LIMIT: i64 = 100;

pub async fn engagement_handler(
    Extension(state): Extension<AppState>,
) -> Result<Json<EngagementOverview>, ApiError> {
    let now = Utc::now();
    let logs = fetch::chat_logs_since(&state, now - Duration::days(7))
        .await
        .map_err(|e| ApiError::upstream("Failed to fetch metrics", e))?;
    Ok(Json(engagement_overview(&logs, now)))
}

#[derive(Debug, Default, Deserialize)]
pub struct LogsQuery {
    pub search: Option<String>,
}

pub async fn engagement_logs_handler(
    Extension(state): Extension<AppState>,
    Query(query): Query<LogsQuery>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let search = query.search.as_deref().filter(|s| !s.is_empty());

    let logs = match &state.deps.fixtures {
        Some(fixtures) => {
            let needle = search.map(|s| s.to_lowercase());
            let mut logs: Vec<ChatLog> = fixtures
                .chat_logs
                .iter()
                .filter(|log| {
                    needle.as_deref().is_none_or(|needle| {
                        log.message_text.to_lowercase().contains(needle)
                            || log
                                .bot_response
                                .as_deref()
                                .is_some_and(|r| r.to_lowercase().contains(needle))
                            || log.user_id.to_lowercase().contains(needle)
                    })
                })
                .cloned()
                .collect();
            logs.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            logs.truncate(LOGS_LIMIT as usize);
            logs
        }
        None => ChatLog::find_latest(search, LOGS_LIMIT, &state.db_pool)
            .await
            .map_err(|e| ApiError::upstream("Failed to fetch chat logs", e))?,
    };

    Ok(Json(json!({ "logs": logs, "total": logs.len() })))
}
