// Trending endpoint: the latest social insight batch verbatim, or news
// keyword trending over the last seven days with an all-time fallback.

use axum::extract::{Extension, Query};
use axum::Json;
use chrono::{Duration, Utc};
use serde::Deserialize;
use serde_json::json;

use crate::common::Platform;
use crate::domains::analytics::trending::trending_keywords;
use crate::server::app::AppState;
use crate::server::error::ApiError;
use crate::server::routes::fetch;

#[derive(Debug, Default, Deserialize)]
pub struct TrendingQuery {
    pub source: Option<String>,
}

pub async fn trending_handler(
    Extension(state): Extension<AppState>,
    Query(query): Query<TrendingQuery>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let source = query
        .source
        .as_deref()
        .and_then(Platform::parse)
        .unwrap_or(Platform::News);

    if source == Platform::Social {
        let batch = fetch::latest_insights(&state, Platform::Social)
            .await
            .map_err(|e| ApiError::upstream("Failed to fetch trending topics", e))?;
        return Ok(Json(json!({ "data": batch })));
    }

    let since = Utc::now() - Duration::days(7);
    let recent = fetch::news_in_range(&state, since, Utc::now())
        .await
        .map_err(|e| ApiError::upstream("Failed to fetch trending topics", e))?;

    let mut trending = trending_keywords(&recent, 10);
    if trending.is_empty() {
        let all = fetch::all_news(&state)
            .await
            .map_err(|e| ApiError::upstream("Failed to fetch trending topics", e))?;
        trending = trending_keywords(&all, 10);
    }

    Ok(Json(json!({ "trending": trending })))
}
