// Topic rollups over recent chat logs, and the hashtag/mention network graph.

use axum::extract::{Extension, Query};
use axum::Json;
use chrono::{Duration, Utc};
use serde::Deserialize;
use serde_json::json;

use crate::domains::analytics::network::{build_network_graph, NetworkGraph};
use crate::domains::analytics::topics::rollup_topics;
use crate::server::app::AppState;
use crate::server::error::ApiError;
use crate::server::routes::fetch;

const TOPICS_WINDOW_DAYS: i64 = 7;
const TOPICS_TOP_N: usize = 9;

pub async fn topics_handler(
    Extension(state): Extension<AppState>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let since = Utc::now() - Duration::days(TOPICS_WINDOW_DAYS);
    let logs = fetch::chat_logs_since(&state, since)
        .await
        .map_err(|e| ApiError::upstream("Failed to fetch topic analytics", e))?;

    let topics = rollup_topics(&logs, TOPICS_TOP_N);
    Ok(Json(json!({ "topics": topics })))
}

const NETWORK_WINDOW_DAYS: i64 = 17;
const NETWORK_POST_LIMIT: i64 = 10_000;

#[derive(Debug, Default, Deserialize)]
pub struct NetworkQuery {
    pub region: Option<String>,
}

pub async fn network_handler(
    Extension(state): Extension<AppState>,
    Query(query): Query<NetworkQuery>,
) -> Result<Json<NetworkGraph>, ApiError> {
    let region_label = query.region.as_deref().unwrap_or("All Data");
    // "All Data" disables the region filter.
    let region_filter = query
        .region
        .as_deref()
        .filter(|region| *region != "All Data");

    let since = Utc::now() - Duration::days(NETWORK_WINDOW_DAYS);
    let posts = match &state.deps.fixtures {
        Some(fixtures) => fixtures
            .posts
            .iter()
            .filter(|post| post.created_at >= since)
            .filter(|post| !post.hashtags.is_empty() || !post.mentions.is_empty())
            .filter(|post| {
                region_filter.is_none_or(|region| post.region.as_deref() == Some(region))
            })
            .take(NETWORK_POST_LIMIT as usize)
            .cloned()
            .collect(),
        None => crate::domains::posts::Post::find_tagged_since(
            since,
            region_filter,
            NETWORK_POST_LIMIT,
            &state.db_pool,
        )
        .await
        .map_err(|e| ApiError::upstream("Failed to build network graph", e))?,
    };

    Ok(Json(build_network_graph(&posts, region_label)))
}
