// Per-source dashboard: metrics over the full record set, paginated content,
// and the latest insight batch capped at its top five insights.

use axum::extract::{Extension, Query};
use axum::Json;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::common::{PageParams, Pagination, Platform};
use crate::domains::analytics::dashboard::{news_metrics, social_metrics, NewsMetrics, SocialMetrics};
use crate::domains::insights::InsightRecord;
use crate::domains::search::SearchHit;
use crate::server::app::AppState;
use crate::server::error::ApiError;
use crate::server::routes::fetch;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardQuery {
    pub source: Platform,
    pub page: usize,
    pub items_per_page: usize,
}

impl Default for DashboardQuery {
    fn default() -> Self {
        DashboardQuery {
            source: Platform::News,
            page: 1,
            items_per_page: 10,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum DashboardStats {
    News(NewsMetrics),
    Social(SocialMetrics),
}

#[derive(Debug, Serialize)]
pub struct InsightOut {
    pub date: NaiveDate,
    pub insight: Vec<InsightRecord>,
}

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub stats: DashboardStats,
    pub data: Vec<SearchHit>,
    pub total: usize,
    pub insights: serde_json::Value,
    pub pagination: Pagination,
}

pub async fn dashboard_handler(
    Extension(state): Extension<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Result<Json<DashboardResponse>, ApiError> {
    let page = PageParams {
        page: query.page,
        items_per_page: query.items_per_page,
    }
    .normalized();

    let (stats, data, total) = match query.source {
        Platform::News => {
            let articles = fetch::all_news(&state)
                .await
                .map_err(|e| ApiError::upstream("Failed to fetch dashboard data", e))?;
            let stats = DashboardStats::News(news_metrics(&articles));
            let total = articles.len();
            let data: Vec<SearchHit> = articles
                .iter()
                .skip(page.offset())
                .take(page.items_per_page)
                .map(SearchHit::from)
                .collect();
            (stats, data, total)
        }
        Platform::Social => {
            let posts = fetch::all_posts(&state)
                .await
                .map_err(|e| ApiError::upstream("Failed to fetch dashboard data", e))?;
            let stats = DashboardStats::Social(social_metrics(&posts));
            let total = posts.len();
            let data: Vec<SearchHit> = posts
                .iter()
                .skip(page.offset())
                .take(page.items_per_page)
                .map(SearchHit::from)
                .collect();
            (stats, data, total)
        }
    };

    let insight = fetch::latest_insights(&state, query.source)
        .await
        .map_err(|e| ApiError::upstream("Failed to fetch dashboard data", e))?
        .map(|batch| InsightOut {
            date: batch.generated_for,
            insight: batch.top_insights(5),
        });

    let source_key = match query.source {
        Platform::News => "news",
        Platform::Social => "social",
    };

    Ok(Json(DashboardResponse {
        stats,
        data,
        total,
        insights: json!({ source_key: insight }),
        pagination: Pagination::new(&page, total),
    }))
}
