// Filtered search over posts and news articles.

use axum::extract::Extension;
use axum::Json;
use serde_json::json;

use crate::common::{Pagination, Platform};
use crate::domains::search::query::{matches_article, matches_post, search_news, search_posts};
use crate::domains::search::{SearchHit, SearchRequest};
use crate::server::app::AppState;
use crate::server::error::ApiError;

pub async fn search_handler(
    Extension(state): Extension<AppState>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let page = request.page_params();

    let (hits, total) = match &state.deps.fixtures {
        Some(fixtures) => match request.source {
            Platform::News => {
                let mut matched: Vec<&crate::domains::news::NewsArticle> = fixtures
                    .news
                    .iter()
                    .filter(|article| matches_article(article, &request))
                    .collect();
                matched.sort_by(|a, b| b.created_at.cmp(&a.created_at));
                let total = matched.len() as i64;
                let hits = matched
                    .into_iter()
                    .skip(page.offset())
                    .take(page.items_per_page)
                    .map(SearchHit::from)
                    .collect();
                (hits, total)
            }
            Platform::Social => {
                let mut matched: Vec<&crate::domains::posts::Post> = fixtures
                    .posts
                    .iter()
                    .filter(|post| matches_post(post, &request))
                    .collect();
                matched.sort_by(|a, b| b.created_at.cmp(&a.created_at));
                let total = matched.len() as i64;
                let hits = matched
                    .into_iter()
                    .skip(page.offset())
                    .take(page.items_per_page)
                    .map(SearchHit::from)
                    .collect();
                (hits, total)
            }
        },
        None => match request.source {
            Platform::News => {
                let (rows, total) = search_news(&request, &state.db_pool)
                    .await
                    .map_err(|e| ApiError::upstream("Failed to search content", e))?;
                (rows.iter().map(SearchHit::from).collect::<Vec<_>>(), total)
            }
            Platform::Social => {
                let (rows, total) = search_posts(&request, &state.db_pool)
                    .await
                    .map_err(|e| ApiError::upstream("Failed to search content", e))?;
                (rows.iter().map(SearchHit::from).collect::<Vec<_>>(), total)
            }
        },
    };

    Ok(Json(json!({
        "hits": hits,
        "total": total,
        "pagination": Pagination::new(&page, total as usize),
    })))
}
