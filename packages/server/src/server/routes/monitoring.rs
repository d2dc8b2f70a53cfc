// Monitoring endpoints: urgency dashboard, keyword cloud, topic matrix,
// crisis timeline, the unified dashboard and the executive summary.

use axum::extract::{Extension, Query};
use axum::Json;
use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;
use serde_json::json;

use crate::common::{PageParams, Platform};
use crate::domains::analytics::keywords::{keyword_cloud, KeywordSource};
use crate::domains::analytics::matrix::{topic_matrix, TopicMatrix};
use crate::domains::analytics::timeline::crisis_timeline;
use crate::domains::analytics::unified::{unified_dashboard, UnifiedDashboard};
use crate::domains::analytics::urgency::{urgency_dashboard, UrgencyDashboard};
use crate::domains::analytics::DocSummary;
use crate::domains::insights::{build_executive_summary_prompt, InsightRecord};
use crate::server::app::AppState;
use crate::server::error::ApiError;
use crate::server::routes::fetch;

async fn all_doc_summaries(
    state: &AppState,
) -> anyhow::Result<(Vec<DocSummary>, Vec<DocSummary>)> {
    let posts = fetch::all_posts(state).await?;
    let news = fetch::all_news(state).await?;
    let social_docs: Vec<DocSummary> = posts.iter().map(DocSummary::from).collect();
    let news_docs: Vec<DocSummary> = news.iter().map(DocSummary::from).collect();
    Ok((social_docs, news_docs))
}

pub async fn urgency_handler(
    Extension(state): Extension<AppState>,
) -> Result<Json<UrgencyDashboard>, ApiError> {
    let (social, news) = all_doc_summaries(&state)
        .await
        .map_err(|e| ApiError::upstream("Failed to fetch urgency dashboard", e))?;
    Ok(Json(urgency_dashboard(&social, &news)))
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct KeywordsQuery {
    pub limit: usize,
    pub source: String,
}

impl Default for KeywordsQuery {
    fn default() -> Self {
        KeywordsQuery {
            limit: 50,
            source: "all".to_string(),
        }
    }
}

pub async fn keywords_handler(
    Extension(state): Extension<AppState>,
    Query(query): Query<KeywordsQuery>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let posts = fetch::all_posts(&state)
        .await
        .map_err(|e| ApiError::upstream("Failed to fetch keyword cloud", e))?;
    let news = fetch::all_news(&state)
        .await
        .map_err(|e| ApiError::upstream("Failed to fetch keyword cloud", e))?;

    let source = KeywordSource::parse(&query.source);
    let (keywords, stats) = keyword_cloud(&posts, &news, source, query.limit);

    Ok(Json(json!({
        "keywords": keywords,
        "stats": stats,
        "limit": query.limit,
        "source": query.source,
    })))
}

pub async fn topic_matrix_handler(
    Extension(state): Extension<AppState>,
) -> Result<Json<TopicMatrix>, ApiError> {
    let (social, news) = all_doc_summaries(&state)
        .await
        .map_err(|e| ApiError::upstream("Failed to fetch topic matrix", e))?;
    let combined: Vec<DocSummary> = social.into_iter().chain(news).collect();
    Ok(Json(topic_matrix(&combined)))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TimelineQuery {
    pub min_urgency: i32,
    pub topic: Option<String>,
    pub platform: Option<String>,
    pub limit: usize,
}

impl Default for TimelineQuery {
    fn default() -> Self {
        TimelineQuery {
            min_urgency: 70,
            topic: None,
            platform: None,
            limit: 50,
        }
    }
}

pub async fn crisis_timeline_handler(
    Extension(state): Extension<AppState>,
    Query(query): Query<TimelineQuery>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let (social, news) = all_doc_summaries(&state)
        .await
        .map_err(|e| ApiError::upstream("Failed to fetch crisis timeline", e))?;

    let platform = query
        .platform
        .as_deref()
        .filter(|p| *p != "all")
        .and_then(Platform::parse);
    let docs: Vec<DocSummary> = social
        .into_iter()
        .chain(news)
        .filter(|doc| platform.is_none_or(|p| doc.platform == p))
        .collect();

    let topic = query.topic.as_deref().filter(|t| *t != "all");
    let events = crisis_timeline(&docs, query.min_urgency, topic, query.limit);

    Ok(Json(json!({
        "data": events,
        "total": events.len(),
        "minUrgency": query.min_urgency,
    })))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UnifiedQuery {
    pub date_from: Option<DateTime<Utc>>,
    pub date_to: Option<DateTime<Utc>>,
    pub page: usize,
    pub items_per_page: usize,
}

impl Default for UnifiedQuery {
    fn default() -> Self {
        UnifiedQuery {
            date_from: None,
            date_to: None,
            page: 1,
            items_per_page: 20,
        }
    }
}

pub async fn unified_handler(
    Extension(state): Extension<AppState>,
    Query(query): Query<UnifiedQuery>,
) -> Result<Json<UnifiedDashboard>, ApiError> {
    let now = Utc::now();
    let to = query.date_to.unwrap_or(now);
    let from = query.date_from.unwrap_or(to - Duration::days(30));

    let posts = fetch::posts_in_range(&state, from, to)
        .await
        .map_err(|e| ApiError::upstream("Failed to fetch unified monitoring data", e))?;
    let news = fetch::news_in_range(&state, from, to)
        .await
        .map_err(|e| ApiError::upstream("Failed to fetch unified monitoring data", e))?;

    let docs: Vec<DocSummary> = posts
        .iter()
        .map(DocSummary::from)
        .chain(news.iter().map(DocSummary::from))
        .collect();

    // Previous period of the same length, for the change percentage.
    let prev_from = from - (to - from);
    let prev_total = match &state.deps.fixtures {
        Some(fixtures) => {
            fixtures.posts_in_range(prev_from, from).len()
                + fixtures.news_in_range(prev_from, from).len()
        }
        None => {
            let posts = crate::domains::posts::Post::count_in_range(prev_from, from, &state.db_pool)
                .await
                .map_err(|e| ApiError::upstream("Failed to fetch unified monitoring data", e))?;
            let news = crate::domains::news::NewsArticle::count_in_range(
                prev_from,
                from,
                &state.db_pool,
            )
            .await
            .map_err(|e| ApiError::upstream("Failed to fetch unified monitoring data", e))?;
            (posts + news) as usize
        }
    };

    let page = PageParams {
        page: query.page,
        items_per_page: query.items_per_page,
    };

    Ok(Json(unified_dashboard(&docs, prev_total, from, to, now, page)))
}

#[derive(Debug, Default, Deserialize)]
pub struct ExecutiveSummaryQuery {
    pub date: Option<String>,
}

pub async fn executive_summary_handler(
    Extension(state): Extension<AppState>,
    Query(query): Query<ExecutiveSummaryQuery>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let date = query
        .date
        .unwrap_or_else(|| Utc::now().format("%Y-%m-%d").to_string());

    let social_batch = fetch::latest_insights(&state, Platform::Social)
        .await
        .map_err(|e| ApiError::upstream("Failed to generate executive summary", e))?;
    let news_batch = fetch::latest_insights(&state, Platform::News)
        .await
        .map_err(|e| ApiError::upstream("Failed to generate executive summary", e))?;

    let social: Vec<InsightRecord> = social_batch
        .map(|batch| batch.top_insights(10))
        .unwrap_or_default();
    let news: Vec<InsightRecord> = news_batch
        .map(|batch| batch.top_insights(10))
        .unwrap_or_default();

    if social.is_empty() && news.is_empty() {
        // Nothing to summarize; skip the model call entirely.
        return Ok(Json(json!({
            "success": true,
            "data": {
                "summary": format!(
                    "## Executive Summary - {date}\n\n**No insight data is available for this date.**\n\nCheck back once insights have been collected from the social and news sources."
                ),
                "rawData": { "social": [], "news": [] },
                "metadata": {
                    "date": date,
                    "totalInsights": 0,
                    "criticalIssues": 0,
                    "avgUrgency": 0
                }
            },
            "timestamp": Utc::now(),
        })));
    }

    if !state.deps.completion.is_configured() {
        return Err(ApiError::NotConfigured("Summarization"));
    }

    let prompt = build_executive_summary_prompt(&social, &news, &date);
    let summary = state
        .deps
        .completion
        .complete(&prompt)
        .await
        .map_err(|e| ApiError::upstream("Failed to generate executive summary", e))?;

    let all: Vec<&InsightRecord> = social.iter().chain(news.iter()).collect();
    let critical = all.iter().filter(|i| i.urgency_score >= 80).count();
    let high_priority = all
        .iter()
        .filter(|i| i.urgency_score >= 60 && i.urgency_score < 80)
        .count();
    let avg_urgency = if all.is_empty() {
        0.0
    } else {
        all.iter().map(|i| i.urgency_score as f64).sum::<f64>() / all.len() as f64
    };

    Ok(Json(json!({
        "success": true,
        "data": {
            "summary": summary,
            "rawData": { "social": social, "news": news },
            "metadata": {
                "date": date,
                "totalInsights": all.len(),
                "criticalIssues": critical,
                "highPriorityIssues": high_priority,
                "avgUrgency": avg_urgency,
                "byPlatform": { "social": social.len(), "news": news.len() }
            }
        },
        "timestamp": Utc::now(),
    })))
}
