// Data access shared by the route handlers.
//
// Each helper serves from the fixture set when dummy-data mode is active,
// otherwise from Postgres, so the aggregation code downstream never knows
// which mode produced its input.

use anyhow::Result;
use chrono::{DateTime, Utc};

use crate::common::Platform;
use crate::domains::engagement::ChatLog;
use crate::domains::insights::InsightBatch;
use crate::domains::news::NewsArticle;
use crate::domains::posts::Post;
use crate::server::app::AppState;

pub(crate) async fn all_posts(state: &AppState) -> Result<Vec<Post>> {
    match &state.deps.fixtures {
        Some(fixtures) => Ok(fixtures.posts.clone()),
        None => Post::find_all(&state.db_pool).await,
    }
}

pub(crate) async fn all_news(state: &AppState) -> Result<Vec<NewsArticle>> {
    match &state.deps.fixtures {
        Some(fixtures) => Ok(fixtures.news.clone()),
        None => NewsArticle::find_all(&state.db_pool).await,
    }
}

pub(crate) async fn posts_in_range(
    state: &AppState,
    from: DateTime<Utc>,
    to: DateTime<Utc>,
) -> Result<Vec<Post>> {
    match &state.deps.fixtures {
        Some(fixtures) => Ok(fixtures.posts_in_range(from, to)),
        None => Post::find_in_range(from, to, &state.db_pool).await,
    }
}

pub(crate) async fn news_in_range(
    state: &AppState,
    from: DateTime<Utc>,
    to: DateTime<Utc>,
) -> Result<Vec<NewsArticle>> {
    match &state.deps.fixtures {
        Some(fixtures) => Ok(fixtures.news_in_range(from, to)),
        None => NewsArticle::find_in_range(from, to, &state.db_pool).await,
    }
}

pub(crate) async fn chat_logs_since(
    state: &AppState,
    since: DateTime<Utc>,
) -> Result<Vec<ChatLog>> {
    match &state.deps.fixtures {
        Some(fixtures) => Ok(fixtures.chat_logs_since(since)),
        None => ChatLog::find_since(since, &state.db_pool).await,
    }
}

pub(crate) async fn latest_insights(
    state: &AppState,
    platform: Platform,
) -> Result<Option<InsightBatch>> {
    match &state.deps.fixtures {
        Some(fixtures) => Ok(fixtures.latest_insights(platform)),
        None => InsightBatch::find_latest(platform, &state.db_pool).await,
    }
}
