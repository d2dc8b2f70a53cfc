// Filtered search over posts and news articles.
//
// Dimensions AND together; urgency bands within the filter OR together.
// `matches_post`/`matches_article` mirror the SQL predicates so fixture
// mode filters with the same semantics as the database path.

use anyhow::Result;
use serde::Deserialize;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::common::{FilterState, PageParams, Platform, Sentiment};
use crate::domains::news::NewsArticle;
use crate::domains::posts::Post;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchRequest {
    pub query: String,
    pub source: Platform,
    pub page: usize,
    pub items_per_page: usize,
    pub filters: FilterState,
}

impl Default for SearchRequest {
    fn default() -> Self {
        SearchRequest {
            query: String::new(),
            source: Platform::News,
            page: 1,
            items_per_page: 10,
            filters: FilterState::default(),
        }
    }
}

impl SearchRequest {
    pub fn page_params(&self) -> PageParams {
        PageParams {
            page: self.page,
            items_per_page: self.items_per_page,
        }
        .normalized()
    }
}

/// Append the shared WHERE clauses. `text_columns` are the free-text
/// targets for the source's table.
fn push_conditions(
    builder: &mut QueryBuilder<'_, Postgres>,
    request: &SearchRequest,
    text_columns: &[&str],
) {
    builder.push(" WHERE TRUE");

    if !request.query.is_empty() {
        let pattern = format!("%{}%", request.query);
        builder.push(" AND (");
        for (i, column) in text_columns.iter().enumerate() {
            if i > 0 {
                builder.push(" OR ");
            }
            builder.push(format!("{column} ILIKE "));
            builder.push_bind(pattern.clone());
        }
        builder.push(")");
    }

    if let Some(range) = &request.filters.date_range {
        builder.push(" AND created_at >= ");
        builder.push_bind(range.from);
        builder.push(" AND created_at <= ");
        builder.push_bind(range.to);
    }

    if !request.filters.categories.is_empty() {
        builder.push(" AND topic = ANY(");
        builder.push_bind(request.filters.categories.clone());
        builder.push(")");
    }

    if !request.filters.urgency_level.is_empty() {
        builder.push(" AND (");
        for (i, band) in request.filters.urgency_level.iter().enumerate() {
            if i > 0 {
                builder.push(" OR ");
            }
            let (low, high) = band.range();
            builder.push("(urgency >= ");
            builder.push_bind(low);
            if let Some(high) = high {
                builder.push(" AND urgency <= ");
                builder.push_bind(high);
            }
            builder.push(")");
        }
        builder.push(")");
    }

    if !request.filters.sentiment.is_empty() {
        let labels: Vec<String> = request
            .filters
            .sentiment
            .iter()
            .map(|s| s.as_str().to_string())
            .collect();
        builder.push(" AND sentiment = ANY(");
        builder.push_bind(labels);
        builder.push(")");
    }

    if !request.filters.region.is_empty() {
        builder.push(" AND region = ANY(");
        builder.push_bind(request.filters.region.clone());
        builder.push(")");
    }
}

pub async fn search_posts(request: &SearchRequest, pool: &PgPool) -> Result<(Vec<Post>, i64)> {
    let page = request.page_params();

    let mut count = QueryBuilder::new("SELECT COUNT(*) FROM posts");
    push_conditions(&mut count, request, &["caption"]);
    let (total,): (i64,) = count.build_query_as().fetch_one(pool).await?;

    let mut select = QueryBuilder::new("SELECT * FROM posts");
    push_conditions(&mut select, request, &["caption"]);
    select.push(" ORDER BY created_at DESC OFFSET ");
    select.push_bind(page.offset() as i64);
    select.push(" LIMIT ");
    select.push_bind(page.items_per_page as i64);
    let rows = select.build_query_as::<Post>().fetch_all(pool).await?;

    Ok((rows, total))
}

pub async fn search_news(
    request: &SearchRequest,
    pool: &PgPool,
) -> Result<(Vec<NewsArticle>, i64)> {
    let page = request.page_params();

    let mut count = QueryBuilder::new("SELECT COUNT(*) FROM news_articles");
    push_conditions(&mut count, request, &["title", "description"]);
    let (total,): (i64,) = count.build_query_as().fetch_one(pool).await?;

    let mut select = QueryBuilder::new("SELECT * FROM news_articles");
    push_conditions(&mut select, request, &["title", "description"]);
    select.push(" ORDER BY created_at DESC OFFSET ");
    select.push_bind(page.offset() as i64);
    select.push(" LIMIT ");
    select.push_bind(page.items_per_page as i64);
    let rows = select
        .build_query_as::<NewsArticle>()
        .fetch_all(pool)
        .await?;

    Ok((rows, total))
}

fn text_matches(query: &str, candidates: &[Option<&str>]) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    candidates
        .iter()
        .flatten()
        .any(|text| text.to_lowercase().contains(&needle))
}

fn filters_match(
    filters: &FilterState,
    created_at: chrono::DateTime<chrono::Utc>,
    topic: Option<&str>,
    urgency: i32,
    sentiment: Option<&str>,
    region: Option<&str>,
) -> bool {
    if let Some(range) = &filters.date_range {
        if created_at < range.from || created_at > range.to {
            return false;
        }
    }
    if !filters.categories.is_empty()
        && !topic.is_some_and(|t| filters.categories.iter().any(|c| c == t))
    {
        return false;
    }
    if !filters.urgency_level.is_empty()
        && !filters.urgency_level.iter().any(|band| {
            let (low, high) = band.range();
            urgency >= low && high.is_none_or(|high| urgency <= high)
        })
    {
        return false;
    }
    if !filters.sentiment.is_empty() {
        let parsed = Sentiment::parse_opt(sentiment);
        if !filters.sentiment.contains(&parsed) {
            return false;
        }
    }
    if !filters.region.is_empty()
        && !region.is_some_and(|r| filters.region.iter().any(|f| f == r))
    {
        return false;
    }
    true
}

/// In-memory equivalent of the posts SQL predicates, for fixture mode.
pub fn matches_post(post: &Post, request: &SearchRequest) -> bool {
    text_matches(&request.query, &[Some(post.caption.as_str())])
        && filters_match(
            &request.filters,
            post.created_at,
            post.topic.as_deref(),
            post.urgency,
            post.sentiment.as_deref(),
            post.region.as_deref(),
        )
}

/// In-memory equivalent of the news SQL predicates, for fixture mode.
pub fn matches_article(article: &NewsArticle, request: &SearchRequest) -> bool {
    text_matches(
        &request.query,
        &[Some(article.title.as_str()), article.description.as_deref()],
    ) && filters_match(
        &request.filters,
        article.created_at,
        article.topic.as_deref(),
        article.urgency,
        article.sentiment.as_deref(),
        article.region.as_deref(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{DateRange, UrgencyBand};
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    fn post(caption: &str, urgency: i32, sentiment: &str, region: &str, topic: &str) -> Post {
        Post {
            id: Uuid::new_v4(),
            username: "warga".to_string(),
            caption: caption.to_string(),
            hashtags: vec![],
            mentions: vec![],
            keywords: vec![],
            created_at: Utc.with_ymd_and_hms(2025, 8, 10, 9, 0, 0).unwrap(),
            region: Some(region.to_string()),
            topic: Some(topic.to_string()),
            urgency,
            sentiment: Some(sentiment.to_string()),
            like_count: 0,
            link: None,
            thumbnail_url: None,
            post_type: None,
        }
    }

    #[test]
    fn free_text_is_case_insensitive() {
        let p = post("Banjir besar di Kemang", 75, "Negative", "Jakarta Selatan", "Banjir");
        let request = SearchRequest {
            query: "BANJIR".to_string(),
            ..Default::default()
        };
        assert!(matches_post(&p, &request));
    }

    #[test]
    fn dimensions_and_together() {
        let p = post("Banjir besar", 75, "Negative", "Jakarta Selatan", "Banjir");
        let request = SearchRequest {
            query: "banjir".to_string(),
            filters: FilterState {
                sentiment: vec![Sentiment::Positive],
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(!matches_post(&p, &request));
    }

    #[test]
    fn urgency_bands_or_together() {
        let high = post("a", 85, "Neutral", "r", "t");
        let low = post("b", 20, "Neutral", "r", "t");
        let medium = post("c", 60, "Neutral", "r", "t");
        let request = SearchRequest {
            filters: FilterState {
                urgency_level: vec![UrgencyBand::High, UrgencyBand::Low],
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(matches_post(&high, &request));
        assert!(matches_post(&low, &request));
        assert!(!matches_post(&medium, &request));
    }

    #[test]
    fn date_range_is_inclusive() {
        let p = post("a", 50, "Neutral", "r", "t");
        let request = SearchRequest {
            filters: FilterState {
                date_range: Some(DateRange {
                    from: Utc.with_ymd_and_hms(2025, 8, 10, 9, 0, 0).unwrap(),
                    to: Utc.with_ymd_and_hms(2025, 8, 10, 9, 0, 0).unwrap(),
                }),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(matches_post(&p, &request));
    }

    #[test]
    fn empty_filter_matches_everything() {
        let p = post("anything", 1, "whatever", "r", "t");
        assert!(matches_post(&p, &SearchRequest::default()));
    }
}
