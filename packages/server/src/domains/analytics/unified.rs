// Cross-platform unified dashboard.
//
// One pass over the merged record set in the requested date range produces
// every panel: headline metrics, growth and trend series, urgent-only
// distributions, top critical posts and the paginated urgent activity feed.
// Distributions marked "urgent only" consider records with urgency >= 70.

use chrono::{DateTime, Timelike, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::common::{PageParams, Pagination, Platform, Sentiment};
use crate::domains::analytics::{DocSummary, OrderedGroups};

const URGENT_THRESHOLD: i32 = 70;
const CRITICAL_THRESHOLD: i32 = 80;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnifiedMetrics {
    pub total_engagement: f64,
    pub total_posts: usize,
    pub avg_likes_per_post: i64,
    pub avg_urgency: i32,
    pub high_priority_count: usize,
    pub critical_negative_count: usize,
    pub most_critical_region: String,
    pub critical_topics_count: usize,
    pub avg_daily_posts: i64,
    pub regional_coverage: usize,
    pub citizen_reach: usize,
    pub department_mentions_count: usize,
    pub active_discussions: usize,
    pub public_sentiment: i32,
    pub changes: MetricChanges,
}

#[derive(Debug, Clone, Serialize)]
pub struct MetricChanges {
    pub engagement: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct GrowthPoint {
    pub date: String,
    pub news: usize,
    pub social: usize,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct SentimentSlice {
    pub sentiment: String,
    pub count: usize,
    pub percentage: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct TopicCount {
    pub topic: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct PriorityIssue {
    pub topic: String,
    pub count: usize,
    pub urgency: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegionCount {
    pub region: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct UrgencySplit {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct SentimentTrendPoint {
    pub date: String,
    #[serde(rename = "Positive")]
    pub positive: usize,
    #[serde(rename = "Negative")]
    pub negative: usize,
    #[serde(rename = "Neutral")]
    pub neutral: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopPost {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub kind: Platform,
    pub username: String,
    pub content: String,
    pub engagement: f64,
    pub urgency: i32,
    pub sentiment: Sentiment,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityItem {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub kind: Platform,
    pub username: String,
    pub content: String,
    pub topic: String,
    pub date: DateTime<Utc>,
    pub region: String,
    pub sentiment: Sentiment,
    pub urgency: i32,
    pub link: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HourBucket {
    pub hour: u32,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodayActivity {
    pub hourly: Vec<HourBucket>,
    pub by_topic: Vec<TopicCount>,
    pub total_today: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRangeOut {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnifiedDashboard {
    pub metrics: UnifiedMetrics,
    pub growth_data: Vec<GrowthPoint>,
    pub sentiment_distribution: Vec<SentimentSlice>,
    pub topic_distribution: Vec<TopicCount>,
    pub priority_issues: Vec<PriorityIssue>,
    pub regional_distribution: Vec<RegionCount>,
    pub urgency_distribution: UrgencySplit,
    pub sentiment_trends: Vec<SentimentTrendPoint>,
    pub top_posts: Vec<TopPost>,
    pub today_activity: TodayActivity,
    pub recent_activity: Vec<ActivityItem>,
    pub pagination: Pagination,
    pub date_range: DateRangeOut,
}

/// Mentions of government bodies are spotted by keyword in content + mentions.
const DEPARTMENT_KEYWORDS: [&str; 9] = [
    "dinas",
    "kelurahan",
    "kecamatan",
    "pemda",
    "pemprov",
    "gubernur",
    "walikota",
    "camat",
    "lurah",
];

fn day_key(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d").to_string()
}

fn mentions_department(doc: &DocSummary) -> bool {
    let mut combined = doc.content.to_lowercase();
    for keyword in &doc.keywords {
        combined.push(' ');
        combined.push_str(&keyword.to_lowercase());
    }
    DEPARTMENT_KEYWORDS
        .iter()
        .any(|keyword| combined.contains(keyword))
}

pub fn unified_dashboard(
    docs: &[DocSummary],
    prev_total: usize,
    from: DateTime<Utc>,
    to: DateTime<Utc>,
    now: DateTime<Utc>,
    page: PageParams,
) -> UnifiedDashboard {
    let page = page.normalized();

    let social: Vec<&DocSummary> = docs
        .iter()
        .filter(|d| d.platform == Platform::Social)
        .collect();

    let total_posts = docs.len();
    let social_engagement: f64 = social.iter().map(|d| d.engagement).sum();
    let total_engagement: f64 = docs.iter().map(|d| d.engagement).sum();
    let avg_likes_per_post = if social.is_empty() {
        0
    } else {
        (social_engagement / social.len() as f64).round() as i64
    };

    let avg_urgency = if docs.is_empty() {
        0
    } else {
        (docs.iter().map(|d| d.urgency as f64).sum::<f64>() / docs.len() as f64).round() as i32
    };

    let high_priority_count = docs
        .iter()
        .filter(|d| d.urgency >= CRITICAL_THRESHOLD)
        .count();
    let critical_negative_count = docs
        .iter()
        .filter(|d| d.urgency >= CRITICAL_THRESHOLD && d.sentiment == Sentiment::Negative)
        .count();

    let mut critical_regions: OrderedGroups<usize> = OrderedGroups::new();
    let mut critical_topics: Vec<&str> = Vec::new();
    for doc in docs.iter().filter(|d| d.urgency >= CRITICAL_THRESHOLD) {
        *critical_regions.entry(doc.region_label()) += 1;
        let topic = doc.topic_label();
        if !critical_topics.contains(&topic) {
            critical_topics.push(topic);
        }
    }
    let most_critical_region = critical_regions
        .into_vec()
        .into_iter()
        .max_by_key(|(_, count)| *count)
        .map(|(region, _)| region)
        .unwrap_or_else(|| "N/A".to_string());
    let critical_topics_count = critical_topics.len();

    let days_in_range = ((to - from).num_days()).max(1);
    let avg_daily_posts = ((total_posts as f64) / days_in_range as f64).round() as i64;

    let mut regions_seen: Vec<&str> = Vec::new();
    let mut creators_seen: Vec<&str> = Vec::new();
    for doc in docs {
        if let Some(region) = doc.region.as_deref() {
            if !regions_seen.contains(&region) {
                regions_seen.push(region);
            }
        }
        if !doc.username.is_empty() && !creators_seen.contains(&doc.username.as_str()) {
            creators_seen.push(&doc.username);
        }
    }

    let department_mentions_count = docs.iter().filter(|d| mentions_department(d)).count();
    let active_discussions = docs
        .iter()
        .filter(|d| match d.platform {
            Platform::Social => d.engagement > 100.0,
            Platform::News => d.engagement > 50.0,
        })
        .count();

    let positive_count = docs
        .iter()
        .filter(|d| d.sentiment == Sentiment::Positive)
        .count();
    let public_sentiment = if docs.is_empty() {
        0
    } else {
        ((positive_count as f64 / docs.len() as f64) * 100.0).round() as i32
    };

    let engagement_change = if prev_total > 0 {
        ((total_posts as f64 - prev_total as f64) / prev_total as f64) * 100.0
    } else {
        0.0
    };

    // Growth series, grouped by day, ascending.
    #[derive(Default)]
    struct DayCounts {
        news: usize,
        social: usize,
    }
    let mut growth: OrderedGroups<DayCounts> = OrderedGroups::new();
    for doc in docs {
        let slot = growth.entry(&day_key(doc.created_at));
        match doc.platform {
            Platform::News => slot.news += 1,
            Platform::Social => slot.social += 1,
        }
    }
    let mut growth_data: Vec<GrowthPoint> = growth
        .into_vec()
        .into_iter()
        .map(|(date, counts)| GrowthPoint {
            total: counts.news + counts.social,
            news: counts.news,
            social: counts.social,
            date,
        })
        .collect();
    growth_data.sort_by(|a, b| a.date.cmp(&b.date));

    // Today's activity: hourly histogram + topic counts.
    let today = day_key(now);
    let today_docs: Vec<&DocSummary> = docs
        .iter()
        .filter(|d| day_key(d.created_at) == today)
        .collect();
    let hourly: Vec<HourBucket> = (0..24)
        .map(|hour| HourBucket {
            hour,
            count: today_docs
                .iter()
                .filter(|d| d.created_at.hour() == hour)
                .count(),
        })
        .collect();
    let mut today_topics: OrderedGroups<usize> = OrderedGroups::new();
    for doc in &today_docs {
        *today_topics.entry(doc.topic_label()) += 1;
    }
    let mut by_topic: Vec<TopicCount> = today_topics
        .into_vec()
        .into_iter()
        .map(|(topic, count)| TopicCount { topic, count })
        .collect();
    by_topic.sort_by(|a, b| b.count.cmp(&a.count));
    by_topic.truncate(10);

    // Urgent-only slice feeds the distribution panels.
    let urgent: Vec<&DocSummary> = docs
        .iter()
        .filter(|d| d.urgency >= URGENT_THRESHOLD)
        .collect();

    let mut sentiment_counts: OrderedGroups<usize> = OrderedGroups::new();
    for doc in &urgent {
        *sentiment_counts.entry(doc.sentiment.as_str()) += 1;
    }
    let sentiment_distribution: Vec<SentimentSlice> = sentiment_counts
        .into_vec()
        .into_iter()
        .map(|(sentiment, count)| SentimentSlice {
            percentage: if urgent.is_empty() {
                0.0
            } else {
                (count as f64 / urgent.len() as f64) * 100.0
            },
            sentiment,
            count,
        })
        .collect();

    let mut urgent_topics: OrderedGroups<usize> = OrderedGroups::new();
    for doc in &urgent {
        *urgent_topics.entry(doc.topic_label()) += 1;
    }
    let mut topic_distribution: Vec<TopicCount> = urgent_topics
        .into_vec()
        .into_iter()
        .map(|(topic, count)| TopicCount { topic, count })
        .collect();
    topic_distribution.sort_by(|a, b| b.count.cmp(&a.count));
    topic_distribution.truncate(8);

    #[derive(Default)]
    struct TopicUrgencyAcc {
        count: usize,
        total_urgency: i64,
    }
    let mut topic_urgency: OrderedGroups<TopicUrgencyAcc> = OrderedGroups::new();
    for doc in &urgent {
        let slot = topic_urgency.entry(doc.topic_label());
        slot.count += 1;
        slot.total_urgency += doc.urgency as i64;
    }
    let mut priority_issues: Vec<PriorityIssue> = topic_urgency
        .into_vec()
        .into_iter()
        .map(|(topic, acc)| PriorityIssue {
            topic,
            count: acc.count,
            urgency: ((acc.total_urgency as f64) / acc.count as f64).round() as i32,
        })
        .collect();
    priority_issues.sort_by(|a, b| b.urgency.cmp(&a.urgency));
    priority_issues.truncate(8);

    let mut region_counts: OrderedGroups<usize> = OrderedGroups::new();
    for doc in &urgent {
        *region_counts.entry(doc.region_label()) += 1;
    }
    let mut regional_distribution: Vec<RegionCount> = region_counts
        .into_vec()
        .into_iter()
        .map(|(region, count)| RegionCount { region, count })
        .collect();
    regional_distribution.sort_by(|a, b| b.count.cmp(&a.count));

    let urgency_distribution = UrgencySplit {
        high: docs.iter().filter(|d| d.urgency >= 80).count(),
        medium: docs
            .iter()
            .filter(|d| d.urgency >= 50 && d.urgency < 80)
            .count(),
        low: docs.iter().filter(|d| d.urgency < 50).count(),
    };

    #[derive(Default)]
    struct SentimentDay {
        positive: usize,
        negative: usize,
        neutral: usize,
    }
    let mut trend_days: OrderedGroups<SentimentDay> = OrderedGroups::new();
    for doc in docs {
        let slot = trend_days.entry(&day_key(doc.created_at));
        match doc.sentiment {
            Sentiment::Positive => slot.positive += 1,
            Sentiment::Negative => slot.negative += 1,
            Sentiment::Neutral => slot.neutral += 1,
        }
    }
    let mut sentiment_trends: Vec<SentimentTrendPoint> = trend_days
        .into_vec()
        .into_iter()
        .map(|(date, day)| SentimentTrendPoint {
            date,
            positive: day.positive,
            negative: day.negative,
            neutral: day.neutral,
        })
        .collect();
    sentiment_trends.sort_by(|a, b| a.date.cmp(&b.date));

    // Top critical posts: urgency desc, negative sentiment first, then engagement.
    let mut critical: Vec<&DocSummary> = urgent.clone();
    critical.sort_by(|a, b| {
        b.urgency
            .cmp(&a.urgency)
            .then_with(|| {
                let a_neg = a.sentiment == Sentiment::Negative;
                let b_neg = b.sentiment == Sentiment::Negative;
                b_neg.cmp(&a_neg)
            })
            .then_with(|| b.engagement.total_cmp(&a.engagement))
    });
    let top_posts: Vec<TopPost> = critical
        .iter()
        .take(10)
        .map(|doc| TopPost {
            id: doc.id,
            kind: doc.platform,
            username: doc.username.clone(),
            content: doc.content.clone(),
            engagement: doc.engagement,
            urgency: doc.urgency,
            sentiment: doc.sentiment,
        })
        .collect();

    // Paginated urgent activity feed, newest first.
    let mut feed: Vec<&DocSummary> = urgent.clone();
    feed.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    let recent_activity: Vec<ActivityItem> = feed
        .iter()
        .skip(page.offset())
        .take(page.items_per_page)
        .map(|doc| ActivityItem {
            id: doc.id,
            kind: doc.platform,
            username: doc.username.clone(),
            content: doc.content.clone(),
            topic: doc.topic_label().to_string(),
            date: doc.created_at,
            region: doc.region_label().to_string(),
            sentiment: doc.sentiment,
            urgency: doc.urgency,
            link: doc.link.clone(),
        })
        .collect();

    UnifiedDashboard {
        metrics: UnifiedMetrics {
            total_engagement,
            total_posts,
            avg_likes_per_post,
            avg_urgency,
            high_priority_count,
            critical_negative_count,
            most_critical_region,
            critical_topics_count,
            avg_daily_posts,
            regional_coverage: regions_seen.len(),
            citizen_reach: creators_seen.len(),
            department_mentions_count,
            active_discussions,
            public_sentiment,
            changes: MetricChanges {
                engagement: format!("{engagement_change:.1}"),
            },
        },
        growth_data,
        sentiment_distribution,
        topic_distribution,
        priority_issues,
        regional_distribution,
        urgency_distribution,
        sentiment_trends,
        top_posts,
        today_activity: TodayActivity {
            hourly,
            by_topic,
            total_today: today_docs.len(),
        },
        recent_activity,
        pagination: Pagination::new(&page, urgent.len()),
        date_range: DateRangeOut { from, to },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn doc(
        platform: Platform,
        urgency: i32,
        sentiment: Sentiment,
        region: &str,
        topic: &str,
        engagement: f64,
        created_at: DateTime<Utc>,
    ) -> DocSummary {
        DocSummary {
            id: Uuid::new_v4(),
            platform,
            username: "warga".to_string(),
            content: "laporan".to_string(),
            created_at,
            region: Some(region.to_string()),
            topic: Some(topic.to_string()),
            urgency,
            sentiment,
            engagement,
            link: None,
            keywords: vec![],
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
    }

    fn window() -> (DateTime<Utc>, DateTime<Utc>) {
        (now() - Duration::days(30), now())
    }

    #[test]
    fn headline_metrics_add_up() {
        let (from, to) = window();
        let docs = vec![
            doc(Platform::Social, 85, Sentiment::Negative, "Jakarta Utara", "Banjir", 200.0, now()),
            doc(Platform::Social, 40, Sentiment::Positive, "Jakarta Barat", "Transportasi", 50.0, now()),
            doc(Platform::News, 90, Sentiment::Negative, "Jakarta Utara", "Banjir", 60.0, now()),
        ];
        let out = unified_dashboard(&docs, 0, from, to, now(), PageParams::default());

        assert_eq!(out.metrics.total_posts, 3);
        assert_eq!(out.metrics.high_priority_count, 2);
        assert_eq!(out.metrics.critical_negative_count, 2);
        assert_eq!(out.metrics.most_critical_region, "Jakarta Utara");
        assert_eq!(out.metrics.critical_topics_count, 1);
        assert_eq!(out.metrics.avg_likes_per_post, 125);
        assert_eq!(out.metrics.active_discussions, 2);
        assert_eq!(out.metrics.public_sentiment, 33);
    }

    #[test]
    fn urgency_split_uses_search_bands() {
        let (from, to) = window();
        let docs = vec![
            doc(Platform::Social, 85, Sentiment::Neutral, "A", "T", 0.0, now()),
            doc(Platform::Social, 60, Sentiment::Neutral, "A", "T", 0.0, now()),
            doc(Platform::Social, 30, Sentiment::Neutral, "A", "T", 0.0, now()),
        ];
        let out = unified_dashboard(&docs, 0, from, to, now(), PageParams::default());
        assert_eq!(out.urgency_distribution.high, 1);
        assert_eq!(out.urgency_distribution.medium, 1);
        assert_eq!(out.urgency_distribution.low, 1);
    }

    #[test]
    fn top_posts_rank_negative_before_neutral_at_equal_urgency() {
        let (from, to) = window();
        let docs = vec![
            doc(Platform::Social, 90, Sentiment::Neutral, "A", "T", 500.0, now()),
            doc(Platform::Social, 90, Sentiment::Negative, "A", "T", 10.0, now()),
        ];
        let out = unified_dashboard(&docs, 0, from, to, now(), PageParams::default());
        assert_eq!(out.top_posts[0].sentiment, Sentiment::Negative);
    }

    #[test]
    fn engagement_change_against_previous_period() {
        let (from, to) = window();
        let docs = vec![
            doc(Platform::Social, 10, Sentiment::Neutral, "A", "T", 0.0, now()),
            doc(Platform::Social, 10, Sentiment::Neutral, "A", "T", 0.0, now()),
            doc(Platform::Social, 10, Sentiment::Neutral, "A", "T", 0.0, now()),
        ];
        let out = unified_dashboard(&docs, 2, from, to, now(), PageParams::default());
        assert_eq!(out.metrics.changes.engagement, "50.0");
    }

    #[test]
    fn activity_feed_is_urgent_only_and_paginated() {
        let (from, to) = window();
        let mut docs = Vec::new();
        for i in 0..15 {
            docs.push(doc(
                Platform::Social,
                75,
                Sentiment::Neutral,
                "A",
                "T",
                0.0,
                now() - Duration::hours(i),
            ));
        }
        docs.push(doc(Platform::Social, 10, Sentiment::Neutral, "A", "T", 0.0, now()));

        let page = PageParams { page: 2, items_per_page: 10 };
        let out = unified_dashboard(&docs, 0, from, to, now(), page);
        assert_eq!(out.recent_activity.len(), 5);
        assert_eq!(out.pagination.total_items, 15);
        assert_eq!(out.pagination.total_pages, 2);
    }
}
