// Citizen-engagement overview metrics computed from recent chat logs.

use std::collections::HashSet;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::common::Sentiment;
use crate::domains::engagement::ChatLog;

/// Overview card metrics for the engagement dashboard.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EngagementOverview {
    pub critical_issues: usize,
    pub active_sessions: usize,
    pub response_rate: f64,
    pub avg_response_time_ms: f64,
    pub sentiment_score: f64,
    pub total_interactions: usize,
    pub trends: Vec<EngagementTrendPoint>,
}

/// One day of the trailing trend series.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EngagementTrendPoint {
    pub timestamp: DateTime<Utc>,
    pub response_rate: f64,
    pub sentiment: f64,
    pub urgency: f64,
}

/// Compute the overview from logs of the trailing window, with a per-day
/// trend series ending at `now`.
pub fn engagement_overview(logs: &[ChatLog], now: DateTime<Utc>) -> EngagementOverview {
    let total = logs.len();
    let critical_issues = logs.iter().filter(|log| log.urgency >= 70).count();
    let active_sessions = logs
        .iter()
        .map(|log| log.user_id.as_str())
        .collect::<HashSet<_>>()
        .len();
    let responded = logs.iter().filter(|log| log.bot_response.is_some()).count();
    let response_rate = if total > 0 {
        responded as f64 / total as f64 * 100.0
    } else {
        0.0
    };
    let avg_response_time_ms = if total > 0 {
        logs.iter().map(|log| log.response_time_ms as f64).sum::<f64>() / total as f64
    } else {
        0.0
    };
    let positive = logs
        .iter()
        .filter(|log| Sentiment::parse_opt(log.sentiment.as_deref()) == Sentiment::Positive)
        .count();
    let sentiment_score = if total > 0 {
        positive as f64 / total as f64 * 10.0
    } else {
        0.0
    };

    let trends = (0..7)
        .map(|offset| {
            let day_start = (now - Duration::days(6 - offset))
                .date_naive()
                .and_hms_opt(0, 0, 0)
                .expect("midnight is valid")
                .and_utc();
            let day_end = day_start + Duration::days(1);
            let day_logs: Vec<&ChatLog> = logs
                .iter()
                .filter(|log| log.created_at >= day_start && log.created_at < day_end)
                .collect();
            let day_total = day_logs.len();
            let day_responded = day_logs.iter().filter(|log| log.bot_response.is_some()).count();
            let day_positive = day_logs
                .iter()
                .filter(|log| Sentiment::parse_opt(log.sentiment.as_deref()) == Sentiment::Positive)
                .count();
            let day_urgency_sum: i64 = day_logs.iter().map(|log| log.urgency as i64).sum();
            EngagementTrendPoint {
                timestamp: day_start,
                response_rate: ratio_pct(day_responded, day_total),
                sentiment: ratio_pct(day_positive, day_total),
                urgency: if day_total > 0 {
                    day_urgency_sum as f64 / day_total as f64
                } else {
                    0.0
                },
            }
        })
        .collect();

    EngagementOverview {
        critical_issues,
        active_sessions,
        response_rate,
        avg_response_time_ms,
        sentiment_score,
        total_interactions: total,
        trends,
    }
}

fn ratio_pct(part: usize, whole: usize) -> f64 {
    if whole > 0 {
        part as f64 / whole as f64 * 100.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn log(user: &str, urgency: i32, sentiment: &str, responded: bool, now: DateTime<Utc>) -> ChatLog {
        ChatLog {
            id: Uuid::new_v4(),
            user_id: user.to_string(),
            username: None,
            message_text: "msg".to_string(),
            bot_response: responded.then(|| "ok".to_string()),
            response_time_ms: 1200,
            created_at: now,
            region: None,
            topic: None,
            urgency,
            sentiment: Some(sentiment.to_string()),
        }
    }

    #[test]
    fn overview_counts_unique_users_and_critical_issues() {
        let now = Utc::now();
        let logs = vec![
            log("u1", 90, "Negative", true, now),
            log("u1", 20, "Positive", true, now),
            log("u2", 75, "Neutral", false, now),
        ];
        let overview = engagement_overview(&logs, now);
        assert_eq!(overview.active_sessions, 2);
        assert_eq!(overview.critical_issues, 2);
        assert_eq!(overview.total_interactions, 3);
        assert!((overview.response_rate - 66.666).abs() < 0.01);
        assert_eq!(overview.trends.len(), 7);
    }
}
