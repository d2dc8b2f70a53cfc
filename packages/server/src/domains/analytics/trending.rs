// Trending keyword extraction over recent news coverage.

use serde::Serialize;

use crate::domains::analytics::OrderedGroups;
use crate::domains::news::NewsArticle;

/// One trending keyword with its document count and urgency profile.
#[derive(Debug, Clone, Serialize)]
pub struct TrendingKeyword {
    pub key: String,
    pub doc_count: usize,
    pub max_urgency: i32,
    pub avg_urgency: i32,
}

#[derive(Default)]
struct KeywordAcc {
    doc_count: usize,
    max_urgency: i32,
    urgency_sum: i64,
}

/// Count keyword occurrences across articles; empty keywords are dropped.
/// Sorted by frequency descending, capped at `top_n`.
pub fn trending_keywords(articles: &[NewsArticle], top_n: usize) -> Vec<TrendingKeyword> {
    let mut groups: OrderedGroups<KeywordAcc> = OrderedGroups::new();
    for article in articles {
        for keyword in &article.keywords {
            if keyword.is_empty() {
                continue;
            }
            let acc = groups.entry(keyword);
            acc.doc_count += 1;
            acc.max_urgency = acc.max_urgency.max(article.urgency);
            acc.urgency_sum += article.urgency as i64;
        }
    }

    let mut trending: Vec<TrendingKeyword> = groups
        .into_vec()
        .into_iter()
        .map(|(key, acc)| TrendingKeyword {
            key,
            doc_count: acc.doc_count,
            max_urgency: acc.max_urgency,
            avg_urgency: (acc.urgency_sum as f64 / acc.doc_count as f64).round() as i32,
        })
        .collect();

    trending.sort_by(|a, b| b.doc_count.cmp(&a.doc_count));
    trending.truncate(top_n);
    trending
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn article(keywords: &[&str], urgency: i32) -> NewsArticle {
        NewsArticle {
            id: Uuid::new_v4(),
            title: "t".to_string(),
            description: None,
            content: None,
            creator: None,
            url: None,
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            created_at: Utc::now(),
            region: None,
            topic: None,
            urgency,
            sentiment: None,
            engagement_rate: 0.0,
        }
    }

    #[test]
    fn counts_and_urgency_profile() {
        let articles = vec![
            article(&["flood", "traffic"], 90),
            article(&["flood"], 40),
            article(&["", "traffic"], 60),
        ];
        let trending = trending_keywords(&articles, 10);
        assert_eq!(trending.len(), 2);
        assert_eq!(trending[0].key, "flood");
        assert_eq!(trending[0].doc_count, 2);
        assert_eq!(trending[0].max_urgency, 90);
        assert_eq!(trending[0].avg_urgency, 65);
        assert_eq!(trending[1].key, "traffic");
        assert_eq!(trending[1].max_urgency, 90);
    }
}
