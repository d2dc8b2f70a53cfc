// Keyword/hashtag cloud merged across posts and news coverage.

use serde::{Deserialize, Serialize};

use crate::common::Sentiment;
use crate::domains::analytics::OrderedGroups;
use crate::domains::news::NewsArticle;
use crate::domains::posts::Post;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeywordKind {
    Hashtag,
    Keyword,
}

/// Which sources feed the cloud.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordSource {
    Hashtags,
    Keywords,
    All,
}

impl KeywordSource {
    pub fn parse(value: &str) -> Self {
        match value {
            "hashtags" => KeywordSource::Hashtags,
            "keywords" => KeywordSource::Keywords,
            _ => KeywordSource::All,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordEntry {
    pub keyword: String,
    pub count: usize,
    #[serde(rename = "type")]
    pub kind: KeywordKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_urgency: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordTypeCounts {
    pub hashtags: usize,
    pub keywords: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordStats {
    pub total: usize,
    pub total_mentions: usize,
    pub avg_mentions: f64,
    pub by_type: KeywordTypeCounts,
    pub high_urgency_keywords: usize,
}

#[derive(Default)]
struct KeywordAcc {
    display: String,
    count: usize,
    is_hashtag: bool,
    urgency_sum: f64,
    urgency_count: usize,
    sentiments: [usize; 3],
}

impl KeywordAcc {
    fn record_sentiment(&mut self, sentiment: Sentiment) {
        let slot = match sentiment {
            Sentiment::Positive => 0,
            Sentiment::Neutral => 1,
            Sentiment::Negative => 2,
        };
        self.sentiments[slot] += 1;
    }

    fn dominant_sentiment(&self) -> Option<&'static str> {
        let total: usize = self.sentiments.iter().sum();
        if total == 0 {
            return None;
        }
        let (index, _) = self
            .sentiments
            .iter()
            .enumerate()
            .max_by_key(|(_, count)| **count)?;
        Some(match index {
            0 => "Positive",
            1 => "Neutral",
            _ => "Negative",
        })
    }
}

/// Build the cloud: hashtags from posts, contextual keywords from posts and
/// news, merged case-insensitively. Sorted by count descending (first-seen
/// tie-break), capped at `limit`.
pub fn keyword_cloud(
    posts: &[Post],
    news: &[NewsArticle],
    source: KeywordSource,
    limit: usize,
) -> (Vec<KeywordEntry>, KeywordStats) {
    let mut groups: OrderedGroups<KeywordAcc> = OrderedGroups::new();

    if matches!(source, KeywordSource::Hashtags | KeywordSource::All) {
        for post in posts {
            for hashtag in &post.hashtags {
                if hashtag.is_empty() {
                    continue;
                }
                let acc = groups.entry(&hashtag.to_lowercase());
                if acc.display.is_empty() {
                    acc.display = hashtag.clone();
                }
                acc.count += 1;
                acc.is_hashtag = true;
            }
        }
    }

    if matches!(source, KeywordSource::Keywords | KeywordSource::All) {
        for post in posts {
            let sentiment = Sentiment::parse_opt(post.sentiment.as_deref());
            for keyword in &post.keywords {
                record_keyword(&mut groups, keyword, post.urgency, sentiment);
            }
        }
        for article in news {
            let sentiment = Sentiment::parse_opt(article.sentiment.as_deref());
            for keyword in &article.keywords {
                record_keyword(&mut groups, keyword, article.urgency, sentiment);
            }
        }
    }

    let mut entries: Vec<KeywordEntry> = groups
        .into_vec()
        .into_iter()
        .map(|(_, acc)| KeywordEntry {
            keyword: acc.display.clone(),
            count: acc.count,
            kind: if acc.is_hashtag {
                KeywordKind::Hashtag
            } else {
                KeywordKind::Keyword
            },
            avg_urgency: (acc.urgency_count > 0)
                .then(|| acc.urgency_sum / acc.urgency_count as f64),
            sentiment: acc.dominant_sentiment(),
        })
        .collect();

    entries.sort_by(|a, b| b.count.cmp(&a.count));
    entries.truncate(limit);

    let total_mentions: usize = entries.iter().map(|e| e.count).sum();
    let hashtags = entries
        .iter()
        .filter(|e| e.kind == KeywordKind::Hashtag)
        .count();
    let stats = KeywordStats {
        total: entries.len(),
        total_mentions,
        avg_mentions: if entries.is_empty() {
            0.0
        } else {
            total_mentions as f64 / entries.len() as f64
        },
        by_type: KeywordTypeCounts {
            hashtags,
            keywords: entries.len() - hashtags,
        },
        high_urgency_keywords: entries
            .iter()
            .filter(|e| e.avg_urgency.is_some_and(|u| u >= 70.0))
            .count(),
    };

    (entries, stats)
}

fn record_keyword(
    groups: &mut OrderedGroups<KeywordAcc>,
    keyword: &str,
    urgency: i32,
    sentiment: Sentiment,
) {
    if keyword.is_empty() {
        return;
    }
    let acc = groups.entry(&keyword.to_lowercase());
    if acc.display.is_empty() {
        acc.display = keyword.to_string();
    }
    acc.count += 1;
    acc.urgency_sum += urgency as f64;
    acc.urgency_count += 1;
    acc.record_sentiment(sentiment);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn post(hashtags: &[&str], keywords: &[&str], urgency: i32, sentiment: &str) -> Post {
        Post {
            id: Uuid::new_v4(),
            username: "u".to_string(),
            caption: String::new(),
            hashtags: hashtags.iter().map(|s| s.to_string()).collect(),
            mentions: vec![],
            keywords: keywords.iter().map(|s| s.to_string()).collect(),
            created_at: Utc::now(),
            region: None,
            topic: None,
            urgency,
            sentiment: Some(sentiment.to_string()),
            like_count: 0,
            link: None,
            thumbnail_url: None,
            post_type: None,
        }
    }

    #[test]
    fn case_insensitive_merge_keeps_first_spelling() {
        let posts = vec![
            post(&["Banjir"], &[], 80, "Negative"),
            post(&["banjir"], &[], 60, "Negative"),
        ];
        let (entries, stats) = keyword_cloud(&posts, &[], KeywordSource::All, 50);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].keyword, "Banjir");
        assert_eq!(entries[0].count, 2);
        assert_eq!(stats.by_type.hashtags, 1);
    }

    #[test]
    fn keyword_urgency_and_dominant_sentiment() {
        let posts = vec![
            post(&[], &["macet"], 90, "Negative"),
            post(&[], &["macet"], 50, "Negative"),
            post(&[], &["macet"], 40, "Positive"),
        ];
        let (entries, stats) = keyword_cloud(&posts, &[], KeywordSource::Keywords, 50);
        assert_eq!(entries[0].avg_urgency, Some(60.0));
        assert_eq!(entries[0].sentiment, Some("Negative"));
        assert_eq!(stats.high_urgency_keywords, 0);
    }
}
