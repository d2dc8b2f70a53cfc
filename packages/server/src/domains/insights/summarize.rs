// Prompt construction and response parsing for the summarization proxy.
//
// The generative model is asked for a JSON object; responses frequently
// arrive wrapped in Markdown code fences, so extraction tries the fenced
// form first and falls back to a bare-JSON scan. Parse failure keeps the
// raw text for operator diagnosis.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domains::insights::InsightRecord;

lazy_static! {
    static ref FENCED_JSON: Regex =
        Regex::new(r"(?s)```(?:json)?\s*(\{.*?\})\s*```").expect("valid regex");
    static ref BARE_JSON: Regex = Regex::new(r"(?s)(\{.*\})").expect("valid regex");
}

/// One post handed to the summarization proxy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryInput {
    pub full_text: String,
    #[serde(default)]
    pub contextual_content: String,
}

/// Failure to locate or parse a JSON object in the model response.
/// Carries the raw text so the caller can surface it.
#[derive(Debug)]
pub struct SummaryParseError {
    pub raw: String,
}

/// Build the fixed summarization prompt over a set of posts.
pub fn build_summary_prompt(posts: &[SummaryInput]) -> String {
    let posts_text = posts
        .iter()
        .enumerate()
        .map(|(index, post)| {
            format!(
                "Post {}:\n{}\nContext: {}",
                index + 1,
                post.full_text,
                post.contextual_content
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        r#"Given a list of social posts, analyze and summarize the main issues, problems, and provide suggestions. Output should be in JSON format.

Guidelines:

1. Main Issue: Identify the primary theme or topic that appears across multiple posts
2. Problem: Describe the specific problems or concerns raised in the posts
3. Suggestion: Provide actionable recommendations to address the issues
4. Urgency Score: Rate from 0-100 based on the severity and time-sensitivity of the issues

Return the output in JSON format:
{{
  "main_issue": "Brief description of the main issue",
  "problem": "Detailed description of the problems",
  "suggestion": "Actionable suggestions",
  "urgency_score": "0-100"
}}

Social Posts:
{posts_text}"#
    )
}

/// Build the executive-summary prompt from the day's top insights.
pub fn build_executive_summary_prompt(
    social: &[InsightRecord],
    news: &[InsightRecord],
    date: &str,
) -> String {
    let social_text = if social.is_empty() {
        "No social media data available".to_string()
    } else {
        format_insights(social, "Social")
    };
    let news_text = if news.is_empty() {
        "No news data available".to_string()
    } else {
        format_insights(news, "News")
    };

    format!(
        r#"You are a senior analyst for a government strategic-intelligence platform.

Your task: write a comprehensive EXECUTIVE SUMMARY for {date} based on the insight data below, collected from social media and news coverage.

**Social Media Insights:**
{social_text}

**News Insights:**
{news_text}

**Output format (Markdown):**

## Executive Summary - {date}

### Critical Issues (Urgency >= 80)
List at most 3 of the most critical issues, each with the topic, the main issue, a short problem description and a specific recommendation. If there are none, state that no critical issues require immediate attention.

### Needs Attention (Urgency 60-79)
List at most 5 issues, one line each: topic, main issue and a short suggestion. If there are none, say so.

### Trends & Key Insights
Analyze patterns across the data: dominant topics, public sentiment, which platform carries the more urgent issues, and the most affected areas.

### Priority Actions
Give 3-5 prioritized action items based on urgency and impact, each with its urgency score.

### Notes
Any additional insight or warning decision makers should see.

Keep the language formal and the recommendations specific. Prioritize by urgency score. If the data is limited, acknowledge it and focus on what is present."#
    )
}

fn format_insights(insights: &[InsightRecord], platform: &str) -> String {
    insights
        .iter()
        .enumerate()
        .map(|(index, insight)| {
            format!(
                "{}. [{}] Topic: {}\n   Issue: {}\n   Problem: {}\n   Suggestion: {}\n   Urgency: {}/100",
                index + 1,
                platform,
                insight.topic.as_deref().unwrap_or("General"),
                insight.main_issue,
                insight.problem,
                insight.suggestion,
                insight.urgency_score
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Extract the JSON object embedded in a model response.
///
/// A response wrapped in a ```json fence parses to the same value as the
/// bare payload.
pub fn extract_json_payload(text: &str) -> Result<Value, SummaryParseError> {
    let candidate = FENCED_JSON
        .captures(text)
        .or_else(|| BARE_JSON.captures(text))
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str())
        .unwrap_or(text);

    serde_json::from_str(candidate).map_err(|_| SummaryParseError {
        raw: text.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD: &str = r#"{"main_issue": "Flooding", "problem": "Recurring floods", "suggestion": "Dredge canals", "urgency_score": 85}"#;

    #[test]
    fn fenced_and_bare_responses_parse_identically() {
        let fenced = format!("Here is the analysis:\n```json\n{PAYLOAD}\n```\nDone.");
        let bare = PAYLOAD.to_string();

        let from_fenced = extract_json_payload(&fenced).unwrap();
        let from_bare = extract_json_payload(&bare).unwrap();
        assert_eq!(from_fenced, from_bare);
        assert_eq!(from_fenced["urgency_score"], 85);
    }

    #[test]
    fn fence_without_language_tag_parses() {
        let fenced = format!("```\n{PAYLOAD}\n```");
        assert!(extract_json_payload(&fenced).is_ok());
    }

    #[test]
    fn parse_failure_keeps_raw_text() {
        let err = extract_json_payload("the model refused").unwrap_err();
        assert_eq!(err.raw, "the model refused");
    }

    #[test]
    fn prompt_interpolates_every_post() {
        let posts = vec![
            SummaryInput {
                full_text: "road closed".to_string(),
                contextual_content: "traffic".to_string(),
            },
            SummaryInput {
                full_text: "water rising".to_string(),
                contextual_content: "flood".to_string(),
            },
        ];
        let prompt = build_summary_prompt(&posts);
        assert!(prompt.contains("Post 1:\nroad closed"));
        assert!(prompt.contains("Post 2:\nwater rising"));
        assert!(prompt.contains("urgency_score"));
    }
}
