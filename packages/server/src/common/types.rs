// Common types used across multiple domains and layers
//
// These types are shared between the kernel and domain layers to avoid
// circular dependencies while maintaining type safety.

use serde::{Deserialize, Serialize};

/// Bucket label for records missing a categorical value.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Sentiment label attached to collected posts, articles and chat logs.
///
/// Upstream classifiers occasionally emit unexpected casing or values;
/// anything unrecognized buckets to `Neutral`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    pub fn parse(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "positive" => Sentiment::Positive,
            "negative" => Sentiment::Negative,
            _ => Sentiment::Neutral,
        }
    }

    pub fn parse_opt(value: Option<&str>) -> Self {
        value.map(Sentiment::parse).unwrap_or(Sentiment::Neutral)
    }

    /// Weight used when collapsing a sentiment distribution to a single
    /// 0-100 score.
    pub fn score(self) -> u32 {
        match self {
            Sentiment::Positive => 100,
            Sentiment::Neutral => 50,
            Sentiment::Negative => 0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Neutral => "Neutral",
            Sentiment::Negative => "Negative",
        }
    }
}

/// Urgency band used by the search filters and the unified dashboard split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UrgencyBand {
    High,
    Medium,
    Low,
}

impl UrgencyBand {
    /// Deterministic classification: >= 80 High, 50-79 Medium, < 50 Low.
    pub fn classify(urgency: i32) -> Self {
        if urgency >= 80 {
            UrgencyBand::High
        } else if urgency >= 50 {
            UrgencyBand::Medium
        } else {
            UrgencyBand::Low
        }
    }

    /// Inclusive lower bound and exclusive upper bound of the band.
    pub fn range(self) -> (i32, Option<i32>) {
        match self {
            UrgencyBand::High => (80, None),
            UrgencyBand::Medium => (50, Some(80)),
            UrgencyBand::Low => (0, Some(50)),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            UrgencyBand::High => "High",
            UrgencyBand::Medium => "Medium",
            UrgencyBand::Low => "Low",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "high" => Some(UrgencyBand::High),
            "medium" => Some(UrgencyBand::Medium),
            "low" => Some(UrgencyBand::Low),
            _ => None,
        }
    }
}

/// Content source a record was collected from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Collectors historically labeled this source "tiktok".
    #[serde(alias = "tiktok")]
    Social,
    News,
}

impl Platform {
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Social => "Social",
            Platform::News => "News",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "social" | "tiktok" => Some(Platform::Social),
            "news" => Some(Platform::News),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urgency_band_boundaries() {
        assert_eq!(UrgencyBand::classify(100), UrgencyBand::High);
        assert_eq!(UrgencyBand::classify(80), UrgencyBand::High);
        assert_eq!(UrgencyBand::classify(79), UrgencyBand::Medium);
        assert_eq!(UrgencyBand::classify(50), UrgencyBand::Medium);
        assert_eq!(UrgencyBand::classify(49), UrgencyBand::Low);
        assert_eq!(UrgencyBand::classify(0), UrgencyBand::Low);
    }

    #[test]
    fn scenario_one_per_band() {
        let urgencies = [85, 60, 30];
        let high = urgencies
            .iter()
            .filter(|&&u| UrgencyBand::classify(u) == UrgencyBand::High)
            .count();
        let medium = urgencies
            .iter()
            .filter(|&&u| UrgencyBand::classify(u) == UrgencyBand::Medium)
            .count();
        let low = urgencies
            .iter()
            .filter(|&&u| UrgencyBand::classify(u) == UrgencyBand::Low)
            .count();
        assert_eq!((high, medium, low), (1, 1, 1));
    }

    #[test]
    fn sentiment_parse_tolerates_unknown_labels() {
        assert_eq!(Sentiment::parse("POSITIVE"), Sentiment::Positive);
        assert_eq!(Sentiment::parse("negative"), Sentiment::Negative);
        assert_eq!(Sentiment::parse("mixed"), Sentiment::Neutral);
        assert_eq!(Sentiment::parse_opt(None), Sentiment::Neutral);
    }
}
