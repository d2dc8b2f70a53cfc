// Search filter state shared between the search endpoint and clients.
//
// All dimensions combine with logical AND; the urgency bands within the
// filter OR together. Empty values are omitted from the generated query.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::types::{Sentiment, UrgencyBand};

/// Inclusive date range filter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DateRange {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

/// Filter dimensions accepted by the search endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterState {
    pub date_range: Option<DateRange>,
    pub categories: Vec<String>,
    pub urgency_level: Vec<UrgencyBand>,
    pub sentiment: Vec<Sentiment>,
    pub region: Vec<String>,
}

impl FilterState {
    pub fn is_empty(&self) -> bool {
        self.date_range.is_none()
            && self.categories.is_empty()
            && self.urgency_level.is_empty()
            && self.sentiment.is_empty()
            && self.region.is_empty()
    }

    /// Serialize to query parameters. Empty dimensions produce no pairs, so
    /// re-parsing yields the same effective filter.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(range) = &self.date_range {
            pairs.push(("dateFrom".to_string(), range.from.to_rfc3339()));
            pairs.push(("dateTo".to_string(), range.to.to_rfc3339()));
        }
        for category in &self.categories {
            pairs.push(("category".to_string(), category.clone()));
        }
        for band in &self.urgency_level {
            pairs.push(("urgency".to_string(), band.as_str().to_string()));
        }
        for sentiment in &self.sentiment {
            pairs.push(("sentiment".to_string(), sentiment.as_str().to_string()));
        }
        for region in &self.region {
            pairs.push(("region".to_string(), region.clone()));
        }
        pairs
    }

    /// Parse filter state back from query parameters. Unknown keys and
    /// unparseable values are ignored rather than rejected.
    pub fn from_query_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut state = FilterState::default();
        let mut from = None;
        let mut to = None;
        for (key, value) in pairs {
            match key {
                "dateFrom" => from = DateTime::parse_from_rfc3339(value).ok(),
                "dateTo" => to = DateTime::parse_from_rfc3339(value).ok(),
                "category" => state.categories.push(value.to_string()),
                "urgency" => {
                    if let Some(band) = UrgencyBand::parse(value) {
                        state.urgency_level.push(band);
                    }
                }
                "sentiment" => state.sentiment.push(Sentiment::parse(value)),
                "region" => state.region.push(value.to_string()),
                _ => {}
            }
        }
        if let (Some(from), Some(to)) = (from, to) {
            state.date_range = Some(DateRange {
                from: from.with_timezone(&Utc),
                to: to.with_timezone(&Utc),
            });
        }
        state
    }
}
