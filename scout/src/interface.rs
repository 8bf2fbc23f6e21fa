//! Scout public interface
//!
//! Shared types handed to the hosting page: record types, search requests and
//! outcomes, the error type, and the `HelpSearchApi` service trait.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::activation::Activation;
use crate::models::SearchRecord;
use crate::search::{SearchFilters, SortKey};
use crate::suggestions::SuggestionPanel;

// ═══════════════════════════════════════════════════════════════════════════════
// ENUMS
// ═══════════════════════════════════════════════════════════════════════════════

/// Closed set of record types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordType {
    Article,
    Faq,
    Resource,
    Featured,
}

impl RecordType {
    pub const ALL: [RecordType; 4] = [
        RecordType::Article,
        RecordType::Faq,
        RecordType::Resource,
        RecordType::Featured,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RecordType::Article => "article",
            RecordType::Faq => "faq",
            RecordType::Resource => "resource",
            RecordType::Featured => "featured",
        }
    }

    /// Parse a type label. Unknown labels are `None`, never an error.
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "article" => Some(RecordType::Article),
            "faq" => Some(RecordType::Faq),
            "resource" => Some(RecordType::Resource),
            "featured" => Some(RecordType::Featured),
            _ => None,
        }
    }

    /// Label for the filter panel
    pub fn display_name(self) -> &'static str {
        match self {
            RecordType::Article => "Articles",
            RecordType::Faq => "FAQs",
            RecordType::Resource => "Resources",
            RecordType::Featured => "Featured",
        }
    }

    pub fn icon(self) -> IconKind {
        match self {
            RecordType::Article => IconKind::Document,
            RecordType::Faq => IconKind::Question,
            RecordType::Resource => IconKind::Download,
            RecordType::Featured => IconKind::Star,
        }
    }
}

impl std::fmt::Display for RecordType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Icon shown next to a result row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconKind {
    Document,
    Question,
    Download,
    Star,
}

// ═══════════════════════════════════════════════════════════════════════════════
// RECORDS (Structs)
// ═══════════════════════════════════════════════════════════════════════════════

/// One search invocation: query text plus the filter panel and sort selector state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchRequest {
    pub query: String,
    pub filters: SearchFilters,
    pub sort: SortKey,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    pub fn with_filters(mut self, filters: SearchFilters) -> Self {
        self.filters = filters;
        self
    }
}

/// A scored record. The score belongs to this query only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    #[serde(flatten)]
    pub record: SearchRecord,
    pub relevance_score: u32,
}

/// Ordered, truncated result list for one query
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults {
    pub query: String,
    pub hits: Vec<SearchHit>,
    /// Records that passed filters and scoring before truncation
    pub total_matches: u64,
}

impl SearchResults {
    pub fn empty(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            hits: Vec::new(),
            total_matches: 0,
        }
    }
}

/// What the result area should show
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum SearchOutcome {
    /// Empty query: canned suggestions and recent queries, nothing was scored
    Suggestions(SuggestionPanel),
    /// The query was scored but nothing qualified
    NoResults {
        query: String,
        alternatives: Vec<String>,
    },
    Results(SearchResults),
}

impl SearchOutcome {
    /// Result rows to render (empty for the suggestion and no-result states)
    pub fn hits(&self) -> &[SearchHit] {
        match self {
            SearchOutcome::Results(results) => &results.hits,
            SearchOutcome::Suggestions(_) | SearchOutcome::NoResults { .. } => &[],
        }
    }

    /// Whether this outcome came from an actual query rather than the idle panel
    pub fn is_query(&self) -> bool {
        !matches!(self, SearchOutcome::Suggestions(_))
    }
}

/// Error type for scout operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScoutError {
    #[error("Operation cancelled")]
    Cancelled,
    #[error("Record not found: {0}")]
    NotFound(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Source collection error: {0}")]
    Sources(String),
}

// ═══════════════════════════════════════════════════════════════════════════════
// SERVICE INTERFACE
// ═══════════════════════════════════════════════════════════════════════════════

/// The interface the hosting page talks to. Implemented by `HelpCenterSearch`.
#[async_trait::async_trait]
pub trait HelpSearchApi: Send + Sync {
    /// Score, filter and sort the index for one request.
    /// An empty query returns the suggestion panel without scoring.
    async fn search(&self, request: SearchRequest) -> Result<SearchOutcome, ScoutError>;

    /// Resolve what activating a result should do
    fn select(&self, record_id: &str) -> Result<Activation, ScoutError>;

    /// Popular searches, quick suggestions and recent queries
    fn suggestions(&self) -> SuggestionPanel;

    /// Distinct categories in index order, for the filter panel
    fn categories(&self) -> Vec<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_type_parse_roundtrips_labels() {
        for ty in RecordType::ALL {
            assert_eq!(RecordType::parse(ty.as_str()), Some(ty));
        }
        assert_eq!(RecordType::parse(" FAQ "), Some(RecordType::Faq));
        assert_eq!(RecordType::parse("video"), None);
    }

    #[test]
    fn test_record_type_icons_are_distinct() {
        let icons: Vec<IconKind> = RecordType::ALL.iter().map(|t| t.icon()).collect();
        for (i, a) in icons.iter().enumerate() {
            for b in &icons[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_record_type_serde_lowercase() {
        let json = serde_json::to_string(&RecordType::Featured).unwrap();
        assert_eq!(json, "\"featured\"");
        assert!(serde_json::from_str::<RecordType>("\"webinar\"").is_err());
    }

    #[test]
    fn test_request_with_unknown_type_label_deserializes() {
        let request: SearchRequest =
            serde_json::from_str(r#"{"query":"referral","filters":{"types":["video"]},"sort":"date"}"#)
                .unwrap();
        assert_eq!(request.query, "referral");
        assert_eq!(request.sort, SortKey::Date);
        assert!(!request.filters.is_empty());
        assert_eq!(request.filters, SearchFilters::new().with_type_label("video"));
    }

    #[test]
    fn test_outcome_hits_empty_for_non_result_states() {
        let outcome = SearchOutcome::NoResults {
            query: "zzz".into(),
            alternatives: vec!["a".into()],
        };
        assert!(outcome.hits().is_empty());
        assert!(outcome.is_query());
    }
}
