//! Core data models for the help-center search
//!
//! Source collections arrive from the hosting page with their own field names.
//! The index builder projects them into `SearchRecord`, the one shape the
//! scorer and the filter/sort pipeline understand.

use serde::{Deserialize, Serialize};

use crate::interface::{RecordType, ScoutError};

// ─────────────────────────────────────────────────────────────────────────────
// SEARCH RECORD (derived, never persisted)
// ─────────────────────────────────────────────────────────────────────────────

/// One searchable unit after normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRecord {
    pub id: String,
    pub title: String,
    pub content: String,
    pub category: String,
    #[serde(rename = "type")]
    pub record_type: RecordType,
    pub tags: Vec<String>,
    /// `yyyy-mm-dd` or a full timestamp, kept as supplied
    pub last_updated: String,
    pub views: Option<u64>,
    /// Helpfulness percentage (0-100)
    pub helpful: Option<u32>,
    pub url: Option<String>,
}

impl SearchRecord {
    pub fn views_or_zero(&self) -> u64 {
        self.views.unwrap_or(0)
    }

    pub fn helpful_or_zero(&self) -> u32 {
        self.helpful.unwrap_or(0)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// SOURCE COLLECTIONS (host supplied)
// ─────────────────────────────────────────────────────────────────────────────

/// Featured article card shown at the top of the help center
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FeaturedArticle {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub category: String,
    pub read_time: String,
    pub last_updated: String,
    pub views: Option<u64>,
    pub helpful: Option<u32>,
    pub url: Option<String>,
}

/// A help article inside an `ArticleCategory`. The category label comes from
/// the owning category, not from the article itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HelpArticle {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub tags: Vec<String>,
    pub last_updated: String,
    pub views: Option<u64>,
    pub helpful: Option<u32>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ArticleCategory {
    pub id: String,
    pub title: String,
    pub articles: Vec<HelpArticle>,
}

/// Downloadable resource (guides, templates, decks)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DownloadableResource {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    /// File format label such as "PDF" or "XLSX"
    pub format: String,
    pub size: String,
    pub last_updated: String,
    pub downloads: Option<u64>,
    pub url: Option<String>,
}

/// Static FAQ entry bundled with the help center
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FaqEntry {
    pub id: String,
    pub question: String,
    pub answer: String,
    pub category: String,
    pub tags: Vec<String>,
}

/// The host-supplied collections the index is built from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SourceCollections {
    pub featured: Vec<FeaturedArticle>,
    pub categories: Vec<ArticleCategory>,
    pub resources: Vec<DownloadableResource>,
}

impl SourceCollections {
    /// Parse collections from a JSON document. Missing lists and missing
    /// optional fields default; only structurally invalid JSON is an error.
    pub fn from_json(json: &str) -> Result<Self, ScoutError> {
        serde_json::from_str(json).map_err(|e| ScoutError::Sources(e.to_string()))
    }

    pub fn to_json_pretty(&self) -> Result<String, ScoutError> {
        serde_json::to_string_pretty(self).map_err(|e| ScoutError::Sources(e.to_string()))
    }

    /// Total number of source entries across all collections
    pub fn len(&self) -> usize {
        self.featured.len()
            + self.categories.iter().map(|c| c.articles.len()).sum::<usize>()
            + self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sources_from_partial_json() {
        let json = r#"{
            "featured": [{"id": "1", "title": "Getting started"}],
            "categories": [{"title": "Referrals", "articles": [{"id": "a", "title": "Submit"}]}]
        }"#;
        let sources = SourceCollections::from_json(json).unwrap();
        assert_eq!(sources.featured.len(), 1);
        assert_eq!(sources.featured[0].excerpt, "");
        assert_eq!(sources.featured[0].views, None);
        assert!(sources.resources.is_empty());
        assert_eq!(sources.len(), 2);
    }

    #[test]
    fn test_sources_camel_case_fields() {
        let json = r#"{"resources": [{"id": "r", "lastUpdated": "2024-03-01", "downloads": 40}]}"#;
        let sources = SourceCollections::from_json(json).unwrap();
        assert_eq!(sources.resources[0].last_updated, "2024-03-01");
        assert_eq!(sources.resources[0].downloads, Some(40));
    }

    #[test]
    fn test_sources_invalid_json_is_error() {
        let err = SourceCollections::from_json("{not json").unwrap_err();
        assert!(matches!(err, ScoutError::Sources(_)));
    }

    #[test]
    fn test_record_zero_defaults() {
        let record = SearchRecord {
            id: "x".into(),
            title: String::new(),
            content: String::new(),
            category: String::new(),
            record_type: RecordType::Faq,
            tags: Vec::new(),
            last_updated: String::new(),
            views: None,
            helpful: None,
            url: None,
        };
        assert_eq!(record.views_or_zero(), 0);
        assert_eq!(record.helpful_or_zero(), 0);
    }
}
