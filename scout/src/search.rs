//! Filter/sort pipeline
//!
//! A pure function of (records, query, filters, sort key): score every record,
//! keep the ones that pass the category filter, the type filter and the
//! positive-score predicate, order them by the active sort key and truncate.
//! Nothing is carried between calls.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::interface::{RecordType, SearchHit};
use crate::models::SearchRecord;
use crate::ranking::{score_record, ParsedQuery, ScoringWeights};

/// Maximum results to return from search.
pub const MAX_RESULTS: usize = 20;

/// Queries shorter than this (in chars, after trimming) return no results.
pub const MIN_QUERY_LEN: usize = 3;

// ─────────────────────────────────────────────────────────────────────────────
// FILTERS
// ─────────────────────────────────────────────────────────────────────────────

/// Filter panel state. An empty set means "no filter" for that dimension.
///
/// On the wire the type filter is a list of labels. Deserialization goes
/// through `with_type_label`, so an unknown label survives a round trip and
/// keeps matching nothing instead of failing the whole request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "FilterLabels", into = "FilterLabels")]
pub struct SearchFilters {
    pub categories: BTreeSet<String>,
    pub types: BTreeSet<RecordType>,
    /// Type labels that did not parse. They keep the type filter active but
    /// match nothing.
    unknown_types: BTreeSet<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct FilterLabels {
    categories: BTreeSet<String>,
    types: Vec<String>,
}

impl From<FilterLabels> for SearchFilters {
    fn from(labels: FilterLabels) -> Self {
        let filters = SearchFilters {
            categories: labels.categories,
            ..SearchFilters::default()
        };
        labels
            .types
            .iter()
            .fold(filters, |filters, label| filters.with_type_label(label))
    }
}

impl From<SearchFilters> for FilterLabels {
    fn from(filters: SearchFilters) -> Self {
        let types = filters
            .types
            .iter()
            .map(|t| t.as_str().to_string())
            .chain(filters.unknown_types)
            .collect();
        FilterLabels {
            categories: filters.categories,
            types,
        }
    }
}

impl SearchFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.categories.insert(category.into());
        self
    }

    pub fn with_type(mut self, record_type: RecordType) -> Self {
        self.types.insert(record_type);
        self
    }

    /// Add a type by label. Unknown labels select nothing rather than failing.
    pub fn with_type_label(mut self, label: &str) -> Self {
        match RecordType::parse(label) {
            Some(record_type) => {
                self.types.insert(record_type);
            }
            None => {
                tracing::warn!(label, "unknown record type in filter");
                self.unknown_types.insert(label.to_string());
            }
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.types.is_empty() && self.unknown_types.is_empty()
    }

    fn type_filter_active(&self) -> bool {
        !self.types.is_empty() || !self.unknown_types.is_empty()
    }

    /// Category and type filters are conjunctive.
    pub fn matches(&self, record: &SearchRecord) -> bool {
        if !self.categories.is_empty() && !self.categories.contains(&record.category) {
            return false;
        }
        if self.type_filter_active() && !self.types.contains(&record.record_type) {
            return false;
        }
        true
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// SORT
// ─────────────────────────────────────────────────────────────────────────────

/// The four sort selector options. Exactly one is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Relevance,
    Date,
    Popularity,
    Helpful,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::Relevance,
        SortKey::Date,
        SortKey::Popularity,
        SortKey::Helpful,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Relevance => "relevance",
            SortKey::Date => "date",
            SortKey::Popularity => "popularity",
            SortKey::Helpful => "helpful",
        }
    }

    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "relevance" => Some(SortKey::Relevance),
            "date" => Some(SortKey::Date),
            "popularity" => Some(SortKey::Popularity),
            "helpful" => Some(SortKey::Helpful),
            _ => None,
        }
    }

    /// Label shown in the sort selector
    pub fn display_name(self) -> &'static str {
        match self {
            SortKey::Relevance => "Most Relevant",
            SortKey::Date => "Most Recent",
            SortKey::Popularity => "Most Popular",
            SortKey::Helpful => "Most Helpful",
        }
    }
}

impl std::str::FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::parse(s).ok_or_else(|| format!("unknown sort key: {s}"))
    }
}

/// Parse `last_updated` into a comparable timestamp.
/// Accepts `yyyy-mm-dd`, RFC 3339 and `yyyy-mm-dd[T ]hh:mm:ss[.f]`.
pub fn parse_last_updated(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_utc());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
}

/// Descending comparison for the active key. `sort_by` is stable, so ties keep
/// index order.
fn compare_hits(sort: SortKey, a: &ScoredEntry, b: &ScoredEntry) -> Ordering {
    match sort {
        SortKey::Relevance => b.hit.relevance_score.cmp(&a.hit.relevance_score),
        // None sorts after every parsed date
        SortKey::Date => b.date.cmp(&a.date),
        SortKey::Popularity => b.hit.record.views_or_zero().cmp(&a.hit.record.views_or_zero()),
        SortKey::Helpful => b.hit.record.helpful_or_zero().cmp(&a.hit.record.helpful_or_zero()),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// PIPELINE
// ─────────────────────────────────────────────────────────────────────────────

struct ScoredEntry {
    hit: SearchHit,
    date: Option<NaiveDateTime>,
}

/// Pipeline output before it is wrapped into a `SearchOutcome`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineOutput {
    pub hits: Vec<SearchHit>,
    /// Qualifying records before truncation
    pub total_matches: usize,
}

/// Score, filter, sort and truncate.
pub fn run_pipeline(
    records: &[SearchRecord],
    query: &ParsedQuery,
    filters: &SearchFilters,
    sort: SortKey,
    weights: &ScoringWeights,
    limit: usize,
) -> PipelineOutput {
    // collect() preserves input order, so stable-sort ties stay in index order
    use rayon::prelude::*;
    let mut entries: Vec<ScoredEntry> = records
        .par_iter()
        .filter(|record| filters.matches(record))
        .filter_map(|record| {
            let relevance_score = score_record(query, record, weights);
            if relevance_score == 0 {
                return None;
            }
            let date = match sort {
                SortKey::Date => parse_last_updated(&record.last_updated),
                _ => None,
            };
            Some(ScoredEntry {
                hit: SearchHit {
                    record: record.clone(),
                    relevance_score,
                },
                date,
            })
        })
        .collect();

    let total_matches = entries.len();
    entries.sort_by(|a, b| compare_hits(sort, a, b));
    entries.truncate(limit);

    PipelineOutput {
        hits: entries.into_iter().map(|e| e.hit).collect(),
        total_matches,
    }
}
