//! Additive relevance scoring.
//!
//! Every rule adds a fixed weight; nothing is normalized or scaled. A record
//! qualifies only when at least one text rule (title, content, category, tag)
//! fired. The popularity and quality boosts reorder qualifying records but
//! never make a record qualify on their own.

use serde::{Deserialize, Serialize};

use crate::models::SearchRecord;

/// Terms must be at least this many characters to count
pub const DEFAULT_MIN_TERM_LEN: usize = 3;

/// Weights and thresholds for the additive scorer.
/// `Default` is the production table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScoringWeights {
    pub title_phrase: u32,
    pub title_term: u32,
    pub content_phrase: u32,
    pub content_term: u32,
    pub category_phrase: u32,
    pub tag_match: u32,
    /// Strictly-greater threshold for the popularity boost
    pub popular_views_threshold: u64,
    pub popular_boost: u32,
    /// Strictly-greater threshold (percent) for the quality boost
    pub helpful_threshold: u32,
    pub helpful_boost: u32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            title_phrase: 100,
            title_term: 50,
            content_phrase: 30,
            content_term: 15,
            category_phrase: 25,
            tag_match: 20,
            popular_views_threshold: 1000,
            popular_boost: 10,
            helpful_threshold: 90,
            helpful_boost: 5,
        }
    }
}

/// A trimmed, lowercased query and its significant terms
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedQuery {
    phrase: String,
    terms: Vec<String>,
}

impl ParsedQuery {
    /// Returns `None` for a blank query: nothing should be scored at all.
    pub fn parse(raw: &str, min_term_len: usize) -> Option<Self> {
        let phrase = raw.trim().to_lowercase();
        if phrase.is_empty() {
            return None;
        }
        let terms = phrase
            .split_whitespace()
            .filter(|t| t.chars().count() >= min_term_len)
            .map(str::to_string)
            .collect();
        Some(Self { phrase, terms })
    }

    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }
}

/// Per-rule contributions for one record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub title: u32,
    pub content: u32,
    pub category: u32,
    pub tags: u32,
    pub popularity: u32,
    pub quality: u32,
}

impl ScoreBreakdown {
    pub fn text_score(&self) -> u32 {
        self.title + self.content + self.category + self.tags
    }

    pub fn total(&self) -> u32 {
        self.text_score() + self.popularity + self.quality
    }
}

/// Count how many terms appear in `haystack`. Duplicate query terms count twice.
fn term_hits(haystack: &str, terms: &[String]) -> u32 {
    terms.iter().filter(|t| haystack.contains(t.as_str())).count() as u32
}

pub fn score_breakdown(
    query: &ParsedQuery,
    record: &SearchRecord,
    weights: &ScoringWeights,
) -> ScoreBreakdown {
    let phrase = query.phrase();
    let terms = query.terms();

    let mut breakdown = ScoreBreakdown::default();

    let title = record.title.to_lowercase();
    if title.contains(phrase) {
        breakdown.title += weights.title_phrase;
    }
    breakdown.title += weights.title_term * term_hits(&title, terms);

    let content = record.content.to_lowercase();
    if content.contains(phrase) {
        breakdown.content += weights.content_phrase;
    }
    breakdown.content += weights.content_term * term_hits(&content, terms);

    if record.category.to_lowercase().contains(phrase) {
        breakdown.category += weights.category_phrase;
    }

    // One award per tag, whether it holds the whole phrase or a single term
    for tag in &record.tags {
        let tag = tag.to_lowercase();
        if tag.contains(phrase) || terms.iter().any(|t| tag.contains(t.as_str())) {
            breakdown.tags += weights.tag_match;
        }
    }

    if breakdown.text_score() == 0 {
        return breakdown;
    }

    if record.views_or_zero() > weights.popular_views_threshold {
        breakdown.popularity = weights.popular_boost;
    }
    if record.helpful_or_zero() > weights.helpful_threshold {
        breakdown.quality = weights.helpful_boost;
    }

    breakdown
}

/// Total relevance of `record` for `query`. Zero means the record is excluded.
pub fn score_record(query: &ParsedQuery, record: &SearchRecord, weights: &ScoringWeights) -> u32 {
    score_breakdown(query, record, weights).total()
}
