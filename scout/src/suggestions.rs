//! Idle-state suggestions and recent queries.
//!
//! The canned lists are static configuration, not derived from the index.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

pub const POPULAR_SEARCHES: &[&str] = &[
    "How to submit a referral",
    "Commission payment schedule",
    "Partnership tier benefits",
    "Marketing materials",
    "API integration guide",
    "Client onboarding process",
];

pub const QUICK_SUGGESTIONS: &[&str] = &[
    "referral tracking",
    "payout methods",
    "tier upgrade",
    "co-branded assets",
    "training certification",
];

/// Offered when a query produced no results
pub const NO_RESULT_ALTERNATIVES: [&str; 4] = [
    "referral process",
    "commission rates",
    "partner portal",
    "marketing resources",
];

pub const DEFAULT_HISTORY_LIMIT: usize = 5;

/// Recent queries, newest first. In-memory only; repeated queries are kept as
/// separate entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHistory {
    entries: VecDeque<String>,
    limit: usize,
}

impl Default for SearchHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}

impl SearchHistory {
    pub fn new(limit: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(limit),
            limit,
        }
    }

    /// Record a submitted query. Blank queries are ignored.
    pub fn push(&mut self, query: &str) {
        let trimmed = query.trim();
        if trimmed.is_empty() || self.limit == 0 {
            return;
        }
        self.entries.push_front(trimmed.to_string());
        self.entries.truncate(self.limit);
    }

    pub fn recent(&self) -> Vec<String> {
        self.entries.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// What the result area shows while the query box is empty
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionPanel {
    pub popular_searches: Vec<String>,
    pub quick_suggestions: Vec<String>,
    pub recent_queries: Vec<String>,
}

impl SuggestionPanel {
    pub fn new(history: &SearchHistory) -> Self {
        Self {
            popular_searches: POPULAR_SEARCHES.iter().map(|s| s.to_string()).collect(),
            quick_suggestions: QUICK_SUGGESTIONS.iter().map(|s| s.to_string()).collect(),
            recent_queries: history.recent(),
        }
    }
}

/// Selecting a suggestion just populates the query box.
pub fn select_suggestion(suggestion: &str) -> String {
    suggestion.trim().to_string()
}

pub fn no_result_alternatives() -> Vec<String> {
    NO_RESULT_ALTERNATIVES.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_newest_first_and_bounded() {
        let mut history = SearchHistory::new(3);
        for q in ["payout", "tiers", "api", "referral"] {
            history.push(q);
        }
        assert_eq!(history.recent(), vec!["referral", "api", "tiers"]);
    }

    #[test]
    fn test_history_keeps_repeats_and_skips_blank() {
        let mut history = SearchHistory::default();
        history.push("payout");
        history.push("   ");
        history.push(" payout ");
        assert_eq!(history.recent(), vec!["payout", "payout"]);
    }

    #[test]
    fn test_history_zero_limit_records_nothing() {
        let mut history = SearchHistory::new(0);
        history.push("payout");
        assert!(history.is_empty());
    }

    #[test]
    fn test_panel_includes_static_lists() {
        let mut history = SearchHistory::default();
        history.push("tier upgrade");
        let panel = SuggestionPanel::new(&history);
        assert_eq!(panel.popular_searches.len(), POPULAR_SEARCHES.len());
        assert_eq!(panel.quick_suggestions[0], "referral tracking");
        assert_eq!(panel.recent_queries, vec!["tier upgrade"]);
    }

    #[test]
    fn test_four_alternatives() {
        assert_eq!(no_result_alternatives().len(), 4);
        assert_eq!(select_suggestion(" payout methods "), "payout methods");
    }
}
