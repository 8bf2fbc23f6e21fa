//! HelpCenterSearch - the search surface handed to the hosting page
//!
//! Owns the index built from the host collections and runs each query through
//! the scorer and the filter/sort pipeline.
//!
//! Async Cancellation Architecture:
//! Scoring runs on a blocking thread. When the caller drops the search future
//! (a newer keystroke superseded it), a DropGuard triggers the
//! CancellationToken and the blocking work bails out at its next checkpoint.

use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::Mutex;
use tokio_util::sync::CancellationToken;

use crate::activation::Activation;
use crate::catalog::{DEFAULT_SOURCES, STATIC_FAQS};
use crate::config::SearchConfig;
use crate::indexer::{build_index, SearchIndex};
use crate::interface::{
    HelpSearchApi, ScoutError, SearchOutcome, SearchRequest, SearchResults,
};
use crate::models::{FaqEntry, SourceCollections};
use crate::ranking::ParsedQuery;
use crate::search::{run_pipeline, PipelineOutput, SearchFilters, SortKey};
use crate::suggestions::{no_result_alternatives, SearchHistory, SuggestionPanel};

/// Global fallback Tokio runtime for when async functions are called outside any runtime context.
/// Shared across all instances and never dropped.
static FALLBACK_RUNTIME: Lazy<tokio::runtime::Runtime> = Lazy::new(|| {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("Failed to create fallback tokio runtime")
});

/// Current runtime if there is one, otherwise the global fallback
pub(crate) fn runtime_handle() -> tokio::runtime::Handle {
    tokio::runtime::Handle::try_current().unwrap_or_else(|_| FALLBACK_RUNTIME.handle().clone())
}

/// RAII guard that cancels a token when dropped.
pub(crate) struct DropGuard {
    token: CancellationToken,
}

impl DropGuard {
    pub(crate) fn new(token: CancellationToken) -> Self {
        Self { token }
    }
}

impl Drop for DropGuard {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

/// Thread-safe search surface.
///
/// The index is immutable after construction and shared via `Arc` with the
/// blocking scoring threads. Only the recent-query history is mutable.
pub struct HelpCenterSearch {
    index: Arc<SearchIndex>,
    config: SearchConfig,
    history: Mutex<SearchHistory>,
}

impl HelpCenterSearch {
    /// Build the index from host collections plus the built-in FAQ list
    pub fn new(sources: &SourceCollections, config: SearchConfig) -> Result<Self, ScoutError> {
        Self::with_faqs(sources, &STATIC_FAQS, config)
    }

    pub fn with_faqs(
        sources: &SourceCollections,
        faqs: &[FaqEntry],
        config: SearchConfig,
    ) -> Result<Self, ScoutError> {
        config.validate()?;
        let index = build_index(sources, faqs);
        let history = SearchHistory::new(config.history_limit);
        Ok(Self {
            index: Arc::new(index),
            config,
            history: Mutex::new(history),
        })
    }

    /// Search over the built-in help-center catalog
    pub fn with_default_catalog(config: SearchConfig) -> Result<Self, ScoutError> {
        Self::new(&DEFAULT_SOURCES, config)
    }

    pub fn index(&self) -> &SearchIndex {
        &self.index
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Whether `query` is long enough to be scored at all
    pub fn is_scorable(&self, query: &str) -> bool {
        query.trim().chars().count() >= self.config.min_query_len
    }

    /// Remember a submitted query for the suggestion panel. Queries too short
    /// to be scored are not remembered.
    pub fn record_query(&self, query: &str) {
        if self.is_scorable(query) {
            self.history.lock().push(query);
        }
    }

    pub fn sort_options(&self) -> Vec<(SortKey, &'static str)> {
        SortKey::ALL.iter().map(|k| (*k, k.display_name())).collect()
    }

    /// Score, filter and sort on the calling thread, checking `token` before
    /// and after the pipeline.
    fn search_sync(
        index: &SearchIndex,
        config: &SearchConfig,
        query: &ParsedQuery,
        filters: &SearchFilters,
        sort: SortKey,
        token: &CancellationToken,
    ) -> Result<PipelineOutput, ScoutError> {
        if token.is_cancelled() {
            return Err(ScoutError::Cancelled);
        }

        #[cfg(feature = "perf-log")]
        let t0 = std::time::Instant::now();

        let output = run_pipeline(
            index.records(),
            query,
            filters,
            sort,
            &config.weights,
            config.max_results,
        );

        #[cfg(feature = "perf-log")]
        tracing::debug!(
            elapsed_ms = t0.elapsed().as_secs_f64() * 1000.0,
            records = index.len(),
            matches = output.total_matches,
            "scored query"
        );

        if token.is_cancelled() {
            return Err(ScoutError::Cancelled);
        }
        Ok(output)
    }
}

#[async_trait::async_trait]
impl HelpSearchApi for HelpCenterSearch {
    /// Empty query: suggestion panel, nothing scored.
    /// Too-short query: empty results.
    /// Otherwise the pipeline runs on a blocking thread with cancellation.
    async fn search(&self, request: SearchRequest) -> Result<SearchOutcome, ScoutError> {
        let trimmed = request.query.trim();

        if trimmed.is_empty() {
            return Ok(SearchOutcome::Suggestions(self.suggestions()));
        }

        if !self.is_scorable(trimmed) {
            return Ok(SearchOutcome::Results(SearchResults::empty(trimmed)));
        }

        let Some(parsed) = ParsedQuery::parse(trimmed, self.config.min_term_len) else {
            return Ok(SearchOutcome::Results(SearchResults::empty(trimmed)));
        };

        let token = CancellationToken::new();
        let _guard = DropGuard::new(token.clone());

        let index = Arc::clone(&self.index);
        let config = self.config.clone();
        let filters = request.filters.clone();
        let sort = request.sort;
        let token_clone = token.clone();

        let handle = runtime_handle().spawn_blocking(move || {
            Self::search_sync(&index, &config, &parsed, &filters, sort, &token_clone)
        });

        match handle.await {
            Ok(Ok(output)) if output.hits.is_empty() => Ok(SearchOutcome::NoResults {
                query: trimmed.to_string(),
                alternatives: no_result_alternatives(),
            }),
            Ok(Ok(output)) => Ok(SearchOutcome::Results(SearchResults {
                query: trimmed.to_string(),
                hits: output.hits,
                total_matches: output.total_matches as u64,
            })),
            Ok(Err(e)) => Err(e),
            // JoinError means the task panicked or was aborted
            Err(_join_error) => Err(ScoutError::Cancelled),
        }
    }

    fn select(&self, record_id: &str) -> Result<Activation, ScoutError> {
        self.index
            .get(record_id)
            .map(Activation::for_record)
            .ok_or_else(|| ScoutError::NotFound(record_id.to_string()))
    }

    fn suggestions(&self) -> SuggestionPanel {
        SuggestionPanel::new(&self.history.lock())
    }

    fn categories(&self) -> Vec<String> {
        self.index.categories()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interface::RecordType;

    fn runtime() -> tokio::runtime::Runtime {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap()
    }

    fn store() -> HelpCenterSearch {
        HelpCenterSearch::with_default_catalog(SearchConfig::default()).unwrap()
    }

    #[test]
    fn test_store_creation() {
        let store = store();
        assert!(!store.index().is_empty());
        assert!(store.categories().contains(&"Referrals".to_string()));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = SearchConfig {
            max_results: 0,
            ..SearchConfig::default()
        };
        assert!(matches!(
            HelpCenterSearch::with_default_catalog(config),
            Err(ScoutError::Config(_))
        ));
    }

    #[test]
    fn test_empty_query_returns_suggestions() {
        let rt = runtime();
        let store = store();
        let outcome = rt.block_on(store.search(SearchRequest::new("   "))).unwrap();
        assert!(matches!(outcome, SearchOutcome::Suggestions(_)));
        assert!(!outcome.is_query());
    }

    #[test]
    fn test_short_query_returns_empty_results() {
        let rt = runtime();
        let store = store();
        for q in ["a", "ap", " ap "] {
            let outcome = rt.block_on(store.search(SearchRequest::new(q))).unwrap();
            assert!(matches!(&outcome, SearchOutcome::Results(r) if r.hits.is_empty()));
        }
    }

    #[test]
    fn test_search_returns_ranked_hits() {
        let rt = runtime();
        let store = store();
        let outcome = rt.block_on(store.search(SearchRequest::new("commission"))).unwrap();
        let hits = outcome.hits();
        assert!(!hits.is_empty());
        for pair in hits.windows(2) {
            assert!(pair[0].relevance_score >= pair[1].relevance_score);
        }
    }

    #[test]
    fn test_type_filter_applies() {
        let rt = runtime();
        let store = store();
        let request = SearchRequest::new("referral")
            .with_filters(SearchFilters::new().with_type(RecordType::Faq));
        let outcome = rt.block_on(store.search(request)).unwrap();
        assert!(!outcome.hits().is_empty());
        assert!(outcome.hits().iter().all(|h| h.record.record_type == RecordType::Faq));
    }

    #[test]
    fn test_select_known_and_unknown() {
        let store = store();
        assert_eq!(
            store.select("article:referrals:ref-1").unwrap(),
            Activation::Internal("/help/articles/ref-1".into())
        );
        assert!(store.select("resource:brand-kit").unwrap().is_external());
        assert_eq!(
            store.select("faq:1").unwrap(),
            Activation::Detail("faq:1".into())
        );
        assert!(matches!(store.select("nope"), Err(ScoutError::NotFound(_))));
    }

    #[test]
    fn test_recorded_queries_show_in_suggestions() {
        let store = store();
        store.record_query("payout methods");
        store.record_query("tier upgrade");
        assert_eq!(
            store.suggestions().recent_queries,
            vec!["tier upgrade", "payout methods"]
        );
    }

    #[test]
    fn test_short_queries_not_recorded() {
        let store = store();
        store.record_query("ap");
        store.record_query("  ap  ");
        store.record_query("api");
        assert_eq!(store.suggestions().recent_queries, vec!["api"]);
    }

    #[test]
    fn test_cancellation_token() {
        let token = CancellationToken::new();
        assert!(!token.is_cancelled());

        let guard = DropGuard::new(token.clone());
        assert!(!token.is_cancelled());

        drop(guard);
        assert!(token.is_cancelled());
    }

    #[test]
    fn test_search_with_precancelled_token_returns_cancelled() {
        let store = store();
        let token = CancellationToken::new();
        token.cancel();

        let parsed = ParsedQuery::parse("referral", store.config.min_term_len).unwrap();
        let result = HelpCenterSearch::search_sync(
            &store.index,
            &store.config,
            &parsed,
            &SearchFilters::new(),
            SortKey::Relevance,
            &token,
        );
        assert_eq!(result, Err(ScoutError::Cancelled));
    }

    #[tokio::test]
    async fn test_search_works_inside_runtime() {
        let store = store();
        let outcome = store.search(SearchRequest::new("api integration")).await.unwrap();
        assert_eq!(outcome.hits()[0].record.title, "API integration guide");
    }

    #[test]
    fn test_runtime_handle_outside_runtime_uses_fallback() {
        let store = store();
        let handle = runtime_handle();
        let outcome = handle.block_on(store.search(SearchRequest::new("webhook"))).unwrap();
        assert!(!outcome.hits().is_empty());
    }
}
