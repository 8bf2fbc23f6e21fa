//! Search-as-you-type session
//!
//! Every `update` cancels the pending search, waits out the debounce delay and
//! only then scores. Each update gets a generation number; a finished search
//! publishes only if its generation is still the newest, so a slow, stale
//! query can never overwrite fresher results.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use crate::interface::{HelpSearchApi, ScoutError, SearchOutcome, SearchRequest};
use crate::store::{runtime_handle, HelpCenterSearch};
use crate::suggestions::SuggestionPanel;

/// A result that made it to the screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Published {
    pub generation: u64,
    pub request: SearchRequest,
    pub outcome: SearchOutcome,
}

pub struct SearchSession {
    search: Arc<HelpCenterSearch>,
    debounce: Duration,
    generation: Arc<AtomicU64>,
    pending: Mutex<Option<CancellationToken>>,
    tx: Arc<watch::Sender<Option<Published>>>,
}

impl SearchSession {
    /// Session using the search surface's configured debounce delay
    pub fn new(search: Arc<HelpCenterSearch>) -> Self {
        let debounce = search.config().debounce();
        Self::with_debounce(search, debounce)
    }

    pub fn with_debounce(search: Arc<HelpCenterSearch>, debounce: Duration) -> Self {
        let (tx, _rx) = watch::channel(None);
        Self {
            search,
            debounce,
            generation: Arc::new(AtomicU64::new(0)),
            pending: Mutex::new(None),
            tx: Arc::new(tx),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<Published>> {
        self.tx.subscribe()
    }

    /// Most recently published result, if any
    pub fn latest(&self) -> Option<Published> {
        self.tx.borrow().clone()
    }

    /// Generation of the newest update (0 before the first one)
    pub fn current_generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    pub fn suggestions(&self) -> SuggestionPanel {
        self.search.suggestions()
    }

    /// Cancel whatever is waiting or scoring without scheduling a replacement.
    /// Bumps the generation so an in-flight result is discarded.
    pub fn cancel_pending(&self) {
        let mut pending = self.pending.lock();
        self.generation.fetch_add(1, Ordering::SeqCst);
        if let Some(token) = pending.take() {
            token.cancel();
        }
    }

    /// Schedule `request` after the debounce delay, superseding any pending
    /// search. Returns the generation assigned to it.
    pub fn update(&self, request: SearchRequest) -> u64 {
        let token = CancellationToken::new();

        // Generation and pending token change together, so the newest
        // generation always owns the installed token.
        let generation = {
            let mut pending = self.pending.lock();
            let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
            if let Some(previous) = pending.replace(token.clone()) {
                previous.cancel();
                tracing::trace!(generation, "superseded pending search");
            }
            generation
        };

        let search = Arc::clone(&self.search);
        let current = Arc::clone(&self.generation);
        let tx = Arc::clone(&self.tx);
        let debounce = self.debounce;

        runtime_handle().spawn(async move {
            tokio::select! {
                _ = token.cancelled() => return,
                _ = tokio::time::sleep(debounce) => {}
            }

            // Dropping the search future on cancellation cancels its blocking work
            let result = tokio::select! {
                _ = token.cancelled() => return,
                result = search.search(request.clone()) => result,
            };

            let outcome = match result {
                Ok(outcome) => outcome,
                Err(ScoutError::Cancelled) => return,
                Err(e) => {
                    tracing::warn!(generation, error = %e, "search failed");
                    return;
                }
            };

            tx.send_if_modified(|slot| {
                if current.load(Ordering::SeqCst) != generation {
                    return false;
                }
                if outcome.is_query() {
                    search.record_query(&request.query);
                }
                *slot = Some(Published {
                    generation,
                    request,
                    outcome,
                });
                true
            });
        });

        generation
    }
}

impl Drop for SearchSession {
    fn drop(&mut self) {
        if let Some(token) = self.pending.lock().take() {
            token.cancel();
        }
    }
}
