//! Search configuration
//!
//! Every field has a default, so an empty JSON object is a valid config and
//! the defaults reproduce the production behavior exactly.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::interface::ScoutError;
use crate::ranking::{ScoringWeights, DEFAULT_MIN_TERM_LEN};
use crate::search::{MAX_RESULTS, MIN_QUERY_LEN};
use crate::suggestions::DEFAULT_HISTORY_LIMIT;

/// Delay between the last keystroke and scoring
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchConfig {
    pub debounce_ms: u64,
    pub max_results: usize,
    /// Trimmed queries shorter than this return no results
    pub min_query_len: usize,
    /// Query terms shorter than this are ignored for term matching
    pub min_term_len: usize,
    pub history_limit: usize,
    pub weights: ScoringWeights,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            max_results: MAX_RESULTS,
            min_query_len: MIN_QUERY_LEN,
            min_term_len: DEFAULT_MIN_TERM_LEN,
            history_limit: DEFAULT_HISTORY_LIMIT,
            weights: ScoringWeights::default(),
        }
    }
}

impl SearchConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ScoutError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ScoutError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ScoutError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| ScoutError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), ScoutError> {
        if self.max_results == 0 {
            return Err(ScoutError::Config("maxResults must be greater than 0".into()));
        }
        if self.min_query_len == 0 {
            return Err(ScoutError::Config("minQueryLen must be greater than 0".into()));
        }
        Ok(())
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}
