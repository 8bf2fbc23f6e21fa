//! Scout - help-center search
//!
//! Flattens the partner help-center collections (featured articles, categorized
//! articles, downloadable resources, FAQs) into one index and ranks it with an
//! additive substring/term scorer, then filters, sorts and truncates the hits.
//! `SearchSession` adds debounced search-as-you-type on top.

pub mod activation;
pub mod catalog;
pub mod config;
pub mod indexer;
pub mod interface;
pub mod models;
pub mod ranking;
pub mod search;
pub mod session;
mod store;
pub mod suggestions;
pub mod synthetic;

pub use activation::Activation;
pub use config::SearchConfig;
pub use indexer::{build_index, SearchIndex};
pub use interface::*;
pub use models::{
    ArticleCategory, DownloadableResource, FaqEntry, FeaturedArticle, HelpArticle, SearchRecord,
    SourceCollections,
};
pub use search::{SearchFilters, SortKey};
pub use session::{Published, SearchSession};
pub use store::HelpCenterSearch;
