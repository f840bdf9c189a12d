//! Shared application state.

use std::sync::Arc;

use sift_core::SiftConfig;
use sift_llm::MetadataExtractor;
use sift_nlp::{LexiconTagger, Tagger, DEFAULT_TOP_N};
use sift_store::SqliteStore;

/// Shared application state accessible from all route handlers.
pub struct AppState {
    pub config: SiftConfig,
    pub store: SqliteStore,
    pub extractor: Arc<dyn MetadataExtractor>,
    pub tagger: Arc<dyn Tagger>,
    /// Keywords kept per analysis.
    pub keyword_count: usize,
}

impl AppState {
    pub fn new(config: SiftConfig, store: SqliteStore, extractor: Arc<dyn MetadataExtractor>) -> Self {
        Self::with_tagger(config, store, extractor, Arc::new(LexiconTagger::new()))
    }

    pub fn with_tagger(
        config: SiftConfig,
        store: SqliteStore,
        extractor: Arc<dyn MetadataExtractor>,
        tagger: Arc<dyn Tagger>,
    ) -> Self {
        Self {
            config,
            store,
            extractor,
            tagger,
            keyword_count: DEFAULT_TOP_N,
        }
    }
}
