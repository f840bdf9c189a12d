//! Analyze and search operations behind the HTTP routes.

use std::sync::Arc;

use sift_core::{Error, Result};
use sift_nlp::extract_keywords_with;
use sift_store::{AnalysisRecord, NewAnalysis};
use tracing::{debug, info};

use crate::state::AppState;

/// Extract keywords and metadata for `text` and persist the combined record.
///
/// Keyword extraction runs on the blocking pool while the extractor call is in
/// flight. Nothing is stored unless both succeed.
pub async fn analyze(state: &AppState, text: &str) -> Result<AnalysisRecord> {
    if text.trim().is_empty() {
        return Err(Error::Input("Text cannot be empty".into()));
    }

    let tagger = Arc::clone(&state.tagger);
    let owned = text.to_string();
    let top_n = state.keyword_count;
    let keywords_task =
        tokio::task::spawn_blocking(move || extract_keywords_with(tagger.as_ref(), &owned, top_n));

    let (keywords, metadata) = tokio::join!(keywords_task, state.extractor.analyze(text));
    let metadata = metadata?;
    let keywords =
        keywords.map_err(|e| Error::Internal(format!("Keyword extraction failed: {}", e)))?;
    debug!("Keywords: {:?}", keywords);

    let record = state.store.insert_analysis(&NewAnalysis {
        raw_text: text.to_string(),
        summary: metadata.summary,
        title: metadata.title,
        topics: metadata.topics,
        sentiment: metadata.sentiment,
        keywords,
        confidence: metadata.confidence,
    })?;

    info!(
        "Stored analysis {} (sentiment={}, confidence={:.2})",
        record.id, record.sentiment, record.confidence
    );
    Ok(record)
}

/// Stored analyses matching `topic`, most recent first.
pub fn search(state: &AppState, topic: Option<&str>) -> Result<Vec<AnalysisRecord>> {
    let topic = topic.filter(|t| !t.is_empty());
    let records = state.store.search_analyses(topic)?;
    debug!("Search {:?}: {} results", topic, records.len());
    Ok(records)
}
