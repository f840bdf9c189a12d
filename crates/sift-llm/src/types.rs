//! Extraction result types.

use serde::{Deserialize, Serialize};
use sift_core::Sentiment;

/// Validated metadata for one piece of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedMetadata {
    pub summary: String,
    pub title: Option<String>,
    /// Exactly three entries.
    pub topics: Vec<String>,
    pub sentiment: Sentiment,
    /// In `[0.0, 1.0]`.
    pub confidence: f64,
}
