//! Analysis record types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sift_core::Sentiment;

/// A persisted analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub id: i64,
    /// Stored, but not part of the API payload.
    #[serde(skip_serializing, default)]
    pub raw_text: String,
    pub summary: String,
    pub title: Option<String>,
    pub topics: Vec<String>,
    pub sentiment: Sentiment,
    pub keywords: Vec<String>,
    pub confidence: f64,
    pub created_at: DateTime<Utc>,
}

/// An analysis that has not been persisted yet. The store assigns `id` and `created_at`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAnalysis {
    pub raw_text: String,
    pub summary: String,
    pub title: Option<String>,
    pub topics: Vec<String>,
    pub sentiment: Sentiment,
    pub keywords: Vec<String>,
    pub confidence: f64,
}
