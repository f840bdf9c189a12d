//! The metadata extraction seam and its implementations.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use sift_core::{Error, LlmSettings, Result};
use tracing::{debug, info};

use crate::parser::parse_metadata;
use crate::prompt::{user_prompt, SYSTEM_PROMPT};
use crate::providers::complete;
use crate::types::ExtractedMetadata;

/// Produces structured metadata for a piece of text.
///
/// Errors follow the shared taxonomy: [`Error::Input`] for empty text or an
/// unconfigured extractor, [`Error::Service`] when the backend is unreachable
/// or refuses the call, [`Error::Parse`] when its answer is malformed.
#[async_trait]
pub trait MetadataExtractor: Send + Sync {
    async fn analyze(&self, text: &str) -> Result<ExtractedMetadata>;

    /// Whether a call could succeed at all (credentials present).
    fn is_configured(&self) -> bool;
}

fn ensure_text(text: &str) -> Result<()> {
    if text.trim().is_empty() {
        return Err(Error::Input("Text cannot be empty".into()));
    }
    Ok(())
}

/// Extractor backed by a hosted chat model.
pub struct LlmMetadataExtractor {
    client: Client,
    settings: LlmSettings,
}

impl LlmMetadataExtractor {
    pub fn new(settings: &LlmSettings) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|e| Error::Internal(format!("Failed to build HTTP client: {}", e)))?;

        info!(
            "LLM extractor: provider={}, model={}, configured={}",
            settings.provider,
            settings.model,
            settings.is_configured()
        );

        Ok(Self {
            client,
            settings: settings.clone(),
        })
    }

    pub fn settings(&self) -> &LlmSettings {
        &self.settings
    }
}

#[async_trait]
impl MetadataExtractor for LlmMetadataExtractor {
    async fn analyze(&self, text: &str) -> Result<ExtractedMetadata> {
        ensure_text(text)?;
        if !self.is_configured() {
            return Err(Error::Input(format!(
                "Metadata extractor not configured: set {} or LLM_API_KEY",
                self.settings.provider.api_key_var()
            )));
        }

        let content = complete(&self.client, &self.settings, SYSTEM_PROMPT, &user_prompt(text)).await?;
        debug!("Model returned {} bytes", content.len());
        parse_metadata(&content)
    }

    fn is_configured(&self) -> bool {
        self.settings.is_configured()
    }
}

#[derive(Debug, Clone)]
enum Outcome {
    Metadata(ExtractedMetadata),
    Service(String),
    Parse(String),
    Unconfigured,
}

/// Extractor with a fixed answer. Used in tests and offline runs.
pub struct StaticExtractor {
    outcome: Outcome,
    calls: AtomicUsize,
}

impl StaticExtractor {
    /// Always returns `metadata`.
    pub fn new(metadata: ExtractedMetadata) -> Self {
        Self::with_outcome(Outcome::Metadata(metadata))
    }

    /// Always fails as an unavailable service.
    pub fn failing(message: impl Into<String>) -> Self {
        Self::with_outcome(Outcome::Service(message.into()))
    }

    /// Always fails as if the model answered with a malformed payload.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::with_outcome(Outcome::Parse(message.into()))
    }

    /// Behaves like an extractor with no credentials.
    pub fn unconfigured() -> Self {
        Self::with_outcome(Outcome::Unconfigured)
    }

    fn with_outcome(outcome: Outcome) -> Self {
        Self {
            outcome,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of `analyze` calls so far, including rejected ones.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MetadataExtractor for StaticExtractor {
    async fn analyze(&self, text: &str) -> Result<ExtractedMetadata> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        ensure_text(text)?;
        match &self.outcome {
            Outcome::Metadata(m) => Ok(m.clone()),
            Outcome::Service(msg) => Err(Error::Service(msg.clone())),
            Outcome::Parse(msg) => Err(Error::Parse(msg.clone())),
            Outcome::Unconfigured => Err(Error::Input("Metadata extractor not configured".into())),
        }
    }

    fn is_configured(&self) -> bool {
        !matches!(self.outcome, Outcome::Unconfigured)
    }
}
