//! Metadata extraction through external LLM APIs (OpenAI/Groq/Anthropic).
//!
//! One non-streaming completion per analysis. The model is asked for a JSON
//! object which is validated and normalized before it leaves this crate.

pub mod extractor;
pub mod parser;
pub mod prompt;
pub mod providers;
pub mod types;

pub use extractor::{LlmMetadataExtractor, MetadataExtractor, StaticExtractor};
pub use types::ExtractedMetadata;
