//! Sift Core — error taxonomy, shared domain types, configuration.

pub mod config;
pub mod error;
pub mod sentiment;

pub use config::{DatabaseLocation, LlmProvider, LlmSettings, SiftConfig};
pub use error::{Error, ErrorKind, Result};
pub use sentiment::Sentiment;
