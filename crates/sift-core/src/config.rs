//! Process configuration, read once at startup and passed down explicitly.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Error, Result};

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_DATABASE_URL: &str = "sqlite:///./knowledge_extractor.db";
pub const DEFAULT_MODEL: &str = "gpt-4.1-mini";
pub const DEFAULT_TEMPERATURE: f64 = 0.7;
pub const DEFAULT_MAX_TOKENS: u32 = 2000;
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// LLM provider identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LlmProvider {
    OpenAI,
    Groq,
    Anthropic,
}

impl LlmProvider {
    /// API root used when no base URL override is configured.
    pub fn default_base_url(&self) -> &'static str {
        match self {
            Self::OpenAI => "https://api.openai.com/v1",
            Self::Groq => "https://api.groq.com/openai/v1",
            Self::Anthropic => "https://api.anthropic.com/v1",
        }
    }

    /// Environment variable holding this provider's credential.
    pub fn api_key_var(&self) -> &'static str {
        match self {
            Self::OpenAI => "OPENAI_API_KEY",
            Self::Groq => "GROQ_API_KEY",
            Self::Anthropic => "ANTHROPIC_API_KEY",
        }
    }
}

impl std::fmt::Display for LlmProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LlmProvider::OpenAI => write!(f, "openai"),
            LlmProvider::Groq => write!(f, "groq"),
            LlmProvider::Anthropic => write!(f, "anthropic"),
        }
    }
}

impl FromStr for LlmProvider {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "openai" => Ok(Self::OpenAI),
            "groq" => Ok(Self::Groq),
            "anthropic" => Ok(Self::Anthropic),
            other => Err(Error::Config(format!("Unknown LLM provider: {}", other))),
        }
    }
}

/// Where the analysis database lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DatabaseLocation {
    Memory,
    File(PathBuf),
}

impl DatabaseLocation {
    /// Accepts `sqlite:///relative.db`, `sqlite:////abs/path.db`, a bare path, or `:memory:`.
    pub fn parse(url: &str) -> Result<Self> {
        let url = url.trim();
        if url.is_empty() {
            return Err(Error::Config("DATABASE_URL is empty".into()));
        }

        let path = match url.strip_prefix("sqlite://") {
            Some(rest) => match rest.strip_prefix('/') {
                Some(path) => path,
                None if rest.is_empty() => return Ok(Self::Memory),
                None => {
                    return Err(Error::Config(format!(
                        "Unsupported sqlite URL (expected sqlite:///path): {}",
                        url
                    )))
                }
            },
            None if url.contains("://") => {
                return Err(Error::Config(format!(
                    "Only sqlite databases are supported: {}",
                    url
                )))
            }
            None => url,
        };

        if path.is_empty() || path == ":memory:" {
            Ok(Self::Memory)
        } else {
            Ok(Self::File(PathBuf::from(path)))
        }
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Memory => None,
            Self::File(p) => Some(p),
        }
    }
}

/// Settings for the metadata-extraction model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmSettings {
    pub provider: LlmProvider,
    pub model: String,
    /// Skipped when serialized so keys never end up in logs or responses.
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    /// Override for OpenAI-compatible gateways or local servers.
    pub base_url: Option<String>,
    pub temperature: f64,
    pub max_tokens: u32,
    pub timeout_secs: u64,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            provider: LlmProvider::OpenAI,
            model: DEFAULT_MODEL.into(),
            api_key: None,
            base_url: None,
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl LlmSettings {
    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or_else(|| self.provider.default_base_url())
            .trim_end_matches('/')
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.trim().is_empty())
    }
}

/// Top-level Sift configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiftConfig {
    pub host: String,
    pub port: u16,
    pub database: DatabaseLocation,
    pub llm: LlmSettings,
}

impl Default for SiftConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.into(),
            port: DEFAULT_PORT,
            database: DatabaseLocation::Memory,
            llm: LlmSettings::default(),
        }
    }
}

impl SiftConfig {
    /// Create configuration from the process environment and defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match get("PORT") {
            Some(p) => p
                .trim()
                .parse()
                .map_err(|_| Error::Config(format!("PORT is not a valid port: {}", p)))?,
            None => DEFAULT_PORT,
        };
        let host = get("HOST").unwrap_or_else(|| DEFAULT_HOST.into());

        let database_url = get("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into());
        let database = DatabaseLocation::parse(&database_url)?;

        let provider = match get("LLM_PROVIDER") {
            Some(p) => p.parse()?,
            None => LlmProvider::OpenAI,
        };
        let api_key = get("LLM_API_KEY").or_else(|| get(provider.api_key_var()));
        if api_key.is_none() {
            warn!(
                "No API key found for provider {} (set {} or LLM_API_KEY)",
                provider,
                provider.api_key_var()
            );
        }

        let llm = LlmSettings {
            provider,
            model: get("LLM_MODEL").unwrap_or_else(|| DEFAULT_MODEL.into()),
            api_key,
            base_url: get("LLM_BASE_URL"),
            temperature: parse_or("LLM_TEMPERATURE", get("LLM_TEMPERATURE"), DEFAULT_TEMPERATURE)?,
            max_tokens: parse_or("LLM_MAX_TOKENS", get("LLM_MAX_TOKENS"), DEFAULT_MAX_TOKENS)?,
            timeout_secs: parse_or("LLM_TIMEOUT_SECS", get("LLM_TIMEOUT_SECS"), DEFAULT_TIMEOUT_SECS)?,
        };

        Ok(Self {
            host,
            port,
            database,
            llm,
        })
    }
}

fn parse_or<T: FromStr>(key: &str, value: Option<String>, default: T) -> Result<T> {
    match value {
        Some(v) => v
            .trim()
            .parse()
            .map_err(|_| Error::Config(format!("{} has an invalid value: {}", key, v))),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<SiftConfig> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        SiftConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.port, 8000);
        assert_eq!(
            config.database,
            DatabaseLocation::File(PathBuf::from("./knowledge_extractor.db"))
        );
        assert_eq!(config.llm.provider, LlmProvider::OpenAI);
        assert_eq!(config.llm.model, "gpt-4.1-mini");
        assert!(!config.llm.is_configured());
        assert_eq!(config.llm.base_url(), "https://api.openai.com/v1");
    }

    #[test]
    fn test_provider_key_lookup() {
        let config = config_from(&[
            ("LLM_PROVIDER", "groq"),
            ("GROQ_API_KEY", "gsk-test"),
            ("OPENAI_API_KEY", "sk-ignored"),
        ])
        .unwrap();
        assert_eq!(config.llm.provider, LlmProvider::Groq);
        assert_eq!(config.llm.api_key.as_deref(), Some("gsk-test"));

        let config = config_from(&[("OPENAI_API_KEY", "sk-a"), ("LLM_API_KEY", "sk-b")]).unwrap();
        assert_eq!(config.llm.api_key.as_deref(), Some("sk-b"));
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(config_from(&[("PORT", "eighty")]), Err(Error::Config(_))));
        assert!(matches!(
            config_from(&[("LLM_TEMPERATURE", "warm")]),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            config_from(&[("LLM_PROVIDER", "cohere")]),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_database_url_forms() {
        assert_eq!(
            DatabaseLocation::parse("sqlite:////var/lib/sift/db.sqlite").unwrap(),
            DatabaseLocation::File(PathBuf::from("/var/lib/sift/db.sqlite"))
        );
        assert_eq!(
            DatabaseLocation::parse("data/sift.db").unwrap(),
            DatabaseLocation::File(PathBuf::from("data/sift.db"))
        );
        assert_eq!(DatabaseLocation::parse(":memory:").unwrap(), DatabaseLocation::Memory);
        assert_eq!(DatabaseLocation::parse("sqlite://").unwrap(), DatabaseLocation::Memory);
        assert_eq!(
            DatabaseLocation::parse("sqlite:///:memory:").unwrap(),
            DatabaseLocation::Memory
        );
        assert!(DatabaseLocation::parse("postgres://localhost/db").is_err());
    }

    #[test]
    fn test_api_key_not_serialized() {
        let settings = LlmSettings {
            api_key: Some("sk-secret".into()),
            ..Default::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert!(!json.contains("sk-secret"));
    }
}
