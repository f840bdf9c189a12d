//! External LLM provider completions.
//!
//! OpenAI and Groq share the chat-completions format. Anthropic uses the
//! Messages API. Transport and envelope failures are [`Error::Service`];
//! whatever text the model produced is handed back untouched.

use reqwest::Client;
use serde_json::{json, Value};
use sift_core::{Error, LlmProvider, LlmSettings, Result};
use tracing::{debug, error};

const ANTHROPIC_VERSION: &str = "2023-06-01";
/// Upper bound on how much of an error body ends up in messages.
const MAX_ERROR_BODY: usize = 500;

/// Run one completion and return the model's text.
pub async fn complete(
    client: &Client,
    settings: &LlmSettings,
    system: &str,
    user: &str,
) -> Result<String> {
    let api_key = settings
        .api_key
        .as_deref()
        .filter(|k| !k.trim().is_empty())
        .ok_or_else(|| Error::Input(format!("No API key configured for {}", settings.provider)))?;

    match settings.provider {
        LlmProvider::OpenAI | LlmProvider::Groq => {
            complete_openai_compat(client, settings, api_key, system, user).await
        }
        LlmProvider::Anthropic => complete_anthropic(client, settings, api_key, system, user).await,
    }
}

/// OpenAI-compatible `/chat/completions` (OpenAI, Groq, local gateways).
async fn complete_openai_compat(
    client: &Client,
    settings: &LlmSettings,
    api_key: &str,
    system: &str,
    user: &str,
) -> Result<String> {
    let url = format!("{}/chat/completions", settings.base_url());
    let body = json!({
        "model": settings.model,
        "messages": [
            {"role": "system", "content": system},
            {"role": "user", "content": user},
        ],
        "temperature": settings.temperature,
        "max_tokens": settings.max_tokens,
        "response_format": {"type": "json_object"},
    });

    debug!("Requesting completion from {} with model {}", url, settings.model);

    let request = client
        .post(&url)
        .header("Authorization", format!("Bearer {}", api_key))
        .json(&body);
    let parsed = send(request, settings.provider).await?;

    parsed["choices"][0]["message"]["content"]
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| Error::Service("Provider response has no message content".into()))
}

/// Anthropic Messages API.
async fn complete_anthropic(
    client: &Client,
    settings: &LlmSettings,
    api_key: &str,
    system: &str,
    user: &str,
) -> Result<String> {
    let url = format!("{}/messages", settings.base_url());
    let body = json!({
        "model": settings.model,
        "system": system,
        "messages": [{"role": "user", "content": user}],
        "temperature": settings.temperature,
        "max_tokens": settings.max_tokens,
    });

    debug!("Requesting completion from Anthropic with model {}", settings.model);

    let request = client
        .post(&url)
        .header("x-api-key", api_key)
        .header("anthropic-version", ANTHROPIC_VERSION)
        .json(&body);
    let parsed = send(request, settings.provider).await?;

    let text: String = parsed["content"]
        .as_array()
        .into_iter()
        .flatten()
        .filter(|block| block["type"] == "text")
        .filter_map(|block| block["text"].as_str())
        .collect();
    if text.is_empty() {
        return Err(Error::Service("Provider response has no text content".into()));
    }
    Ok(text)
}

async fn send(request: reqwest::RequestBuilder, provider: LlmProvider) -> Result<Value> {
    let response = request.send().await.map_err(|e| {
        error!("{} request failed: {}", provider, e);
        Error::Service(format!("Request to {} failed: {}", provider, e))
    })?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        let body: String = body.chars().take(MAX_ERROR_BODY).collect();
        error!("{} API error {}: {}", provider, status, body);
        return Err(Error::Service(format!("{} API error {}: {}", provider, status, body)));
    }

    response
        .json::<Value>()
        .await
        .map_err(|e| Error::Service(format!("Unreadable response from {}: {}", provider, e)))
}
