//! Messages API client.
//!
//! One non-streaming request per record; the reply text is returned as-is
//! for validation by the caller.

use reqwest::Client;
use specfill_core::{Error, Result};
use tracing::{debug, warn};

use crate::config::{AiConfig, API_VERSION};
use crate::types::{ChatMessage, MessagesRequest, MessagesResponse};

/// Send one user message with the given system prompt and return the reply text.
pub async fn complete(
    client: &Client,
    config: &AiConfig,
    system: &str,
    user_content: &str,
) -> Result<String> {
    let api_key = config.require_api_key()?;

    let body = MessagesRequest {
        model: config.model.clone(),
        max_tokens: config.max_tokens,
        system: system.to_string(),
        messages: vec![ChatMessage::user(user_content)],
    };

    debug!("Requesting specs from {} with model {}", config.endpoint, config.model);

    let response = client
        .post(&config.endpoint)
        .header("x-api-key", api_key)
        .header("anthropic-version", API_VERSION)
        .header("Content-Type", "application/json")
        .json(&body)
        .send()
        .await
        .map_err(|e| Error::Http(format!("Request failed: {}", e)))?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(Error::Provider(format!("API error {}: {}", status, body)));
    }

    let parsed: MessagesResponse = response
        .json()
        .await
        .map_err(|e| Error::Http(format!("Response read error: {}", e)))?;

    if parsed.stop_reason.as_deref() == Some("max_tokens") {
        warn!("Reply truncated at {} tokens", config.max_tokens);
    }

    parsed
        .first_text()
        .map(str::to_string)
        .ok_or_else(|| Error::InvalidResponse("reply has no text block".into()))
}
