//! Delegated-extraction configuration: file values with env fallbacks.

use std::path::Path;

use serde::{Deserialize, Serialize};
use specfill_core::{Error, Result};
use tracing::info;

pub const DEFAULT_MODEL: &str = "claude-3-5-haiku-20241022";
pub const DEFAULT_ENDPOINT: &str = "https://api.anthropic.com/v1/messages";
pub const DEFAULT_MAX_TOKENS: usize = 300;
pub const API_VERSION: &str = "2023-06-01";

/// Approximate cost of one extraction call, in USD.
pub const COST_PER_CALL: f64 = 0.0003;

/// Settings for the delegated strategy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiConfig {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: usize,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

fn default_model() -> String {
    DEFAULT_MODEL.into()
}
fn default_max_tokens() -> usize {
    DEFAULT_MAX_TOKENS
}
fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.into()
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            max_tokens: default_max_tokens(),
            endpoint: default_endpoint(),
        }
    }
}

impl AiConfig {
    /// Load config from an optional JSON file, falling back to env vars and defaults.
    ///
    /// A missing or unreadable file is not an error; a key is only required
    /// when the extractor is built.
    pub fn load(config_path: Option<&Path>) -> Self {
        let mut config: AiConfig = config_path
            .and_then(|p| std::fs::read_to_string(p).ok())
            .and_then(|s| serde_json::from_str(&s).ok())
            .unwrap_or_default();

        if config.api_key.is_none() {
            config.api_key = std::env::var("ANTHROPIC_API_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty());
        }
        if let Ok(model) = std::env::var("SPECFILL_AI_MODEL") {
            if !model.trim().is_empty() {
                config.model = model;
            }
        }

        if let Some(path) = config_path {
            info!("AI config resolved (file: {})", path.display());
        }
        config
    }

    /// Replace the key (explicit CLI value beats file and env).
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// The configured key, or a configuration error naming the env var.
    pub fn require_api_key(&self) -> Result<&str> {
        self.api_key.as_deref().ok_or_else(|| {
            Error::Config(
                "API key required. Set ANTHROPIC_API_KEY or pass --api-key".into(),
            )
        })
    }
}
