//! Delegated extraction strategy.

use async_trait::async_trait;
use reqwest::Client;
use specfill_core::{ProductContext, Result, SpecExtractor, SpecSet};
use tracing::warn;

use crate::config::AiConfig;
use crate::prompt::{build_product_context, SYSTEM_PROMPT};
use crate::providers;
use crate::response::parse_spec_response;

/// Extracts specs by asking an external model.
pub struct AiExtractor {
    client: Client,
    config: AiConfig,
}

impl AiExtractor {
    /// Build from config; fails when no API key is available.
    pub fn from_config(config: AiConfig) -> Result<Self> {
        config.require_api_key()?;
        Ok(Self {
            client: Client::new(),
            config,
        })
    }

    /// Like [`SpecExtractor::extract`] but surfaces the failure reason.
    pub async fn try_extract(&self, context: &ProductContext) -> Result<SpecSet> {
        if context.is_empty() {
            return Ok(SpecSet::new());
        }
        let prompt = build_product_context(context);
        if prompt.trim().is_empty() {
            return Ok(SpecSet::new());
        }
        let reply = providers::complete(&self.client, &self.config, SYSTEM_PROMPT, &prompt).await?;
        parse_spec_response(&reply)
    }
}

#[async_trait]
impl SpecExtractor for AiExtractor {
    fn name(&self) -> &'static str {
        "ai"
    }

    fn is_remote(&self) -> bool {
        true
    }

    async fn extract(&self, context: &ProductContext) -> SpecSet {
        match self.try_extract(context).await {
            Ok(specs) => specs,
            Err(e) => {
                warn!("AI extraction failed: {}", e);
                SpecSet::new()
            }
        }
    }
}
