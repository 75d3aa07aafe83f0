//! LLM integration module
//!
//! Blocking single-shot completions for the discussion agents.
//!
//! Supported providers:
//! - Anthropic (Messages API)
//! - OpenAI (chat completions, including compatible servers)

mod anthropic;
mod error;
mod openai;
mod provider;
#[cfg(test)]
mod stub_server;

pub use error::LlmError;
pub use provider::{completion_text, CompletionClient, CompletionRequest, SharedClient};

// Provider implementations
pub use anthropic::AnthropicClient;
pub use openai::OpenAIClient;

use crate::config::{require_api_key, LlmConfig, ProviderKind};
use std::sync::Arc;
use std::time::Duration;

/// Build the configured completion client
///
/// Fails with a configuration error when no usable API key is present.
pub fn build_client(config: &LlmConfig) -> crate::Result<SharedClient> {
    let api_key = require_api_key(config)?;
    let model = config.model();
    let timeout = Duration::from_secs(config.timeout);

    let client: SharedClient = match config.provider {
        ProviderKind::Anthropic => {
            let mut client = AnthropicClient::new(api_key, model).with_timeout(timeout);
            if let Some(url) = config.base_url.as_deref() {
                client = client.with_base_url(url);
            }
            Arc::new(client)
        }
        ProviderKind::OpenAI => {
            let mut client = OpenAIClient::new(api_key, model).with_timeout(timeout);
            if let Some(url) = config.base_url.as_deref() {
                client = client.with_base_url(url);
            }
            Arc::new(client)
        }
    };

    tracing::info!(provider = client.id(), model = client.model(), "completion client ready");
    Ok(client)
}
