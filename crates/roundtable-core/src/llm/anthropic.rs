//! Anthropic LLM provider
//!
//! Connects to the Anthropic Messages API for single-shot completions.

use super::{CompletionClient, CompletionRequest, LlmError};
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
const API_VERSION: &str = "2023-06-01";

/// Anthropic provider
pub struct AnthropicClient {
    /// API key
    api_key: String,

    /// Base URL for the API
    base_url: String,

    /// Model to request
    model: String,

    /// HTTP agent
    agent: ureq::Agent,
}

impl AnthropicClient {
    /// Create a new Anthropic client
    pub fn new(api_key: &str, model: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: model.to_string(),
            agent: ureq::Agent::new(),
        }
    }

    /// Create with a specific base URL (for proxies and test servers)
    pub fn with_base_url(mut self, url: &str) -> Self {
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Apply a transport timeout to every request
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.agent = ureq::AgentBuilder::new().timeout(timeout).build();
        self
    }

    fn request_body(&self, request: &CompletionRequest) -> serde_json::Value {
        serde_json::json!({
            "model": self.model,
            "max_tokens": request.max_tokens,
            "temperature": request.temperature,
            "system": request.system,
            "messages": [
                { "role": "user", "content": request.prompt }
            ]
        })
    }
}

impl CompletionClient for AnthropicClient {
    fn id(&self) -> &str {
        "anthropic"
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn complete(&self, request: &CompletionRequest) -> Result<String, LlmError> {
        let response = self
            .agent
            .post(&format!("{}/v1/messages", self.base_url))
            .set("Content-Type", "application/json")
            .set("x-api-key", &self.api_key)
            .set("anthropic-version", API_VERSION)
            .send_json(self.request_body(request))?;

        let body = response.into_string()?;
        let json: serde_json::Value = serde_json::from_str(&body)?;
        parse_anthropic_response(&json)
    }
}

/// Extract the first text block from a Messages API response
fn parse_anthropic_response(json: &serde_json::Value) -> Result<String, LlmError> {
    if let Some(error) = json.get("error") {
        let message = error
            .get("message")
            .and_then(|m| m.as_str())
            .unwrap_or("Unknown error");
        return Err(LlmError::Api {
            status: 500,
            message: message.to_string(),
        });
    }

    json.get("content")
        .and_then(|c| c.get(0))
        .and_then(|c| c.get("text"))
        .and_then(|t| t.as_str())
        .map(|s| s.to_string())
        .ok_or_else(|| {
            LlmError::InvalidResponse("no text content in Anthropic response".to_string())
        })
}
