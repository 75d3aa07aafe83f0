//! Completion client trait and the error-to-text adapter

use super::LlmError;
use std::sync::Arc;

/// A single completion call: persona, prompt and sampling parameters
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    /// System instruction framing the agent
    pub system: String,

    /// User-visible prompt
    pub prompt: String,

    /// Upper bound on generated tokens
    pub max_tokens: u32,

    /// Sampling temperature (higher = more varied)
    pub temperature: f64,
}

/// Blocking text-completion service
///
/// Implementations perform exactly one request per call. Timeouts, if any,
/// are the transport's own; there is no retry.
pub trait CompletionClient: Send + Sync {
    /// Provider identifier (e.g., "anthropic", "openai")
    fn id(&self) -> &str;

    /// Model the client requests
    fn model(&self) -> &str;

    /// Send the request and return the generated text
    fn complete(&self, request: &CompletionRequest) -> Result<String, LlmError>;
}

/// Thread-safe shared client
pub type SharedClient = Arc<dyn CompletionClient>;

/// Run a completion and turn the outcome into turn content
///
/// Successful answers are trimmed; failures become `"Error: <description>"`
/// so the discussion can carry on.
pub fn completion_text(client: &dyn CompletionClient, request: &CompletionRequest) -> String {
    match client.complete(request) {
        Ok(text) => text.trim().to_string(),
        Err(e) => {
            tracing::warn!(provider = client.id(), error = %e, "completion failed");
            format!("Error: {}", e)
        }
    }
}
