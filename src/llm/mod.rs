//! LLM — provider adapter for the trip guide.
//!
//! DESIGN
//! ======
//! Configured from environment variables. `LlmClient` binds a Gemini client
//! to one model identifier and implements the provider-neutral [`LlmChat`]
//! trait, which is the seam the guide gateway is written against.

pub mod config;
pub mod gemini;
pub mod types;

use config::LlmConfig;
pub use types::LlmChat;
use types::{ChatResponse, LlmError, Message};

// =============================================================================
// CLIENT
// =============================================================================

/// Concrete LLM client bound to a single model.
///
/// Configured from environment variables by [`LlmClient::from_env`].
pub struct LlmClient {
    inner: gemini::GeminiClient,
    model: String,
}

impl LlmClient {
    /// Build an LLM client from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing or the HTTP client fails.
    pub fn from_env() -> Result<Self, LlmError> {
        let config = LlmConfig::from_env()?;
        Self::from_config(config)
    }

    /// Build an LLM client from a parsed typed config.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn from_config(config: LlmConfig) -> Result<Self, LlmError> {
        let inner = gemini::GeminiClient::new(config.api_key, config.base_url, config.timeouts)?;
        Ok(Self { inner, model: config.model })
    }
}

#[async_trait::async_trait]
impl LlmChat for LlmClient {
    fn model(&self) -> &str {
        &self.model
    }

    async fn chat(&self, max_tokens: u32, system: &str, messages: &[Message]) -> Result<ChatResponse, LlmError> {
        self.inner
            .chat(&self.model, max_tokens, system, messages)
            .await
    }
}
