//! AI provider abstractions and implementations.
//!
//! The handler only sees [`TextProvider`]; the Gemini client and the mock
//! used by tests both sit behind it.

pub mod gemini;
pub mod mock;

use async_trait::async_trait;
use thiserror::Error;

/// Error type for provider operations.
///
/// Variants are kept apart for logging; callers of the HTTP endpoint see a
/// single failure shape regardless of kind.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    /// Error reported by the provider itself (auth, quota, invalid argument).
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Malformed provider response: {0}")]
    MalformedResponse(String),

    #[error("Response blocked: {0}")]
    Blocked(String),
}

/// Fixed generation settings applied to every request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParams {
    pub model: &'static str,
    pub system_instruction: &'static str,
    pub temperature: f32,
    pub top_k: u32,
}

/// Generated text plus the bookkeeping the provider reports alongside it.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderResponse {
    pub text: String,

    /// Input tokens consumed.
    pub input_tokens: i32,

    /// Output tokens generated.
    pub output_tokens: i32,

    pub finish_reason: FinishReason,
}

/// Reason why generation stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishReason {
    Complete,
    Length,
    Other,
}

/// Trait for text generation providers (e.g., Gemini).
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Generate a response for a single user prompt.
    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<ProviderResponse, ProviderError>;

    /// Local readiness check. Must not call the provider over the network.
    async fn health_check(&self) -> Result<(), ProviderError>;
}
