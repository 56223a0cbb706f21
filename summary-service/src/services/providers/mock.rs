//! Mock provider implementation for testing.

use super::{FinishReason, GenerationParams, ProviderError, ProviderResponse, TextProvider};
use async_trait::async_trait;
use std::sync::Mutex;

/// A call received by [`MockTextProvider`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub prompt: String,
    pub params: GenerationParams,
}

/// Mock text provider that returns a scripted outcome and records every call.
pub struct MockTextProvider {
    outcome: Result<String, ProviderError>,
    configured: bool,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockTextProvider {
    /// Succeeds with `text` on every call.
    pub fn returning(text: impl Into<String>) -> Self {
        Self::with_outcome(Ok(text.into()))
    }

    /// Fails with `error` on every call.
    pub fn failing(error: ProviderError) -> Self {
        Self::with_outcome(Err(error))
    }

    fn with_outcome(outcome: Result<String, ProviderError>) -> Self {
        Self {
            outcome,
            configured: true,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Make `health_check` report the provider as unconfigured.
    pub fn unconfigured(mut self) -> Self {
        self.configured = false;
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|calls| calls.len()).unwrap_or(0)
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<ProviderResponse, ProviderError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(RecordedCall {
                prompt: prompt.to_string(),
                params: *params,
            });
        }

        let text = self.outcome.clone()?;

        Ok(ProviderResponse {
            text,
            input_tokens: 0,
            output_tokens: 0,
            finish_reason: FinishReason::Complete,
        })
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        if self.configured {
            Ok(())
        } else {
            Err(ProviderError::NotConfigured(
                "Mock text provider not configured".to_string(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PARAMS: GenerationParams = GenerationParams {
        model: "mock",
        system_instruction: "",
        temperature: 0.0,
        top_k: 1,
    };

    #[tokio::test]
    async fn records_call_and_reports_no_token_usage() {
        let provider = MockTextProvider::returning("done");
        let long_prompt = "x".repeat(10_000);

        let response = provider.generate(&long_prompt, &PARAMS).await.unwrap();

        assert_eq!(response.text, "done");
        assert_eq!(response.input_tokens, 0);
        assert_eq!(response.output_tokens, 0);
        assert_eq!(provider.call_count(), 1);
        assert_eq!(provider.calls()[0].prompt.len(), 10_000);
    }
}
