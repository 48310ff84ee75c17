//! GenerationClient - one bounded attempt at the generation service.
//!
//! Every failure mode (provider error, empty answer, timeout) collapses
//! into a fallback `GenerationResult`. Nothing here returns an error.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::conversation::{sanitize_response, GenerationResult, FALLBACK_RESPONSE};
use crate::ports::{AIProvider, CompletionRequest, FinishReason};

/// Request shaping and time limit for generation calls.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationSettings {
    /// Upper bound on one provider call.
    pub timeout: Duration,
    pub max_output_tokens: Option<u32>,
    pub temperature: Option<f32>,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(20),
            max_output_tokens: Some(1024),
            temperature: None,
        }
    }
}

impl GenerationSettings {
    /// Settings for the stateless quick-answer endpoint: short and focused.
    pub fn quick_answer(timeout: Duration) -> Self {
        Self {
            timeout,
            max_output_tokens: Some(256),
            temperature: Some(0.2),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_output_tokens(mut self, max: u32) -> Self {
        self.max_output_tokens = Some(max);
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

/// Wraps an `AIProvider` with a timeout and a static fallback.
#[derive(Clone)]
pub struct GenerationClient {
    provider: Arc<dyn AIProvider>,
    settings: GenerationSettings,
    fallback: &'static str,
}

impl GenerationClient {
    /// Creates a client that answers with the standard fallback on failure.
    pub fn new(provider: Arc<dyn AIProvider>, settings: GenerationSettings) -> Self {
        Self {
            provider,
            settings,
            fallback: FALLBACK_RESPONSE,
        }
    }

    /// Replaces the canned answer used on failure.
    pub fn with_fallback(mut self, fallback: &'static str) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn settings(&self) -> &GenerationSettings {
        &self.settings
    }

    /// Makes a single attempt; never retries.
    pub async fn generate(&self, prompt: impl Into<String>) -> GenerationResult {
        let request = self.build_request(prompt.into());
        let info = self.provider.provider_info();

        match tokio::time::timeout(self.settings.timeout, self.provider.complete(request)).await {
            Ok(Ok(response)) if !response.content.trim().is_empty() => {
                if response.finish_reason == FinishReason::Length {
                    tracing::debug!(
                        provider = %info.name,
                        model = %response.model,
                        "generation stopped at the output token limit"
                    );
                }
                GenerationResult::generated(response.content)
            }
            Ok(Ok(response)) => {
                tracing::warn!(
                    provider = %info.name,
                    model = %response.model,
                    "generation returned no text, using fallback"
                );
                self.fallback_result()
            }
            Ok(Err(err)) => {
                tracing::warn!(
                    provider = %info.name,
                    kind = err.kind(),
                    error = %err,
                    "generation failed, using fallback"
                );
                self.fallback_result()
            }
            Err(_) => {
                tracing::warn!(
                    provider = %info.name,
                    timeout_ms = self.settings.timeout.as_millis() as u64,
                    "generation timed out, using fallback"
                );
                self.fallback_result()
            }
        }
    }

    /// Strips markup from a generated answer.
    ///
    /// An answer that is nothing but markup becomes the fallback.
    pub fn sanitize(&self, result: GenerationResult) -> GenerationResult {
        if !result.succeeded {
            return result;
        }

        let cleaned = sanitize_response(&result.text);
        if cleaned.trim().is_empty() {
            tracing::warn!("generated answer was empty after sanitizing, using fallback");
            return self.fallback_result();
        }
        GenerationResult::generated(cleaned)
    }

    fn build_request(&self, prompt: String) -> CompletionRequest {
        let mut request = CompletionRequest::new(prompt);
        if let Some(max) = self.settings.max_output_tokens {
            request = request.with_max_tokens(max);
        }
        if let Some(temperature) = self.settings.temperature {
            request = request.with_temperature(temperature);
        }
        request
    }

    fn fallback_result(&self) -> GenerationResult {
        GenerationResult::substitute(self.fallback)
    }
}
