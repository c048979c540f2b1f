//! Document generator — the boundary between the form and the completion API.
//!
//! Failures never escape as errors: they come back as `GenerationResult::Failure`
//! carrying a human-readable description, and the form renders that text exactly
//! like a successful draft (it is shown and offered for download).

use std::sync::Arc;

use tracing::{error, info};

use crate::drafting::prompt_builder::build_prompt;
use crate::llm_client::CompletionClient;

/// Returned without any network I/O when no API key was configured.
pub const CLIENT_NOT_INITIALIZED: &str = "API client is not initialized. Check your API key.";

/// Outcome of one generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationResult {
    Success(String),
    Failure(String),
}

impl GenerationResult {
    /// The text shown in the result block, whichever variant this is.
    pub fn as_text(&self) -> &str {
        match self {
            GenerationResult::Success(text) | GenerationResult::Failure(text) => text,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, GenerationResult::Success(_))
    }
}

/// Immutable binding of the credential-backed client, built once at startup.
/// `None` means generation is disabled for the lifetime of the process.
#[derive(Clone)]
pub struct DocumentGenerator {
    client: Option<Arc<dyn CompletionClient>>,
}

impl DocumentGenerator {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self {
            client: Some(client),
        }
    }

    pub fn disabled() -> Self {
        Self { client: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.client.is_some()
    }

    /// Drafts a document body for `topic`. Exactly one completion call when enabled,
    /// none when disabled. Identical inputs are never cached.
    pub async fn generate(&self, topic: &str, info: &str) -> GenerationResult {
        let Some(client) = &self.client else {
            return GenerationResult::Failure(CLIENT_NOT_INITIALIZED.to_string());
        };

        let prompt = build_prompt(topic, info);
        info!(
            topic_len = topic.len(),
            info_len = info.len(),
            "Requesting document body"
        );

        match client.complete(&prompt).await {
            Ok(text) => GenerationResult::Success(text),
            Err(e) => {
                error!("Document generation failed: {e}");
                GenerationResult::Failure(format!("Error while calling the OpenAI API: {e}"))
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::SpyClient;
    use super::*;

    #[tokio::test]
    async fn test_disabled_generator_returns_fixed_message() {
        let generator = DocumentGenerator::disabled();

        let result = generator.generate("Field trip notice", "").await;

        assert_eq!(
            result,
            GenerationResult::Failure(CLIENT_NOT_INITIALIZED.to_string())
        );
        assert!(!generator.is_enabled());
    }

    #[tokio::test]
    async fn test_success_is_passed_through_unmodified() {
        let spy = Arc::new(SpyClient::succeeding("Dear parents...\n\n  Regards  "));
        let generator = DocumentGenerator::new(spy.clone());

        let result = generator.generate("Field trip notice for grade 1", "").await;

        assert_eq!(
            result,
            GenerationResult::Success("Dear parents...\n\n  Regards  ".to_string())
        );
        assert_eq!(spy.calls(), 1);
    }

    #[tokio::test]
    async fn test_prompt_is_built_from_inputs() {
        let spy = Arc::new(SpyClient::succeeding("ok"));
        let generator = DocumentGenerator::new(spy.clone());

        generator.generate("Field trip notice for grade 1", "").await;

        let prompts = spy.prompts();
        assert_eq!(prompts.len(), 1);
        assert_eq!(prompts[0], build_prompt("Field trip notice for grade 1", ""));
    }

    #[tokio::test]
    async fn test_failure_is_described_not_raised() {
        let spy = Arc::new(SpyClient::failing(401, "Incorrect API key provided"));
        let generator = DocumentGenerator::new(spy.clone());

        let result = generator.generate("Topic", "info").await;

        assert!(!result.is_success());
        assert_eq!(
            result.as_text(),
            "Error while calling the OpenAI API: API error (status 401): Incorrect API key provided"
        );
    }

    #[tokio::test]
    async fn test_repeated_inputs_are_not_cached() {
        let spy = Arc::new(SpyClient::succeeding("text"));
        let generator = DocumentGenerator::new(spy.clone());

        generator.generate("Same topic", "same").await;
        generator.generate("Same topic", "same").await;

        assert_eq!(spy.calls(), 2);
    }

    #[test]
    fn test_as_text_is_same_for_both_variants() {
        let ok = GenerationResult::Success("body".to_string());
        let err = GenerationResult::Failure("body".to_string());
        assert_eq!(ok.as_text(), err.as_text());
    }
}
