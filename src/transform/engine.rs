//! Runs the full pipeline for one submission.

use tracing::{debug, warn};

use crate::transform::config::TransformConfig;
use crate::transform::errors::TransformResult;
use crate::transform::invoker::{GeminiInvoker, ModelInvoker};
use crate::transform::prompt::{TRANSFORM_PREAMBLE, build_prompt};
use crate::transform::response::split_reply;
use crate::transform::types::Transformation;

/// Transformation engine: builds the prompt, invokes the model, splits the
/// reply. One synchronous request/response cycle per call, no shared state.
pub struct TransformEngine {
    invoker: Box<dyn ModelInvoker>,
    model: String,
}

impl TransformEngine {
    /// Create an engine backed by the Gemini invoker.
    ///
    /// # Errors
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be built.
    pub fn new(config: &TransformConfig) -> TransformResult<Self> {
        config.validate()?;
        Ok(Self {
            invoker: Box::new(GeminiInvoker::new(config)?),
            model: config.model.clone(),
        })
    }

    /// Create an engine with a custom invoker (used by tests).
    #[must_use]
    pub fn with_invoker(model: impl Into<String>, invoker: Box<dyn ModelInvoker>) -> Self {
        Self {
            invoker,
            model: model.into(),
        }
    }

    /// Name of the model the engine invokes.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Transform one submission into its three variants.
    ///
    /// # Errors
    /// Returns an error for empty input (before any invocation) or when the
    /// model invocation fails. A reply with missing sections is not an
    /// error; it yields a [`Transformation`] carrying a warning.
    pub async fn transform(&self, input: &str) -> TransformResult<Transformation> {
        let prompt = build_prompt(input)?;

        let reply = self.invoker.invoke(TRANSFORM_PREAMBLE, &prompt).await?;
        debug!(reply_chars = reply.len(), "model reply received");

        let transformation = split_reply(&reply);
        if let Some(warning) = &transformation.warning {
            warn!(missing = %warning.describe(), "model reply was missing sections");
        }

        Ok(transformation)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::transform::errors::TransformError;
    use crate::transform::types::Section;

    /// Records every invocation and hands back a canned reply.
    struct RecordingInvoker {
        reply: String,
        calls: Mutex<Vec<String>>,
    }

    impl RecordingInvoker {
        fn new(reply: &str) -> Self {
            Self {
                reply: reply.to_string(),
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl ModelInvoker for RecordingInvoker {
        async fn invoke(&self, _preamble: &str, prompt: &str) -> TransformResult<String> {
            self.calls.lock().unwrap().push(prompt.to_string());
            Ok(self.reply.clone())
        }
    }

    fn engine_with_reply(reply: &str) -> (TransformEngine, std::sync::Arc<RecordingInvoker>) {
        let invoker = std::sync::Arc::new(RecordingInvoker::new(reply));
        let engine = TransformEngine::with_invoker(
            "test-model",
            Box::new(SharedInvoker(std::sync::Arc::clone(&invoker))),
        );
        (engine, invoker)
    }

    /// Arc wrapper so the test can inspect calls after handing the invoker
    /// to the engine.
    struct SharedInvoker(std::sync::Arc<RecordingInvoker>);

    #[async_trait]
    impl ModelInvoker for SharedInvoker {
        async fn invoke(&self, preamble: &str, prompt: &str) -> TransformResult<String> {
            self.0.invoke(preamble, prompt).await
        }
    }

    #[tokio::test]
    async fn test_end_to_end_three_sections() {
        let (engine, invoker) =
            engine_with_reply("1. हाउ आर यू?\n2. आप कैसे हैं?\n3. Aap kaise hain?");

        let outcome = engine.transform("How are you?").await.unwrap();
        assert_eq!(outcome.result.devanagari_transliteration, "हाउ आर यू?");
        assert_eq!(outcome.result.hindi_devanagari, "आप कैसे हैं?");
        assert_eq!(outcome.result.hindi_roman, "Aap kaise hain?");
        assert!(outcome.warning.is_none());

        let calls = invoker.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].contains("How are you?"));
    }

    #[tokio::test]
    async fn test_empty_input_never_invokes() {
        let (engine, invoker) = engine_with_reply("unused");

        let error = engine.transform("").await.unwrap_err();
        assert!(matches!(error, TransformError::EmptyInput));
        assert!(invoker.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_partial_reply_surfaces_warning() {
        let (engine, _invoker) = engine_with_reply("1. हेलो\n2. नमस्ते");

        let outcome = engine.transform("Hello").await.unwrap();
        assert_eq!(outcome.result.hindi_roman, "");

        let warning = outcome.warning.unwrap();
        assert_eq!(warning.missing, vec![Section::HindiRoman]);
    }

    #[tokio::test]
    async fn test_upstream_error_propagates() {
        struct FailingInvoker;

        #[async_trait]
        impl ModelInvoker for FailingInvoker {
            async fn invoke(&self, _preamble: &str, _prompt: &str) -> TransformResult<String> {
                Err(TransformError::Upstream {
                    status: 429,
                    body: "rate limit exceeded".to_string(),
                })
            }
        }

        let engine = TransformEngine::with_invoker("test-model", Box::new(FailingInvoker));
        let error = engine.transform("Hello").await.unwrap_err();
        assert!(matches!(error, TransformError::Upstream { status: 429, .. }));
    }
}
