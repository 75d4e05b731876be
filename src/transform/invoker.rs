//! Model invocation against the hosted Gemini REST API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use tracing::debug;

use crate::transform::config::TransformConfig;
use crate::transform::errors::{TransformError, TransformResult};

/// HTTP connect timeout.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
/// HTTP client timeout for a full generation.
const CLIENT_TIMEOUT: Duration = Duration::from_secs(120);
/// Token budget for one reply; three short sections fit comfortably.
const MAX_OUTPUT_TOKENS: u32 = 2048;

/// Consumed interface to the hosted model: one prompt in, one reply out.
///
/// No retry is performed at this seam; failures surface to the caller and
/// are terminal for the current submission.
#[async_trait]
pub trait ModelInvoker: Send + Sync {
    /// Send a prompt to the model and return its raw text reply.
    ///
    /// # Errors
    /// Returns an error if the request fails, the API answers with a
    /// non-success status, or the reply payload carries no text.
    async fn invoke(&self, preamble: &str, prompt: &str) -> TransformResult<String>;
}

/// Invoker for Google's Gemini `generateContent` REST endpoint.
pub struct GeminiInvoker {
    client: Client,
    model: String,
    api_key: String,
    base_url: String,
    temperature: f64,
}

impl GeminiInvoker {
    /// Create an invoker from validated configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: &TransformConfig) -> TransformResult<Self> {
        let client = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(CLIENT_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            model: config.model.clone(),
            api_key: config.api_key.clone(),
            base_url: config.base_url().to_string(),
            temperature: config.temperature,
        })
    }
}

#[async_trait]
impl ModelInvoker for GeminiInvoker {
    async fn invoke(&self, preamble: &str, prompt: &str) -> TransformResult<String> {
        let request_body = json!({
            "contents": [
                {
                    "role": "user",
                    "parts": [
                        {"text": format!("{preamble}\n\n{prompt}")}
                    ]
                }
            ],
            "generationConfig": {
                "temperature": self.temperature,
                "maxOutputTokens": MAX_OUTPUT_TOKENS
            }
        });

        let api_url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        debug!(model = %self.model, prompt_chars = prompt.len(), "invoking model");

        let response = self
            .client
            .post(api_url)
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TransformError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let response_body: serde_json::Value = response.json().await?;
        extract_reply_text(&response_body)
    }
}

/// Extract the reply text from a `generateContent` response.
///
/// The response format is:
/// `{"candidates": [{"content": {"parts": [{"text": "..."}]}}]}`
fn extract_reply_text(response_body: &serde_json::Value) -> TransformResult<String> {
    response_body["candidates"][0]["content"]["parts"][0]["text"]
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| {
            TransformError::MalformedReply("no text part in first candidate".to_string())
        })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_reply_text() {
        let body = json!({
            "candidates": [
                {"content": {"parts": [{"text": "1. हेलो\n2. नमस्ते\n3. Namaste"}]}}
            ]
        });
        assert_eq!(
            extract_reply_text(&body).unwrap(),
            "1. हेलो\n2. नमस्ते\n3. Namaste"
        );
    }

    #[test]
    fn test_extract_reply_text_missing_candidates() {
        let body = json!({"candidates": []});
        assert!(matches!(
            extract_reply_text(&body),
            Err(TransformError::MalformedReply(_))
        ));
    }

    #[test]
    fn test_extract_reply_text_non_string_part() {
        let body = json!({
            "candidates": [{"content": {"parts": [{"text": 42}]}}]
        });
        assert!(matches!(
            extract_reply_text(&body),
            Err(TransformError::MalformedReply(_))
        ));
    }
}
