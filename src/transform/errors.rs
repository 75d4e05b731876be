//! Error types for the transformation pipeline.

use thiserror::Error;

/// Errors produced while transforming a submission.
#[derive(Debug, Error)]
pub enum TransformError {
    /// Input text was empty or whitespace-only; rejected before invocation.
    #[error("input text is empty")]
    EmptyInput,

    /// No API key was configured.
    #[error("no API key configured; set TRILIPI_API_KEY")]
    MissingApiKey,

    /// Invalid configuration or unsupported values.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// URL parsing error.
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// HTTP request to the model API failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The model API answered with a non-success status.
    #[error("model API returned status {status}: {body}")]
    Upstream {
        /// HTTP status code from the model API.
        status: u16,
        /// Response body, surfaced verbatim.
        body: String,
    },

    /// The model API answered 200 but the reply payload was unusable.
    #[error("could not read model reply: {0}")]
    MalformedReply(String),
}

/// Convenience result alias for transformation operations.
pub type TransformResult<T> = Result<T, TransformError>;
