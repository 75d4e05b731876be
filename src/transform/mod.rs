//! The transformation pipeline: prompt construction, model invocation, and
//! reply splitting.
//!
//! One submission flows through three steps:
//! 1. [`prompt::build_prompt`] embeds the input text in a fixed instruction
//!    template that requests three numbered sections.
//! 2. A [`ModelInvoker`] sends the prompt to the hosted model and returns
//!    its free-text reply.
//! 3. [`response::split_reply`] extracts the three labeled sections,
//!    degrading field-by-field when the reply is incomplete.

pub mod config;
pub mod engine;
pub mod errors;
pub mod invoker;
pub mod prompt;
pub mod response;
pub mod types;

pub use config::TransformConfig;
pub use engine::TransformEngine;
pub use errors::{TransformError, TransformResult};
pub use invoker::{GeminiInvoker, ModelInvoker};
pub use types::{ConversionResult, PartialReply, Section, Transformation};
