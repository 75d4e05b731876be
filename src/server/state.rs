//! Application state shared across all request handlers.

use std::sync::Arc;

use crate::transform::{TransformConfig, TransformEngine, TransformResult};

/// Shared application state.
pub struct AppState {
    /// Transformation engine backing the API.
    pub engine: TransformEngine,
}

impl AppState {
    /// Create application state from validated configuration.
    ///
    /// # Errors
    /// Returns an error if the configuration is invalid or the engine cannot
    /// be created.
    pub fn from_config(config: &TransformConfig) -> TransformResult<Arc<Self>> {
        let engine = TransformEngine::new(config)?;
        Ok(Arc::new(Self { engine }))
    }
}
