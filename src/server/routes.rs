//! HTTP route handlers for the trilipi API.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::services::ServeDir;

use crate::transform::{Section, TransformError, Transformation};

use super::state::AppState;

/// Create the API router with all routes.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/transform", post(transform_text))
        .fallback_service(ServeDir::new("static"))
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "trilipi",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Transformation request.
#[derive(Debug, Deserialize)]
pub struct TransformRequest {
    /// The English text to transform.
    pub text: String,
}

/// Transformation response.
#[derive(Debug, Serialize)]
pub struct TransformResponse {
    /// English sounds written in Devanagari script.
    pub devanagari_transliteration: String,
    /// Hindi translation in Devanagari script.
    pub hindi_devanagari: String,
    /// Hindi translation in Roman script.
    pub hindi_roman: String,
    /// True when the model reply was missing sections.
    pub partial: bool,
    /// Sections absent from the reply (empty when complete).
    pub missing: Vec<Section>,
    /// Model that produced the reply.
    pub model: String,
}

impl TransformResponse {
    fn from_transformation(transformation: Transformation, model: &str) -> Self {
        let missing = transformation
            .warning
            .map(|warning| warning.missing)
            .unwrap_or_default();
        Self {
            devanagari_transliteration: transformation.result.devanagari_transliteration,
            hindi_devanagari: transformation.result.hindi_devanagari,
            hindi_roman: transformation.result.hindi_roman,
            partial: !missing.is_empty(),
            missing,
            model: model.to_string(),
        }
    }
}

/// Handle transformation requests.
async fn transform_text(
    State(state): State<Arc<AppState>>,
    Json(request): Json<TransformRequest>,
) -> Result<Json<TransformResponse>, (StatusCode, String)> {
    match state.engine.transform(&request.text).await {
        Ok(transformation) => Ok(Json(TransformResponse::from_transformation(
            transformation,
            state.engine.model(),
        ))),
        Err(error @ TransformError::EmptyInput) => {
            Err((StatusCode::BAD_REQUEST, error.to_string()))
        }
        Err(
            error @ (TransformError::Upstream { .. }
            | TransformError::Http(_)
            | TransformError::MalformedReply(_)),
        ) => Err((StatusCode::BAD_GATEWAY, format!("model error: {error}"))),
        Err(error) => Err((StatusCode::INTERNAL_SERVER_ERROR, error.to_string())),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use async_trait::async_trait;
    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use tower::ServiceExt;

    use super::*;
    use crate::transform::{ModelInvoker, TransformEngine, TransformResult};

    struct CannedInvoker(&'static str);

    #[async_trait]
    impl ModelInvoker for CannedInvoker {
        async fn invoke(&self, _preamble: &str, _prompt: &str) -> TransformResult<String> {
            Ok(self.0.to_string())
        }
    }

    fn test_router(reply: &'static str) -> Router {
        let engine = TransformEngine::with_invoker("test-model", Box::new(CannedInvoker(reply)));
        create_router(Arc::new(AppState { engine }))
    }

    fn transform_request(text: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/transform")
            .header("content-type", "application/json")
            .body(Body::from(serde_json::json!({ "text": text }).to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_check() {
        let router = test_router("unused");
        let response = router
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_transform_happy_path() {
        let router = test_router("1. हाउ आर यू?\n2. आप कैसे हैं?\n3. Aap kaise hain?");
        let response = router.oneshot(transform_request("How are you?")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["devanagari_transliteration"], "हाउ आर यू?");
        assert_eq!(body["hindi_devanagari"], "आप कैसे हैं?");
        assert_eq!(body["hindi_roman"], "Aap kaise hain?");
        assert_eq!(body["partial"], false);
        assert_eq!(body["model"], "test-model");
    }

    #[tokio::test]
    async fn test_transform_partial_reply() {
        let router = test_router("1. हेलो\n2. नमस्ते");
        let response = router.oneshot(transform_request("Hello")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["hindi_roman"], "");
        assert_eq!(body["partial"], true);
        assert_eq!(body["missing"][0], "hindi_roman");
    }

    #[tokio::test]
    async fn test_transform_empty_input_is_bad_request() {
        let router = test_router("unused");
        let response = router.oneshot(transform_request("   ")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
