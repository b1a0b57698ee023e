use axum::{Json, extract::State};
use serde::Serialize;
use tracing::{info, warn};
use utoipa::ToSchema;

use crate::app_state::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    status: String,
    generation: String,
}

/// Liveness plus a local check that the completion credential is present.
/// Never calls the completion API.
#[utoipa::path(
    get,
    path = "/healthz",
    tag = "health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let generation = if state.generator.is_configured() {
        info!("Health check passed");
        "configured"
    } else {
        warn!("Health check passed without a completion API key");
        "missing"
    };

    Json(HealthResponse {
        status: "OK".to_string(),
        generation: generation.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::MockArticleSource;
    use crate::generation::MockTextGenerator;
    use axum::{Router, body::Body, http::Request, http::StatusCode, routing::get};
    use std::sync::Arc;
    use tower::ServiceExt;

    async fn health_body(configured: bool) -> serde_json::Value {
        let mut generator = MockTextGenerator::new();
        generator.expect_is_configured().return_const(configured);
        let state = AppState::new(Arc::new(MockArticleSource::new()), Arc::new(generator));

        let app = Router::new()
            .route("/healthz", get(health_check))
            .with_state(state);

        let response = app
            .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_reports_configured_generation() {
        let body = health_body(true).await;
        assert_eq!(body["status"], "OK");
        assert_eq!(body["generation"], "configured");
    }

    #[tokio::test]
    async fn test_health_reports_missing_key() {
        let body = health_body(false).await;
        assert_eq!(body["status"], "OK");
        assert_eq!(body["generation"], "missing");
    }
}
