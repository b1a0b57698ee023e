pub mod dtos;
pub mod errors;
pub mod handlers;
pub mod request_id;

use std::any::Any;

use axum::{
    Router,
    extract::Request,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::{DefaultOnResponse, TraceLayer},
};
use tracing::{Level, error, info_span};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{app_state::AppState, health};
use errors::{ApiError, INTERNAL};
use request_id::REQUEST_ID_HEADER;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "referent",
        description = "Russian summaries, theses, Telegram posts and translations of English web articles"
    ),
    paths(
        handlers::generate,
        handlers::parse,
        handlers::translate,
        health::health_check
    ),
    components(schemas(
        dtos::GenerateRequest,
        dtos::GenerateResponse,
        dtos::ParseRequest,
        dtos::ParseResponse,
        dtos::TranslateRequest,
        dtos::TranslateResponse,
        dtos::ErrorResponse,
        health::HealthResponse,
        crate::generation::GenerationMode
    )),
    tags(
        (name = "articles", description = "Article extraction and generation"),
        (name = "health", description = "Liveness")
    )
)]
pub struct ApiDoc;

/// Builds the full HTTP surface: the three article endpoints, the health
/// check and the Swagger UI, wrapped in request-id, tracing and panic layers.
pub fn router(state: AppState) -> Router {
    let routes = Router::new()
        .route("/api/generate", post(handlers::generate))
        .route("/api/parse", post(handlers::parse))
        .route("/api/translate", post(handlers::translate))
        .route("/healthz", get(health::health_check))
        .with_state(state);

    routes
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(|request: &Request| {
                            let request_id = request
                                .headers()
                                .get(REQUEST_ID_HEADER)
                                .and_then(|value| value.to_str().ok())
                                .unwrap_or_default();
                            info_span!(
                                "http_request",
                                method = %request.method(),
                                uri = %request.uri(),
                                request_id = %request_id,
                            )
                        })
                        .on_response(DefaultOnResponse::new().level(Level::INFO)),
                )
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(CatchPanicLayer::custom(handle_panic)),
        )
}

fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else {
        INTERNAL.to_string()
    };

    error!(panic = %message, "Handler panicked");
    ApiError::Internal(message).into_response()
}
