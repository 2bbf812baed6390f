//! Top-level API router and middleware stack.

use std::any::Any;
use std::sync::Arc;

use axum::http::{HeaderName, HeaderValue};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{self, AllowOrigin, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::application::{EmployeeAiService, EmployeeService};
use crate::config::ServerConfig;

use super::ai_query::{ai_query_router, AiQueryAppState};
use super::employee::{employee_router, EmployeeAppState};
use super::error::ApiError;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Build the full API router: employee CRUD, AI query and health routes
/// wrapped in request-id, tracing, compression, CORS and panic layers.
///
/// Unrouted paths are served from `config.static_dir`, so `/` returns the
/// browser UI's `index.html`.
pub fn api_router(
    employee_service: Arc<EmployeeService>,
    ai_service: Arc<EmployeeAiService>,
    config: &ServerConfig,
) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    Router::new()
        .nest(
            "/api/employees",
            employee_router(EmployeeAppState::new(employee_service)),
        )
        .nest("/api/ai", ai_query_router(AiQueryAppState::new(ai_service)))
        .route("/health", get(health))
        .fallback_service(ServeDir::new(&config.static_dir))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(request_id.clone(), MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::new(request_id))
                .layer(CompressionLayer::new())
                .layer(cors_layer(config))
                .layer(CatchPanicLayer::custom(handle_panic)),
        )
}

/// GET /health - Liveness probe
async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// Any origin unless `cors_origins` lists specific ones.
fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins = config.cors_origins_list();
    let layer = CorsLayer::new()
        .allow_methods(cors::Any)
        .allow_headers(cors::Any);

    if origins.is_empty() {
        return layer.allow_origin(cors::Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(allowed))
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = err.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = err.downcast_ref::<&str>() {
        (*message).to_string()
    } else {
        "request handler panicked".to_string()
    };

    tracing::error!(panic = %detail, "request handler panicked");
    ApiError::Unexpected(detail).into_response()
}
