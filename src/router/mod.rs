//! Routing module for the cart service

use crate::cart::state::SharedState;
use axum::{
    body::Body,
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
    Router,
};
use std::time::Instant;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, info_span, warn, Instrument};
use uuid::Uuid;

/// Response header carrying the per-request id
pub const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Creates and configures the application router with all routes and middleware
pub fn create_app_router(state: SharedState) -> Router {
    // Middleware: CORS (Permissive for local dev)
    let cors_layer = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(crate::rpc::routes())
        .merge(crate::cart::routes())
        .layer(axum::middleware::from_fn(log_request))
        .layer(cors_layer)
        .with_state(state)
}

/// Middleware: tags each request with an id and logs its outcome
async fn log_request(req: Request<Body>, next: Next) -> Response {
    let request_id = Uuid::new_v4().simple().to_string();
    let span = info_span!(
        "request",
        request_id = %request_id,
        method = %req.method(),
        uri = %req.uri(),
    );

    async move {
        let started = Instant::now();
        let mut res = next.run(req).await;
        let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

        if res.status().is_success() {
            info!(status = %res.status(), elapsed_ms, "request completed");
        } else {
            warn!(status = %res.status(), elapsed_ms, "request failed");
        }

        if let Ok(value) = HeaderValue::from_str(&request_id) {
            res.headers_mut().insert(REQUEST_ID_HEADER, value);
        }
        res
    }
    .instrument(span)
    .await
}
