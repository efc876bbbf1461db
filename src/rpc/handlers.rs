//! JSON-RPC route handlers
//!
//! This module implements the RPC transport for the cart service. Incoming
//! envelopes are decoded, checked against the capability set and dispatched
//! to the `CartService` implementation held in the application state.
//! `handle_call` is public so tests can drive dispatch without HTTP.

use super::{error::RpcError, helpers::*, models::*};
use crate::cart::{models::*, service::CartService, state::*};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{json, Value};
use tracing::{debug, warn};

/// Creates routes for RPC operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/", post(handle_rpc))
        .route("/rpc", post(handle_rpc)) // Standard endpoint
        .route("/rpc/", post(handle_rpc)) // Trailing slash safety
}

/// Endpoint: POST /rpc
/// Decodes a JSON-RPC request and dispatches it.
async fn handle_rpc(
    State(state): State<SharedState>,
    body: Result<Json<JsonRpcRequest>, JsonRejection>,
) -> impl IntoResponse {
    let req = match body {
        Ok(Json(r)) => r,
        Err(e) => {
            warn!("JSON parse error: {}", e.body_text());
            let err = RpcError::Parse;
            return (
                StatusCode::BAD_REQUEST,
                Json(rpc_error(Value::Null, err.code(), err.to_string())),
            )
                .into_response();
        }
    };

    let id = req.id.unwrap_or(Value::Null);
    let params = req.params.unwrap_or(Value::Null);

    debug!(method = %req.method, id = %id, "RPC call");

    let response_body = if req.method == PING_METHOD {
        rpc_success(id, json!({}))
    } else {
        match handle_call(&*state, &req.method, params) {
            Ok(result) => rpc_success(id, result),
            Err(err) => {
                if let RpcError::MethodNotFound(method) = &err {
                    warn!("Unknown method: {method}");
                }
                rpc_error(id, err.code(), err.to_string())
            }
        }
    };

    Json(response_body).into_response()
}

// =============================================================================
// Dispatch
// =============================================================================

/// Resolves `method` against the service contract and invokes it.
///
/// Methods without a handler fail with `RpcError::NotImplemented` before
/// their parameters are looked at.
pub fn handle_call<S: CartService>(
    service: &S,
    method: &str,
    params: Value,
) -> Result<Value, RpcError> {
    let method =
        CartMethod::from_name(method).ok_or_else(|| RpcError::MethodNotFound(method.to_owned()))?;

    if !method.is_implemented() {
        return Err(RpcError::NotImplemented(method.name()));
    }

    match method {
        CartMethod::AddItem => {
            let request: AddItemRequest = parse_params(params)?;
            to_result(service.add_item(request)?)
        }
        CartMethod::GetCart => {
            let request: GetCartRequest = parse_params(params)?;
            to_result(service.get_cart(request)?)
        }
        CartMethod::RemoveItem => {
            let request: RemoveItemRequest = parse_params(params)?;
            to_result(service.remove_item(request)?)
        }
        CartMethod::ClearCart => {
            let request: ClearCartRequest = parse_params(params)?;
            to_result(service.clear_cart(request)?)
        }
    }
}

fn parse_params<T: DeserializeOwned>(params: Value) -> Result<T, RpcError> {
    serde_json::from_value(params).map_err(RpcError::InvalidParams)
}

fn to_result<T: Serialize>(response: T) -> Result<Value, RpcError> {
    serde_json::to_value(response).map_err(RpcError::Internal)
}
