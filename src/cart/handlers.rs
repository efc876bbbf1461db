//! REST API handlers for cart operations
//!
//! Resource-style endpoints over the same `CartService` used by the RPC
//! transport.

use super::{models::*, service::CartService, state::SharedState};
use crate::error::ServiceError;
use axum::{
    extract::{Path, State},
    routing::{delete, get, post},
    Json, Router,
};
use serde_json::{json, Value};

/// Creates routes for cart-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/carts/:cart_id", get(get_cart))
        .route("/carts/:cart_id/items", post(add_item).delete(clear_cart))
        .route("/carts/:cart_id/items/:item_id", delete(remove_item))
}

/// Endpoint: GET /healthz
async fn healthz() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Endpoint: GET /carts/:cart_id
async fn get_cart(
    State(state): State<SharedState>,
    Path(cart_id): Path<String>,
) -> Result<Json<GetCartResponse>, ServiceError> {
    state.get_cart(GetCartRequest { cart_id }).map(Json)
}

/// Endpoint: POST /carts/:cart_id/items
/// Creates the cart with this item if it does not exist yet.
async fn add_item(
    State(state): State<SharedState>,
    Path(cart_id): Path<String>,
    Json(item): Json<Item>,
) -> Result<Json<AddItemResponse>, ServiceError> {
    state.add_item(AddItemRequest { cart_id, item }).map(Json)
}

/// Endpoint: DELETE /carts/:cart_id/items/:item_id
async fn remove_item(
    State(state): State<SharedState>,
    Path((cart_id, item_id)): Path<(String, String)>,
) -> Result<Json<RemoveItemResponse>, ServiceError> {
    state
        .remove_item(RemoveItemRequest { cart_id, item_id })
        .map(Json)
}

/// Endpoint: DELETE /carts/:cart_id/items
async fn clear_cart(
    State(state): State<SharedState>,
    Path(cart_id): Path<String>,
) -> Result<Json<ClearCartResponse>, ServiceError> {
    state.clear_cart(ClearCartRequest { cart_id }).map(Json)
}
