//! Cart Service Client
//!
//! A typed JSON-RPC client for the cart service. Every call carries a fresh
//! numeric request id and is bounded by the configured timeout.

use crate::cart::models::*;
use crate::rpc::models::{CartMethod, JsonRpcRequest, JsonRpcResponse, JSONRPC_VERSION};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::json;
use std::{
    sync::atomic::{AtomicU64, Ordering},
    time::Duration,
};
use thiserror::Error;
use tracing::debug;

/// Errors returned by [`CartClient`]
#[derive(Debug, Error)]
pub enum ClientError {
    /// Connection, timeout or HTTP-level failure
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a JSON-RPC error
    #[error("rpc error {code}: {message}")]
    Rpc { code: i32, message: String },

    /// The server answered with neither a result nor an error
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// Request parameters could not be encoded
    #[error("failed to encode params: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Client for the cart service RPC endpoint
#[derive(Debug)]
pub struct CartClient {
    http: reqwest::Client,
    endpoint: String,
    next_id: AtomicU64,
}

impl CartClient {
    /// Creates a client for `addr` (`host:port` or a full `http://` URL).
    pub fn new(addr: &str, timeout: Duration) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            endpoint: rpc_endpoint(addr),
            next_id: AtomicU64::new(1),
        })
    }

    /// URL every call is posted to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Adds `item` to `cart_id`, creating the cart on first use.
    pub async fn add_item(&self, cart_id: &str, item: Item) -> Result<Cart, ClientError> {
        let request = AddItemRequest {
            cart_id: cart_id.to_owned(),
            item,
        };
        let response: AddItemResponse = self.call(CartMethod::AddItem, &request).await?;
        Ok(response.cart)
    }

    /// Fetches a cart; `None` when the server has no such cart.
    pub async fn get_cart(&self, cart_id: &str) -> Result<Option<Cart>, ClientError> {
        let request = GetCartRequest {
            cart_id: cart_id.to_owned(),
        };
        let response: GetCartResponse = self.call(CartMethod::GetCart, &request).await?;
        Ok(response.cart)
    }

    /// Removes every item with `item_id`; `None` when the cart is unknown.
    pub async fn remove_item(
        &self,
        cart_id: &str,
        item_id: &str,
    ) -> Result<Option<Cart>, ClientError> {
        let request = RemoveItemRequest {
            cart_id: cart_id.to_owned(),
            item_id: item_id.to_owned(),
        };
        let response: RemoveItemResponse = self.call(CartMethod::RemoveItem, &request).await?;
        Ok(response.cart)
    }

    /// Asks the server to empty a cart.
    pub async fn clear_cart(&self, cart_id: &str) -> Result<Option<Cart>, ClientError> {
        let request = ClearCartRequest {
            cart_id: cart_id.to_owned(),
        };
        let response: ClearCartResponse = self.call(CartMethod::ClearCart, &request).await?;
        Ok(response.cart)
    }

    async fn call<P, R>(&self, method: CartMethod, params: &P) -> Result<R, ClientError>
    where
        P: Serialize,
        R: DeserializeOwned,
    {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let envelope = JsonRpcRequest {
            jsonrpc: Some(JSONRPC_VERSION.to_owned()),
            method: method.name().to_owned(),
            params: Some(serde_json::to_value(params)?),
            id: Some(json!(id)),
        };

        debug!(method = method.name(), id, "sending RPC call");

        let response: JsonRpcResponse<R> = self
            .http
            .post(&self.endpoint)
            .json(&envelope)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        match (response.result, response.error) {
            (_, Some(error)) => Err(ClientError::Rpc {
                code: error.code,
                message: error.message,
            }),
            (Some(result), None) => Ok(result),
            (None, None) => Err(ClientError::MalformedResponse(format!(
                "response {} has neither result nor error",
                response.id
            ))),
        }
    }
}

/// Builds the RPC URL for an address, assuming plain `http` when no scheme is given.
fn rpc_endpoint(addr: &str) -> String {
    let base = addr.trim_end_matches('/');
    if base.starts_with("http://") || base.starts_with("https://") {
        format!("{base}/rpc")
    } else {
        format!("http://{base}/rpc")
    }
}
