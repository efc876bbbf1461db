//! RPC Protocol Models and Constants
//!
//! This module contains the JSON-RPC 2.0 envelopes and the capability set of
//! the cart service contract.

use serde::{Deserialize, Serialize};
use serde_json::Value;

// =============================================================================
// RPC Constants
// =============================================================================

/// JSON-RPC protocol version carried by every envelope
pub const JSONRPC_VERSION: &str = "2.0";
/// Service name prefixed to every method
pub const SERVICE_NAME: &str = "CartService";
/// Liveness probe method
pub const PING_METHOD: &str = "ping";

/// Invalid JSON was received
pub const PARSE_ERROR: i32 = -32700;
/// The method does not exist
pub const METHOD_NOT_FOUND: i32 = -32601;
/// Invalid method parameters
pub const INVALID_PARAMS: i32 = -32602;
/// Internal JSON-RPC error
pub const INTERNAL_ERROR: i32 = -32603;
/// The method is part of the contract but has no handler
pub const METHOD_NOT_IMPLEMENTED: i32 = -32001;

// =============================================================================
// Service Contract
// =============================================================================

/// Every method of the cart service contract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CartMethod {
    AddItem,
    GetCart,
    RemoveItem,
    ClearCart,
}

impl CartMethod {
    /// All methods in contract order
    pub const ALL: [CartMethod; 4] = [
        CartMethod::AddItem,
        CartMethod::GetCart,
        CartMethod::RemoveItem,
        CartMethod::ClearCart,
    ];

    /// Fully qualified wire name, e.g. `CartService/AddItem`
    pub fn name(self) -> &'static str {
        match self {
            CartMethod::AddItem => "CartService/AddItem",
            CartMethod::GetCart => "CartService/GetCart",
            CartMethod::RemoveItem => "CartService/RemoveItem",
            CartMethod::ClearCart => "CartService/ClearCart",
        }
    }

    /// Resolves a wire name back to a method
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.name() == name)
    }

    /// Whether the server backs this method with a handler
    pub fn is_implemented(self) -> bool {
        !matches!(self, CartMethod::ClearCart)
    }
}

// =============================================================================
// RPC Protocol Models
// =============================================================================

/// Standard JSON-RPC 2.0 Request envelope
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    /// Protocol version (should be "2.0")
    pub jsonrpc: Option<String>,

    /// Method name to invoke
    pub method: String,

    /// Parameters for the method
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,

    /// Request identifier
    pub id: Option<Value>,
}

/// Error object carried by a failed JSON-RPC response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JsonRpcErrorObject {
    pub code: i32,
    pub message: String,
}

/// Standard JSON-RPC 2.0 Response envelope, as read by clients
#[derive(Debug, Deserialize)]
pub struct JsonRpcResponse<R> {
    /// Echoed request identifier
    #[serde(default)]
    pub id: Value,

    /// Payload of a successful call
    pub result: Option<R>,

    /// Payload of a failed call
    pub error: Option<JsonRpcErrorObject>,
}
