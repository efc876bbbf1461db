//! RPC errors

use super::models::{
    INTERNAL_ERROR, INVALID_PARAMS, METHOD_NOT_FOUND, METHOD_NOT_IMPLEMENTED, PARSE_ERROR,
};
use crate::error::ServiceError;
use thiserror::Error;

/// Failures reported to callers inside a JSON-RPC error envelope.
#[derive(Debug, Error)]
pub enum RpcError {
    #[error("Parse error")]
    Parse,

    /// Carries the unknown method name for logging; not echoed to the caller.
    #[error("Method not found")]
    MethodNotFound(String),

    #[error("Invalid params: {0}")]
    InvalidParams(#[source] serde_json::Error),

    #[error("Method not implemented: {0}")]
    NotImplemented(&'static str),

    #[error("Internal error: {0}")]
    Internal(#[source] serde_json::Error),
}

impl RpcError {
    /// JSON-RPC error code for this failure
    pub fn code(&self) -> i32 {
        match self {
            RpcError::Parse => PARSE_ERROR,
            RpcError::MethodNotFound(_) => METHOD_NOT_FOUND,
            RpcError::InvalidParams(_) => INVALID_PARAMS,
            RpcError::NotImplemented(_) => METHOD_NOT_IMPLEMENTED,
            RpcError::Internal(_) => INTERNAL_ERROR,
        }
    }
}

impl From<ServiceError> for RpcError {
    fn from(error: ServiceError) -> Self {
        match error {
            ServiceError::Unimplemented(method) => RpcError::NotImplemented(method),
        }
    }
}
