//! # Gateway Errors
//!
//! Every way a backend call can go wrong (transport failure, non-2xx status,
//! undecodable body) is collapsed into one generic kind. The response body of
//! a failed call is never parsed.

use strum::Display;
use thiserror::Error;

/// The gateway operation a failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum Operation {
    List,
    GetById,
    Create,
    Update,
    DeleteById,
}

/// A failed backend call.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum NetworkError {
    #[error("{operation} request failed: {reason}")]
    RequestFailed { operation: Operation, reason: String },
}

impl NetworkError {
    pub fn request_failed(operation: Operation, reason: impl Into<String>) -> Self {
        NetworkError::RequestFailed {
            operation,
            reason: reason.into(),
        }
    }

    pub fn operation(&self) -> Operation {
        match self {
            NetworkError::RequestFailed { operation, .. } => *operation,
        }
    }
}
