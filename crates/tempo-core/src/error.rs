//! Error types for Tempo
//!
//! Every failure in the arbitration stack is locally recoverable: callers
//! receive the error as a value and may retry or ignore it. No operation
//! leaves the stack partially mutated.

use thiserror::Error;

use crate::RequestId;

/// Arbitration errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TempoError {
    #[error("request id is empty")]
    EmptyId,

    #[error("request id already active: {0}")]
    DuplicateId(RequestId),

    #[error("no active request with id: {0}")]
    UnknownId(RequestId),
}

/// Result type for Tempo operations
pub type TempoResult<T> = Result<T, TempoError>;
