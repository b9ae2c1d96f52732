//! # Error Types
//!
//! Errors raised by the domain model. All errors use `thiserror` for
//! derive-based `Display` and `Error` implementations.
//!
//! Validity of a Domain's spec is deliberately NOT an error: the structural
//! predicates on [`crate::Domain`] report it as a boolean so the reconciler
//! can record the invalid resource instead of rejecting it at the door.

use thiserror::Error;

/// Top-level error type for the domain model.
#[derive(Error, Debug)]
pub enum DomainError {
    /// A phase tag did not match any known [`crate::DomainPhase`].
    #[error("unknown domain phase: {0:?}")]
    UnknownPhase(String),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
