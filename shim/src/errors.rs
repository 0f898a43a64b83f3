//! Custom error types specific to the `ledger-shim` crate.
//!
//! These are the failures a ledger primitive can report back to the contract,
//! independent of which stub implementation is in use.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShimError {
    #[error("key must not be an empty string")]
    EmptyKey,
    #[error("state is read-only in this context, refusing to write {key}")]
    ReadOnly { key: String },
    #[error("ledger unavailable: {0}")]
    Unavailable(String),
}
