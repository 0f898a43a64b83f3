//! Global application error types and handlers.
//!
//! `ChaincodeError` is what the contract returns to its host. `ApiError` carries
//! it across the HTTP surface and decides the status code and response body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use ledger_shim::ShimError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChaincodeError {
    #[error("Incorrect number of arguments. Expecting {expected}")]
    IncorrectArguments { expected: usize, got: usize },
    #[error("Received unknown function invocation: {0}")]
    UnknownInvocation(String),
    #[error("Received unknown function query: {0}")]
    UnknownQuery(String),
    #[error("{{\"Error\":\"Failed to get state for {key}\"}}")]
    StateRead {
        key: String,
        #[source]
        source: ShimError,
    },
    #[error(transparent)]
    Ledger(#[from] ShimError),
    #[error("failed to encode record: {0}")]
    Encode(#[from] serde_json::Error),
}

impl ChaincodeError {
    /// Fails unless exactly `expected` arguments were passed.
    pub fn check_args(args: &[String], expected: usize) -> Result<(), Self> {
        if args.len() == expected {
            Ok(())
        } else {
            Err(Self::IncorrectArguments {
                expected,
                got: args.len(),
            })
        }
    }
}

#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub ChaincodeError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            ChaincodeError::IncorrectArguments { .. }
            | ChaincodeError::UnknownInvocation(_)
            | ChaincodeError::UnknownQuery(_)
            | ChaincodeError::Ledger(ShimError::EmptyKey)
            | ChaincodeError::StateRead {
                source: ShimError::EmptyKey,
                ..
            } => StatusCode::BAD_REQUEST,
            ChaincodeError::Ledger(ShimError::ReadOnly { .. }) => StatusCode::FORBIDDEN,
            ChaincodeError::Ledger(ShimError::Unavailable(_))
            | ChaincodeError::StateRead {
                source: ShimError::Unavailable(_),
                ..
            } => StatusCode::SERVICE_UNAVAILABLE,
            ChaincodeError::StateRead { .. } | ChaincodeError::Encode(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self.0, "chaincode call failed");
        }
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}
