//! Defines the HTTP routes of the development peer.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{self, SharedPeer};

pub fn chaincode_router(peer: SharedPeer) -> Router {
    Router::new()
        .route("/", get(handlers::root_handler))
        .route("/health", get(handlers::health))
        .route("/init", post(handlers::init))
        .route("/invoke", post(handlers::invoke))
        .route("/query", post(handlers::query))
        .with_state(peer)
}
