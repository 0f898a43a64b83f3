//! Handlers for the chaincode routes.

use std::sync::Arc;

use axum::{extract::State, Json};
use ledger_shim::Invocation;

use super::models::{HealthResponse, InitRequest, PayloadResponse};
use crate::contract::TimecardChaincode;
use crate::errors::ApiError;
use crate::services::Peer;

pub type SharedPeer = Arc<Peer<TimecardChaincode>>;

pub async fn root_handler() -> &'static str {
    "Timecard chaincode peer"
}

pub async fn health(State(peer): State<SharedPeer>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        chaincode: peer.name().to_string(),
    })
}

pub async fn init(
    State(peer): State<SharedPeer>,
    Json(req): Json<InitRequest>,
) -> Result<Json<PayloadResponse>, ApiError> {
    let payload = peer.init(&req.args).await?;
    Ok(Json(payload.into()))
}

pub async fn invoke(
    State(peer): State<SharedPeer>,
    Json(invocation): Json<Invocation>,
) -> Result<Json<PayloadResponse>, ApiError> {
    let payload = peer.invoke(&invocation).await?;
    Ok(Json(payload.into()))
}

pub async fn query(
    State(peer): State<SharedPeer>,
    Json(invocation): Json<Invocation>,
) -> Result<Json<PayloadResponse>, ApiError> {
    let payload = peer.query(&invocation).await?;
    Ok(Json(payload.into()))
}
