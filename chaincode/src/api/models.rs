//! Request and response bodies for the HTTP surface.
//!
//! Values written through this surface are always text. A ledger populated by
//! other means can hold arbitrary bytes, which come back hex-encoded.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct InitRequest {
    #[serde(default)]
    pub args: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PayloadEncoding {
    Utf8,
    Hex,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PayloadResponse {
    pub payload: String,
    pub encoding: PayloadEncoding,
}

impl From<Vec<u8>> for PayloadResponse {
    /// Text payloads are returned as-is, anything else hex-encoded.
    fn from(bytes: Vec<u8>) -> Self {
        match String::from_utf8(bytes) {
            Ok(payload) => Self {
                payload,
                encoding: PayloadEncoding::Utf8,
            },
            Err(err) => Self {
                payload: hex::encode(err.into_bytes()),
                encoding: PayloadEncoding::Hex,
            },
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub chaincode: String,
}
