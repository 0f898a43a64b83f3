//! HTTP surface of the development peer.
//!
//! Clients submit `init`, `invoke` and `query` calls as JSON and get the
//! contract's payload back.

pub mod handlers;
pub mod models;
pub mod routes;

pub use routes::chaincode_router;
