//! Timecard chaincode: company, contractor, manager, task and timecard records
//! stored on a host-provided key/value ledger.
//!
//! The contract itself lives in `contract`; `services` and `api` wrap it in a
//! development peer reachable over HTTP.

pub mod api;
pub mod config;
pub mod contract;
pub mod errors;
pub mod records;
pub mod services;

pub use contract::TimecardChaincode;
pub use errors::{ApiError, ChaincodeError};
