//! Core `ledger-shim` crate for abstracting the chaincode host runtime.
//!
//! This crate defines the `ChaincodeStub` trait, which exposes the two ledger
//! primitives a hosted contract may call (put a value under a key, get the value
//! for a key), the `Chaincode` trait through which the host routes `init`,
//! `invoke` and `query` calls, and the concrete stubs used outside a real peer.

pub mod errors;
pub mod memory;
pub mod models;
pub mod readonly;

use async_trait::async_trait;

pub use errors::ShimError;
pub use memory::MemoryStub;
pub use models::Invocation;
pub use readonly::ReadOnlyStub;

/// Ledger state as seen by a running chaincode.
///
/// Durability, ordering and isolation are the host's business; implementations
/// only move bytes in and out of the world state.
#[async_trait]
pub trait ChaincodeStub: Send + Sync {
    /// Writes `value` under `key`, replacing whatever was stored before.
    async fn put_state(&self, key: &str, value: Vec<u8>) -> Result<(), ShimError>;

    /// Returns the value stored under `key`, or `None` if it was never written.
    async fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, ShimError>;
}

/// Entry points the host calls on a deployed contract.
#[async_trait]
pub trait Chaincode: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    async fn init(
        &self,
        stub: &dyn ChaincodeStub,
        function: &str,
        args: &[String],
    ) -> Result<Vec<u8>, Self::Error>;

    async fn invoke(
        &self,
        stub: &dyn ChaincodeStub,
        function: &str,
        args: &[String],
    ) -> Result<Vec<u8>, Self::Error>;

    /// Queries are handed a stub that refuses writes.
    async fn query(
        &self,
        stub: &dyn ChaincodeStub,
        function: &str,
        args: &[String],
    ) -> Result<Vec<u8>, Self::Error>;
}
