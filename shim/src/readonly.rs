//! Read-only view over another stub, handed to chaincode queries.

use async_trait::async_trait;

use crate::{ChaincodeStub, ShimError};

pub struct ReadOnlyStub<'a> {
    inner: &'a dyn ChaincodeStub,
}

impl<'a> ReadOnlyStub<'a> {
    pub fn new(inner: &'a dyn ChaincodeStub) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ChaincodeStub for ReadOnlyStub<'_> {
    async fn put_state(&self, key: &str, _value: Vec<u8>) -> Result<(), ShimError> {
        tracing::warn!(key, "write attempted through read-only stub");
        Err(ShimError::ReadOnly {
            key: key.to_owned(),
        })
    }

    async fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, ShimError> {
        self.inner.get_state(key).await
    }
}
