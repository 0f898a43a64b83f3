//! In-process world state for development hosts and tests.
//!
//! `MemoryStub` keeps every key in an ordered map behind an async lock. It has
//! no history and no durability: it is the ledger a single dev peer needs and
//! nothing more.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{ChaincodeStub, ShimError};

#[derive(Debug, Default)]
pub struct MemoryStub {
    state: RwLock<BTreeMap<String, Vec<u8>>>,
}

impl MemoryStub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the current world state.
    pub async fn snapshot(&self) -> BTreeMap<String, Vec<u8>> {
        self.state.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.state.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.state.read().await.is_empty()
    }
}

#[async_trait]
impl ChaincodeStub for MemoryStub {
    async fn put_state(&self, key: &str, value: Vec<u8>) -> Result<(), ShimError> {
        if key.is_empty() {
            return Err(ShimError::EmptyKey);
        }
        tracing::debug!(key, bytes = value.len(), "put state");
        self.state.write().await.insert(key.to_owned(), value);
        Ok(())
    }

    async fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, ShimError> {
        if key.is_empty() {
            return Err(ShimError::EmptyKey);
        }
        let value = self.state.read().await.get(key).cloned();
        tracing::debug!(key, found = value.is_some(), "get state");
        Ok(value)
    }
}
