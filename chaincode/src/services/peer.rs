//! A single-node stand-in for the chaincode host.
//!
//! `Peer` owns the world state and the deployed contract. `init` and `invoke`
//! calls are applied one at a time, in arrival order; `query` calls run
//! concurrently against a `ReadOnlyStub`.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use ledger_shim::{Chaincode, ChaincodeStub, Invocation, ReadOnlyStub};
use tokio::sync::Mutex;
use tracing::Instrument;

pub struct Peer<C: Chaincode> {
    name: String,
    chaincode: C,
    stub: Arc<dyn ChaincodeStub>,
    tx_lock: Mutex<()>,
    next_tx: AtomicU64,
}

impl<C: Chaincode> Peer<C> {
    pub fn new(name: impl Into<String>, chaincode: C, stub: Arc<dyn ChaincodeStub>) -> Self {
        Self {
            name: name.into(),
            chaincode,
            stub,
            tx_lock: Mutex::new(()),
            next_tx: AtomicU64::new(1),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stub(&self) -> &Arc<dyn ChaincodeStub> {
        &self.stub
    }

    fn tx_id(&self) -> u64 {
        self.next_tx.fetch_add(1, Ordering::Relaxed)
    }

    pub async fn init(&self, args: &[String]) -> Result<Vec<u8>, C::Error> {
        let span = tracing::info_span!("tx", id = self.tx_id(), kind = "init");
        async {
            let _guard = self.tx_lock.lock().await;
            self.chaincode.init(self.stub.as_ref(), "init", args).await
        }
        .instrument(span)
        .await
    }

    pub async fn invoke(&self, invocation: &Invocation) -> Result<Vec<u8>, C::Error> {
        let span = tracing::info_span!(
            "tx",
            id = self.tx_id(),
            kind = "invoke",
            function = %invocation.function
        );
        async {
            let _guard = self.tx_lock.lock().await;
            self.chaincode
                .invoke(self.stub.as_ref(), &invocation.function, &invocation.args)
                .await
        }
        .instrument(span)
        .await
    }

    pub async fn query(&self, invocation: &Invocation) -> Result<Vec<u8>, C::Error> {
        let span = tracing::info_span!(
            "tx",
            id = self.tx_id(),
            kind = "query",
            function = %invocation.function
        );
        let view = ReadOnlyStub::new(self.stub.as_ref());
        self.chaincode
            .query(&view, &invocation.function, &invocation.args)
            .instrument(span)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::{TimecardChaincode, HELLO_WORLD_KEY};
    use crate::errors::ChaincodeError;
    use ledger_shim::{MemoryStub, ShimError};
    use std::sync::atomic::AtomicUsize;
    use std::time::Duration;

    fn peer() -> Peer<TimecardChaincode> {
        Peer::new("test", TimecardChaincode::new(), Arc::new(MemoryStub::new()))
    }

    #[tokio::test]
    async fn init_goes_through_to_the_ledger() {
        let peer = peer();
        peer.init(&["hi".to_string()]).await.unwrap();
        assert_eq!(
            peer.stub().get_state(HELLO_WORLD_KEY).await.unwrap(),
            Some(b"hi".to_vec())
        );
    }

    #[tokio::test]
    async fn concurrent_writes_leave_one_of_the_written_values() {
        let peer = Arc::new(peer());
        let mut handles = Vec::new();
        for i in 0..16 {
            let peer = Arc::clone(&peer);
            handles.push(tokio::spawn(async move {
                peer.invoke(&Invocation::new("write", ["k".to_string(), i.to_string()]))
                    .await
            }));
        }
        for handle in handles {
            assert!(handle.await.unwrap().is_ok());
        }

        let value = peer.stub().get_state("k").await.unwrap().unwrap();
        let written: Vec<String> = (0..16).map(|i: u32| i.to_string()).collect();
        assert!(written.contains(&String::from_utf8(value).unwrap()));
    }

    /// Records how many invokes are inside the contract at once.
    #[derive(Default)]
    struct Overlap {
        active: AtomicUsize,
        peak: AtomicUsize,
    }

    #[async_trait::async_trait]
    impl Chaincode for Overlap {
        type Error = ChaincodeError;

        async fn init(
            &self,
            _: &dyn ChaincodeStub,
            _: &str,
            _: &[String],
        ) -> Result<Vec<u8>, ChaincodeError> {
            Ok(Vec::new())
        }

        async fn invoke(
            &self,
            _: &dyn ChaincodeStub,
            _: &str,
            _: &[String],
        ) -> Result<Vec<u8>, ChaincodeError> {
            let now = self.active.fetch_add(1, Ordering::SeqCst) + 1;
            self.peak.fetch_max(now, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(2)).await;
            self.active.fetch_sub(1, Ordering::SeqCst);
            Ok(Vec::new())
        }

        async fn query(
            &self,
            _: &dyn ChaincodeStub,
            _: &str,
            _: &[String],
        ) -> Result<Vec<u8>, ChaincodeError> {
            Ok(Vec::new())
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn invokes_never_overlap() {
        let peer = Arc::new(Peer::new(
            "overlap",
            Overlap::default(),
            Arc::new(MemoryStub::new()),
        ));
        let mut handles = Vec::new();
        for _ in 0..8 {
            let peer = Arc::clone(&peer);
            handles.push(tokio::spawn(async move {
                peer.invoke(&Invocation::new("noop", Vec::<String>::new()))
                    .await
            }));
        }
        for handle in handles {
            assert!(handle.await.unwrap().is_ok());
        }

        assert_eq!(peer.chaincode.peak.load(Ordering::SeqCst), 1);
        assert_eq!(peer.chaincode.active.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn transaction_ids_increase() {
        let peer = peer();
        let first = peer.tx_id();
        peer.invoke(&Invocation::new("write", ["k", "v"]))
            .await
            .unwrap();
        peer.query(&Invocation::new("read", ["k"])).await.unwrap();
        let last = peer.tx_id();

        assert_eq!(last, first + 3);
        assert!(peer.tx_id() > last);
    }

    #[tokio::test]
    async fn queries_see_a_read_only_ledger() {
        struct Sneaky;

        #[async_trait::async_trait]
        impl Chaincode for Sneaky {
            type Error = ChaincodeError;

            async fn init(
                &self,
                _: &dyn ChaincodeStub,
                _: &str,
                _: &[String],
            ) -> Result<Vec<u8>, ChaincodeError> {
                Ok(Vec::new())
            }

            async fn invoke(
                &self,
                _: &dyn ChaincodeStub,
                _: &str,
                _: &[String],
            ) -> Result<Vec<u8>, ChaincodeError> {
                Ok(Vec::new())
            }

            async fn query(
                &self,
                stub: &dyn ChaincodeStub,
                _: &str,
                _: &[String],
            ) -> Result<Vec<u8>, ChaincodeError> {
                stub.put_state("k", b"v".to_vec()).await?;
                Ok(Vec::new())
            }
        }

        let peer = Peer::new("sneaky", Sneaky, Arc::new(MemoryStub::new()));
        let err = peer
            .query(&Invocation::new("anything", Vec::<String>::new()))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ChaincodeError::Ledger(ShimError::ReadOnly { .. })
        ));
        assert_eq!(peer.stub().get_state("k").await.unwrap(), None);
    }
}
