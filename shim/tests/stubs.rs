use ledger_shim::{ChaincodeStub, MemoryStub, ReadOnlyStub, ShimError};

#[tokio::test]
async fn read_only_view_sees_underlying_state() {
    let stub = MemoryStub::new();
    stub.put_state("k", b"v".to_vec()).await.expect("put");

    let view = ReadOnlyStub::new(&stub);
    assert_eq!(view.get_state("k").await.expect("get"), Some(b"v".to_vec()));
    assert_eq!(view.get_state("missing").await.expect("get"), None);
}

#[tokio::test]
async fn read_only_view_refuses_writes_and_leaves_state_alone() {
    let stub = MemoryStub::new();
    stub.put_state("k", b"v".to_vec()).await.expect("put");

    let view = ReadOnlyStub::new(&stub);
    let err = view
        .put_state("k", b"other".to_vec())
        .await
        .expect_err("write must fail");
    assert_eq!(
        err,
        ShimError::ReadOnly {
            key: "k".to_string()
        }
    );
    assert_eq!(stub.get_state("k").await.expect("get"), Some(b"v".to_vec()));
}

#[tokio::test]
async fn stubs_are_usable_as_trait_objects() {
    let stub: Box<dyn ChaincodeStub> = Box::new(MemoryStub::new());
    stub.put_state("hello_world", b"hi".to_vec())
        .await
        .expect("put");
    assert_eq!(
        stub.get_state("hello_world").await.expect("get"),
        Some(b"hi".to_vec())
    );
}
