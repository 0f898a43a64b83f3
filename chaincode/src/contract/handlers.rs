//! Bodies of the contract functions. Each one checks its argument count before
//! touching the ledger, so a rejected call never writes.

use ledger_shim::ChaincodeStub;
use tracing::debug;

use crate::errors::ChaincodeError;
use crate::records::Record;

/// Key written by `init`.
pub const HELLO_WORLD_KEY: &str = "hello_world";

pub(super) async fn init(
    stub: &dyn ChaincodeStub,
    args: &[String],
) -> Result<Vec<u8>, ChaincodeError> {
    ChaincodeError::check_args(args, 1)?;
    stub.put_state(HELLO_WORLD_KEY, args[0].as_bytes().to_vec()).await?;
    Ok(Vec::new())
}

pub(super) async fn write(
    stub: &dyn ChaincodeStub,
    args: &[String],
) -> Result<Vec<u8>, ChaincodeError> {
    ChaincodeError::check_args(args, 2)?;
    let (key, value) = (&args[0], &args[1]);
    debug!(key = %key, "running write");
    stub.put_state(key, value.as_bytes().to_vec()).await?;
    Ok(Vec::new())
}

/// Returns the stored bytes, or an empty payload for a key that was never written.
pub(super) async fn read(
    stub: &dyn ChaincodeStub,
    args: &[String],
) -> Result<Vec<u8>, ChaincodeError> {
    ChaincodeError::check_args(args, 1)?;
    let key = &args[0];
    let value = stub
        .get_state(key)
        .await
        .map_err(|source| ChaincodeError::StateRead {
            key: key.clone(),
            source,
        })?;
    Ok(value.unwrap_or_default())
}

pub(super) async fn create<R: Record>(
    stub: &dyn ChaincodeStub,
    args: &[String],
) -> Result<Vec<u8>, ChaincodeError> {
    let record = R::from_args(args)?;
    let document = record.to_json()?;
    debug!(
        function = R::FUNCTION,
        key = record.key(),
        document = %String::from_utf8_lossy(&document),
        "storing record"
    );
    stub.put_state(record.key(), document).await?;
    Ok(Vec::new())
}
