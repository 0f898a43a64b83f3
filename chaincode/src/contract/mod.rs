//! The timecard contract and its function dispatch.
//!
//! The host routes every call by name: `init` and the state-changing functions
//! arrive through `invoke`, lookups through `query`. Anything else is rejected
//! with an error naming the function.

mod handlers;

use async_trait::async_trait;
use ledger_shim::{Chaincode, ChaincodeStub};
use tracing::{info, warn};

use crate::errors::ChaincodeError;
use crate::records::{CompanyInfo, ContractorInfo, ManagerInfo, Record, TaskInfo, TimecardInfo};

pub use handlers::HELLO_WORLD_KEY;

/// Functions accepted by `invoke`.
pub const INVOKE_FUNCTIONS: [&str; 7] = [
    "init",
    "write",
    CompanyInfo::FUNCTION,
    ContractorInfo::FUNCTION,
    ManagerInfo::FUNCTION,
    TaskInfo::FUNCTION,
    TimecardInfo::FUNCTION,
];

/// Functions accepted by `query`.
pub const QUERY_FUNCTIONS: [&str; 1] = ["read"];

#[derive(Debug, Default, Clone, Copy)]
pub struct TimecardChaincode;

impl TimecardChaincode {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Chaincode for TimecardChaincode {
    type Error = ChaincodeError;

    async fn init(
        &self,
        stub: &dyn ChaincodeStub,
        _function: &str,
        args: &[String],
    ) -> Result<Vec<u8>, ChaincodeError> {
        handlers::init(stub, args).await
    }

    async fn invoke(
        &self,
        stub: &dyn ChaincodeStub,
        function: &str,
        args: &[String],
    ) -> Result<Vec<u8>, ChaincodeError> {
        info!(function, "invoke is running");

        match function {
            "init" => self.init(stub, "init", args).await,
            "write" => handlers::write(stub, args).await,
            CompanyInfo::FUNCTION => handlers::create::<CompanyInfo>(stub, args).await,
            ContractorInfo::FUNCTION => handlers::create::<ContractorInfo>(stub, args).await,
            ManagerInfo::FUNCTION => handlers::create::<ManagerInfo>(stub, args).await,
            TaskInfo::FUNCTION => handlers::create::<TaskInfo>(stub, args).await,
            TimecardInfo::FUNCTION => handlers::create::<TimecardInfo>(stub, args).await,
            _ => {
                warn!(function, "invoke did not find func");
                Err(ChaincodeError::UnknownInvocation(function.to_owned()))
            }
        }
    }

    async fn query(
        &self,
        stub: &dyn ChaincodeStub,
        function: &str,
        args: &[String],
    ) -> Result<Vec<u8>, ChaincodeError> {
        info!(function, "query is running");

        match function {
            "read" => handlers::read(stub, args).await,
            _ => {
                warn!(function, "query did not find func");
                Err(ChaincodeError::UnknownQuery(function.to_owned()))
            }
        }
    }
}
