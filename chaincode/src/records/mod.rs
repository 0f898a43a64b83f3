//! Record types kept on the ledger.
//!
//! Each record is built from the positional arguments of its create function and
//! stored as a JSON document under its own id. Values are kept exactly as they
//! were passed in; nothing is parsed or coerced.

use serde::{Deserialize, Serialize};

use crate::errors::ChaincodeError;

/// A ledger document created by a dedicated invoke function.
pub trait Record: Serialize + Sized {
    /// Invoke function that creates this record.
    const FUNCTION: &'static str;
    /// Number of positional arguments `FUNCTION` takes.
    const ARITY: usize;

    fn from_args(args: &[String]) -> Result<Self, ChaincodeError>;

    /// Ledger key the document is stored under.
    fn key(&self) -> &str;

    fn to_json(&self) -> Result<Vec<u8>, ChaincodeError> {
        Ok(serde_json::to_vec(self)?)
    }
}

/// Checks the argument count and hands back the arguments by position. `N` is
/// taken from the destructuring pattern at the call site.
fn positional<const N: usize>(args: &[String]) -> Result<[String; N], ChaincodeError> {
    ChaincodeError::check_args(args, N)?;
    Ok(std::array::from_fn(|i| args[i].clone()))
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CompanyInfo {
    pub companyname: String,
    pub companycontact: String,
    pub companybudget: String,
    pub companyid: String,
    pub contractorids: String,
    pub taskids: String,
}

impl Record for CompanyInfo {
    const FUNCTION: &'static str = "createcompany";
    const ARITY: usize = 6;

    fn from_args(args: &[String]) -> Result<Self, ChaincodeError> {
        let [companyid, companyname, companycontact, companybudget, contractorids, taskids] =
            positional(args)?;
        Ok(Self {
            companyname,
            companycontact,
            companybudget,
            companyid,
            contractorids,
            taskids,
        })
    }

    fn key(&self) -> &str {
        &self.companyid
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ContractorInfo {
    pub contractorname: String,
    /// Task the contractor is assigned to.
    pub contractorassignedto: String,
    pub contractorid: String,
    pub contractorhourlyrate: String,
    pub hoursworked: String,
}

impl Record for ContractorInfo {
    const FUNCTION: &'static str = "createcontractor";
    const ARITY: usize = 5;

    fn from_args(args: &[String]) -> Result<Self, ChaincodeError> {
        let [contractorid, contractorname, contractorassignedto, contractorhourlyrate, hoursworked] =
            positional(args)?;
        Ok(Self {
            contractorname,
            contractorassignedto,
            contractorid,
            contractorhourlyrate,
            hoursworked,
        })
    }

    fn key(&self) -> &str {
        &self.contractorid
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ManagerInfo {
    pub managername: String,
    #[serde(rename = "managerID")]
    pub manager_id: String,
    pub managerassignedto: String,
    pub companyid: String,
}

impl Record for ManagerInfo {
    const FUNCTION: &'static str = "createmanager";
    const ARITY: usize = 4;

    fn from_args(args: &[String]) -> Result<Self, ChaincodeError> {
        let [companyid, managername, manager_id, managerassignedto] =
            positional(args)?;
        Ok(Self {
            managername,
            manager_id,
            managerassignedto,
            companyid,
        })
    }

    fn key(&self) -> &str {
        &self.manager_id
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TaskInfo {
    pub taskid: String,
    pub taskname: String,
    pub estimatedhours: String,
    pub managername: String,
}

impl Record for TaskInfo {
    // Deployed clients already call it by this name.
    const FUNCTION: &'static str = "creattask";
    const ARITY: usize = 4;

    fn from_args(args: &[String]) -> Result<Self, ChaincodeError> {
        let [taskid, taskname, managername, estimatedhours] = positional(args)?;
        Ok(Self {
            taskid,
            taskname,
            estimatedhours,
            managername,
        })
    }

    fn key(&self) -> &str {
        &self.taskid
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TimecardInfo {
    pub contractorid: String,
    pub timecardweekending: String,
    pub timecardhours: String,
    pub timecarddescription: String,
    pub timecardid: String,
}

impl Record for TimecardInfo {
    const FUNCTION: &'static str = "createtimecard";
    const ARITY: usize = 5;

    fn from_args(args: &[String]) -> Result<Self, ChaincodeError> {
        let [timecardid, contractorid, timecardweekending, timecardhours, timecarddescription] =
            positional(args)?;
        Ok(Self {
            contractorid,
            timecardweekending,
            timecardhours,
            timecarddescription,
            timecardid,
        })
    }

    fn key(&self) -> &str {
        &self.timecardid
    }
}
