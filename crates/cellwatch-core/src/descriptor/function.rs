use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Serverless request handler. The environment map is the contract with the
/// external handler code: every key the code reads must be supplied here.
/// `required_env` declares that contract so validation can enforce it before
/// the graph is applied rather than at first invocation.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct FunctionSpec {
    pub function_name: String,
    pub code_location: String,
    pub handler: String,
    pub runtime: String,

    pub environment: BTreeMap<String, String>,
    pub required_env: Vec<String>,

    pub memory_mib: u32,
    pub timeout_seconds: u64,
}
