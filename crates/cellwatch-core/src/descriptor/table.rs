use serde::{Deserialize, Serialize};

use super::RemovalPolicy;

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeType {
    String,
    Number,
    Binary,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BillingMode {
    PayPerRequest,
    Provisioned,
}

/// Key-value table. The partition key is immutable once the table exists,
/// so changing it here forces a replacement on the provider side.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct TableSpec {
    pub table_name: String,
    pub partition_key: String,
    pub partition_key_type: AttributeType,
    pub billing_mode: BillingMode,
    pub removal_policy: RemovalPolicy,
}
