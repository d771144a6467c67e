use serde::{Deserialize, Serialize};

use super::RemovalPolicy;

/// Object storage bucket. The physical name must be globally unique, so
/// builders template it from region and account.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct BucketSpec {
    pub bucket_name: String,
    pub removal_policy: RemovalPolicy,
}
