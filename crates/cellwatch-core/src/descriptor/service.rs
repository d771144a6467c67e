use serde::{Deserialize, Serialize};

use crate::graph::ResourceId;

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ClusterSpec {
    pub cluster_name: String,
    pub max_azs: u8,
}

/// Load-balanced containerized task.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ContainerServiceSpec {
    pub service_name: String,
    pub cluster: ResourceId,
    pub image: String,

    pub cpu: u32,
    pub memory_mib: u32,
    pub desired_count: u32,
    pub assign_public_ip: bool,
    pub health_check_path: String,

    pub managed_policies: Vec<String>,
}
