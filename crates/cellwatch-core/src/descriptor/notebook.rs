use serde::{Deserialize, Serialize};

use crate::graph::ResourceId;

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct RoleSpec {
    pub role_name: String,
    pub assumed_by: String,
    pub managed_policies: Vec<String>,
}

/// Startup configuration for a managed notebook. The on-create content is
/// carried inline, base64-encoded, so the manifest is self-contained.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct LifecycleConfigSpec {
    pub config_name: String,
    pub on_create_base64: String,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct NotebookInstanceSpec {
    pub instance_name: String,
    pub lifecycle_config: ResourceId,
    pub role: ResourceId,
    pub instance_type: String,
    pub volume_gib: u32,
}
