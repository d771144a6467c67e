mod api;
mod bucket;
mod catalog;
mod endpoint;
mod function;
mod notebook;
mod policy;
mod service;
mod table;

pub use api::{CorsPolicy, EndpointType, HttpMethod, RestApiSpec};
pub use bucket::BucketSpec;
pub use catalog::{CatalogTableSpec, Column, ColumnType, DatabaseSpec, StorageFormat};
pub use endpoint::EndpointRefSpec;
pub use function::FunctionSpec;
pub use notebook::{LifecycleConfigSpec, NotebookInstanceSpec, RoleSpec};
pub use policy::{Effect, PolicySpec};
pub use service::{ClusterSpec, ContainerServiceSpec};
pub use table::{AttributeType, BillingMode, TableSpec};

use serde::{Deserialize, Serialize};

/// Governs whether a resource's contents are destroyed when its descriptor
/// is removed from the graph.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RemovalPolicy {
    Destroy,
    Retain,
}

/// Desired configuration for one cloud resource. The reconciliation engine
/// diffs these against live state; nothing here performs provider calls.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(tag = "kind", content = "spec", rename_all = "snake_case")]
pub enum Resource {
    Bucket(BucketSpec),
    Table(TableSpec),
    Function(FunctionSpec),
    Policy(PolicySpec),
    RestApi(RestApiSpec),
    Role(RoleSpec),
    LifecycleConfig(LifecycleConfigSpec),
    NotebookInstance(NotebookInstanceSpec),
    Database(DatabaseSpec),
    CatalogTable(CatalogTableSpec),
    Cluster(ClusterSpec),
    ContainerService(ContainerServiceSpec),
    EndpointRef(EndpointRefSpec),
}

impl Resource {
    pub fn kind(&self) -> &'static str {
        match self {
            Resource::Bucket(_) => "bucket",
            Resource::Table(_) => "table",
            Resource::Function(_) => "function",
            Resource::Policy(_) => "policy",
            Resource::RestApi(_) => "rest_api",
            Resource::Role(_) => "role",
            Resource::LifecycleConfig(_) => "lifecycle_config",
            Resource::NotebookInstance(_) => "notebook_instance",
            Resource::Database(_) => "database",
            Resource::CatalogTable(_) => "catalog_table",
            Resource::Cluster(_) => "cluster",
            Resource::ContainerService(_) => "container_service",
            Resource::EndpointRef(_) => "endpoint_ref",
        }
    }

    /// Physical (provider-side) name, where the resource has one.
    pub fn physical_name(&self) -> Option<&str> {
        match self {
            Resource::Bucket(spec) => Some(&spec.bucket_name),
            Resource::Table(spec) => Some(&spec.table_name),
            Resource::Function(spec) => Some(&spec.function_name),
            Resource::Policy(_) => None,
            Resource::RestApi(spec) => Some(&spec.api_name),
            Resource::Role(spec) => Some(&spec.role_name),
            Resource::LifecycleConfig(spec) => Some(&spec.config_name),
            Resource::NotebookInstance(spec) => Some(&spec.instance_name),
            Resource::Database(spec) => Some(&spec.database_name),
            Resource::CatalogTable(spec) => Some(&spec.table_name),
            Resource::Cluster(spec) => Some(&spec.cluster_name),
            Resource::ContainerService(spec) => Some(&spec.service_name),
            Resource::EndpointRef(spec) => Some(&spec.endpoint_name),
        }
    }

    /// External references are recorded for dependency ordering but never
    /// created or destroyed by the reconciliation engine.
    pub fn is_external(&self) -> bool {
        matches!(self, Resource::EndpointRef(_))
    }
}
