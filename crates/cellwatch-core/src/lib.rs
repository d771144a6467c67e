pub mod descriptor;
pub mod graph;
pub mod manifest;
pub mod validation;

pub use descriptor::{
    AttributeType, BillingMode, BucketSpec, CatalogTableSpec, ClusterSpec, Column, ColumnType,
    ContainerServiceSpec, CorsPolicy, DatabaseSpec, Effect, EndpointRefSpec, EndpointType,
    FunctionSpec, HttpMethod, LifecycleConfigSpec, NotebookInstanceSpec, PolicySpec, RemovalPolicy,
    Resource, RestApiSpec, RoleSpec, StorageFormat, TableSpec,
};
pub use graph::{Edge, Graph, ObjectEvent, Relation, ResourceId};
pub use manifest::{Manifest, ManifestResource, MANIFEST_FORMAT_VERSION};
pub use validation::validate;
