use serde::{Deserialize, Serialize};

/// Named external inference endpoint. Referenced by compute resources but
/// never created by the graph; it exists so the dependency is recorded.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct EndpointRefSpec {
    pub endpoint_name: String,
}
