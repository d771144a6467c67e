use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EndpointType {
    Regional,
    Edge,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let method = match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        };

        write!(f, "{method}")
    }
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct CorsPolicy {
    pub allow_origins: Vec<String>,
    pub allow_methods: Vec<String>,
}

impl CorsPolicy {
    /// Open to all origins and all methods.
    pub fn open() -> Self {
        Self {
            allow_origins: vec!["*".to_owned()],
            allow_methods: vec!["*".to_owned()],
        }
    }
}

/// Routed HTTP endpoint. Individual routes are `Relation::Routes` edges from
/// this node to the handling function.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct RestApiSpec {
    pub api_name: String,
    pub endpoint_type: EndpointType,
    pub cors: CorsPolicy,
}
