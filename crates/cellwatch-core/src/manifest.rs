use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::descriptor::Resource;
use crate::graph::{Edge, Graph, ResourceId};
use crate::validation::validate;

pub const MANIFEST_FORMAT_VERSION: u32 = 1;

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ManifestResource {
    pub id: ResourceId,
    pub external: bool,
    #[serde(flatten)]
    pub resource: Resource,
}

/// The document handed to the reconciliation engine: parameters the graph
/// was built from, descriptors in one valid apply order, and the full edge
/// set so the engine can derive its own ordering.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Manifest {
    pub format_version: u32,
    pub parameters: BTreeMap<String, String>,
    pub resources: Vec<ManifestResource>,
    pub edges: Vec<Edge>,
}

impl Manifest {
    pub fn to_json(&self) -> anyhow::Result<String> {
        let json = serde_json::to_string_pretty(self)?;

        Ok(json)
    }
}

impl Graph {
    /// Validates the graph and emits the manifest. Identical graphs and
    /// parameters produce byte-identical JSON.
    pub fn into_manifest(self, parameters: BTreeMap<String, String>) -> anyhow::Result<Manifest> {
        validate(&self)?;

        let order = self.apply_order()?;

        let resources = order
            .into_iter()
            .map(|id| {
                let resource = self.get(&id).expect("ordered ids exist").clone();

                ManifestResource {
                    external: resource.is_external(),
                    id,
                    resource,
                }
            })
            .collect();

        let edges = self.edges().to_vec();

        tracing::info!(
            "emitting manifest: {} resources, {} edges",
            self.len(),
            edges.len()
        );

        Ok(Manifest {
            format_version: MANIFEST_FORMAT_VERSION,
            parameters,
            resources,
            edges,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{BucketSpec, RemovalPolicy};
    use crate::graph::Relation;

    fn bucket(name: &str) -> Resource {
        Resource::Bucket(BucketSpec {
            bucket_name: name.to_owned(),
            removal_policy: RemovalPolicy::Destroy,
        })
    }

    fn fixture() -> Graph {
        let mut graph = Graph::new();

        let events = graph.add("events-bucket", bucket("events")).unwrap();
        let archive = graph.add("archive-bucket", bucket("archive")).unwrap();
        graph.relate(&archive, Relation::DependsOn, &events);

        graph
    }

    #[test]
    fn test_manifest_resources_in_apply_order() {
        let manifest = fixture().into_manifest(BTreeMap::new()).unwrap();

        assert_eq!(manifest.format_version, MANIFEST_FORMAT_VERSION);
        assert_eq!(manifest.resources.len(), 2);
        assert_eq!(manifest.resources[0].id.as_str(), "events-bucket");
        assert_eq!(manifest.resources[1].id.as_str(), "archive-bucket");
        assert_eq!(manifest.edges.len(), 1);
    }

    #[test]
    fn test_manifest_json_roundtrip() {
        let manifest = fixture().into_manifest(BTreeMap::new()).unwrap();

        let json = manifest.to_json().unwrap();
        let parsed: Manifest = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, manifest);
    }

    #[test]
    fn test_manifest_json_is_deterministic() {
        let first = fixture().into_manifest(BTreeMap::new()).unwrap();
        let second = fixture().into_manifest(BTreeMap::new()).unwrap();

        assert_eq!(first.to_json().unwrap(), second.to_json().unwrap());
    }
}
