use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::descriptor::{HttpMethod, Resource};

/// Stable logical identifier for a graph node. Identical builder inputs must
/// produce identical ids across runs, so ids are fixed strings, never
/// generated.
#[derive(Clone, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct ResourceId(String);

impl ResourceId {
    pub fn new(id: &str) -> Self {
        Self(id.to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ResourceId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectEvent {
    Created,
    Removed,
}

/// Typed edge payload. Every edge reads "`from` requires `to` to exist
/// first"; the payload says why.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(tag = "relation", rename_all = "snake_case")]
pub enum Relation {
    DependsOn,
    /// Compute resource attaches a shared policy statement.
    Attaches,
    /// Compute resource is granted write access to a table.
    GrantsWrite,
    /// Compute resource is invoked for matching object events on a bucket.
    Subscribes { event: ObjectEvent, suffix: String },
    /// API façade forwards a route to a compute resource.
    Routes { method: HttpMethod, path: String },
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Edge {
    pub from: ResourceId,
    #[serde(flatten)]
    pub relation: Relation,
    pub to: ResourceId,
}

/// The full descriptor set and its dependency edges. Construction is
/// idempotent: builders add resources and relations in a fixed order and the
/// container iterates deterministically.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    resources: BTreeMap<ResourceId, Resource>,
    edges: Vec<Edge>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a resource under a logical id. Ids are unique; a duplicate is a
    /// builder bug and fails the whole construction.
    pub fn add(&mut self, id: &str, resource: Resource) -> anyhow::Result<ResourceId> {
        let id = ResourceId::new(id);

        if self.resources.contains_key(&id) {
            anyhow::bail!("duplicate resource id '{id}'");
        }

        tracing::debug!("adding {} '{}'", resource.kind(), id);
        self.resources.insert(id.clone(), resource);

        Ok(id)
    }

    pub fn relate(&mut self, from: &ResourceId, relation: Relation, to: &ResourceId) {
        self.edges.push(Edge {
            from: from.clone(),
            relation,
            to: to.clone(),
        });
    }

    pub fn get(&self, id: &ResourceId) -> Option<&Resource> {
        self.resources.get(id)
    }

    pub fn contains(&self, id: &ResourceId) -> bool {
        self.resources.contains_key(id)
    }

    pub fn resources(&self) -> impl Iterator<Item = (&ResourceId, &Resource)> {
        self.resources.iter()
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    /// One valid application order: every resource appears after everything
    /// it has an edge to. Kahn's algorithm, ties broken by logical id so the
    /// order is stable across runs. A cycle or an edge to an unknown id is
    /// an error.
    pub fn apply_order(&self) -> anyhow::Result<Vec<ResourceId>> {
        let mut pending_deps: BTreeMap<&ResourceId, usize> =
            self.resources.keys().map(|id| (id, 0)).collect();
        let mut dependents: BTreeMap<&ResourceId, Vec<&ResourceId>> = BTreeMap::new();

        for edge in &self.edges {
            if !self.resources.contains_key(&edge.from) {
                anyhow::bail!("edge references unknown resource '{}'", edge.from);
            }

            match pending_deps.get_mut(&edge.to) {
                Some(_) => {}
                None => anyhow::bail!("edge references unknown resource '{}'", edge.to),
            }

            *pending_deps
                .get_mut(&edge.from)
                .expect("from endpoint checked above") += 1;
            dependents.entry(&edge.to).or_default().push(&edge.from);
        }

        // Sorted descending so pop() always yields the smallest ready id.
        let mut ready: Vec<&ResourceId> = pending_deps
            .iter()
            .filter(|(_, count)| **count == 0)
            .map(|(id, _)| *id)
            .rev()
            .collect();

        let mut order = Vec::with_capacity(self.resources.len());

        while let Some(id) = ready.pop() {
            order.push(id.clone());

            if let Some(dependent_ids) = dependents.get(id) {
                for dependent in dependent_ids {
                    let count = pending_deps
                        .get_mut(dependent)
                        .expect("dependent endpoint checked above");
                    *count -= 1;

                    if *count == 0 {
                        let position = ready
                            .binary_search_by(|other| dependent.cmp(other))
                            .unwrap_or_else(|position| position);
                        ready.insert(position, *dependent);
                    }
                }
            }
        }

        if order.len() < self.resources.len() {
            let unresolved: Vec<&str> = self
                .resources
                .keys()
                .filter(|id| !order.contains(*id))
                .map(ResourceId::as_str)
                .collect();

            anyhow::bail!("dependency cycle among resources: {}", unresolved.join(", "));
        }

        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{BucketSpec, RemovalPolicy};

    fn bucket(name: &str) -> Resource {
        Resource::Bucket(BucketSpec {
            bucket_name: name.to_owned(),
            removal_policy: RemovalPolicy::Destroy,
        })
    }

    #[test]
    fn test_add_rejects_duplicate_id() {
        let mut graph = Graph::new();

        graph.add("events-bucket", bucket("events")).unwrap();
        let result = graph.add("events-bucket", bucket("events"));

        assert!(result.is_err());
    }

    #[test]
    fn test_apply_order_respects_edges() {
        let mut graph = Graph::new();

        let a = graph.add("a", bucket("a")).unwrap();
        let b = graph.add("b", bucket("b")).unwrap();
        let c = graph.add("c", bucket("c")).unwrap();

        // c requires b, b requires a
        graph.relate(&c, Relation::DependsOn, &b);
        graph.relate(&b, Relation::DependsOn, &a);

        let order = graph.apply_order().unwrap();

        let position =
            |id: &ResourceId| order.iter().position(|other| other == id).unwrap();

        assert!(position(&a) < position(&b));
        assert!(position(&b) < position(&c));
    }

    #[test]
    fn test_apply_order_is_deterministic() {
        let build = || {
            let mut graph = Graph::new();

            let root = graph.add("root", bucket("root")).unwrap();
            for id in ["zeta", "alpha", "mid"] {
                let node = graph.add(id, bucket(id)).unwrap();
                graph.relate(&node, Relation::DependsOn, &root);
            }

            graph.apply_order().unwrap()
        };

        assert_eq!(build(), build());

        // Unconstrained nodes come out in id order.
        let order = build();
        assert_eq!(order[0].as_str(), "root");
        assert_eq!(order[1].as_str(), "alpha");
        assert_eq!(order[2].as_str(), "mid");
        assert_eq!(order[3].as_str(), "zeta");
    }

    #[test]
    fn test_apply_order_detects_cycle() {
        let mut graph = Graph::new();

        let a = graph.add("a", bucket("a")).unwrap();
        let b = graph.add("b", bucket("b")).unwrap();

        graph.relate(&a, Relation::DependsOn, &b);
        graph.relate(&b, Relation::DependsOn, &a);

        let error = graph.apply_order().unwrap_err();

        assert!(error.to_string().contains("cycle"));
    }

    #[test]
    fn test_apply_order_rejects_unknown_endpoint() {
        let mut graph = Graph::new();

        let a = graph.add("a", bucket("a")).unwrap();
        graph.relate(&a, Relation::DependsOn, &ResourceId::new("ghost"));

        assert!(graph.apply_order().is_err());
    }
}
