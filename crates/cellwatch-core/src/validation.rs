use std::collections::BTreeMap;

use crate::descriptor::Resource;
use crate::graph::{Graph, ObjectEvent, Relation, ResourceId};

/// Structural validation of a constructed graph. Any failure aborts the
/// whole apply; there is no partial output to clean up.
pub fn validate(graph: &Graph) -> anyhow::Result<()> {
    validate_edge_endpoints(graph)?;
    validate_edge_kinds(graph)?;
    validate_required_env(graph)?;
    validate_subscriptions(graph)?;

    // Surfaces cycles.
    graph.apply_order()?;

    Ok(())
}

fn validate_edge_endpoints(graph: &Graph) -> anyhow::Result<()> {
    for edge in graph.edges() {
        for id in [&edge.from, &edge.to] {
            if !graph.contains(id) {
                anyhow::bail!(
                    "edge '{}' -> '{}' references unknown resource '{id}'",
                    edge.from,
                    edge.to
                );
            }
        }
    }

    Ok(())
}

fn validate_edge_kinds(graph: &Graph) -> anyhow::Result<()> {
    for edge in graph.edges() {
        let from = graph.get(&edge.from).expect("endpoints validated");
        let to = graph.get(&edge.to).expect("endpoints validated");

        let valid = match edge.relation {
            Relation::DependsOn => true,
            Relation::Attaches => {
                matches!(from, Resource::Function(_)) && matches!(to, Resource::Policy(_))
            }
            Relation::GrantsWrite => {
                matches!(from, Resource::Function(_)) && matches!(to, Resource::Table(_))
            }
            Relation::Subscribes { .. } => {
                matches!(from, Resource::Function(_)) && matches!(to, Resource::Bucket(_))
            }
            Relation::Routes { .. } => {
                matches!(from, Resource::RestApi(_)) && matches!(to, Resource::Function(_))
            }
        };

        if !valid {
            anyhow::bail!(
                "edge '{}' ({}) -> '{}' ({}) has invalid endpoint kinds for its relation",
                edge.from,
                from.kind(),
                edge.to,
                to.kind()
            );
        }
    }

    Ok(())
}

/// A missing configuration key is a deploy-time contract violation the
/// handler code would only surface at first invocation, so it is rejected
/// here instead.
fn validate_required_env(graph: &Graph) -> anyhow::Result<()> {
    for (id, resource) in graph.resources() {
        let Resource::Function(spec) = resource else {
            continue;
        };

        for key in &spec.required_env {
            match spec.environment.get(key) {
                Some(value) if !value.is_empty() => {}
                Some(_) => {
                    anyhow::bail!("function '{id}' has empty value for required env key '{key}'")
                }
                None => anyhow::bail!("function '{id}' is missing required env key '{key}'"),
            }
        }
    }

    Ok(())
}

/// Suffix filters on the same bucket and event kind must not overlap: if one
/// suffix ends with another, a single object key could match both and which
/// subscription fires would be ambiguous.
fn validate_subscriptions(graph: &Graph) -> anyhow::Result<()> {
    let mut filters: BTreeMap<(&ResourceId, ObjectEvent), Vec<(&ResourceId, &str)>> =
        BTreeMap::new();

    for edge in graph.edges() {
        if let Relation::Subscribes { event, ref suffix } = edge.relation {
            filters
                .entry((&edge.to, event))
                .or_default()
                .push((&edge.from, suffix));
        }
    }

    for ((bucket, _), subscriptions) in &filters {
        for (index, (function_a, suffix_a)) in subscriptions.iter().enumerate() {
            for (function_b, suffix_b) in &subscriptions[index + 1..] {
                if suffix_a.ends_with(suffix_b) || suffix_b.ends_with(suffix_a) {
                    anyhow::bail!(
                        "ambiguous subscription filters on bucket '{bucket}': \
                         '{suffix_a}' ({function_a}) overlaps '{suffix_b}' ({function_b})"
                    );
                }
            }
        }
    }

    Ok(())
}
