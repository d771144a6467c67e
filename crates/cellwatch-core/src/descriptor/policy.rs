use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Effect {
    Allow,
    Deny,
}

/// Reusable permission statement. A policy is a single graph node attached
/// to compute resources by `Relation::Attaches` edges, so a permission
/// change affects every attached function uniformly.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct PolicySpec {
    pub effect: Effect,
    pub actions: Vec<String>,
    pub resources: Vec<String>,
}
