// PredictionStack assembles the full provisioning graph for the battery
// consistency bias alarm prediction pipeline. Construction is deterministic
// and synchronous: the only I/O is reading the fixed notebook lifecycle
// script, and any change in output follows solely from changed inputs. The
// external reconciliation engine consumes the emitted manifest and applies
// creates / updates / deletes respecting the edges.

mod api;
mod catalog;
mod compute;
mod events;
mod notebook;
mod storage;
mod visualization;

use std::collections::BTreeMap;

use cellwatch_core::Graph;

use crate::environment::{Environment, StackParams};

pub use compute::ComputeFunctions;
pub use storage::StorageBuckets;

pub struct PredictionStack;

impl PredictionStack {
    pub fn build(environment: &Environment, params: &StackParams) -> anyhow::Result<Graph> {
        let mut graph = Graph::new();

        let buckets = storage::add_buckets(&mut graph, environment)?;
        let table = events::add_events_table(&mut graph)?;
        let functions = compute::add_compute(&mut graph, &buckets, &table, params)?;
        api::add_api(&mut graph, &functions.api_trigger)?;
        notebook::add_notebook(&mut graph, params)?;
        catalog::add_catalog(&mut graph, &buckets.events)?;
        visualization::add_visualization(&mut graph, environment)?;

        tracing::debug!(
            "constructed graph: {} resources, {} edges",
            graph.len(),
            graph.edges().len()
        );

        Ok(graph)
    }
}

/// Parameters recorded in the emitted manifest alongside the descriptors.
pub fn manifest_parameters(
    environment: &Environment,
    params: &StackParams,
) -> BTreeMap<String, String> {
    let mut parameters = BTreeMap::new();

    parameters.insert("account".to_owned(), environment.account.clone());
    parameters.insert("region".to_owned(), environment.region.clone());
    parameters.insert("partition".to_owned(), environment.partition.clone());
    parameters.insert("endpoint_name".to_owned(), params.endpoint_name.clone());

    parameters
}
