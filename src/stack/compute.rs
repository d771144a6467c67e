use std::collections::BTreeMap;

use cellwatch_core::{
    Effect, EndpointRefSpec, FunctionSpec, Graph, ObjectEvent, PolicySpec, Relation, Resource,
    ResourceId,
};

use crate::environment::StackParams;
use crate::stack::events::{EVENTS_TABLE_KEY, EVENTS_TABLE_NAME};
use crate::stack::storage::StorageBuckets;

const PYTHON_RUNTIME: &str = "python3.8";
const HANDLER: &str = "main.handler";

/// Path prefix under the events bucket where handlers archive results.
pub const DUMP_BUCKET_PREFIX: &str = "events";

// Environment keys the external handler code reads.
pub const ENV_INFER_BUCKET_NAME: &str = "INFER_BUCKET_NAME";
pub const ENV_DUMP_BUCKET_NAME: &str = "DUMP_BUCKET_NAME";
pub const ENV_DUMP_BUCKET_PREFIX: &str = "DUMP_BUCKET_PREFIX";
pub const ENV_TABLE_NAME: &str = "DYNAMODB_TABLE_NAME";
pub const ENV_TABLE_KEY: &str = "DYNAMODB_PRIMARY_KEY";
pub const ENV_ENDPOINT_NAME: &str = "SAGEMAKER_ENDPOINT_NAME";

pub struct ComputeFunctions {
    /// Invoked for `.csv` uploads into the infer bucket.
    pub s3_trigger: ResourceId,
    /// Invoked through the API façade.
    pub api_trigger: ResourceId,
}

pub fn add_compute(
    graph: &mut Graph,
    buckets: &StorageBuckets,
    table: &ResourceId,
    params: &StackParams,
) -> anyhow::Result<ComputeFunctions> {
    let endpoint = graph.add(
        "inference-endpoint",
        Resource::EndpointRef(EndpointRefSpec {
            endpoint_name: params.endpoint_name.clone(),
        }),
    )?;

    // One shared statement for both handlers so a permission change affects
    // them uniformly.
    let policy = graph.add(
        "access-policy",
        Resource::Policy(PolicySpec {
            effect: Effect::Allow,
            actions: vec![
                "sagemaker:InvokeEndpoint".to_owned(),
                "s3:GetObject".to_owned(),
                "s3:PutObject".to_owned(),
            ],
            resources: vec!["*".to_owned()],
        }),
    )?;

    let infer_bucket_name = bucket_name(graph, &buckets.infer)?;
    let events_bucket_name = bucket_name(graph, &buckets.events)?;

    let mut shared_env = BTreeMap::new();
    shared_env.insert(ENV_DUMP_BUCKET_NAME.to_owned(), events_bucket_name);
    shared_env.insert(
        ENV_DUMP_BUCKET_PREFIX.to_owned(),
        DUMP_BUCKET_PREFIX.to_owned(),
    );
    shared_env.insert(ENV_TABLE_NAME.to_owned(), EVENTS_TABLE_NAME.to_owned());
    shared_env.insert(ENV_TABLE_KEY.to_owned(), EVENTS_TABLE_KEY.to_owned());
    shared_env.insert(ENV_ENDPOINT_NAME.to_owned(), params.endpoint_name.clone());

    let mut s3_trigger_env = shared_env.clone();
    s3_trigger_env.insert(ENV_INFER_BUCKET_NAME.to_owned(), infer_bucket_name);

    let s3_trigger = graph.add(
        "s3-trigger",
        Resource::Function(FunctionSpec {
            function_name: "battery-consistency-bias-alarm-prediction-s3-trigger".to_owned(),
            code_location: "lambda/s3_trigger/".to_owned(),
            handler: HANDLER.to_owned(),
            runtime: PYTHON_RUNTIME.to_owned(),
            environment: s3_trigger_env,
            required_env: vec![
                ENV_INFER_BUCKET_NAME.to_owned(),
                ENV_DUMP_BUCKET_NAME.to_owned(),
                ENV_DUMP_BUCKET_PREFIX.to_owned(),
                ENV_TABLE_NAME.to_owned(),
                ENV_TABLE_KEY.to_owned(),
                ENV_ENDPOINT_NAME.to_owned(),
            ],
            memory_mib: 1024,
            timeout_seconds: 900,
        }),
    )?;

    let api_trigger = graph.add(
        "api-trigger",
        Resource::Function(FunctionSpec {
            function_name: "battery-consistency-bias-alarm-prediction-api-trigger".to_owned(),
            code_location: "lambda/api_trigger/".to_owned(),
            handler: HANDLER.to_owned(),
            runtime: PYTHON_RUNTIME.to_owned(),
            environment: shared_env,
            required_env: vec![
                ENV_DUMP_BUCKET_NAME.to_owned(),
                ENV_DUMP_BUCKET_PREFIX.to_owned(),
                ENV_TABLE_NAME.to_owned(),
                ENV_TABLE_KEY.to_owned(),
                ENV_ENDPOINT_NAME.to_owned(),
            ],
            memory_mib: 512,
            timeout_seconds: 30,
        }),
    )?;

    for function in [&s3_trigger, &api_trigger] {
        graph.relate(function, Relation::DependsOn, &buckets.events);
        graph.relate(function, Relation::DependsOn, &endpoint);
        graph.relate(function, Relation::Attaches, &policy);
        graph.relate(function, Relation::GrantsWrite, table);
    }

    graph.relate(&s3_trigger, Relation::DependsOn, &buckets.infer);

    // Only object-creation events with the fixed extension fire the handler;
    // any other upload under the bucket produces no reaction.
    graph.relate(
        &s3_trigger,
        Relation::Subscribes {
            event: ObjectEvent::Created,
            suffix: ".csv".to_owned(),
        },
        &buckets.infer,
    );

    Ok(ComputeFunctions {
        s3_trigger,
        api_trigger,
    })
}

fn bucket_name(graph: &Graph, id: &ResourceId) -> anyhow::Result<String> {
    match graph.get(id) {
        Some(Resource::Bucket(spec)) => Ok(spec.bucket_name.clone()),
        Some(other) => anyhow::bail!("resource '{id}' is a {}, not a bucket", other.kind()),
        None => anyhow::bail!("resource '{id}' not found"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::Environment;
    use crate::stack::{events, storage};

    fn fixture() -> (Graph, ComputeFunctions) {
        let environment = Environment::new("111111111111", "us-west-2", "aws");
        let mut graph = Graph::new();

        let buckets = storage::add_buckets(&mut graph, &environment).unwrap();
        let table = events::add_events_table(&mut graph).unwrap();
        let functions =
            add_compute(&mut graph, &buckets, &table, &StackParams::default()).unwrap();

        (graph, functions)
    }

    fn function_spec(graph: &Graph, id: &ResourceId) -> FunctionSpec {
        match graph.get(id).unwrap() {
            Resource::Function(spec) => spec.clone(),
            other => panic!("expected function, got {}", other.kind()),
        }
    }

    #[test]
    fn test_required_env_is_complete_and_non_empty() {
        let (graph, functions) = fixture();

        for id in [&functions.s3_trigger, &functions.api_trigger] {
            let spec = function_spec(&graph, id);

            for key in &spec.required_env {
                let value = spec.environment.get(key).unwrap();
                assert!(!value.is_empty(), "empty env value for {key}");
            }
        }
    }

    #[test]
    fn test_s3_trigger_env_references_buckets_and_table() {
        let (graph, functions) = fixture();
        let spec = function_spec(&graph, &functions.s3_trigger);

        assert_eq!(
            spec.environment.get(ENV_INFER_BUCKET_NAME).unwrap(),
            "bev-bms-infer-us-west-2-111111111111"
        );
        assert_eq!(
            spec.environment.get(ENV_DUMP_BUCKET_NAME).unwrap(),
            "bev-bms-events-us-west-2-111111111111"
        );
        assert_eq!(
            spec.environment.get(ENV_TABLE_NAME).unwrap(),
            EVENTS_TABLE_NAME
        );
        assert_eq!(spec.environment.get(ENV_TABLE_KEY).unwrap(), "request_id");
    }

    #[test]
    fn test_api_trigger_does_not_read_infer_bucket() {
        let (graph, functions) = fixture();
        let spec = function_spec(&graph, &functions.api_trigger);

        assert!(!spec.environment.contains_key(ENV_INFER_BUCKET_NAME));
        assert!(!spec
            .required_env
            .contains(&ENV_INFER_BUCKET_NAME.to_owned()));
    }

    #[test]
    fn test_s3_trigger_subscribes_to_csv_only() {
        let (graph, functions) = fixture();

        let subscriptions: Vec<_> = graph
            .edges()
            .iter()
            .filter(|edge| matches!(edge.relation, Relation::Subscribes { .. }))
            .collect();

        assert_eq!(subscriptions.len(), 1);

        let edge = subscriptions[0];
        assert_eq!(edge.from, functions.s3_trigger);

        let Relation::Subscribes { event, ref suffix } = edge.relation else {
            unreachable!();
        };

        assert_eq!(event, ObjectEvent::Created);
        assert_eq!(suffix, ".csv");

        // The filter is a plain suffix match.
        assert!("batch.csv".ends_with(suffix.as_str()));
        assert!(!"data.json".ends_with(suffix.as_str()));
    }

    #[test]
    fn test_both_functions_share_one_policy() {
        let (graph, functions) = fixture();

        let attached: Vec<_> = graph
            .edges()
            .iter()
            .filter(|edge| matches!(edge.relation, Relation::Attaches))
            .collect();

        assert_eq!(attached.len(), 2);
        assert_eq!(attached[0].to, attached[1].to);

        let from_ids: Vec<_> = attached.iter().map(|edge| edge.from.clone()).collect();
        assert!(from_ids.contains(&functions.s3_trigger));
        assert!(from_ids.contains(&functions.api_trigger));
    }
}
