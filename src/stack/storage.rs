use cellwatch_core::{BucketSpec, Graph, RemovalPolicy, Resource, ResourceId};

use crate::environment::Environment;

pub struct StorageBuckets {
    /// Training dataset for the fault prediction model.
    pub train: ResourceId,
    /// Uploading batch data here triggers automatic prediction.
    pub infer: ResourceId,
    /// Archive of all prediction events for query and visualization.
    pub events: ResourceId,
}

pub fn add_buckets(
    graph: &mut Graph,
    environment: &Environment,
) -> anyhow::Result<StorageBuckets> {
    let train = graph.add(
        "train-bucket",
        Resource::Bucket(BucketSpec {
            bucket_name: physical_name("train", environment),
            removal_policy: RemovalPolicy::Destroy,
        }),
    )?;

    let infer = graph.add(
        "infer-bucket",
        Resource::Bucket(BucketSpec {
            bucket_name: physical_name("infer", environment),
            removal_policy: RemovalPolicy::Destroy,
        }),
    )?;

    let events = graph.add(
        "events-bucket",
        Resource::Bucket(BucketSpec {
            bucket_name: physical_name("events", environment),
            removal_policy: RemovalPolicy::Destroy,
        }),
    )?;

    Ok(StorageBuckets {
        train,
        infer,
        events,
    })
}

// Region and account make the physical names globally unique.
fn physical_name(purpose: &str, environment: &Environment) -> String {
    format!(
        "bev-bms-{purpose}-{}-{}",
        environment.region, environment.account
    )
}
