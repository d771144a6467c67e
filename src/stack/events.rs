use cellwatch_core::{
    AttributeType, BillingMode, Graph, RemovalPolicy, Resource, ResourceId, TableSpec,
};

pub const EVENTS_TABLE_NAME: &str = "battery-consistency-bias-alarm-prediction-events-ddb";
pub const EVENTS_TABLE_KEY: &str = "request_id";

/// Every forward inference writes one row here, keyed by request id, for
/// front-end retrieval.
pub fn add_events_table(graph: &mut Graph) -> anyhow::Result<ResourceId> {
    graph.add(
        "events-table",
        Resource::Table(TableSpec {
            table_name: EVENTS_TABLE_NAME.to_owned(),
            partition_key: EVENTS_TABLE_KEY.to_owned(),
            partition_key_type: AttributeType::String,
            billing_mode: BillingMode::PayPerRequest,
            removal_policy: RemovalPolicy::Destroy,
        }),
    )
}
