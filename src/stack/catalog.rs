use cellwatch_core::{
    CatalogTableSpec, DatabaseSpec, Graph, Relation, Resource, ResourceId, StorageFormat,
};

use crate::schema;
use crate::stack::compute::DUMP_BUCKET_PREFIX;

/// Catalog database and table over the archived prediction events, for the
/// query tools behind the visualization front-end. The column list comes
/// from the event record schema so the declaration cannot drift from what
/// the handlers write.
pub fn add_catalog(graph: &mut Graph, events_bucket: &ResourceId) -> anyhow::Result<ResourceId> {
    let database = graph.add(
        "glue-database",
        Resource::Database(DatabaseSpec {
            database_name: "battery-consistency-bias-alarm-prediction-glue-database".to_owned(),
        }),
    )?;

    let table = graph.add(
        "events-glue-table",
        Resource::CatalogTable(CatalogTableSpec {
            table_name: "battery-consistency-bias-alarm-prediction-events".to_owned(),
            database: database.clone(),
            bucket: events_bucket.clone(),
            prefix: DUMP_BUCKET_PREFIX.to_owned(),
            columns: schema::event_record_columns(),
            format: StorageFormat::Json,
        }),
    )?;

    graph.relate(&table, Relation::DependsOn, &database);
    graph.relate(&table, Relation::DependsOn, events_bucket);

    Ok(table)
}
