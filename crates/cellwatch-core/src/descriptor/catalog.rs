use serde::{Deserialize, Serialize};

use crate::graph::ResourceId;

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    String,
    Date,
    Float,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Column {
    pub name: String,
    pub column_type: ColumnType,
}

impl Column {
    pub fn new(name: &str, column_type: ColumnType) -> Self {
        Self {
            name: name.to_owned(),
            column_type,
        }
    }
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageFormat {
    Json,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct DatabaseSpec {
    pub database_name: String,
}

/// Query-layer table over objects in a bucket. Column order and types must
/// match the physical layout the producing functions write; nothing at apply
/// time verifies that, so the producer schema is the source of truth and
/// builders should derive the column list from it.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct CatalogTableSpec {
    pub table_name: String,
    pub database: ResourceId,
    pub bucket: ResourceId,
    pub prefix: String,
    pub columns: Vec<Column>,
    pub format: StorageFormat,
}
