//! Widget option lists and table introspection.

use super::BoundQuery;
use crate::ddl::DATA_TABLES;
use crate::error::{StoreError, StoreResult};
use duckdb::Connection;
use serde::Serialize;

/// Query for the distinct generations present in the store, ascending.
pub fn generations_query() -> BoundQuery {
    BoundQuery::new("SELECT DISTINCT generation FROM pokemon ORDER BY generation")
}

/// Distinct generations present in the store, ascending.
pub fn generations(conn: &Connection) -> StoreResult<Vec<u8>> {
    generations_query().query_map(conn, |row| row.get(0))
}

/// Query for every catalog label, ascending.
pub fn type_labels_query() -> BoundQuery {
    BoundQuery::new("SELECT type_name FROM types ORDER BY type_name")
}

/// Every catalog label, ascending.
pub fn type_labels(conn: &Connection) -> StoreResult<Vec<String>> {
    type_labels_query().query_map(conn, |row| row.get(0))
}

/// Row count of one data table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableCount {
    pub table: String,
    pub rows: i64,
}

/// Row counts for every data table, in schema order.
pub fn table_counts(conn: &Connection) -> StoreResult<Vec<TableCount>> {
    DATA_TABLES
        .iter()
        .map(|table| {
            // Table names come from DATA_TABLES, never from user input.
            let rows: i64 = conn
                .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
                    row.get(0)
                })
                .map_err(|e| StoreError::QueryError(format!("count failed for {table}: {e}")))?;
            Ok(TableCount {
                table: (*table).to_string(),
                rows,
            })
        })
        .collect()
}
