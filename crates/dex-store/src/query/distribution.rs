//! Entity count per type label within a generation.

use super::BoundQuery;
use crate::error::StoreResult;
use duckdb::Connection;
use serde::Serialize;

/// One bar of the type distribution chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeCount {
    pub type_name: String,
    pub count: i64,
}

/// Build the distribution query, ordered by count desc then label asc.
pub fn type_distribution_query(generation: u8) -> BoundQuery {
    BoundQuery::new(
        "SELECT t.type_name, COUNT(*) AS count
         FROM pokemon p
         JOIN pokemon_types pt ON pt.pokemon_id = p.pokemon_id
         JOIN types t ON t.type_id = pt.type_id
         WHERE p.generation = ?
         GROUP BY t.type_name
         ORDER BY count DESC, t.type_name ASC",
    )
    .bind(generation)
}

/// Execute a query built by [`type_distribution_query`].
pub fn run_type_distribution(conn: &Connection, query: &BoundQuery) -> StoreResult<Vec<TypeCount>> {
    query.query_map(conn, |row| {
        Ok(TypeCount {
            type_name: row.get(0)?,
            count: row.get(1)?,
        })
    })
}

/// Count entities per type label for `generation`.
pub fn type_distribution(conn: &Connection, generation: u8) -> StoreResult<Vec<TypeCount>> {
    run_type_distribution(conn, &type_distribution_query(generation))
}
