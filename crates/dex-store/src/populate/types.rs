//! Populate the `types` catalog and the `pokemon_types` association.

use crate::error::{StoreError, StoreResult};
use dex_core::TypeLabel;
use duckdb::Connection;

/// Insert `label` into the catalog if absent and return its `type_id`.
pub fn upsert_type(conn: &Connection, label: &TypeLabel) -> StoreResult<i64> {
    conn.execute(
        "INSERT INTO types (type_name) VALUES (?) ON CONFLICT (type_name) DO NOTHING",
        duckdb::params![label.as_str()],
    )
    .map_err(|e| StoreError::PopulationError(format!("insert types ({label}): {e}")))?;

    let type_id: i64 = conn
        .query_row(
            "SELECT type_id FROM types WHERE type_name = ?",
            duckdb::params![label.as_str()],
            |row| row.get(0),
        )
        .map_err(|e| StoreError::PopulationError(format!("select type_id ({label}): {e}")))?;
    Ok(type_id)
}

/// Rebuild every type association of `pokemon_id` from `labels`.
///
/// Prior associations are deleted first, so the association set always
/// mirrors the most recent load. Repeated labels collapse to one row.
pub fn replace_pokemon_types(
    conn: &Connection,
    pokemon_id: u32,
    labels: &[TypeLabel],
) -> StoreResult<()> {
    conn.execute(
        "DELETE FROM pokemon_types WHERE pokemon_id = ?",
        duckdb::params![pokemon_id],
    )
    .map_err(|e| StoreError::PopulationError(format!("clear pokemon_types ({pokemon_id}): {e}")))?;

    for label in labels {
        let type_id = upsert_type(conn, label)?;
        conn.execute(
            "INSERT INTO pokemon_types (pokemon_id, type_id) VALUES (?, ?) ON CONFLICT DO NOTHING",
            duckdb::params![pokemon_id, type_id],
        )
        .map_err(|e| {
            StoreError::PopulationError(format!("insert pokemon_types ({pokemon_id}, {label}): {e}"))
        })?;
    }
    Ok(())
}
