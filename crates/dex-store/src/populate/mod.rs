//! Write path for the store.
//!
//! Every function takes `&Connection` so the loader can run a whole band
//! inside one [`crate::BandTransaction`].

pub mod pokemon;
pub mod types;

use crate::error::StoreResult;
use dex_core::PokemonRecord;
use duckdb::Connection;

use self::pokemon::{upsert_pokemon, upsert_stats};
use self::types::replace_pokemon_types;

#[cfg(test)]
#[path = "populate_test.rs"]
mod populate_tests;

/// Write one record: entity row, stat block, then its type associations.
///
/// Re-writing the same id fully replaces what was there before.
pub fn write_record(conn: &Connection, record: &PokemonRecord) -> StoreResult<()> {
    log::debug!("Writing #{} {}", record.id, record.name);
    upsert_pokemon(conn, record)?;
    upsert_stats(conn, record.id, &record.stats)?;
    replace_pokemon_types(conn, record.id, &record.types)?;
    Ok(())
}
