//! Upsert the `pokemon` and `stats` tables.

use crate::error::{StoreError, StoreResult};
use dex_core::{PokemonRecord, StatBlock};
use duckdb::Connection;

/// Insert or fully replace the entity row for `record.id`.
pub fn upsert_pokemon(conn: &Connection, record: &PokemonRecord) -> StoreResult<()> {
    conn.execute(
        "INSERT INTO pokemon (pokemon_id, name, generation, height, weight, sprite_url)
         VALUES (?, ?, ?, ?, ?, ?)
         ON CONFLICT (pokemon_id) DO UPDATE SET
             name = excluded.name,
             generation = excluded.generation,
             height = excluded.height,
             weight = excluded.weight,
             sprite_url = excluded.sprite_url",
        duckdb::params![
            record.id,
            record.name.as_str(),
            record.generation,
            record.height,
            record.weight,
            record.sprite_url,
        ],
    )
    .map_err(|e| StoreError::PopulationError(format!("upsert pokemon ({}): {e}", record.id)))?;
    Ok(())
}

/// Insert or fully replace the stat block for `pokemon_id`.
///
/// Missing stats overwrite any previous value with NULL.
pub fn upsert_stats(conn: &Connection, pokemon_id: u32, stats: &StatBlock) -> StoreResult<()> {
    conn.execute(
        "INSERT INTO stats (pokemon_id, hp, attack, defense, special_attack, special_defense, speed)
         VALUES (?, ?, ?, ?, ?, ?, ?)
         ON CONFLICT (pokemon_id) DO UPDATE SET
             hp = excluded.hp,
             attack = excluded.attack,
             defense = excluded.defense,
             special_attack = excluded.special_attack,
             special_defense = excluded.special_defense,
             speed = excluded.speed",
        duckdb::params![
            pokemon_id,
            stats.hp,
            stats.attack,
            stats.defense,
            stats.special_attack,
            stats.special_defense,
            stats.speed,
        ],
    )
    .map_err(|e| StoreError::PopulationError(format!("upsert stats ({pokemon_id}): {e}")))?;
    Ok(())
}
