//! Record builders shared by the store's unit tests.

use crate::StoreDb;
use dex_core::{PokemonName, PokemonRecord, StatBlock, TypeLabel};

/// A record with every stat set to `base` and the given types.
pub(crate) fn record(id: u32, name: &str, generation: u8, types: &[&str]) -> PokemonRecord {
    PokemonRecord {
        id,
        name: PokemonName::try_new(name).unwrap(),
        generation,
        height: Some(10),
        weight: Some(100),
        sprite_url: Some(format!("https://sprites.example/{id}.png")),
        stats: uniform_stats(10),
        types: types.iter().map(|t| TypeLabel::try_new(t).unwrap()).collect(),
    }
}

pub(crate) fn uniform_stats(base: i64) -> StatBlock {
    StatBlock {
        hp: Some(base),
        attack: Some(base),
        defense: Some(base),
        special_attack: Some(base),
        special_defense: Some(base),
        speed: Some(base),
    }
}

/// Write `records` (all of `generation`) in one committed band.
pub(crate) fn load(db: &StoreDb, generation: u8, records: &[PokemonRecord]) {
    let mut band = db.begin_band(generation).unwrap();
    for r in records {
        band.write(r).unwrap();
    }
    band.commit().unwrap();
}

/// Query a single i64 value (convenience for COUNT(*) assertions).
pub(crate) fn count(db: &StoreDb, sql: &str) -> i64 {
    db.conn()
        .query_row(sql, [], |row| row.get::<_, i64>(0))
        .unwrap()
}
