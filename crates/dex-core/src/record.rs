//! Normalized entity records produced by ingestion.

use crate::newtype_string::define_name;
use crate::type_label::TypeLabel;
use serde::Serialize;

define_name! {
    /// Display name of an entity as published by the remote API.
    pub struct PokemonName;
}

/// Stat keys the remote API uses, in column order.
pub const STAT_KEYS: [&str; 6] = [
    "hp",
    "attack",
    "defense",
    "special-attack",
    "special-defense",
    "speed",
];

/// The six base stats of an entity.
///
/// A stat missing from the source payload is `None` and is stored as NULL
/// rather than failing the record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatBlock {
    pub hp: Option<i64>,
    pub attack: Option<i64>,
    pub defense: Option<i64>,
    pub special_attack: Option<i64>,
    pub special_defense: Option<i64>,
    pub speed: Option<i64>,
}

impl StatBlock {
    /// Build a stat block from `(stat name, base value)` pairs.
    ///
    /// Unknown stat names are ignored; when a name repeats, the last value
    /// wins.
    pub fn from_base_stats<'a>(pairs: impl IntoIterator<Item = (&'a str, i64)>) -> Self {
        let mut block = StatBlock::default();
        for (name, value) in pairs {
            let slot = match name {
                "hp" => &mut block.hp,
                "attack" => &mut block.attack,
                "defense" => &mut block.defense,
                "special-attack" => &mut block.special_attack,
                "special-defense" => &mut block.special_defense,
                "speed" => &mut block.speed,
                other => {
                    log::debug!("Ignoring unknown stat '{other}'");
                    continue;
                }
            };
            *slot = Some(value);
        }
        block
    }

    /// Values in [`STAT_KEYS`] order.
    pub fn values(&self) -> [Option<i64>; 6] {
        [
            self.hp,
            self.attack,
            self.defense,
            self.special_attack,
            self.special_defense,
            self.speed,
        ]
    }

    /// Sum of all six stats; `None` when any of them is missing, matching
    /// SQL addition over NULL.
    pub fn total(&self) -> Option<i64> {
        self.values().iter().try_fold(0, |acc, v| v.map(|v| acc + v))
    }
}

/// One entity ready to be written to the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PokemonRecord {
    /// Stable external id (national dex number)
    pub id: u32,
    pub name: PokemonName,
    /// Generation of the band the id was loaded from
    pub generation: u8,
    pub height: Option<i64>,
    pub weight: Option<i64>,
    pub sprite_url: Option<String>,
    pub stats: StatBlock,
    /// Type labels in slot order
    pub types: Vec<TypeLabel>,
}

#[cfg(test)]
#[path = "record_test.rs"]
mod tests;
