//! Remote JSON payload decoding.
//!
//! Only the fields the store needs are declared; everything else in the
//! response is ignored by serde.

use crate::error::{IngestError, IngestResult};
use dex_core::{PokemonName, PokemonRecord, StatBlock, TypeLabel};
use serde::Deserialize;

/// One entity as returned by `GET {base_url}/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonPayload {
    pub name: String,
    #[serde(default)]
    pub height: Option<i64>,
    #[serde(default)]
    pub weight: Option<i64>,
    #[serde(default)]
    pub sprites: Option<Sprites>,
    #[serde(default)]
    pub stats: Vec<StatEntry>,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Sprites {
    #[serde(default)]
    pub front_default: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NamedResource {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatEntry {
    pub stat: NamedResource,
    pub base_stat: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TypeSlot {
    #[serde(default)]
    pub slot: Option<u32>,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

impl PokemonPayload {
    /// Decode a response body.
    pub fn from_json(id: u32, body: &str) -> IngestResult<Self> {
        serde_json::from_str(body).map_err(|e| IngestError::Decode {
            id,
            message: e.to_string(),
        })
    }

    /// Normalize into a record for `id` in `generation`.
    ///
    /// Types are ordered by slot (entries without a slot keep their listed
    /// order, after slotted ones). Blank type names are dropped.
    pub fn into_record(self, id: u32, generation: u8) -> IngestResult<PokemonRecord> {
        let name = PokemonName::try_new(&self.name).ok_or_else(|| IngestError::Decode {
            id,
            message: "empty name".to_string(),
        })?;

        let stats = StatBlock::from_base_stats(
            self.stats
                .iter()
                .map(|entry| (entry.stat.name.as_str(), entry.base_stat)),
        );

        let mut slots = self.types;
        slots.sort_by_key(|t| t.slot.unwrap_or(u32::MAX));
        let mut types: Vec<TypeLabel> = Vec::with_capacity(slots.len());
        for slot in slots {
            match TypeLabel::try_new(&slot.kind.name) {
                Some(label) if !types.contains(&label) => types.push(label),
                Some(_) => {}
                None => log::debug!("Skipping blank type label on #{id}"),
            }
        }

        let sprite_url = self
            .sprites
            .and_then(|s| s.front_default)
            .filter(|url| !url.trim().is_empty());

        Ok(PokemonRecord {
            id,
            name,
            generation,
            height: self.height,
            weight: self.weight,
            sprite_url,
            stats,
            types,
        })
    }
}

#[cfg(test)]
#[path = "payload_test.rs"]
mod tests;
