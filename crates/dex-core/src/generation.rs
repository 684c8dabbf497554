//! Fixed generation band table.
//!
//! Each generation covers a contiguous, inclusive range of national dex ids.
//! The table is hardcoded: the loader walks it to decide which ids to fetch
//! and the generation stored on every row comes from here.

use crate::error::{CoreError, CoreResult};
use serde::Serialize;
use std::ops::RangeInclusive;

/// A contiguous id range grouping entities by release era.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GenerationBand {
    /// Generation number (1-based)
    pub generation: u8,
    /// First id in the band (inclusive)
    pub first_id: u32,
    /// Last id in the band (inclusive)
    pub last_id: u32,
}

/// All known bands, ordered by generation.
///
/// Generation 9 tracks the upstream dex and may grow over time.
pub const GENERATION_BANDS: &[GenerationBand] = &[
    GenerationBand::new(1, 1, 151),
    GenerationBand::new(2, 152, 251),
    GenerationBand::new(3, 252, 386),
    GenerationBand::new(4, 387, 493),
    GenerationBand::new(5, 494, 649),
    GenerationBand::new(6, 650, 721),
    GenerationBand::new(7, 722, 809),
    GenerationBand::new(8, 810, 905),
    GenerationBand::new(9, 906, 1025),
];

impl GenerationBand {
    const fn new(generation: u8, first_id: u32, last_id: u32) -> Self {
        Self {
            generation,
            first_id,
            last_id,
        }
    }

    /// Look up the band for a generation number.
    pub fn for_generation(generation: u8) -> CoreResult<&'static GenerationBand> {
        GENERATION_BANDS
            .iter()
            .find(|b| b.generation == generation)
            .ok_or_else(|| CoreError::UnknownGeneration {
                generation,
                known: known_generations(),
            })
    }

    /// Find the band an id belongs to, if any.
    pub fn containing(id: u32) -> Option<&'static GenerationBand> {
        GENERATION_BANDS.iter().find(|b| b.contains(id))
    }

    /// Ids in the band, ascending.
    pub fn ids(&self) -> RangeInclusive<u32> {
        self.first_id..=self.last_id
    }

    /// Whether `id` falls inside the band.
    pub fn contains(&self, id: u32) -> bool {
        self.ids().contains(&id)
    }

    /// Number of ids in the band.
    pub fn len(&self) -> usize {
        (self.last_id - self.first_id + 1) as usize
    }

    /// Bands always hold at least one id.
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Every known generation number, ascending.
pub fn all_generations() -> Vec<u8> {
    GENERATION_BANDS.iter().map(|b| b.generation).collect()
}

/// Parse a comma-separated generation list such as `"1,3"`.
///
/// `None` selects every known generation. Each entry must name a band in
/// [`GENERATION_BANDS`]; duplicates are dropped and the result is sorted so
/// bands always load in ascending order.
pub fn parse_generation_list(arg: Option<&str>) -> CoreResult<Vec<u8>> {
    let Some(arg) = arg else {
        return Ok(all_generations());
    };

    let mut generations = Vec::new();
    for token in arg.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        let generation: u8 = token.parse().map_err(|_| CoreError::InvalidGeneration {
            input: token.to_string(),
        })?;
        GenerationBand::for_generation(generation)?;
        generations.push(generation);
    }
    generations.sort_unstable();
    generations.dedup();
    Ok(generations)
}

fn known_generations() -> String {
    all_generations()
        .iter()
        .map(u8::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
#[path = "generation_test.rs"]
mod tests;
