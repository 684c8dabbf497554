//! In-memory source used by the loader tests.

use crate::error::{IngestError, IngestResult};
use crate::payload::{NamedResource, PokemonPayload, Sprites, StatEntry, TypeSlot};
use crate::source::PokemonSource;
use async_trait::async_trait;
use dex_core::{GenerationBand, STAT_KEYS};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

/// Ids given the "fire" type in the synthetic band 1.
pub(crate) const FIRE_IDS: [u32; 12] = [4, 5, 6, 37, 38, 58, 59, 77, 78, 126, 136, 146];

pub(crate) struct FixtureSource {
    payloads: HashMap<u32, PokemonPayload>,
    failing: HashSet<u32>,
    fetched: Mutex<Vec<u32>>,
}

impl FixtureSource {
    pub(crate) fn new() -> Self {
        Self {
            payloads: HashMap::new(),
            failing: HashSet::new(),
            fetched: Mutex::new(Vec::new()),
        }
    }

    /// Synthetic payloads for every id in `band`.
    pub(crate) fn for_band(band: &GenerationBand) -> Self {
        let mut source = Self::new();
        for id in band.ids() {
            source.insert(id, synthetic(id));
        }
        source
    }

    pub(crate) fn insert(&mut self, id: u32, payload: PokemonPayload) {
        self.payloads.insert(id, payload);
    }

    /// Make `fetch(id)` fail as if the remote returned HTTP 503.
    pub(crate) fn fail_on(mut self, id: u32) -> Self {
        self.failing.insert(id);
        self
    }

    pub(crate) fn fetched(&self) -> Vec<u32> {
        self.fetched.lock().unwrap().clone()
    }
}

#[async_trait]
impl PokemonSource for FixtureSource {
    async fn fetch(&self, id: u32) -> IngestResult<PokemonPayload> {
        self.fetched.lock().unwrap().push(id);
        let url = format!("fixture://{id}");
        if self.failing.contains(&id) {
            return Err(IngestError::Status {
                id,
                url,
                status: 503,
            });
        }
        self.payloads
            .get(&id)
            .cloned()
            .ok_or(IngestError::Status {
                id,
                url,
                status: 404,
            })
    }

    fn describe(&self) -> String {
        "fixture".to_string()
    }
}

/// Deterministic payload for `id`. Id 25 is pikachu.
pub(crate) fn synthetic(id: u32) -> PokemonPayload {
    let name = if id == 25 {
        "pikachu".to_string()
    } else {
        format!("mon-{id:04}")
    };
    let primary = if id == 25 {
        "electric"
    } else if FIRE_IDS.contains(&id) {
        "fire"
    } else {
        "normal"
    };
    let mut types = vec![slot(1, primary)];
    if id % 5 == 0 {
        types.push(slot(2, "flying"));
    }

    let base = i64::from(id % 40) + 20;
    PokemonPayload {
        name,
        height: Some(i64::from(id % 17) + 1),
        weight: Some(i64::from(id % 23) * 10 + 5),
        sprites: Some(Sprites {
            front_default: Some(format!("https://img.example/{id}.png")),
        }),
        stats: STAT_KEYS
            .iter()
            .enumerate()
            .map(|(i, key)| StatEntry {
                stat: NamedResource {
                    name: (*key).to_string(),
                },
                base_stat: base + i as i64,
            })
            .collect(),
        types,
    }
}

fn slot(n: u32, name: &str) -> TypeSlot {
    TypeSlot {
        slot: Some(n),
        kind: NamedResource {
            name: name.to_string(),
        },
    }
}
