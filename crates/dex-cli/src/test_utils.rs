//! Small sample store shared by the command tests.

use dex_core::{PokemonName, PokemonRecord, StatBlock, TypeLabel};
use dex_store::StoreDb;

struct Sample {
    id: u32,
    name: &'static str,
    generation: u8,
    height: i64,
    weight: i64,
    stats: [i64; 6],
    types: &'static [&'static str],
}

const SAMPLES: &[Sample] = &[
    Sample { id: 1, name: "bulbasaur", generation: 1, height: 7, weight: 69, stats: [45, 49, 49, 65, 65, 45], types: &["grass", "poison"] },
    Sample { id: 4, name: "charmander", generation: 1, height: 6, weight: 85, stats: [39, 52, 43, 60, 50, 65], types: &["fire"] },
    Sample { id: 6, name: "charizard", generation: 1, height: 17, weight: 905, stats: [78, 84, 78, 109, 85, 100], types: &["fire", "flying"] },
    Sample { id: 25, name: "pikachu", generation: 1, height: 4, weight: 60, stats: [35, 55, 40, 50, 50, 90], types: &["electric"] },
    Sample { id: 143, name: "snorlax", generation: 1, height: 21, weight: 4600, stats: [160, 110, 65, 65, 110, 30], types: &["normal"] },
    Sample { id: 150, name: "mewtwo", generation: 1, height: 20, weight: 1220, stats: [106, 110, 90, 154, 90, 130], types: &["psychic"] },
    Sample { id: 152, name: "chikorita", generation: 2, height: 9, weight: 64, stats: [45, 49, 65, 49, 65, 45], types: &["grass"] },
];

fn record(sample: &Sample) -> PokemonRecord {
    let [hp, attack, defense, special_attack, special_defense, speed] = sample.stats.map(Some);
    PokemonRecord {
        id: sample.id,
        name: PokemonName::try_new(sample.name).unwrap(),
        generation: sample.generation,
        height: Some(sample.height),
        weight: Some(sample.weight),
        sprite_url: Some(format!("https://img.example/{}.png", sample.id)),
        stats: StatBlock {
            hp,
            attack,
            defense,
            special_attack,
            special_defense,
            speed,
        },
        types: sample
            .types
            .iter()
            .map(|t| TypeLabel::try_new(t).unwrap())
            .collect(),
    }
}

/// Write the sample generations 1 and 2 into `store`.
pub(crate) fn populate(store: &StoreDb) {
    for generation in [1, 2] {
        let mut band = store.begin_band(generation).unwrap();
        for sample in SAMPLES.iter().filter(|s| s.generation == generation) {
            band.write(&record(sample)).unwrap();
        }
        band.commit().unwrap();
    }
}

/// In-memory store holding the samples.
pub(crate) fn sample_store() -> StoreDb {
    let store = StoreDb::open_memory().unwrap();
    populate(&store);
    store
}
