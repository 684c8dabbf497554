use crate::test_utils::{count, record};
use crate::{StoreDb, StoreError};

#[test]
fn commit_persists_all_records() {
    let db = StoreDb::open_memory().unwrap();
    let mut band = db.begin_band(1).unwrap();
    assert_eq!(band.generation(), 1);
    band.write(&record(1, "bulbasaur", 1, &["grass", "poison"]))
        .unwrap();
    band.write(&record(4, "charmander", 1, &["fire"])).unwrap();
    assert_eq!(band.written(), 2);
    assert_eq!(band.commit().unwrap(), 2);

    assert_eq!(count(&db, "SELECT COUNT(*) FROM pokemon"), 2);
    assert_eq!(count(&db, "SELECT COUNT(*) FROM stats"), 2);
    assert_eq!(count(&db, "SELECT COUNT(*) FROM pokemon_types"), 3);
}

#[test]
fn dropping_uncommitted_band_rolls_back() {
    let db = StoreDb::open_memory().unwrap();
    {
        let mut band = db.begin_band(1).unwrap();
        band.write(&record(1, "bulbasaur", 1, &["grass"])).unwrap();
        band.write(&record(2, "ivysaur", 1, &["grass"])).unwrap();
    }
    assert_eq!(count(&db, "SELECT COUNT(*) FROM pokemon"), 0);
    assert_eq!(count(&db, "SELECT COUNT(*) FROM types"), 0);
}

#[test]
fn rollback_keeps_earlier_committed_band() {
    let db = StoreDb::open_memory().unwrap();
    let mut first = db.begin_band(1).unwrap();
    first.write(&record(1, "bulbasaur", 1, &["grass"])).unwrap();
    first.commit().unwrap();

    let mut second = db.begin_band(2).unwrap();
    second
        .write(&record(152, "chikorita", 2, &["grass"]))
        .unwrap();
    second.rollback().unwrap();

    assert_eq!(count(&db, "SELECT COUNT(*) FROM pokemon"), 1);
    assert_eq!(count(&db, "SELECT MAX(generation) FROM pokemon"), 1);
}

#[test]
fn write_rejects_other_generation() {
    let db = StoreDb::open_memory().unwrap();
    let mut band = db.begin_band(1).unwrap();
    let err = band
        .write(&record(152, "chikorita", 2, &["grass"]))
        .unwrap_err();
    assert!(matches!(err, StoreError::PopulationError(_)));
    assert_eq!(band.written(), 0);
}
