use super::*;
use crate::test_utils::sample_store;

fn state() -> AppState {
    AppState::new(sample_store())
}

fn listing(generation: &str) -> ListingParams {
    ListingParams {
        generation: Some(generation.to_string()),
        ..ListingParams::default()
    }
}

fn names(rows: &Value) -> Vec<&str> {
    rows.as_array()
        .unwrap()
        .iter()
        .map(|row| row["name"].as_str().unwrap())
        .collect()
}

fn generation(value: &str) -> GenerationParams {
    GenerationParams {
        generation: Some(value.to_string()),
    }
}

#[test]
fn test_generations_ascending() {
    assert_eq!(state().generations().unwrap(), json!([1, 2]));
}

#[test]
fn test_types_start_with_any() {
    let types = state().types().unwrap();
    assert_eq!(
        types,
        json!(["(any)", "electric", "fire", "flying", "grass", "normal", "poison", "psychic"])
    );
}

#[test]
fn test_listing_ordered_by_total() {
    let rows = state().listing(&listing("1")).unwrap();
    assert_eq!(
        names(&rows),
        vec!["mewtwo", "snorlax", "charizard", "pikachu", "bulbasaur", "charmander"]
    );
    assert_eq!(rows[0]["total"], json!(680));
}

#[test]
fn test_listing_search_and_type() {
    let state = state();

    let mut params = listing("1");
    params.search = Some("  CHAR ".to_string());
    assert_eq!(names(&state.listing(&params).unwrap()), vec!["charizard", "charmander"]);

    params.type_label = Some("flying".to_string());
    assert_eq!(names(&state.listing(&params).unwrap()), vec!["charizard"]);

    params.type_label = Some("(any)".to_string());
    params.search = Some("   ".to_string());
    assert_eq!(state.listing(&params).unwrap().as_array().unwrap().len(), 6);
}

#[test]
fn test_listing_rejects_bad_params() {
    let state = state();
    assert!(matches!(
        state.listing(&ListingParams::default()),
        Err(ApiError::BadRequest(_))
    ));
    assert!(matches!(
        state.listing(&listing("one")),
        Err(ApiError::BadRequest(_))
    ));
    assert!(matches!(
        state.listing(&listing("42")),
        Err(ApiError::BadRequest(_))
    ));

    let mut params = listing("1");
    params.limit = Some("lots".to_string());
    assert!(matches!(state.listing(&params), Err(ApiError::BadRequest(_))));
}

#[test]
fn test_limit_is_clamped() {
    assert_eq!(parse_limit(None).unwrap().get(), 30);
    assert_eq!(parse_limit(Some("1")).unwrap().get(), 10);
    assert_eq!(parse_limit(Some("-5")).unwrap().get(), 10);
    assert_eq!(parse_limit(Some("5000")).unwrap().get(), 200);
    assert_eq!(parse_limit(Some(" 55 ")).unwrap().get(), 55);
}

#[test]
fn test_highlights() {
    let cards = state().highlights(&generation("1")).unwrap();
    assert_eq!(cards["biggest"]["name"], json!("snorlax"));
    assert_eq!(cards["heaviest"]["name"], json!("snorlax"));
    assert_eq!(cards["fastest"]["name"], json!("mewtwo"));
}

#[test]
fn test_highlights_empty_generation_are_null() {
    let cards = state().highlights(&generation("3")).unwrap();
    assert_eq!(
        cards,
        json!({ "biggest": null, "heaviest": null, "fastest": null })
    );
}

#[test]
fn test_type_distribution() {
    let bars = state().type_distribution(&generation("1")).unwrap();
    assert_eq!(bars[0], json!({ "type_name": "fire", "count": 2 }));
    assert_eq!(bars.as_array().unwrap().len(), 7);
    assert_eq!(bars[1]["type_name"], json!("electric"));
}

#[test]
fn test_repeated_queries_hit_cache() {
    let state = state();
    state.listing(&listing("1")).unwrap();
    state.listing(&listing("1")).unwrap();
    state.listing(&listing("2")).unwrap();

    let stats = state.cache.stats();
    assert_eq!(stats.hits, 1);
    assert_eq!(stats.misses, 2);
    assert_eq!(stats.entries, 2);

    assert_eq!(state.clear_cache(), 2);
    assert!(state.cache.is_empty());
}

#[test]
fn test_failed_query_not_cached() {
    let state = state();
    assert!(state.listing(&listing("x")).is_err());
    assert!(state.cache.is_empty());
}
