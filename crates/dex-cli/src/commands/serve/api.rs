//! JSON API behind the dashboard.
//!
//! Every query result is cached by its bound query until `POST
//! /api/cache/clear`. The single store connection sits behind a mutex and
//! queries run synchronously while holding it.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use dex_core::{GenerationBand, TypeFilter, ANY_TYPE};
use dex_store::query::{
    generations_query, highlight_query, listing_query, run_highlight, run_listing,
    run_type_distribution, type_distribution_query, type_labels_query, HighlightKind,
    ListingFilter, RowLimit,
};
use dex_store::{BoundQuery, QueryCache, StoreDb, StoreError, StoreResult};
use duckdb::Connection;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex, PoisonError};

/// Shared state for all handlers.
pub(crate) struct AppState {
    store: Mutex<StoreDb>,
    cache: QueryCache<Value>,
}

/// Error body: `{"error": "..."}`.
#[derive(Debug)]
pub(crate) enum ApiError {
    BadRequest(String),
    Store(StoreError),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Store(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::Store(err) => {
                log::error!("Dashboard query failed: {err}");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Query string of `/api/highlights` and `/api/type-distribution`.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct GenerationParams {
    pub generation: Option<String>,
}

/// Query string of `/api/pokemon`.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ListingParams {
    pub generation: Option<String>,
    pub search: Option<String>,
    #[serde(rename = "type")]
    pub type_label: Option<String>,
    pub limit: Option<String>,
}

impl ListingParams {
    fn to_filter(&self) -> Result<ListingFilter, ApiError> {
        let mut filter = ListingFilter::new(parse_generation(self.generation.as_deref())?)
            .with_type(TypeFilter::parse(self.type_label.as_deref()))
            .with_limit(parse_limit(self.limit.as_deref())?);
        if let Some(search) = &self.search {
            filter = filter.with_search(search.clone());
        }
        Ok(filter)
    }
}

fn parse_generation(raw: Option<&str>) -> Result<u8, ApiError> {
    let raw = raw
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ApiError::BadRequest("generation is required".to_string()))?;
    let generation: u8 = raw
        .parse()
        .map_err(|_| ApiError::BadRequest(format!("invalid generation '{raw}'")))?;
    GenerationBand::for_generation(generation)
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;
    Ok(generation)
}

/// Out-of-range limits are clamped; only non-numbers are rejected.
fn parse_limit(raw: Option<&str>) -> Result<RowLimit, ApiError> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(RowLimit::default()),
        Some(raw) => {
            let rows: i64 = raw
                .parse()
                .map_err(|_| ApiError::BadRequest(format!("invalid limit '{raw}'")))?;
            let rows = rows.clamp(i64::from(RowLimit::MIN), i64::from(RowLimit::MAX));
            Ok(RowLimit::new(u32::try_from(rows).unwrap_or(RowLimit::MAX)))
        }
    }
}

impl AppState {
    pub(crate) fn new(store: StoreDb) -> Self {
        Self {
            store: Mutex::new(store),
            cache: QueryCache::new(),
        }
    }

    /// Serve `query` from the cache, running it against the store on a miss.
    fn cached<T, F>(&self, query: BoundQuery, run: F) -> Result<Value, ApiError>
    where
        T: Serialize,
        F: FnOnce(&Connection, &BoundQuery) -> StoreResult<T>,
    {
        self.cache.get_or_try_insert_with(&query, || {
            let store = self.store.lock().unwrap_or_else(PoisonError::into_inner);
            let result = run(store.conn(), &query)?;
            serde_json::to_value(result).map_err(|e| {
                ApiError::Store(StoreError::QueryError(format!("serialize result: {e}")))
            })
        })
    }

    pub(crate) fn generations(&self) -> Result<Value, ApiError> {
        self.cached(generations_query(), |conn, q| {
            q.query_map(conn, |row| row.get::<_, u8>(0))
        })
    }

    /// `(any)` followed by every catalog label.
    pub(crate) fn types(&self) -> Result<Value, ApiError> {
        self.cached(type_labels_query(), |conn, q| {
            let mut labels = vec![ANY_TYPE.to_string()];
            labels.extend(q.query_map(conn, |row| row.get::<_, String>(0))?);
            Ok(labels)
        })
    }

    pub(crate) fn listing(&self, params: &ListingParams) -> Result<Value, ApiError> {
        let filter = params.to_filter()?;
        self.cached(listing_query(&filter), run_listing)
    }

    pub(crate) fn highlights(&self, params: &GenerationParams) -> Result<Value, ApiError> {
        let generation = parse_generation(params.generation.as_deref())?;
        let mut cards = serde_json::Map::new();
        for kind in HighlightKind::ALL {
            let card = self.cached(highlight_query(kind, generation), run_highlight)?;
            cards.insert(kind_key(kind).to_string(), card);
        }
        Ok(Value::Object(cards))
    }

    pub(crate) fn type_distribution(&self, params: &GenerationParams) -> Result<Value, ApiError> {
        let generation = parse_generation(params.generation.as_deref())?;
        self.cached(type_distribution_query(generation), run_type_distribution)
    }

    pub(crate) fn clear_cache(&self) -> usize {
        self.cache.clear()
    }
}

fn kind_key(kind: HighlightKind) -> &'static str {
    match kind {
        HighlightKind::Biggest => "biggest",
        HighlightKind::Heaviest => "heaviest",
        HighlightKind::Fastest => "fastest",
    }
}

type SharedState = State<Arc<AppState>>;

/// GET /api/generations
pub(crate) async fn get_generations(State(state): SharedState) -> Result<Json<Value>, ApiError> {
    state.generations().map(Json)
}

/// GET /api/types
pub(crate) async fn get_types(State(state): SharedState) -> Result<Json<Value>, ApiError> {
    state.types().map(Json)
}

/// GET /api/pokemon?generation=&search=&type=&limit=
pub(crate) async fn get_pokemon(
    State(state): SharedState,
    Query(params): Query<ListingParams>,
) -> Result<Json<Value>, ApiError> {
    state.listing(&params).map(Json)
}

/// GET /api/highlights?generation=
pub(crate) async fn get_highlights(
    State(state): SharedState,
    Query(params): Query<GenerationParams>,
) -> Result<Json<Value>, ApiError> {
    state.highlights(&params).map(Json)
}

/// GET /api/type-distribution?generation=
pub(crate) async fn get_type_distribution(
    State(state): SharedState,
    Query(params): Query<GenerationParams>,
) -> Result<Json<Value>, ApiError> {
    state.type_distribution(&params).map(Json)
}

/// POST /api/cache/clear
pub(crate) async fn clear_cache(State(state): SharedState) -> Json<Value> {
    Json(json!({ "cleared": state.clear_cache() }))
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
