//! The primary listing: entities of one generation with their stats and
//! derived total, filtered by name and type, strongest first.

use super::BoundQuery;
use crate::error::StoreResult;
use dex_core::TypeFilter;
use duckdb::Connection;
use serde::Serialize;

/// Row cap for the listing, clamped to `MIN..=MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RowLimit(u32);

impl RowLimit {
    pub const MIN: u32 = 10;
    pub const MAX: u32 = 200;
    pub const DEFAULT: u32 = 30;

    /// Clamp `rows` into the allowed range.
    pub fn new(rows: u32) -> Self {
        Self(rows.clamp(Self::MIN, Self::MAX))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for RowLimit {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

/// Active filter state. Predicates combine with AND.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ListingFilter {
    /// Exact generation match (required)
    pub generation: u8,
    /// Case-insensitive substring of the name; blank means no filter
    pub search: Option<String>,
    pub type_filter: TypeFilter,
    pub limit: RowLimit,
}

impl ListingFilter {
    /// Filter on a generation only, with the default row limit.
    pub fn new(generation: u8) -> Self {
        Self {
            generation,
            search: None,
            type_filter: TypeFilter::Any,
            limit: RowLimit::default(),
        }
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_type(mut self, type_filter: TypeFilter) -> Self {
        self.type_filter = type_filter;
        self
    }

    pub fn with_limit(mut self, limit: RowLimit) -> Self {
        self.limit = limit;
        self
    }

    /// Trimmed, lowercased search term, or `None` when blank.
    pub fn search_term(&self) -> Option<String> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase)
    }
}

/// One listing row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingRow {
    pub pokemon_id: u32,
    pub name: String,
    pub generation: u8,
    pub height: Option<i64>,
    pub weight: Option<i64>,
    pub sprite_url: Option<String>,
    pub hp: Option<i64>,
    pub attack: Option<i64>,
    pub defense: Option<i64>,
    pub special_attack: Option<i64>,
    pub special_defense: Option<i64>,
    pub speed: Option<i64>,
    /// Sum of the six stats; NULL when any stat is NULL
    pub total: Option<i64>,
}

const TYPE_EXISTS: &str = "EXISTS (
        SELECT 1
        FROM pokemon_types pt
        JOIN types t ON t.type_id = pt.type_id
        WHERE pt.pokemon_id = p.pokemon_id AND t.type_name = ?
    )";

/// Build the listing query for `filter`.
pub fn listing_query(filter: &ListingFilter) -> BoundQuery {
    let mut predicates = vec!["p.generation = ?"];
    let mut query = BoundQuery::new(String::new()).bind(filter.generation);

    if let Some(term) = filter.search_term() {
        predicates.push("contains(lower(p.name), ?)");
        query = query.bind(term);
    }

    if let Some(label) = filter.type_filter.label() {
        predicates.push(TYPE_EXISTS);
        query = query.bind(label.as_str());
    }

    query.sql = format!(
        "SELECT
            p.pokemon_id, p.name, p.generation, p.height, p.weight, p.sprite_url,
            s.hp, s.attack, s.defense, s.special_attack, s.special_defense, s.speed,
            (s.hp + s.attack + s.defense + s.special_attack + s.special_defense + s.speed) AS total
         FROM pokemon p
         JOIN stats s ON s.pokemon_id = p.pokemon_id
         WHERE {}
         ORDER BY total DESC NULLS LAST, p.pokemon_id ASC
         LIMIT ?",
        predicates.join("\n           AND ")
    );
    query.bind(i64::from(filter.limit.get()))
}

/// Execute a query built by [`listing_query`].
pub fn run_listing(conn: &Connection, query: &BoundQuery) -> StoreResult<Vec<ListingRow>> {
    query.query_map(conn, |row| {
        Ok(ListingRow {
            pokemon_id: row.get(0)?,
            name: row.get(1)?,
            generation: row.get(2)?,
            height: row.get(3)?,
            weight: row.get(4)?,
            sprite_url: row.get(5)?,
            hp: row.get(6)?,
            attack: row.get(7)?,
            defense: row.get(8)?,
            special_attack: row.get(9)?,
            special_defense: row.get(10)?,
            speed: row.get(11)?,
            total: row.get(12)?,
        })
    })
}

/// Build and execute the listing for `filter`.
pub fn list_pokemon(conn: &Connection, filter: &ListingFilter) -> StoreResult<Vec<ListingRow>> {
    run_listing(conn, &listing_query(filter))
}

#[cfg(test)]
#[path = "listing_test.rs"]
mod tests;
