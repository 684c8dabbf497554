//! Highlight cards: the single biggest, heaviest and fastest entity of a
//! generation.
//!
//! Ties fall back to the lowest id so every card is deterministic, the
//! fastest card included. NULL measurements sort last.

use super::BoundQuery;
use crate::error::StoreResult;
use duckdb::Connection;
use serde::Serialize;

/// Which highlight card to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HighlightKind {
    /// Tallest; ties broken by weight
    Biggest,
    /// Heaviest; ties broken by height
    Heaviest,
    /// Highest speed stat
    Fastest,
}

impl HighlightKind {
    pub const ALL: [HighlightKind; 3] = [
        HighlightKind::Biggest,
        HighlightKind::Heaviest,
        HighlightKind::Fastest,
    ];

    fn order_by(self) -> &'static str {
        match self {
            HighlightKind::Biggest => {
                "p.height DESC NULLS LAST, p.weight DESC NULLS LAST, p.pokemon_id ASC"
            }
            HighlightKind::Heaviest => {
                "p.weight DESC NULLS LAST, p.height DESC NULLS LAST, p.pokemon_id ASC"
            }
            HighlightKind::Fastest => "s.speed DESC NULLS LAST, p.pokemon_id ASC",
        }
    }

    /// Card title shown in the dashboard.
    pub fn title(self) -> &'static str {
        match self {
            HighlightKind::Biggest => "Biggest (height)",
            HighlightKind::Heaviest => "Heaviest (weight)",
            HighlightKind::Fastest => "Fastest",
        }
    }
}

/// The entity shown on a highlight card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Highlight {
    pub pokemon_id: u32,
    pub name: String,
    pub height: Option<i64>,
    pub weight: Option<i64>,
    pub speed: Option<i64>,
    pub sprite_url: Option<String>,
}

/// All three cards for one generation; `None` when the generation is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Highlights {
    pub biggest: Option<Highlight>,
    pub heaviest: Option<Highlight>,
    pub fastest: Option<Highlight>,
}

/// Build the query for one highlight card.
pub fn highlight_query(kind: HighlightKind, generation: u8) -> BoundQuery {
    BoundQuery::new(format!(
        "SELECT p.pokemon_id, p.name, p.height, p.weight, s.speed, p.sprite_url
         FROM pokemon p
         JOIN stats s ON s.pokemon_id = p.pokemon_id
         WHERE p.generation = ?
         ORDER BY {}
         LIMIT 1",
        kind.order_by()
    ))
    .bind(generation)
}

/// Execute a query built by [`highlight_query`].
pub fn run_highlight(conn: &Connection, query: &BoundQuery) -> StoreResult<Option<Highlight>> {
    query.query_opt(conn, |row| {
        Ok(Highlight {
            pokemon_id: row.get(0)?,
            name: row.get(1)?,
            height: row.get(2)?,
            weight: row.get(3)?,
            speed: row.get(4)?,
            sprite_url: row.get(5)?,
        })
    })
}

/// Compute one highlight card.
pub fn highlight(
    conn: &Connection,
    kind: HighlightKind,
    generation: u8,
) -> StoreResult<Option<Highlight>> {
    run_highlight(conn, &highlight_query(kind, generation))
}

/// Compute all three highlight cards.
pub fn highlights(conn: &Connection, generation: u8) -> StoreResult<Highlights> {
    Ok(Highlights {
        biggest: highlight(conn, HighlightKind::Biggest, generation)?,
        heaviest: highlight(conn, HighlightKind::Heaviest, generation)?,
        fastest: highlight(conn, HighlightKind::Fastest, generation)?,
    })
}

#[cfg(test)]
#[path = "highlights_test.rs"]
mod tests;
