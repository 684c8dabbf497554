//! Read queries behind the dashboard.
//!
//! - [`catalog`]: widget options, table counts
//! - [`listing`]: the filtered, total-ordered entity listing
//! - [`highlights`]: biggest / heaviest / fastest cards
//! - [`distribution`]: entity count per type label
//!
//! Every query is first built as a [`BoundQuery`] (SQL text plus parameter
//! values) and then executed. The bound query doubles as the
//! [`crate::QueryCache`] key.

pub mod catalog;
pub mod distribution;
pub mod highlights;
pub mod listing;

pub use catalog::{
    generations, generations_query, table_counts, type_labels, type_labels_query, TableCount,
};
pub use distribution::{run_type_distribution, type_distribution, type_distribution_query, TypeCount};
pub use highlights::{
    highlight, highlight_query, highlights, run_highlight, Highlight, HighlightKind, Highlights,
};
pub use listing::{list_pokemon, listing_query, run_listing, ListingFilter, ListingRow, RowLimit};

use crate::error::{StoreError, StoreResult};
use duckdb::{Connection, Row, ToSql};

/// A single bound parameter value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Param {
    Int(i64),
    Text(String),
}

impl Param {
    fn as_sql(&self) -> &dyn ToSql {
        match self {
            Param::Int(v) => v as &dyn ToSql,
            Param::Text(s) => s as &dyn ToSql,
        }
    }
}

impl From<i64> for Param {
    fn from(v: i64) -> Self {
        Param::Int(v)
    }
}

impl From<u8> for Param {
    fn from(v: u8) -> Self {
        Param::Int(i64::from(v))
    }
}

impl From<u32> for Param {
    fn from(v: u32) -> Self {
        Param::Int(i64::from(v))
    }
}

impl From<&str> for Param {
    fn from(s: &str) -> Self {
        Param::Text(s.to_string())
    }
}

impl From<String> for Param {
    fn from(s: String) -> Self {
        Param::Text(s)
    }
}

/// SQL text together with the values bound to its `?` placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BoundQuery {
    pub sql: String,
    pub params: Vec<Param>,
}

impl BoundQuery {
    /// Start a query with no parameters bound.
    pub fn new(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            params: Vec::new(),
        }
    }

    /// Bind the next positional parameter.
    pub fn bind(mut self, param: impl Into<Param>) -> Self {
        self.params.push(param.into());
        self
    }

    /// Execute the query and map every row with `f`.
    pub fn query_map<T, F>(&self, conn: &Connection, f: F) -> StoreResult<Vec<T>>
    where
        F: FnMut(&Row<'_>) -> duckdb::Result<T>,
    {
        let mut stmt = conn
            .prepare(&self.sql)
            .map_err(|e| StoreError::QueryError(format!("prepare failed: {e}")))?;

        let rows = stmt
            .query_map(
                duckdb::params_from_iter(self.params.iter().map(Param::as_sql)),
                f,
            )
            .map_err(|e| StoreError::QueryError(format!("query failed: {e}")))?
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| StoreError::QueryError(format!("row error: {e}")))?;
        Ok(rows)
    }

    /// Execute the query expecting at most one row.
    pub fn query_opt<T, F>(&self, conn: &Connection, f: F) -> StoreResult<Option<T>>
    where
        F: FnMut(&Row<'_>) -> duckdb::Result<T>,
    {
        Ok(self.query_map(conn, f)?.into_iter().next())
    }
}

#[cfg(test)]
#[path = "query_test.rs"]
mod tests;
