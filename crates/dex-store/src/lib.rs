//! Relational store for the Pokédex.
//!
//! Provides a DuckDB-backed store holding four tables (`pokemon`, `stats`,
//! `types`, `pokemon_types`), the write path used by the loader, the
//! parameterized read queries behind the dashboard, and a read-through
//! cache keyed by bound query.

pub mod band;
pub mod cache;
pub mod connection;
pub mod ddl;
pub mod error;
pub mod migration;
pub mod populate;
pub mod query;

#[cfg(test)]
pub(crate) mod test_utils;

pub use band::BandTransaction;
pub use cache::QueryCache;
pub use connection::StoreDb;
pub use error::{StoreError, StoreResult};
pub use query::{BoundQuery, Param};
