//! dex-ingest - Ingestion loader for the Pokédex
//!
//! Fetches entities one id at a time from a [`PokemonSource`], decodes them
//! into [`dex_core::PokemonRecord`]s, and writes each generation band to the
//! store inside a single [`dex_store::BandTransaction`].

pub mod error;
pub mod http;
pub mod loader;
pub mod payload;
pub mod source;

#[cfg(test)]
pub(crate) mod fixture;

pub use error::{IngestError, IngestResult};
pub use http::HttpSource;
pub use loader::{BandReport, LoadObserver, Loader};
pub use payload::PokemonPayload;
pub use source::PokemonSource;
