//! dex-core - Core library for the Pokédex
//!
//! This crate provides the shared domain types used by the loader, the store
//! and the dashboard: the fixed generation band table, the normalized
//! [`PokemonRecord`] produced by ingestion, strongly-typed names, and
//! configuration parsing for `dex.yml`.

pub mod config;
pub mod error;
pub mod generation;
mod newtype_string;
pub mod record;
pub mod type_label;

pub use config::{ApiConfig, Config, DatabaseConfig, ServeConfig};
pub use error::{CoreError, CoreResult};
pub use generation::{GenerationBand, GENERATION_BANDS};
pub use record::{PokemonName, PokemonRecord, StatBlock, STAT_KEYS};
pub use type_label::{TypeFilter, TypeLabel, ANY_TYPE};
