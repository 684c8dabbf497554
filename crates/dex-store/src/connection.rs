//! Store connection wrapper.
//!
//! [`StoreDb`] owns a DuckDB [`Connection`] and provides helpers for opening,
//! migrating, probing, and transacting against the store.

use crate::band::BandTransaction;
use crate::ddl::DATA_TABLES;
use crate::error::{StoreError, StoreResult};
use crate::migration::run_migrations;
use duckdb::{AccessMode, Connection};
use std::path::Path;

/// Wrapper around a DuckDB connection to the Pokédex store.
///
/// Single-threaded. The dashboard shares one instance behind a `Mutex`.
#[derive(Debug)]
pub struct StoreDb {
    conn: Connection,
    read_only: bool,
}

impl StoreDb {
    /// Open (or create) the store at `path` and run pending migrations.
    ///
    /// Missing parent directories are created.
    pub fn open(path: &Path) -> StoreResult<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                StoreError::ConnectionError(format!("{e}: {}", parent.display()))
            })?;
        }
        let conn = Connection::open(path)
            .map_err(|e| StoreError::ConnectionError(format!("{e}: {}", path.display())))?;
        run_migrations(&conn)?;
        Ok(Self {
            conn,
            read_only: false,
        })
    }

    /// Create an in-memory store with all migrations applied.
    ///
    /// Useful for unit tests that don't need persistence.
    pub fn open_memory() -> StoreResult<Self> {
        let conn =
            Connection::open_in_memory().map_err(|e| StoreError::ConnectionError(e.to_string()))?;
        run_migrations(&conn)?;
        Ok(Self {
            conn,
            read_only: false,
        })
    }

    /// Open an existing store read-only and verify it holds loaded data.
    ///
    /// Never creates the file and never runs migrations. Fails with
    /// [`StoreError::NotLoaded`] when the file is missing, the schema is
    /// absent, or no entities have been loaded yet.
    pub fn open_read_only(path: &Path) -> StoreResult<Self> {
        let db = Self::open_read_only_unchecked(path)?;
        db.ensure_loaded()?;
        Ok(db)
    }

    /// Open an existing file read-only without probing its contents.
    ///
    /// The file may hold any schema, or none. Only a missing file is an
    /// error ([`StoreError::NotLoaded`]).
    pub fn open_read_only_unchecked(path: &Path) -> StoreResult<Self> {
        if !path.exists() {
            return Err(StoreError::NotLoaded(format!(
                "no store file at {}",
                path.display()
            )));
        }
        let config = duckdb::Config::default()
            .access_mode(AccessMode::ReadOnly)
            .map_err(|e| StoreError::ConnectionError(e.to_string()))?;
        let conn = Connection::open_with_flags(path, config)
            .map_err(|e| StoreError::ConnectionError(format!("{e}: {}", path.display())))?;
        Ok(Self {
            conn,
            read_only: true,
        })
    }

    /// Borrow the underlying DuckDB connection.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Whether this handle was opened read-only.
    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Whether `table` exists in the `main` schema.
    pub fn has_table(&self, table: &str) -> StoreResult<bool> {
        let present: i64 = self
            .conn
            .query_row(
                "SELECT COUNT(*) FROM information_schema.tables \
                 WHERE table_schema = 'main' AND table_name = ?",
                duckdb::params![table],
                |row| row.get(0),
            )
            .map_err(|e| StoreError::QueryError(format!("checking {table}: {e}")))?;
        Ok(present > 0)
    }

    /// Data tables absent from this store, in schema order.
    pub fn missing_tables(&self) -> StoreResult<Vec<&'static str>> {
        let mut missing = Vec::new();
        for table in DATA_TABLES {
            if !self.has_table(table)? {
                missing.push(table);
            }
        }
        Ok(missing)
    }

    /// Verify the data tables exist and at least one entity is loaded.
    pub fn ensure_loaded(&self) -> StoreResult<()> {
        if let Some(table) = self.missing_tables()?.first() {
            return Err(StoreError::NotLoaded(format!("table '{table}' is missing")));
        }

        let loaded: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM pokemon", [], |row| row.get(0))
            .map_err(|e| StoreError::QueryError(format!("checking pokemon: {e}")))?;
        if loaded == 0 {
            return Err(StoreError::NotLoaded("no Pokémon rows yet".to_string()));
        }
        Ok(())
    }

    /// Open the named write transaction for one generation band.
    ///
    /// See [`BandTransaction`] for commit and rollback behaviour.
    pub fn begin_band(&self, generation: u8) -> StoreResult<BandTransaction<'_>> {
        if self.read_only {
            return Err(StoreError::TransactionError(
                "store was opened read-only".to_string(),
            ));
        }
        BandTransaction::begin(&self.conn, generation)
    }
}

#[cfg(test)]
#[path = "connection_test.rs"]
mod tests;
