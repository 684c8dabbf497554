//! Error types for the store.

use thiserror::Error;

/// Store errors.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to open or create the store (S001).
    #[error("[S001] Store connection failed: {0}")]
    ConnectionError(String),

    /// Schema migration failed (S002).
    #[error("[S002] Store migration failed: {0}")]
    MigrationError(String),

    /// Read query failed (S003).
    #[error("[S003] Store query failed: {0}")]
    QueryError(String),

    /// Transaction management error (S004).
    #[error("[S004] Store transaction failed: {0}")]
    TransactionError(String),

    /// A record could not be written (S005).
    #[error("[S005] Store population failed: {0}")]
    PopulationError(String),

    /// The store exists but holds no loaded data (S006).
    #[error("[S006] Store is not loaded: {0}")]
    NotLoaded(String),

    /// DuckDB driver error with preserved source chain (S007).
    #[error("[S007] DuckDB error")]
    DuckDb(#[source] duckdb::Error),
}

/// Result type alias for [`StoreError`].
pub type StoreResult<T> = Result<T, StoreError>;

impl From<duckdb::Error> for StoreError {
    fn from(err: duckdb::Error) -> Self {
        StoreError::DuckDb(err)
    }
}
