//! Error types for dex-ingest

use dex_core::CoreError;
use dex_store::StoreError;
use thiserror::Error;

/// Ingestion errors. Any of them aborts the band being loaded.
#[derive(Error, Debug)]
pub enum IngestError {
    /// Transport failure or timeout (I001)
    #[error("[I001] Fetch of #{id} failed ({url}): {source}")]
    Fetch {
        id: u32,
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Non-success HTTP status (I002)
    #[error("[I002] Fetch of #{id} returned HTTP {status} ({url})")]
    Status { id: u32, url: String, status: u16 },

    /// Body could not be decoded into a record (I003)
    #[error("[I003] Invalid payload for #{id}: {message}")]
    Decode { id: u32, message: String },

    /// HTTP client could not be constructed (I004)
    #[error("[I004] HTTP client setup failed: {0}")]
    Client(String),

    /// Store write failed (I005)
    #[error("[I005] {0}")]
    Store(#[from] StoreError),

    /// Band lookup failed (I006)
    #[error("[I006] {0}")]
    Core(#[from] CoreError),
}

/// Result type alias for IngestError
pub type IngestResult<T> = Result<T, IngestError>;
