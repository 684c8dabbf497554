//! Remote source trait definition

use crate::error::IngestResult;
use crate::payload::PokemonPayload;
use async_trait::async_trait;

/// A read-only source of entity payloads, addressed by id.
///
/// Implementations must be Send + Sync for async operation. A source never
/// retries: any failure is returned to the loader, which aborts the band.
#[async_trait]
pub trait PokemonSource: Send + Sync {
    /// Fetch the payload for one id
    async fn fetch(&self, id: u32) -> IngestResult<PokemonPayload>;

    /// Human-readable description for logging
    fn describe(&self) -> String;
}
