//! The per-band write transaction.
//!
//! Loading is all-or-nothing per generation band: every entity of the band
//! is written inside one [`BandTransaction`] and committed once at the end.
//! A transaction dropped without [`BandTransaction::commit`] rolls back, so
//! a fetch failure halfway through a band leaves the store as it was before
//! the band started.

use crate::error::{StoreError, StoreResult};
use crate::populate::write_record;
use dex_core::PokemonRecord;
use duckdb::Connection;

/// Open write transaction for a single generation band.
pub struct BandTransaction<'a> {
    conn: &'a Connection,
    generation: u8,
    written: usize,
    finished: bool,
}

impl<'a> BandTransaction<'a> {
    pub(crate) fn begin(conn: &'a Connection, generation: u8) -> StoreResult<Self> {
        conn.execute_batch("BEGIN TRANSACTION")
            .map_err(|e| StoreError::TransactionError(format!("BEGIN failed: {e}")))?;
        log::debug!("Opened band transaction for generation {generation}");
        Ok(Self {
            conn,
            generation,
            written: 0,
            finished: false,
        })
    }

    /// Generation this transaction writes.
    pub fn generation(&self) -> u8 {
        self.generation
    }

    /// Number of records written so far.
    pub fn written(&self) -> usize {
        self.written
    }

    /// Upsert one record (entity row, stat block, type associations).
    ///
    /// The record must belong to this transaction's generation.
    pub fn write(&mut self, record: &PokemonRecord) -> StoreResult<()> {
        if record.generation != self.generation {
            return Err(StoreError::PopulationError(format!(
                "record {} is generation {}, transaction is generation {}",
                record.id, record.generation, self.generation
            )));
        }
        write_record(self.conn, record)?;
        self.written += 1;
        Ok(())
    }

    /// Commit every write made in this band. Returns the number of records.
    pub fn commit(mut self) -> StoreResult<usize> {
        self.finished = true;
        if let Err(commit_err) = self.conn.execute_batch("COMMIT") {
            let _ = self.conn.execute_batch("ROLLBACK");
            return Err(StoreError::TransactionError(format!(
                "COMMIT failed: {commit_err}"
            )));
        }
        log::info!(
            "Committed generation {} ({} records)",
            self.generation,
            self.written
        );
        Ok(self.written)
    }

    /// Discard every write made in this band.
    pub fn rollback(mut self) -> StoreResult<()> {
        self.finished = true;
        self.conn
            .execute_batch("ROLLBACK")
            .map_err(|e| StoreError::TransactionError(format!("ROLLBACK failed: {e}")))
    }
}

impl Drop for BandTransaction<'_> {
    fn drop(&mut self) {
        if self.finished {
            return;
        }
        log::warn!(
            "Rolling back generation {} after {} records",
            self.generation,
            self.written
        );
        if let Err(e) = self.conn.execute_batch("ROLLBACK") {
            log::warn!("Rollback of generation {} failed: {e}", self.generation);
        }
    }
}

#[cfg(test)]
#[path = "band_test.rs"]
mod tests;
