//! Band loader: fetch every id of a generation band and write it in one
//! transaction.

use crate::error::IngestResult;
use crate::source::PokemonSource;
use dex_core::{GenerationBand, PokemonRecord, TypeLabel};
use dex_store::StoreDb;
use std::collections::BTreeSet;

/// Summary of one committed band.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BandReport {
    pub generation: u8,
    /// Records written (one per id in the band)
    pub written: usize,
    /// Distinct type labels seen across the band
    pub type_labels: BTreeSet<TypeLabel>,
}

/// Receives progress notifications while a band loads.
///
/// Every method defaults to a no-op.
pub trait LoadObserver {
    fn band_started(&mut self, _band: &GenerationBand) {}
    fn record_written(&mut self, _record: &PokemonRecord) {}
    fn band_finished(&mut self, _report: &BandReport) {}
}

impl LoadObserver for () {}

/// Drives a [`PokemonSource`] into a [`StoreDb`].
pub struct Loader<'a, S: PokemonSource + ?Sized> {
    store: &'a StoreDb,
    source: &'a S,
}

impl<'a, S: PokemonSource + ?Sized> Loader<'a, S> {
    pub fn new(store: &'a StoreDb, source: &'a S) -> Self {
        Self { store, source }
    }

    /// Load one band, strictly in ascending id order.
    ///
    /// The first failure aborts the band: remaining ids are not fetched and
    /// the band's transaction is rolled back when it goes out of scope.
    pub async fn load_generation(
        &self,
        generation: u8,
        observer: &mut dyn LoadObserver,
    ) -> IngestResult<BandReport> {
        let band = GenerationBand::for_generation(generation)?;
        log::info!(
            "Loading generation {} (ids {}-{}) from {}",
            band.generation,
            band.first_id,
            band.last_id,
            self.source.describe()
        );
        observer.band_started(band);

        let mut tx = self.store.begin_band(band.generation)?;
        let mut type_labels = BTreeSet::new();
        for id in band.ids() {
            let record = self
                .source
                .fetch(id)
                .await?
                .into_record(id, band.generation)?;
            tx.write(&record)?;
            log::debug!("Wrote #{id} {}", record.name);
            type_labels.extend(record.types.iter().cloned());
            observer.record_written(&record);
        }
        let written = tx.commit()?;

        let report = BandReport {
            generation: band.generation,
            written,
            type_labels,
        };
        observer.band_finished(&report);
        Ok(report)
    }

    /// Load several bands in the given order.
    ///
    /// Stops at the first failing band. Bands committed before it stay
    /// committed.
    pub async fn load_generations(
        &self,
        generations: &[u8],
        observer: &mut dyn LoadObserver,
    ) -> IngestResult<Vec<BandReport>> {
        let mut reports = Vec::with_capacity(generations.len());
        for &generation in generations {
            reports.push(self.load_generation(generation, observer).await?);
        }
        Ok(reports)
    }
}

#[cfg(test)]
#[path = "loader_test.rs"]
mod tests;
