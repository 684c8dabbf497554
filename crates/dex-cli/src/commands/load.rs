//! Load command implementation

use anyhow::{Context, Result};
use dex_core::generation::parse_generation_list;
use dex_core::{GenerationBand, PokemonRecord};
use dex_ingest::{BandReport, HttpSource, LoadObserver, Loader};
use dex_store::StoreDb;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::{Duration, Instant};

use crate::cli::{GlobalArgs, LoadArgs};
use crate::commands::common::load_config;

/// Drives one progress bar per band and prints a line per committed band.
struct ProgressObserver {
    show_bar: bool,
    bar: Option<ProgressBar>,
    /// Band in flight and when it started; cleared once it commits
    current: Option<(u8, Instant)>,
}

impl ProgressObserver {
    fn new(show_bar: bool) -> Self {
        Self {
            show_bar,
            bar: None,
            current: None,
        }
    }

    /// Generation that started but never finished, if any.
    fn unfinished(&self) -> Option<u8> {
        self.current.map(|(generation, _)| generation)
    }
}

impl LoadObserver for ProgressObserver {
    fn band_started(&mut self, band: &GenerationBand) {
        self.current = Some((band.generation, Instant::now()));
        if !self.show_bar {
            return;
        }
        let pb = ProgressBar::new(band.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        pb.set_message(format!("generation {}", band.generation));
        self.bar = Some(pb);
    }

    fn record_written(&mut self, record: &PokemonRecord) {
        if let Some(pb) = &self.bar {
            pb.set_message(format!("#{} {}", record.id, record.name));
            pb.inc(1);
        }
    }

    fn band_finished(&mut self, report: &BandReport) {
        if let Some(pb) = self.bar.take() {
            pb.finish_and_clear();
        }
        let elapsed = self
            .current
            .take()
            .map(|(_, started)| started.elapsed())
            .unwrap_or_default();
        println!("{}", summary_line(report, elapsed));
    }
}

impl Drop for ProgressObserver {
    fn drop(&mut self) {
        if let Some(pb) = self.bar.take() {
            pb.abandon();
        }
    }
}

fn summary_line(report: &BandReport, elapsed: Duration) -> String {
    format!(
        "  ✓ generation {}: {} Pokémon, {} types ({:.1}s)",
        report.generation,
        report.written,
        report.type_labels.len(),
        elapsed.as_secs_f64()
    )
}

/// Execute the load command
pub(crate) async fn execute(args: &LoadArgs, global: &GlobalArgs) -> Result<()> {
    let config = load_config(global)?;
    let generations = parse_generation_list(args.generations.as_deref())?;

    let db_path = Path::new(&config.database.path);
    let store = StoreDb::open(db_path)
        .with_context(|| format!("Failed to open store at {}", db_path.display()))?;
    let source = HttpSource::new(&config.api)?;

    println!(
        "Loading generation(s) {} into {}",
        join(&generations),
        db_path.display()
    );

    let mut observer = ProgressObserver::new(!args.quiet);
    let result = Loader::new(&store, &source)
        .load_generations(&generations, &mut observer)
        .await;
    if let Err(err) = result {
        let context = match observer.unfinished() {
            Some(generation) => format!(
                "Generation {generation} was rolled back; re-run `dex load --generations {generation}`"
            ),
            None => "Load failed".to_string(),
        };
        return Err(anyhow::Error::new(err).context(context));
    }
    Ok(())
}

fn join(generations: &[u8]) -> String {
    generations
        .iter()
        .map(u8::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
#[path = "load_test.rs"]
mod tests;
