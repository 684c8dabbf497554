//! Shared utilities for CLI commands

use anyhow::{Context, Result};
use dex_core::Config;
use dex_store::StoreDb;
use std::path::Path;

use crate::cli::GlobalArgs;

/// Operator hint appended to every "store not ready" error.
pub(crate) const LOAD_FIRST_HINT: &str = "run `dex load` first to populate the store";

/// Resolve configuration: `--config`, else dex.yml discovery, then flag overrides.
pub(crate) fn load_config(global: &GlobalArgs) -> Result<Config> {
    let mut config = match &global.config {
        Some(path) => Config::load(Path::new(path))
            .with_context(|| format!("Failed to load config from {path}"))?,
        None => Config::discover(Path::new(".")).context("Failed to load dex.yml")?,
    };
    if let Some(database) = &global.database {
        config.database.path = database.clone();
    }
    Ok(config)
}

/// Open the configured store read-only, failing with the load hint when it
/// has no data yet.
pub(crate) fn open_loaded_store(config: &Config) -> Result<StoreDb> {
    let path = Path::new(&config.database.path);
    StoreDb::open_read_only(path)
        .with_context(|| format!("Store at {} is not ready; {LOAD_FIRST_HINT}", path.display()))
}

/// Render an optional value for table output.
pub(crate) fn cell<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

/// Calculate column widths for table output
pub(crate) fn calculate_column_widths(headers: &[&str], rows: &[Vec<String>]) -> Vec<usize> {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(cell.chars().count());
        }
    }
    widths
}

/// Format a left-aligned table: header, dashed separator, rows.
/// Columns are separated by two spaces.
pub(crate) fn format_table(headers: &[&str], rows: &[Vec<String>]) -> Vec<String> {
    let widths = calculate_column_widths(headers, rows);
    let line = |cells: Vec<String>| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(c, &w)| format!("{c:<w$}"))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(line(headers.iter().map(|h| h.to_string()).collect()));
    lines.push(line(widths.iter().map(|&w| "-".repeat(w)).collect()));
    for row in rows {
        lines.push(line(row.clone()));
    }
    lines
}

/// Print a formatted table to stdout.
pub(crate) fn print_table(headers: &[&str], rows: &[Vec<String>]) {
    for line in format_table(headers, rows) {
        println!("{line}");
    }
}

#[cfg(test)]
#[path = "common_test.rs"]
mod tests;
