//! Status command implementation
//!
//! Opens the store read-only; never creates or migrates it, so it can run
//! next to a live `dex serve`.

use anyhow::{Context, Result};
use dex_store::migration::current_version;
use dex_store::query::table_counts;
use dex_store::StoreDb;
use std::path::Path;

use crate::cli::GlobalArgs;
use crate::commands::common::{load_config, print_table, LOAD_FIRST_HINT};

/// Execute the status command
pub(crate) fn execute(global: &GlobalArgs) -> Result<()> {
    let config = load_config(global)?;
    let path = Path::new(&config.database.path);
    if !path.exists() {
        println!("No store at {}; {LOAD_FIRST_HINT}.", path.display());
        return Ok(());
    }

    let store = StoreDb::open_read_only_unchecked(path)
        .with_context(|| format!("Failed to open store at {}", path.display()))?;

    let missing = store.missing_tables()?;
    if !missing.is_empty() {
        println!(
            "{} has no Pokédex schema (missing: {}); {LOAD_FIRST_HINT}.",
            path.display(),
            missing.join(", ")
        );
        return Ok(());
    }

    let version = if store.has_table("schema_version")? {
        format!("schema v{}", current_version(store.conn())?)
    } else {
        "schema version unknown".to_string()
    };
    println!("Store: {} ({version})\n", path.display());

    let rows: Vec<Vec<String>> = table_counts(store.conn())?
        .iter()
        .map(|c| vec![c.table.clone(), c.rows.to_string()])
        .collect();
    print_table(&["TABLE", "ROWS"], &rows);

    if store.ensure_loaded().is_err() {
        println!("\nNo Pokémon loaded yet; {LOAD_FIRST_HINT}.");
    }
    Ok(())
}
