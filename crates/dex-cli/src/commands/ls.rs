//! Ls command implementation

use anyhow::{Context, Result};
use dex_core::TypeFilter;
use dex_store::query::{list_pokemon, ListingFilter, ListingRow, RowLimit};

use crate::cli::{GlobalArgs, LsArgs};
use crate::commands::common::{cell, load_config, open_loaded_store, print_table};

/// Execute the ls command
pub(crate) fn execute(args: &LsArgs, global: &GlobalArgs) -> Result<()> {
    let config = load_config(global)?;
    let store = open_loaded_store(&config)?;

    let filter = build_filter(args);
    let rows = list_pokemon(store.conn(), &filter)
        .with_context(|| format!("Failed to list generation {}", args.generation))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if rows.is_empty() {
        println!("No Pokémon match these filters.");
        return Ok(());
    }

    let (headers, table) = listing_table(&rows);
    print_table(&headers, &table);
    println!("\n{} shown (limit {})", rows.len(), filter.limit.get());
    Ok(())
}

fn build_filter(args: &LsArgs) -> ListingFilter {
    let mut filter = ListingFilter::new(args.generation)
        .with_type(TypeFilter::parse(args.type_label.as_deref()))
        .with_limit(RowLimit::new(args.limit));
    if let Some(search) = &args.search {
        filter = filter.with_search(search.clone());
    }
    filter
}

fn listing_table(rows: &[ListingRow]) -> (Vec<&'static str>, Vec<Vec<String>>) {
    let headers = vec![
        "ID", "NAME", "HT", "WT", "HP", "ATK", "DEF", "SPA", "SPD", "SPE", "TOTAL",
    ];
    let table = rows
        .iter()
        .map(|r| {
            vec![
                r.pokemon_id.to_string(),
                r.name.clone(),
                cell(r.height),
                cell(r.weight),
                cell(r.hp),
                cell(r.attack),
                cell(r.defense),
                cell(r.special_attack),
                cell(r.special_defense),
                cell(r.speed),
                cell(r.total),
            ]
        })
        .collect();
    (headers, table)
}

#[cfg(test)]
#[path = "ls_test.rs"]
mod tests;
