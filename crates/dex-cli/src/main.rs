//! Pokédex CLI - load PokeAPI data into DuckDB and browse it

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
#[cfg(test)]
mod test_utils;

use cli::Cli;
use commands::{load, ls, serve, status};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.global.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match &cli.command {
        cli::Commands::Load(args) => load::execute(args, &cli.global).await,
        cli::Commands::Serve(args) => serve::execute(args, &cli.global).await,
        cli::Commands::Ls(args) => ls::execute(args, &cli.global),
        cli::Commands::Status => status::execute(&cli.global),
    }
}
