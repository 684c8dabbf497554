//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand};

/// dex - load Pokémon data into a local store and browse it
#[derive(Parser, Debug)]
#[command(name = "dex")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path (default: dex.yml or dex.yaml in the working directory)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Override the store path from config
    #[arg(short, long, global = true, env = "DEX_DATABASE")]
    pub database: Option<String>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch generation bands from the API and write them to the store
    Load(LoadArgs),

    /// Serve the read-only dashboard
    Serve(ServeArgs),

    /// Print the listing for one generation
    Ls(LsArgs),

    /// Show row counts for every data table
    Status,
}

/// Arguments for the load command
#[derive(Args, Debug)]
pub struct LoadArgs {
    /// Generations to load (comma-separated, default: all)
    #[arg(short, long)]
    pub generations: Option<String>,

    /// Hide the progress bar
    #[arg(long)]
    pub quiet: bool,
}

/// Arguments for the serve command
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Host to bind (default from config: 127.0.0.1)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind (default from config: 8501)
    #[arg(long)]
    pub port: Option<u16>,

    /// Don't open a browser window
    #[arg(long)]
    pub no_browser: bool,
}

/// Arguments for the ls command
#[derive(Args, Debug)]
pub struct LsArgs {
    /// Generation to list
    #[arg(short, long)]
    pub generation: u8,

    /// Case-insensitive name substring
    #[arg(short, long)]
    pub search: Option<String>,

    /// Type label, or "(any)"
    #[arg(short = 't', long = "type")]
    pub type_label: Option<String>,

    /// Maximum rows (clamped to 10-200)
    #[arg(short, long, default_value_t = 30)]
    pub limit: u32,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
