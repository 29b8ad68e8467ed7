//! trivia CLI - serve the trivia question API and manage its database

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use trivia_core::Settings;

mod commands;
mod tracing_setup;

use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "trivia",
    author,
    version,
    about = "REST API for a trivia question bank",
    long_about = "Browse categories, page through and search questions, add or remove \
                  questions, and draw quiz rounds over HTTP, backed by PostgreSQL."
)]
struct Cli {
    /// Debug logging (RUST_LOG takes precedence)
    #[arg(long, global = true)]
    debug: bool,

    /// Settings file (default: ~/.trivia/config.toml when present)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Create the categories and questions tables if absent
    InitDb(commands::db::DbArgs),
    /// Insert the standard categories and sample questions into empty tables
    Seed(commands::db::DbArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Missing .env is fine
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&TracingConfig { debug: cli.debug }).ok();

    let settings = Settings::load(cli.config.as_deref()).context("Failed to load settings")?;

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args, settings).await?,
        Commands::InitDb(args) => commands::run_init_db(args, settings).await?,
        Commands::Seed(args) => commands::run_seed(args, settings).await?,
    }

    Ok(())
}
