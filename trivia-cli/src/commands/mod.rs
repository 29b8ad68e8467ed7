//! Command implementations for the trivia CLI

pub mod db;
pub mod serve;

pub use db::{run_init_db, run_seed};
pub use serve::run_serve;

use anyhow::{Context, Result};
use sqlx::PgPool;
use trivia_server::db::create_pool;

/// Connect using the flag value, falling back to settings.
async fn connect(database_url: Option<String>, settings: &trivia_core::Settings) -> Result<PgPool> {
    let database_url = database_url
        .or_else(|| settings.database_url.clone())
        .context(
            "DATABASE_URL not set. Set via --database-url, DATABASE_URL env, .env, or ~/.trivia/config.toml",
        )?;

    create_pool(&database_url)
        .await
        .context("Failed to create database pool")
}
