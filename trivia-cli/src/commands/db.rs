//! Database maintenance commands: `init-db` and `seed`

use anyhow::{Context, Result};
use clap::Parser;
use trivia_core::Settings;
use trivia_server::db::{schema, seed};

/// Arguments shared by the database commands
#[derive(Parser, Debug)]
pub struct DbArgs {
    /// Database URL (overrides config/environment)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}

/// Create the tables if they do not exist
pub async fn run_init_db(args: DbArgs, settings: Settings) -> Result<()> {
    let pool = super::connect(args.database_url, &settings).await?;
    schema::init(&pool)
        .await
        .context("Failed to create tables")?;

    println!("Tables ready");
    Ok(())
}

/// Create the tables if needed, then seed empty ones
pub async fn run_seed(args: DbArgs, settings: Settings) -> Result<()> {
    let pool = super::connect(args.database_url, &settings).await?;
    schema::init(&pool)
        .await
        .context("Failed to create tables")?;

    let (categories, questions) = seed::seed_postgres(&pool)
        .await
        .context("Failed to seed sample data")?;

    if categories == 0 && questions == 0 {
        println!("Tables already populated; nothing seeded");
    } else {
        println!("Seeded {} categories and {} questions", categories, questions);
    }
    Ok(())
}
