//! HTTP server command
//!
//! Runs the trivia API against PostgreSQL, or against the in-process store
//! with `--in-memory`.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;
use trivia_core::Settings;
use trivia_server::db::{schema, seed};
use trivia_server::{run_server, AppState, MemoryStore, PgStore, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: 127.0.0.1:5000)
    #[arg(long, short = 'b', env = "TRIVIA_BIND")]
    pub bind: Option<SocketAddr>,

    /// Database URL (overrides config/environment)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Questions per page for /pages/{n}/questions
    #[arg(long, env = "TRIVIA_QUESTIONS_PER_PAGE")]
    pub per_page: Option<usize>,

    /// Serve the sample data from memory instead of PostgreSQL (ignores the database URL)
    #[arg(long)]
    pub in_memory: bool,

    /// Create tables and seed sample data before serving
    #[arg(long)]
    pub seed: bool,
}

impl ServeArgs {
    /// Flags win over file and environment settings.
    fn apply(&self, settings: &mut Settings) -> Result<()> {
        if let Some(bind) = self.bind {
            settings.bind_addr = bind;
        }
        if let Some(per_page) = self.per_page {
            settings.questions_per_page = per_page;
        }
        settings.validate().context("Invalid server settings")?;
        Ok(())
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs, mut settings: Settings) -> Result<()> {
    args.apply(&mut settings)?;

    let state = if args.in_memory {
        tracing::info!("Serving sample data from memory");
        AppState::new(MemoryStore::seeded(), settings.questions_per_page)
    } else {
        let pool = super::connect(args.database_url.clone(), &settings).await?;

        if args.seed {
            schema::init(&pool)
                .await
                .context("Failed to create tables")?;
            seed::seed_postgres(&pool)
                .await
                .context("Failed to seed sample data")?;
        }

        AppState::new(PgStore::new(pool), settings.questions_per_page)
    };

    tracing::info!("Starting trivia server on {}", settings.bind_addr);

    // Run server (blocks until shutdown)
    run_server(state, ServerConfig::from(&settings))
        .await
        .context("Server error")?;

    Ok(())
}
