//! One-shot schema setup and station seeding
//!
//! CLI counterpart of the HTTP `/init` endpoint, for operators who prefer to
//! prepare the database before first boot.

use anyhow::{Context, Result};
use clap::Parser;

use prepline_server::db::{self, StationRepo};

/// Arguments for the init command
#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Database URL
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}

/// Create tables and seed the default stations, then exit.
pub async fn run_init(args: InitArgs) -> Result<()> {
    let database_url = args
        .database_url
        .context("DATABASE_URL not set. Set via --database-url, the environment, or .env")?;

    let pool = db::connect(&database_url)
        .await
        .context("Failed to create database pool")?;

    db::migrations::run(&pool)
        .await
        .context("Failed to run schema setup")?;

    StationRepo::new(&pool)
        .seed_defaults()
        .await
        .context("Failed to seed stations")?;

    println!("Database initialized and stations seeded");
    Ok(())
}
