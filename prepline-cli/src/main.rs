//! prepline CLI - run and administer the kitchen prep board
//!
//! Two subcommands:
//! - `serve`: run the HTTP API until shutdown
//! - `init`: create the schema and seed the default stations, then exit

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "prepline",
    author,
    version,
    about = "Kitchen prep-task board: stations, dated tasks, mise en place"
)]
struct Cli {
    /// Enable debug logging (RUST_LOG still takes precedence)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Create the schema and seed the default stations, then exit
    Init(commands::init::InitArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is fine; flags and the environment still apply.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug }).ok();

    match cli.command {
        Commands::Serve(args) => commands::serve::run_serve(args).await,
        Commands::Init(args) => commands::init::run_init(args).await,
    }
}
