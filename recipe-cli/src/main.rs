//! recipectl - runs the recipe HTTP gateway
//!
//! Loads `.env`, initializes tracing, opens the connection pool and
//! serves the Recipes / Ingredients / Recipe_Ingredients API.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod config;
mod tracing_setup;

use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "recipectl",
    author,
    version,
    about = "HTTP API over recipes, ingredients and their associations"
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
    /// Create the tables in the configured database if they are missing
    InitSchema(commands::serve::InitSchemaArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Must run before parsing so env-backed arguments see .env values
    config::load_dotenv();
    let cli = Cli::parse();

    tracing_setup::init_tracing(&TracingConfig { debug: cli.debug }).ok();

    match cli.command {
        Commands::Serve(args) => commands::serve::run_serve(args).await,
        Commands::InitSchema(args) => commands::serve::run_init_schema(args).await,
    }
}
