//! HTTP server command
//!
//! Builds the connection pool from configuration and runs the gateway.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;

use recipe_server::db::{bootstrap, create_pool_with_options, DEFAULT_MAX_CONNECTIONS};
use recipe_server::{run_server, ServerConfig};

use crate::config::{port_from_env, DEFAULT_DATABASE_URL};

/// Connection settings shared by every command that opens the database
#[derive(Parser, Debug)]
pub struct DatabaseArgs {
    /// Database URL
    #[arg(long, env = "DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    pub database_url: String,

    /// Maximum number of pooled connections
    #[arg(long, env = "DATABASE_POOL_SIZE", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub pool_size: u32,
}

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: 0.0.0.0:$PORT, PORT defaults to 3000)
    #[arg(long, short = 'b')]
    pub bind: Option<SocketAddr>,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Create missing tables before serving
    #[arg(long)]
    pub init_schema: bool,

    #[command(flatten)]
    pub database: DatabaseArgs,
}

/// Arguments for the init-schema command
#[derive(Parser, Debug)]
pub struct InitSchemaArgs {
    #[command(flatten)]
    pub database: DatabaseArgs,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let bind_addr = args
        .bind
        .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], port_from_env())));

    tracing::info!(
        pool_size = args.database.pool_size,
        "Starting recipe server on {}",
        bind_addr
    );

    let pool = create_pool_with_options(&args.database.database_url, args.database.pool_size)
        .await
        .context("Failed to create database pool")?;

    if args.init_schema {
        bootstrap(&pool).await.context("Failed to create tables")?;
    }

    let config = ServerConfig {
        bind_addr,
        cors_permissive: args.cors_permissive,
    };

    // Blocks until shutdown
    run_server(pool, config).await.context("Server error")?;

    Ok(())
}

/// Create missing tables and exit
pub async fn run_init_schema(args: InitSchemaArgs) -> Result<()> {
    let pool = create_pool_with_options(&args.database.database_url, args.database.pool_size)
        .await
        .context("Failed to create database pool")?;

    bootstrap(&pool).await.context("Failed to create tables")?;
    pool.close().await;

    println!("Schema ready at {}", args.database.database_url);
    Ok(())
}
