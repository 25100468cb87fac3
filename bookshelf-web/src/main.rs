//! Bookshelf web server.
//!
//! Opens (or creates) the SQLite catalog, ensures the schema exists,
//! and serves the CRUD routes over HTTP.
//!
//! Usage:
//!   bookshelf --port 5000 --database books.db

use anyhow::{Context, Result};
use bookshelf_store::BookStore;
use bookshelf_web::{AppState, build_router, default_seed};
use clap::Parser;
use std::path::PathBuf;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "bookshelf")]
#[command(about = "Server-rendered CRUD catalog of books")]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "5000")]
    port: u16,

    /// Path to the SQLite database file
    #[arg(short, long, default_value = "books.db")]
    database: PathBuf,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .compact()
        .init();

    let store = BookStore::open(&args.database)
        .with_context(|| format!("failed to open database at {:?}", args.database))?;
    info!("catalog database: {:?}", args.database);

    let app = build_router(AppState::new(store, default_seed()));

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", args.port))
        .await
        .with_context(|| format!("failed to bind port {}", args.port))?;
    info!("listening on 0.0.0.0:{}", args.port);

    axum::serve(listener, app).await.context("HTTP server failed")?;
    Ok(())
}
