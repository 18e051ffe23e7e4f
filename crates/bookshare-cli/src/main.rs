//! bookshare - CLI for a BookShare catalog.
//!
//! This is a thin wrapper over `bookshare-core` and `bookshare-http`, playing
//! the part of the app front end: browsing and searching the catalog, adding
//! books, filing requests and fetching genre recommendations.

mod cli;
mod commands;
mod output;
mod storage;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cli::{Cli, Commands};
use commands::{catalog, genres, recommend, request, requests};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose, cli.json_logs);

    let catalog_path = cli.catalog.as_deref();
    match cli.command {
        Commands::Catalog(cmd) => catalog::handle(cmd, catalog_path),
        Commands::Request(args) => request::run(args, catalog_path),
        Commands::Requests(args) => requests::run(args, catalog_path),
        Commands::Genres(args) => genres::run(args),
        Commands::Recommend(args) => recommend::run(args).await,
    }
}

fn init_logging(verbosity: u8, json: bool) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .init();
    }
}
