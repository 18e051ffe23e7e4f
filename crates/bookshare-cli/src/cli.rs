//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::catalog::CatalogCommand;
use crate::commands::genres::GenresArgs;
use crate::commands::recommend::RecommendArgs;
use crate::commands::request::RequestArgs;
use crate::commands::requests::RequestsArgs;

/// BookShare catalog and recommendation tool.
#[derive(Parser, Debug)]
#[command(name = "bookshare")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Catalog file (defaults to catalog.json in the user data directory)
    #[arg(long, global = true, env = "BOOKSHARE_CATALOG")]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Browse, search and extend the catalog
    Catalog(CatalogCommand),

    /// Request a book from the catalog
    Request(RequestArgs),

    /// List received requests, oldest first
    Requests(RequestsArgs),

    /// List recommendation genres and their sources
    Genres(GenresArgs),

    /// Fetch recommended titles for a genre
    Recommend(RecommendArgs),
}
