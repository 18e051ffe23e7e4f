//! Catalog subcommand implementations.

mod add;
mod list;
mod search;

use std::path::Path;

use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Args, Debug)]
pub struct CatalogCommand {
    #[command(subcommand)]
    pub command: CatalogSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum CatalogSubcommand {
    /// List every book in display order
    List(list::ListArgs),

    /// Search books by title or location
    Search(search::SearchArgs),

    /// Add a book to the catalog
    Add(add::AddArgs),
}

pub fn handle(cmd: CatalogCommand, catalog_path: Option<&Path>) -> Result<()> {
    match cmd.command {
        CatalogSubcommand::List(args) => list::run(args, catalog_path),
        CatalogSubcommand::Search(args) => search::run(args, catalog_path),
        CatalogSubcommand::Add(args) => add::run(args, catalog_path),
    }
}
