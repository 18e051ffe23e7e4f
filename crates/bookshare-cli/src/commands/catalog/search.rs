//! Search catalog command implementation.

use std::path::Path;

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use crate::output;
use crate::storage;

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Text to look for in titles and locations (case-insensitive)
    pub query: String,

    /// Print each match as a JSON line
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: SearchArgs, catalog_path: Option<&Path>) -> Result<()> {
    let path = storage::catalog_path(catalog_path)?;
    let catalog = storage::load(&path)?.catalog;

    let matches = catalog.search(&args.query);
    if matches.is_empty() {
        eprintln!("{}", "No books found.".dimmed());
        return Ok(());
    }

    // Rows carry their catalog position, the same numbering `catalog list` uses
    for (index, book) in &matches {
        if args.json {
            output::json(book)?;
        } else {
            output::book(*index, book);
        }
    }

    if !args.json
        && let Some(first) = catalog.first_match_index(&args.query)
    {
        eprintln!();
        eprintln!("{}: {}", "First match in catalog".dimmed(), first);
    }

    Ok(())
}
