//! List catalog command implementation.

use std::path::Path;

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use crate::output;
use crate::storage;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Print each book as a JSON line
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ListArgs, catalog_path: Option<&Path>) -> Result<()> {
    let path = storage::catalog_path(catalog_path)?;
    let catalog = storage::load(&path)?.catalog;

    let books = catalog.list();
    if books.is_empty() {
        eprintln!("{}", "Catalog is empty.".dimmed());
        return Ok(());
    }

    for (index, book) in books.iter().enumerate() {
        if args.json {
            output::json(book)?;
        } else {
            output::book(index, book);
        }
    }

    Ok(())
}
