//! Add book command implementation.

use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;

use bookshare_core::BookRecord;

use crate::output;
use crate::storage;

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Book title
    #[arg(long)]
    pub name: String,

    /// Owner's name
    #[arg(long)]
    pub owner: String,

    /// How to reach the owner
    #[arg(long)]
    pub contact: String,

    /// Where the book is
    #[arg(long)]
    pub location: String,

    /// Genre label (free text)
    #[arg(long)]
    pub genre: String,
}

pub fn run(args: AddArgs, catalog_path: Option<&Path>) -> Result<()> {
    let book = BookRecord::new(
        args.name,
        args.owner,
        args.contact,
        args.location,
        args.genre,
    )
    .context("Invalid book")?;

    let path = storage::catalog_path(catalog_path)?;
    let library = storage::load(&path)?;

    let name = book.name().to_string();
    library.catalog.add_book(book);
    storage::save(&path, &library)?;

    output::success(&format!("Added '{}'", name));
    output::field("Books", &library.catalog.len().to_string());
    output::field("Catalog", &path.display().to_string());

    Ok(())
}
