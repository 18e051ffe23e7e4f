//! Request command implementation.

use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;

use crate::output;
use crate::storage;

#[derive(Args, Debug)]
pub struct RequestArgs {
    /// Title of the book to request (case-insensitive, exact)
    pub name: String,

    /// Who is asking for the book
    #[arg(long = "by")]
    pub requested_by: Option<String>,
}

pub fn run(args: RequestArgs, catalog_path: Option<&Path>) -> Result<()> {
    let path = storage::catalog_path(catalog_path)?;
    let library = storage::load(&path)?;

    let book = library
        .catalog
        .find_by_name(&args.name)
        .with_context(|| format!("No book named '{}' in the catalog", args.name))?;

    let request = library.requests.file(&book, args.requested_by.as_deref());
    storage::save(&path, &library)?;

    output::success("Your request has been sent!");
    println!();
    output::field("Request", &request.description());
    output::field("Owner", book.owner());
    output::field("Contact", book.contact());
    output::field("Location", book.location());
    if let Some(by) = &request.requested_by {
        output::field("Requested by", by);
    }
    output::field("Filed at", &request.filed_at.to_rfc3339());

    Ok(())
}
