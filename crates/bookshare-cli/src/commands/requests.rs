//! Received requests command implementation.

use std::path::Path;

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use crate::output;
use crate::storage;

#[derive(Args, Debug)]
pub struct RequestsArgs {
    /// Print each request as a JSON line
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: RequestsArgs, catalog_path: Option<&Path>) -> Result<()> {
    let path = storage::catalog_path(catalog_path)?;
    let requests = storage::load(&path)?.requests.list();

    if requests.is_empty() {
        eprintln!("{}", "No requests received.".dimmed());
        return Ok(());
    }

    for request in &requests {
        if args.json {
            output::json(request)?;
            continue;
        }

        let by = request
            .requested_by
            .as_deref()
            .map(|by| format!(" from {by}"))
            .unwrap_or_default();
        println!(
            "{}{} {}",
            request.description(),
            by,
            request.filed_at.to_rfc3339().dimmed()
        );
    }

    Ok(())
}
