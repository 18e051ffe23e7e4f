//! Genres command implementation.

use anyhow::Result;
use clap::Args;

use bookshare_core::{SourceTable, SourceUrl};

use crate::output;

#[derive(Args, Debug)]
pub struct GenresArgs {
    /// Base URL serving the per-genre title lists
    #[arg(long, env = "BOOKSHARE_SOURCE_BASE", default_value = SourceTable::DEFAULT_BASE)]
    pub source_base: SourceUrl,
}

pub fn run(args: GenresArgs) -> Result<()> {
    let table = SourceTable::with_base(args.source_base);
    for (genre, url) in table.entries()? {
        output::field(genre.label(), url.as_str());
    }
    Ok(())
}
