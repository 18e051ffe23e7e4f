//! Recommend command implementation.

use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::Args;
use colored::Colorize;
use futures_util::future::join_all;

use bookshare_core::{BookRecord, Genre, Recommender, SourceTable, SourceUrl};
use bookshare_http::HttpTextSource;

use crate::output;

#[derive(Args, Debug)]
pub struct RecommendArgs {
    /// Genre label (Fiction, Non-Fiction, Science, History, Fantasy)
    #[arg(required_unless_present = "all", conflicts_with = "all")]
    pub genre: Option<String>,

    /// Fetch every genre concurrently
    #[arg(long)]
    pub all: bool,

    /// Report failures instead of printing an empty list
    #[arg(long)]
    pub strict: bool,

    /// Print each title as a JSON line
    #[arg(long)]
    pub json: bool,

    /// Base URL serving the per-genre title lists
    #[arg(long, env = "BOOKSHARE_SOURCE_BASE", default_value = SourceTable::DEFAULT_BASE)]
    pub source_base: SourceUrl,

    /// Request timeout in seconds
    #[arg(long, env = "BOOKSHARE_TIMEOUT_SECS", default_value_t = 10)]
    pub timeout: u64,
}

pub async fn run(args: RecommendArgs) -> Result<()> {
    let source = HttpTextSource::with_timeout(Duration::from_secs(args.timeout));
    let table = SourceTable::with_base(args.source_base.clone());
    let recommender = Recommender::with_table(source, table);

    let results = if args.all {
        let fetches = Genre::ALL.map(|genre| fetch(&recommender, genre.label(), args.strict));
        join_all(fetches)
            .await
            .into_iter()
            .zip(Genre::ALL.map(|genre| genre.label().to_string()))
            .map(|(books, label)| books.map(|books| (label, books)))
            .collect::<Result<Vec<_>>>()?
    } else {
        let label = args.genre.clone().unwrap_or_default();
        let books = fetch(&recommender, &label, args.strict).await?;
        vec![(label, books)]
    };

    for (label, books) in &results {
        print_recommendations(label, books, args.json)?;
    }

    Ok(())
}

async fn fetch(
    recommender: &Recommender<HttpTextSource>,
    label: &str,
    strict: bool,
) -> Result<Vec<BookRecord>> {
    if !strict {
        return Ok(recommender.fetch_recommendations(label).await);
    }

    let genre = Genre::new(label).context("Unsupported genre")?;
    match recommender.try_fetch_recommendations(genre).await {
        Ok(books) => Ok(books),
        Err(e) => {
            output::error(&format!("{} ({})", e, e.kind()));
            bail!("Failed to fetch {} recommendations", genre)
        }
    }
}

fn print_recommendations(label: &str, books: &[BookRecord], json: bool) -> Result<()> {
    if json {
        for book in books {
            output::json(book)?;
        }
        return Ok(());
    }

    println!("{}", format!("Recommended Books for {}", label).bold());
    if books.is_empty() {
        println!("{}", "No recommendations.".dimmed());
    }
    for book in books {
        println!("  {}", book.name());
    }
    println!();

    Ok(())
}
