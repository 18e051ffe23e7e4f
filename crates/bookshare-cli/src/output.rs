//! Output formatting helpers.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use bookshare_core::BookRecord;

/// Print a success message.
pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

/// Print an error message.
pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// Print a labeled field.
pub fn field(label: &str, value: &str) {
    println!("{}: {}", label.dimmed(), value);
}

/// Print one listing on a single line.
pub fn book(index: usize, book: &BookRecord) {
    println!(
        "{:>3}. {} {} {}",
        index,
        book.name().bold(),
        format!("({})", book.genre()).dimmed(),
        format!("{}, {} {}", book.location(), book.owner(), book.contact()).dimmed(),
    );
}

/// Print a value as compact JSON.
pub fn json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string(value)?;
    println!("{}", json);
    Ok(())
}
