//! Title list parsing.

use crate::types::{BookRecord, Genre};

/// Turn a newline-delimited title list into placeholder listings.
///
/// Lines may end in `\n`, `\r\n` or `\r`. Empty and whitespace-only lines are
/// skipped; every other line becomes one listing named by the line as-is.
pub fn parse_recommendations(text: &str, genre: Genre) -> Vec<BookRecord> {
    text.split(['\n', '\r'])
        .filter(|line| !line.trim().is_empty())
        .map(|line| BookRecord::placeholder(line, genre))
        .collect()
}
