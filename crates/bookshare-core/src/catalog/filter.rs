//! Case-insensitive catalog search.

use crate::types::BookRecord;

/// Returns the records whose name or location contains `query`, ignoring case.
///
/// Relative order is preserved and an empty query matches every record.
pub fn filter_catalog(records: &[BookRecord], query: &str) -> Vec<BookRecord> {
    let needle = fold_case(query);
    records
        .iter()
        .filter(|book| matches_folded(book, &needle))
        .cloned()
        .collect()
}

/// Returns the index of the first record whose name or location contains
/// `query`, ignoring case.
///
/// Front ends use this to scroll a list to the first hit while the user types.
pub fn first_match_index(records: &[BookRecord], query: &str) -> Option<usize> {
    let needle = fold_case(query);
    records
        .iter()
        .position(|book| matches_folded(book, &needle))
}

/// Returns the catalog positions of every record matching `query`, in order.
///
/// The first position, if any, equals [`first_match_index`].
pub fn match_positions(records: &[BookRecord], query: &str) -> Vec<usize> {
    let needle = fold_case(query);
    records
        .iter()
        .enumerate()
        .filter(|(_, book)| matches_folded(book, &needle))
        .map(|(index, _)| index)
        .collect()
}

/// Case-fold `text` one character at a time.
///
/// Every character folds to exactly one character, independent of its
/// neighbours, so a literal substring of a name always survives folding.
/// Final sigma and dotted capital I fold like their plain forms.
pub(crate) fn fold_case(text: &str) -> String {
    text.chars().map(fold_char).collect()
}

fn fold_char(c: char) -> char {
    let mut upper = c.to_uppercase();
    let upper = match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    };
    upper.to_lowercase().next().unwrap_or(upper)
}

/// `needle` must already be folded with [`fold_case`].
fn matches_folded(book: &BookRecord, needle: &str) -> bool {
    fold_case(book.name()).contains(needle) || fold_case(book.location()).contains(needle)
}
