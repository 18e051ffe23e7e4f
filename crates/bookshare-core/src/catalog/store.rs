//! Shared, append-only catalog store.

use std::sync::{Arc, PoisonError, RwLock};

use tracing::debug;

use crate::types::BookRecord;

use super::filter::{filter_catalog, first_match_index, fold_case, match_positions};

/// The in-memory catalog of listings, in display order.
///
/// Cloning a `Catalog` yields another handle to the same listings. Records
/// are only ever appended; nothing is removed or reordered.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    books: Arc<RwLock<Vec<BookRecord>>>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog holding `books` in the given order.
    pub fn from_records(books: impl IntoIterator<Item = BookRecord>) -> Self {
        Self {
            books: Arc::new(RwLock::new(books.into_iter().collect())),
        }
    }

    /// Snapshot of every listing, in display order.
    pub fn list(&self) -> Vec<BookRecord> {
        self.books
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Append a listing to the end of the catalog.
    pub fn append(&self, book: BookRecord) {
        debug!(name = book.name(), "Appending book to catalog");
        self.books
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(book);
    }

    /// Add a book submitted by the add-book form.
    ///
    /// Field validation happens when the [`BookRecord`] is built, so this is
    /// the same as [`append`](Self::append).
    pub fn add_book(&self, book: BookRecord) {
        self.append(book);
    }

    /// Number of listings.
    pub fn len(&self) -> usize {
        self.books.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Returns true if the catalog has no listings.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Listings matching `query`; see [`filter_catalog`].
    pub fn filter(&self, query: &str) -> Vec<BookRecord> {
        let books = self.books.read().unwrap_or_else(PoisonError::into_inner);
        filter_catalog(&books, query)
    }

    /// Index of the first listing matching `query`; see [`first_match_index`].
    pub fn first_match_index(&self, query: &str) -> Option<usize> {
        let books = self.books.read().unwrap_or_else(PoisonError::into_inner);
        first_match_index(&books, query)
    }

    /// Matching listings paired with their catalog positions.
    pub fn search(&self, query: &str) -> Vec<(usize, BookRecord)> {
        let books = self.books.read().unwrap_or_else(PoisonError::into_inner);
        match_positions(&books, query)
            .into_iter()
            .map(|index| (index, books[index].clone()))
            .collect()
    }

    /// First listing whose name equals `name`, ignoring case.
    pub fn find_by_name(&self, name: &str) -> Option<BookRecord> {
        let name = fold_case(name);
        self.books
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|book| fold_case(book.name()) == name)
            .cloned()
    }
}
