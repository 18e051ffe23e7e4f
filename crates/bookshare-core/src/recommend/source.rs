//! Where title lists come from.

use async_trait::async_trait;
use url::Url;

use crate::Result;
use crate::types::{Genre, SourceUrl};

/// Retrieves the text body at a URL.
///
/// Implementations map transport problems to
/// [`RetrievalError`](crate::error::RetrievalError) and undecodable bodies to
/// [`ParseError`](crate::error::ParseError).
#[async_trait]
pub trait TextSource: Send + Sync {
    /// Fetch the body at `url` as text.
    async fn fetch_text(&self, url: &Url) -> Result<String>;
}

/// Fixed mapping from genre to the URL of its title list.
///
/// Every genre resolves to `<base><slug>.txt`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceTable {
    base: SourceUrl,
}

impl SourceTable {
    /// Host and path serving the published title lists.
    pub const DEFAULT_BASE: &'static str =
        "https://raw.githubusercontent.com/Ganesh-Nagarampalli/bookrecoms/main/";

    /// A table rooted at `base` instead of the published lists.
    pub fn with_base(base: SourceUrl) -> Self {
        Self { base }
    }

    /// Returns the base URL.
    pub fn base(&self) -> &SourceUrl {
        &self.base
    }

    /// Resolve the title list URL for `genre`.
    pub fn url_for(&self, genre: Genre) -> Result<Url> {
        self.base.file_url(&format!("{}.txt", genre.slug()))
    }

    /// Every genre with its URL, in display order.
    pub fn entries(&self) -> Result<Vec<(Genre, Url)>> {
        Genre::ALL
            .into_iter()
            .map(|genre| Ok((genre, self.url_for(genre)?)))
            .collect()
    }
}

impl Default for SourceTable {
    fn default() -> Self {
        let base = SourceUrl::new(Self::DEFAULT_BASE).expect("default source base is valid");
        Self { base }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_urls() {
        let table = SourceTable::default();
        let expected = [
            (Genre::Fiction, "fiction.txt"),
            (Genre::NonFiction, "non-fiction.txt"),
            (Genre::Science, "science.txt"),
            (Genre::History, "history.txt"),
            (Genre::Fantasy, "fantasy.txt"),
        ];
        for (genre, file) in expected {
            assert_eq!(
                table.url_for(genre).unwrap().as_str(),
                format!(
                    "https://raw.githubusercontent.com/Ganesh-Nagarampalli/bookrecoms/main/{file}"
                )
            );
        }
    }

    #[test]
    fn entries_cover_every_genre_once() {
        let entries = SourceTable::default().entries().unwrap();
        let genres: Vec<_> = entries.iter().map(|(genre, _)| *genre).collect();
        assert_eq!(genres, Genre::ALL);
    }

    #[test]
    fn custom_base() {
        let table = SourceTable::with_base(SourceUrl::new("http://localhost:9000/lists").unwrap());
        assert_eq!(
            table.url_for(Genre::History).unwrap().as_str(),
            "http://localhost:9000/lists/history.txt"
        );
    }
}
