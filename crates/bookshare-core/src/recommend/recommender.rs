//! Genre recommendation fetching.

use std::sync::Arc;

use tracing::{debug, error, instrument};

use crate::Result;
use crate::types::{BookRecord, Genre};

use super::parse::parse_recommendations;
use super::source::{SourceTable, TextSource};

/// Fetches recommended titles for a genre.
///
/// Every call performs exactly one retrieval: there is no caching, no retry
/// and no sharing between concurrent calls for the same genre.
#[derive(Debug)]
pub struct Recommender<S> {
    source: Arc<S>,
    table: SourceTable,
}

impl<S> Clone for Recommender<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            table: self.table.clone(),
        }
    }
}

impl<S: TextSource> Recommender<S> {
    /// Create a recommender using the published title lists.
    pub fn new(source: S) -> Self {
        Self::with_table(source, SourceTable::default())
    }

    /// Create a recommender resolving genres through `table`.
    pub fn with_table(source: S, table: SourceTable) -> Self {
        Self {
            source: Arc::new(source),
            table,
        }
    }

    /// Returns the genre table in use.
    pub fn table(&self) -> &SourceTable {
        &self.table
    }

    /// Fetch placeholder listings for the genre labelled `genre`.
    ///
    /// Never fails: an unsupported genre, a retrieval error or an undecodable
    /// body all yield an empty list. The error is logged with its kind, but
    /// callers cannot tell a failure from an empty title list. Use
    /// [`try_fetch_recommendations`](Self::try_fetch_recommendations) to see
    /// the error.
    #[instrument(skip(self))]
    pub async fn fetch_recommendations(&self, genre: &str) -> Vec<BookRecord> {
        let result = match Genre::new(genre) {
            Ok(genre) => self.try_fetch_recommendations(genre).await,
            Err(e) => Err(e),
        };

        match result {
            Ok(books) => books,
            Err(e) => {
                error!(kind = e.kind(), error = %e, "Error fetching recommendations");
                Vec::new()
            }
        }
    }

    /// Fetch placeholder listings for `genre`, surfacing any failure.
    #[instrument(skip_all, fields(genre = %genre))]
    pub async fn try_fetch_recommendations(&self, genre: Genre) -> Result<Vec<BookRecord>> {
        let url = self.table.url_for(genre)?;
        debug!(%url, "Accessing recommendation source");

        let content = self.source.fetch_text(&url).await?;
        let books = parse_recommendations(&content, genre);
        debug!(count = books.len(), "Recommendations parsed");

        Ok(books)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use async_trait::async_trait;
    use url::Url;

    use super::*;
    use crate::error::{Error, ParseError, RetrievalError};

    /// Canned reply for a fake source.
    #[derive(Clone)]
    pub(crate) enum Reply {
        Text(&'static str),
        Delayed(Duration, &'static str),
        ConnectionRefused,
        NotFound,
        BadEncoding,
    }

    /// In-memory [`TextSource`] keyed by URL file name.
    #[derive(Default)]
    pub(crate) struct FakeSource {
        replies: HashMap<String, Reply>,
        pub(crate) calls: AtomicUsize,
    }

    impl FakeSource {
        pub(crate) fn with(mut self, file: &str, reply: Reply) -> Self {
            self.replies.insert(file.to_string(), reply);
            self
        }
    }

    #[async_trait]
    impl TextSource for FakeSource {
        async fn fetch_text(&self, url: &Url) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let file = url.path_segments().and_then(|s| s.last()).unwrap_or("");
            match self.replies.get(file) {
                Some(Reply::Text(text)) => Ok(text.to_string()),
                Some(Reply::Delayed(delay, text)) => {
                    tokio::time::sleep(*delay).await;
                    Ok(text.to_string())
                }
                Some(Reply::ConnectionRefused) => Err(RetrievalError::Connection {
                    message: "connection refused".to_string(),
                }
                .into()),
                Some(Reply::BadEncoding) => Err(ParseError::Encoding {
                    message: "invalid utf-8 sequence".to_string(),
                }
                .into()),
                Some(Reply::NotFound) | None => Err(RetrievalError::Status {
                    status: 404,
                    url: url.to_string(),
                }
                .into()),
            }
        }
    }

    #[tokio::test]
    async fn fetch_parses_placeholder_records() {
        let source = FakeSource::default()
            .with("fiction.txt", Reply::Text("Book A\n\nBook B\n  \nBook C"));
        let recommender = Recommender::new(source);

        let books = recommender.fetch_recommendations("Fiction").await;
        let names: Vec<_> = books.iter().map(BookRecord::name).collect();
        assert_eq!(names, ["Book A", "Book B", "Book C"]);
        for book in &books {
            assert_eq!(book.owner(), "Unknown");
            assert_eq!(book.contact(), "Unknown");
            assert_eq!(book.location(), "Unknown");
            assert_eq!(book.genre(), "Fiction");
            assert!(book.image_ref().is_placeholder());
        }
    }

    #[tokio::test]
    async fn unsupported_genre_yields_empty_without_fetching() {
        let recommender = Recommender::new(FakeSource::default());
        assert!(recommender.fetch_recommendations("Klingon").await.is_empty());
        assert_eq!(recommender.source.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn connection_failure_yields_empty() {
        let source = FakeSource::default().with("history.txt", Reply::ConnectionRefused);
        let recommender = Recommender::new(source);
        assert!(recommender.fetch_recommendations("History").await.is_empty());
    }

    #[tokio::test]
    async fn try_fetch_surfaces_error_kind() {
        let source = FakeSource::default()
            .with("history.txt", Reply::ConnectionRefused)
            .with("science.txt", Reply::NotFound)
            .with("fantasy.txt", Reply::BadEncoding);
        let recommender = Recommender::new(source);

        let err = recommender
            .try_fetch_recommendations(Genre::History)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Retrieval(RetrievalError::Connection { .. })
        ));

        let err = recommender
            .try_fetch_recommendations(Genre::Science)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Retrieval(RetrievalError::Status { status: 404, .. })
        ));

        let err = recommender
            .try_fetch_recommendations(Genre::Fantasy)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), "parse_failure");
    }

    #[tokio::test]
    async fn each_call_fetches_again() {
        let source = FakeSource::default().with("science.txt", Reply::Text("Cosmos"));
        let recommender = Recommender::new(source);

        recommender.fetch_recommendations("Science").await;
        recommender.fetch_recommendations("Science").await;
        assert_eq!(recommender.source.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn resolves_through_custom_table() {
        let source = FakeSource::default().with("non-fiction.txt", Reply::Text("Sapiens\n"));
        let table = SourceTable::with_base(
            crate::types::SourceUrl::new("https://mirror.example.com/lists/").unwrap(),
        );
        let recommender = Recommender::with_table(source, table);

        let books = recommender.fetch_recommendations("Non-Fiction").await;
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].genre(), "Non-Fiction");
    }
}
