//! Book requests filed against catalog listings.

use std::sync::{Arc, PoisonError, RwLock};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::types::BookRecord;

/// A request someone filed for a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookRequest {
    /// Name of the requested book.
    pub book_name: String,
    /// Who filed the request, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested_by: Option<String>,
    /// When the request was filed.
    pub filed_at: DateTime<Utc>,
}

impl BookRequest {
    /// Text shown in the owner's list of received requests.
    pub fn description(&self) -> String {
        format!("Request for {}", self.book_name)
    }
}

/// Append-only log of filed requests.
///
/// Filing a request leaves the listing itself untouched; the log is the only
/// record of who asked for what.
#[derive(Debug, Clone, Default)]
pub struct RequestLog {
    requests: Arc<RwLock<Vec<BookRequest>>>,
}

impl RequestLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore a log from previously filed requests, oldest first.
    pub fn from_requests(requests: impl IntoIterator<Item = BookRequest>) -> Self {
        Self {
            requests: Arc::new(RwLock::new(requests.into_iter().collect())),
        }
    }

    /// File a request for `book`.
    pub fn file(&self, book: &BookRecord, requested_by: Option<&str>) -> BookRequest {
        let request = BookRequest {
            book_name: book.name().to_string(),
            requested_by: requested_by.map(str::to_string),
            filed_at: Utc::now(),
        };
        info!(book = book.name(), requested_by, "Request filed");

        self.requests
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request.clone());
        request
    }

    /// Every request, oldest first.
    pub fn list(&self) -> Vec<BookRequest> {
        self.requests
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// The most recently filed request.
    pub fn latest(&self) -> Option<BookRequest> {
        self.requests
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.requests
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_records_description() {
        let log = RequestLog::new();
        let book = BookRecord::new("Dune", "Ann", "555", "Boston", "Fiction").unwrap();

        let request = log.file(&book, Some("Bob"));
        assert_eq!(request.description(), "Request for Dune");
        assert_eq!(request.requested_by.as_deref(), Some("Bob"));
        assert_eq!(log.latest(), Some(request));
    }

    #[test]
    fn filing_does_not_mark_the_listing() {
        let log = RequestLog::new();
        let book = BookRecord::new("Dune", "Ann", "555", "Boston", "Fiction").unwrap();
        log.file(&book, Some("Bob"));
        assert!(book.requested_by().is_none());
    }

    #[test]
    fn restored_log_keeps_order_and_appends() {
        let book = BookRecord::new("Dune", "Ann", "555", "Boston", "Fiction").unwrap();
        let earlier = RequestLog::new();
        earlier.file(&book, Some("Bob"));

        let log = RequestLog::from_requests(earlier.list());
        let emma = BookRecord::new("Emma", "Ann", "555", "Bath", "Romance").unwrap();
        log.file(&emma, None);

        let descriptions: Vec<_> = log.list().iter().map(BookRequest::description).collect();
        assert_eq!(descriptions, ["Request for Dune", "Request for Emma"]);
    }

    #[test]
    fn request_serde_round_trips() {
        let book = BookRecord::new("Dune", "Ann", "555", "Boston", "Fiction").unwrap();
        let request = RequestLog::new().file(&book, None);

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["bookName"], "Dune");
        assert!(json.get("requestedBy").is_none());
        let back: BookRequest = serde_json::from_value(json).unwrap();
        assert_eq!(back, request);
    }

    #[test]
    fn latest_is_last_filed() {
        let log = RequestLog::new();
        assert!(log.is_empty());
        assert!(log.latest().is_none());

        let first = BookRecord::new("Dune", "Ann", "555", "Boston", "Fiction").unwrap();
        let second = BookRecord::new("Emma", "Ann", "555", "Boston", "Fiction").unwrap();
        log.file(&first, None);
        log.file(&second, None);

        assert_eq!(log.len(), 2);
        assert_eq!(log.latest().unwrap().book_name, "Emma");
        let names: Vec<_> = log.list().into_iter().map(|r| r.book_name).collect();
        assert_eq!(names, ["Dune", "Emma"]);
    }
}
