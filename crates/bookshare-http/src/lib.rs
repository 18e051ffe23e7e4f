//! bookshare-http - HTTP-backed recommendation source.
//!
//! ```no_run
//! use bookshare_core::Recommender;
//! use bookshare_http::HttpTextSource;
//!
//! # async fn run() {
//! let recommender = Recommender::new(HttpTextSource::new());
//! let books = recommender.fetch_recommendations("Fantasy").await;
//! # }
//! ```

mod client;

pub use client::{DEFAULT_TIMEOUT, HttpTextSource};
