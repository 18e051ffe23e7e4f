//! bookshare-core - Catalog and recommendation core for BookShare.

pub mod catalog;
pub mod error;
pub mod recommend;
pub mod types;

pub use catalog::{
    BookRequest, Catalog, RequestLog, filter_catalog, first_match_index, match_positions,
};
pub use error::Error;
pub use recommend::{
    BoardState, RecommendationBoard, Recommender, SourceTable, TextSource, parse_recommendations,
};
pub use types::{BookRecord, Genre, ImageRef, SourceUrl};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
