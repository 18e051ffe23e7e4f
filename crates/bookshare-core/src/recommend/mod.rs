//! Remote recommendation lists.
//!
//! A [`Recommender`] resolves a genre to its title list through a
//! [`SourceTable`], retrieves the text through a [`TextSource`], and turns
//! each non-blank line into a placeholder listing.

mod board;
mod parse;
mod recommender;
mod source;

pub use board::{BoardState, RecommendationBoard};
pub use parse::parse_recommendations;
pub use recommender::Recommender;
pub use source::{SourceTable, TextSource};
