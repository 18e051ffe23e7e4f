//! Catalog browsing and requests.
//!
//! The filter functions are pure and work on any slice of records.
//! [`Catalog`] and [`RequestLog`] are the shared, append-only stores a
//! front end holds on to.

mod filter;
mod requests;
mod seed;
mod store;

pub use filter::{filter_catalog, first_match_index, match_positions};
pub use requests::{BookRequest, RequestLog};
pub use store::Catalog;
