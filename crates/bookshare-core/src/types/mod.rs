//! Core BookShare types.
//!
//! Constructors validate their inputs so an invalid genre, an empty
//! listing field, or a non-HTTPS source cannot be represented.

mod book;
mod genre;
mod image;
mod source_url;

pub use book::BookRecord;
pub use genre::Genre;
pub use image::ImageRef;
pub use source_url::SourceUrl;
