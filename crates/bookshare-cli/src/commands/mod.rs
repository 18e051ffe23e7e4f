//! Subcommand implementations.

pub mod catalog;
pub mod genres;
pub mod recommend;
pub mod request;
pub mod requests;
