//! Artwork handle type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque handle to a listing's display artwork.
///
/// The core never interprets the handle; it only carries it alongside the
/// record for whichever front end renders it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
    /// Handle used for listings without their own artwork.
    pub const PLACEHOLDER: &'static str = "bookshare_logo";

    /// Wrap an artwork handle.
    pub fn new(handle: impl Into<String>) -> Self {
        Self(handle.into())
    }

    /// The shared placeholder artwork.
    pub fn placeholder() -> Self {
        Self(Self::PLACEHOLDER.to_string())
    }

    /// Returns the handle as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if this is the placeholder artwork.
    pub fn is_placeholder(&self) -> bool {
        self.0 == Self::PLACEHOLDER
    }
}

impl Default for ImageRef {
    fn default() -> Self {
        Self::placeholder()
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
