//! Book listing type.

use serde::{Deserialize, Serialize};

use crate::error::{Error, InvalidInputError};

use super::{Genre, ImageRef};

/// Value used for every unknown field of a placeholder record.
const UNKNOWN: &str = "Unknown";

/// A single shareable book listing.
///
/// Listings are value data. Duplicate names are allowed; nothing in the
/// catalog keys on them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawBookRecord")]
pub struct BookRecord {
    name: String,
    image_ref: ImageRef,
    owner: String,
    contact: String,
    location: String,
    genre: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    requested_by: Option<String>,
}

/// Unvalidated wire form of [`BookRecord`].
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawBookRecord {
    name: String,
    #[serde(default)]
    image_ref: ImageRef,
    owner: String,
    contact: String,
    location: String,
    genre: String,
    #[serde(default)]
    requested_by: Option<String>,
}

impl TryFrom<RawBookRecord> for BookRecord {
    type Error = Error;

    fn try_from(raw: RawBookRecord) -> Result<Self, Self::Error> {
        let mut book = BookRecord::new(raw.name, raw.owner, raw.contact, raw.location, raw.genre)?
            .with_image(raw.image_ref);
        book.requested_by = raw.requested_by;
        Ok(book)
    }
}

impl BookRecord {
    /// Create a listing, requiring every text field to be non-empty.
    ///
    /// The listing uses the placeholder artwork until [`with_image`](Self::with_image)
    /// is applied.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInputError::EmptyField`] naming the first empty field.
    pub fn new(
        name: impl Into<String>,
        owner: impl Into<String>,
        contact: impl Into<String>,
        location: impl Into<String>,
        genre: impl Into<String>,
    ) -> Result<Self, Error> {
        let book = Self {
            name: name.into(),
            image_ref: ImageRef::placeholder(),
            owner: owner.into(),
            contact: contact.into(),
            location: location.into(),
            genre: genre.into(),
            requested_by: None,
        };

        let fields = [
            ("name", &book.name),
            ("owner", &book.owner),
            ("contact", &book.contact),
            ("location", &book.location),
            ("genre", &book.genre),
        ];
        if let Some((field, _)) = fields.iter().find(|(_, value)| value.is_empty()) {
            return Err(InvalidInputError::EmptyField { field: *field }.into());
        }

        Ok(book)
    }

    /// Build a placeholder listing for a recommended title.
    ///
    /// Owner, contact and location are `"Unknown"` and the artwork is the
    /// placeholder handle. `name` must be non-empty; callers only pass
    /// non-blank lines.
    pub fn placeholder(name: impl Into<String>, genre: Genre) -> Self {
        Self {
            name: name.into(),
            image_ref: ImageRef::placeholder(),
            owner: UNKNOWN.to_string(),
            contact: UNKNOWN.to_string(),
            location: UNKNOWN.to_string(),
            genre: genre.label().to_string(),
            requested_by: None,
        }
    }

    /// Build a listing from fields already known to be non-empty.
    pub(crate) fn from_parts(
        name: &str,
        image_ref: ImageRef,
        owner: &str,
        contact: &str,
        location: &str,
        genre: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            image_ref,
            owner: owner.to_string(),
            contact: contact.to_string(),
            location: location.to_string(),
            genre: genre.to_string(),
            requested_by: None,
        }
    }

    /// Replace the artwork handle.
    pub fn with_image(mut self, image_ref: ImageRef) -> Self {
        self.image_ref = image_ref;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn image_ref(&self) -> &ImageRef {
        &self.image_ref
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn contact(&self) -> &str {
        &self.contact
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }

    /// Who requested this book, if anyone.
    pub fn requested_by(&self) -> Option<&str> {
        self.requested_by.as_deref()
    }
}
