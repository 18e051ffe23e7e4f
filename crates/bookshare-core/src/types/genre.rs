//! Recommendation genre type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A genre that has a remote recommendation list.
///
/// Parsing is an exact, case-sensitive match on the display label:
///
/// ```
/// use bookshare_core::Genre;
///
/// let genre: Genre = "Non-Fiction".parse().unwrap();
/// assert_eq!(genre, Genre::NonFiction);
/// assert_eq!(genre.slug(), "non-fiction");
///
/// assert!("fiction".parse::<Genre>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Genre {
    Fiction,
    NonFiction,
    Science,
    History,
    Fantasy,
}

impl Genre {
    /// All genres, in display order.
    pub const ALL: [Genre; 5] = [
        Genre::Fiction,
        Genre::NonFiction,
        Genre::Science,
        Genre::History,
        Genre::Fantasy,
    ];

    /// Parse a genre from its display label.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedGenre`] for any other text.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();
        Self::ALL
            .into_iter()
            .find(|genre| genre.label() == s)
            .ok_or_else(|| Error::UnsupportedGenre {
                value: s.to_string(),
            })
    }

    /// Returns the display label (e.g. "Non-Fiction").
    pub fn label(&self) -> &'static str {
        match self {
            Genre::Fiction => "Fiction",
            Genre::NonFiction => "Non-Fiction",
            Genre::Science => "Science",
            Genre::History => "History",
            Genre::Fantasy => "Fantasy",
        }
    }

    /// Returns the file stem of the remote title list.
    pub fn slug(&self) -> &'static str {
        match self {
            Genre::Fiction => "fiction",
            Genre::NonFiction => "non-fiction",
            Genre::Science => "science",
            Genre::History => "history",
            Genre::Fantasy => "fantasy",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Genre {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for Genre {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Genre {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Genre::new(&s).map_err(serde::de::Error::custom)
    }
}
