//! Recommendation source URL type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

use crate::error::{Error, InvalidInputError};

/// A validated base URL under which the per-genre title lists live.
///
/// Must use HTTPS (HTTP is allowed for localhost so a local server can stand
/// in for the real host). The path is normalized to end with `/` so file
/// names join beneath it rather than replacing the last segment.
///
/// # Example
///
/// ```
/// use bookshare_core::SourceUrl;
///
/// let base = SourceUrl::new("https://example.com/lists").unwrap();
/// assert_eq!(base.file_url("fiction.txt").unwrap().as_str(),
///            "https://example.com/lists/fiction.txt");
///
/// assert!(SourceUrl::new("http://example.com").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SourceUrl(Url);

impl SourceUrl {
    /// Create a new source URL from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not valid or doesn't meet requirements.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();
        let mut url = Url::parse(s).map_err(|e| InvalidInputError::SourceUrl {
            value: s.to_string(),
            reason: e.to_string(),
        })?;

        Self::validate(&url, s)?;

        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }

        Ok(Self(url))
    }

    /// Resolve a file name beneath this base.
    pub fn file_url(&self, file: &str) -> Result<Url, Error> {
        self.0.join(file).map_err(|e| {
            InvalidInputError::SourceUrl {
                value: format!("{}{}", self.0, file),
                reason: e.to_string(),
            }
            .into()
        })
    }

    /// Returns the base URL as a string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the inner URL.
    pub fn as_url(&self) -> &Url {
        &self.0
    }

    /// Returns the host string.
    pub fn host(&self) -> Option<&str> {
        self.0.host_str()
    }

    fn validate(url: &Url, original: &str) -> Result<(), Error> {
        if url.cannot_be_a_base() {
            return Err(InvalidInputError::SourceUrl {
                value: original.to_string(),
                reason: "must be an absolute URL".to_string(),
            }
            .into());
        }

        let scheme = url.scheme();
        let is_localhost = url
            .host_str()
            .is_some_and(|h| h == "localhost" || h == "127.0.0.1" || h == "[::1]");

        if scheme != "https" && !(scheme == "http" && is_localhost) {
            return Err(InvalidInputError::SourceUrl {
                value: original.to_string(),
                reason: "must use HTTPS (HTTP allowed only for localhost)".to_string(),
            }
            .into());
        }

        if url.host_str().is_none() {
            return Err(InvalidInputError::SourceUrl {
                value: original.to_string(),
                reason: "must have a host".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

impl fmt::Display for SourceUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SourceUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for SourceUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.0.as_str())
    }
}

impl<'de> Deserialize<'de> for SourceUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        SourceUrl::new(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_https_url() {
        let base = SourceUrl::new("https://raw.githubusercontent.com/a/b/main/").unwrap();
        assert_eq!(base.host(), Some("raw.githubusercontent.com"));
    }

    #[test]
    fn valid_localhost_http() {
        let base = SourceUrl::new("http://127.0.0.1:8080").unwrap();
        assert_eq!(
            base.file_url("history.txt").unwrap().as_str(),
            "http://127.0.0.1:8080/history.txt"
        );
    }

    #[test]
    fn adds_trailing_slash_before_joining() {
        let base = SourceUrl::new("https://example.com/a/b").unwrap();
        assert_eq!(base.as_str(), "https://example.com/a/b/");
        assert_eq!(
            base.file_url("fantasy.txt").unwrap().as_str(),
            "https://example.com/a/b/fantasy.txt"
        );
    }

    #[test]
    fn invalid_http_non_localhost() {
        assert!(SourceUrl::new("http://example.com").is_err());
    }

    #[test]
    fn invalid_relative_url() {
        assert!(SourceUrl::new("/lists/fiction.txt").is_err());
    }

    #[test]
    fn invalid_scheme() {
        let err = SourceUrl::new("ftp://example.com").unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidInput(InvalidInputError::SourceUrl { .. })
        ));
    }
}
