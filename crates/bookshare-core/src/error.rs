//! Error types for the bookshare core.
//!
//! Errors are grouped by the stage that produced them: genre resolution,
//! retrieval of remote text, parsing of that text, and input validation.

use thiserror::Error;

/// The unified error type for bookshare operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The genre label is not one of the supported genres.
    #[error("unsupported genre '{value}'")]
    UnsupportedGenre { value: String },

    /// Retrieval of remote content failed (connection, timeout, status).
    #[error("retrieval failed: {0}")]
    Retrieval(#[from] RetrievalError),

    /// Retrieved content could not be interpreted.
    #[error("parse failed: {0}")]
    Parse(#[from] ParseError),

    /// Input validation errors (empty fields, malformed URLs).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

impl Error {
    /// Short, stable label for the error kind, used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::UnsupportedGenre { .. } => "unsupported_genre",
            Error::Retrieval(_) => "retrieval_failure",
            Error::Parse(_) => "parse_failure",
            Error::InvalidInput(_) => "invalid_input",
        }
    }
}

/// Retrieval-level errors.
#[derive(Debug, Error)]
pub enum RetrievalError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out after {duration_ms}ms")]
    Timeout { duration_ms: u64 },

    /// The server answered with a non-success status.
    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

/// Errors interpreting retrieved content.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The body was not valid UTF-8.
    #[error("body is not valid UTF-8: {message}")]
    Encoding { message: String },
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// A required text field was empty.
    #[error("field '{field}' must not be empty")]
    EmptyField { field: &'static str },

    /// Invalid source URL.
    #[error("invalid source URL '{value}': {reason}")]
    SourceUrl { value: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_are_distinct() {
        let errors = [
            Error::UnsupportedGenre {
                value: "Klingon".to_string(),
            },
            RetrievalError::Timeout { duration_ms: 10 }.into(),
            ParseError::Encoding {
                message: "bad byte".to_string(),
            }
            .into(),
            InvalidInputError::EmptyField { field: "name" }.into(),
        ];

        let kinds: Vec<_> = errors.iter().map(Error::kind).collect();
        assert_eq!(
            kinds,
            [
                "unsupported_genre",
                "retrieval_failure",
                "parse_failure",
                "invalid_input"
            ]
        );
    }

    #[test]
    fn status_error_display() {
        let err: Error = RetrievalError::Status {
            status: 404,
            url: "https://example.com/fiction.txt".to_string(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "retrieval failed: HTTP 404 from https://example.com/fiction.txt"
        );
    }
}
