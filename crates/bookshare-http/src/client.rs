//! Plain-text HTTP client.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, instrument, trace};
use url::Url;

use bookshare_core::error::{Error, ParseError, RetrievalError};
use bookshare_core::{Result, TextSource};

/// Timeout applied to each retrieval unless overridden.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// [`TextSource`] performing one HTTP GET per fetch.
///
/// No retries and no caching. Requests are bounded by a timeout covering
/// connect, send and body download.
#[derive(Debug, Clone)]
pub struct HttpTextSource {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpTextSource {
    /// Create a source with the default timeout.
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Create a source whose requests give up after `timeout`.
    pub fn with_timeout(timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(concat!("bookshare/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .expect("failed to build HTTP client");

        Self { client, timeout }
    }

    /// Returns the per-request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn map_error(&self, err: reqwest::Error) -> Error {
        let err = if err.is_timeout() {
            RetrievalError::Timeout {
                duration_ms: self.timeout.as_millis() as u64,
            }
        } else if err.is_connect() {
            RetrievalError::Connection {
                message: err.to_string(),
            }
        } else {
            RetrievalError::Http {
                message: err.to_string(),
            }
        };
        err.into()
    }
}

impl Default for HttpTextSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TextSource for HttpTextSource {
    #[instrument(skip_all, fields(url = %url))]
    async fn fetch_text(&self, url: &Url) -> Result<String> {
        debug!("GET text");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| self.map_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RetrievalError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            }
            .into());
        }

        let body = response.bytes().await.map_err(|e| self.map_error(e))?;
        trace!(bytes = body.len(), "body received");

        String::from_utf8(body.to_vec()).map_err(|e| {
            ParseError::Encoding {
                message: e.to_string(),
            }
            .into()
        })
    }
}
