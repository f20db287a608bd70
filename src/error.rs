//! Error types for the accounts API client.
//!
//! Every failure is handed back to the caller as-is: nothing is retried,
//! logged, or replaced with a fallback value.

use thiserror::Error;

/// A boxed error carried by transport failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A specialized `Result` type for accounts API operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for all accounts API operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The request never completed (connection refused, DNS, timeout,
    /// connection reset, failure reading the body).
    #[error("{0}")]
    Transport(#[source] BoxError),

    /// The remote host answered with a status other than the one the
    /// operation expects. The raw response body is kept as the message.
    #[error("{message}")]
    HttpStatus {
        /// HTTP status code
        status: u16,
        /// Raw response body text
        message: String,
    },

    /// A request body could not be serialized to JSON.
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// A response body was not valid JSON for the expected shape.
    #[error("failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),

    /// URL parsing error
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Returns the HTTP status code if the remote host responded.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns `true` if the remote host reported the resource as missing.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Returns `true` if the call failed before any response arrived.
    pub fn is_transport_error(&self) -> bool {
        matches!(self, Error::Transport(_))
    }

    /// Returns `true` if this error indicates a client-side issue
    /// (rejected request, bad URL, bad configuration).
    pub fn is_client_error(&self) -> bool {
        match self {
            Error::HttpStatus { status, .. } => (400..500).contains(status),
            Error::Encode(_) | Error::UrlParse(_) | Error::Config(_) => true,
            _ => false,
        }
    }

    /// Returns `true` if this error indicates a server-side issue.
    pub fn is_server_error(&self) -> bool {
        matches!(self, Error::HttpStatus { status, .. } if *status >= 500)
    }

    /// Build a status error from a response body.
    pub(crate) fn from_status(status: u16, body: &[u8]) -> Self {
        Error::HttpStatus {
            status,
            message: String::from_utf8_lossy(body).into_owned(),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(Box::new(err))
    }
}
