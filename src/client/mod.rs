//! HTTP plumbing for the accounts API.
//!
//! - [`HttpTransport`] performs a single request; implemented for
//!   [`reqwest::Client`] and for closures.
//! - [`RestClient`] resolves paths against the base URL and maps status
//!   codes to [`Error`](crate::Error) variants.
//! - [`ClientConfig`] tunes the default reqwest transport.
//!
//! # Example
//!
//! ```no_run
//! use accounts_api_client::{AccountsApiClient, ClientConfig};
//! use std::time::Duration;
//! use url::Url;
//!
//! # fn example() -> accounts_api_client::Result<()> {
//! let config = ClientConfig::default().with_timeout(Duration::from_secs(10));
//! let client = AccountsApiClient::with_config(Url::parse("http://localhost:8080/")?, config)?;
//! # Ok(())
//! # }
//! ```

mod config;
mod http;
mod transport;

pub use config::ClientConfig;
pub use http::RestClient;
pub use transport::{HttpRequest, HttpResponse, HttpTransport};
