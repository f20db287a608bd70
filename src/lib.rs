//! # accounts-api-client
//!
//! A typed async client for the organisation accounts resource of a
//! financial-ledger REST API (`v1/organisation/accounts`).
//!
//! ## Features
//!
//! - **Create, fetch, delete**: one method per REST operation
//! - **Typed models**: accounts and their JSON envelopes as plain structs
//! - **Typed errors**: transport failures, unexpected statuses and JSON
//!   problems are distinct [`Error`] variants
//! - **Pluggable transport**: anything implementing
//!   [`HttpTransport`](client::HttpTransport), closures included
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use accounts_api_client::AccountsApiClient;
//! use accounts_api_client::models::{Account, AccountAttributes, AccountCreateRequest};
//! use uuid::Uuid;
//!
//! #[tokio::main]
//! async fn main() -> accounts_api_client::Result<()> {
//!     let client = AccountsApiClient::parse("http://localhost:8080/")?;
//!
//!     let attributes = AccountAttributes {
//!         bank_id: "400300".to_string(),
//!         bank_id_code: "GBDSC".to_string(),
//!         bic: "NWBKGB22".to_string(),
//!         country: "GB".to_string(),
//!         name: vec!["Samantha Holder".to_string()],
//!         ..Default::default()
//!     };
//!     let account = Account::new(Uuid::new_v4(), Uuid::new_v4(), attributes);
//!
//!     let created = client.accounts().create(&AccountCreateRequest::new(account)).await?;
//!     let fetched = client.accounts().fetch(created.data.id).await?;
//!     client.accounts().delete(fetched.data.id, fetched.data.version).await?;
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod client;
pub mod error;
pub mod models;

use std::sync::Arc;

use url::Url;

use crate::api::AccountsService;
use crate::client::{HttpTransport, RestClient};

// Re-export primary types at crate root for convenience
pub use client::ClientConfig;
pub use error::{Error, Result};
pub use models::{AccountApiResponse, AccountCreateRequest};

/// Environment variable read by [`AccountsApiClient::from_env`].
pub const BASE_URL_ENV_VAR: &str = "ACCOUNTS_API_BASE_URL";

/// Base URL used by [`AccountsApiClient::from_env`] when the variable is unset.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/";

/// Entry point for the accounts API.
///
/// Holds the base URL and transport; every resource service handed out
/// shares them. Cloning is cheap.
///
/// # Example
///
/// ```no_run
/// use accounts_api_client::AccountsApiClient;
/// use url::Url;
///
/// # async fn example() -> accounts_api_client::Result<()> {
/// let client = AccountsApiClient::new(Url::parse("http://localhost:8080/")?)?;
///
/// let id = uuid::Uuid::new_v4();
/// match client.accounts().fetch(id).await {
///     Ok(account) => println!("found {}", account.data.id),
///     Err(err) if err.is_not_found() => println!("no such account"),
///     Err(err) => return Err(err),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct AccountsApiClient {
    inner: Arc<RestClient>,
}

impl AccountsApiClient {
    /// Create a client backed by reqwest with the default configuration.
    pub fn new(base_url: Url) -> Result<Self> {
        Self::with_config(base_url, ClientConfig::default())
    }

    /// Create a client backed by reqwest with a custom configuration.
    pub fn with_config(base_url: Url, config: ClientConfig) -> Result<Self> {
        let http = config.build_http_client()?;
        Ok(Self::with_transport(base_url, Arc::new(http)))
    }

    /// Create a client over an arbitrary transport.
    pub fn with_transport(base_url: Url, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            inner: Arc::new(RestClient::new(base_url, transport)),
        }
    }

    /// Parse `base_url` and create a client with the default configuration.
    pub fn parse(base_url: &str) -> Result<Self> {
        Self::new(Url::parse(base_url)?)
    }

    /// Create a client from the `ACCOUNTS_API_BASE_URL` environment variable,
    /// falling back to [`DEFAULT_BASE_URL`].
    pub fn from_env() -> Result<Self> {
        let base_url =
            std::env::var(BASE_URL_ENV_VAR).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::parse(&base_url)
    }

    /// Get the accounts service.
    pub fn accounts(&self) -> AccountsService {
        AccountsService::new(self.inner.clone())
    }

    /// The base URL requests are resolved against.
    pub fn base_url(&self) -> &Url {
        self.inner.base_url()
    }
}

impl std::fmt::Debug for AccountsApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountsApiClient")
            .field("base_url", &self.base_url().as_str())
            .finish()
    }
}
