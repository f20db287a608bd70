//! Accounts service for create, fetch and delete operations.

use std::sync::Arc;

use uuid::Uuid;

use crate::client::RestClient;
use crate::models::{AccountApiResponse, AccountCreateRequest};
use crate::{Error, Result};

/// Path of the accounts resource, relative to the base URL.
pub const ACCOUNTS_ENDPOINT: &str = "v1/organisation/accounts/";

/// Service for account operations.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: accounts_api_client::AccountsApiClient) -> accounts_api_client::Result<()> {
/// use uuid::Uuid;
///
/// let id = Uuid::parse_str("9ea9bb7c-b5ec-4b00-bd82-af0067c4febb").unwrap();
///
/// let account = client.accounts().fetch(id).await?;
/// println!("Account {} at version {}", account.data.id, account.data.version);
///
/// client.accounts().delete(id, account.data.version).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct AccountsService {
    inner: Arc<RestClient>,
}

impl AccountsService {
    pub(crate) fn new(inner: Arc<RestClient>) -> Self {
        Self { inner }
    }

    /// Fetch a single account.
    ///
    /// Fails with [`Error::HttpStatus`] if the account does not exist and
    /// with [`Error::Decode`] if the body is not an account envelope.
    pub async fn fetch(&self, id: Uuid) -> Result<AccountApiResponse> {
        let body = self
            .inner
            .get(&format!("{}{}", ACCOUNTS_ENDPOINT, id))
            .await?;
        decode(&body)
    }

    /// Create an account.
    ///
    /// Field validation happens on the server; a rejected request comes back
    /// as [`Error::HttpStatus`] with the server's message.
    pub async fn create(&self, request: &AccountCreateRequest) -> Result<AccountApiResponse> {
        let body = serde_json::to_vec(request).map_err(Error::Encode)?;
        let body = self.inner.post(ACCOUNTS_ENDPOINT, body).await?;
        decode(&body)
    }

    /// Delete an account at the given version.
    ///
    /// # Arguments
    ///
    /// * `id` - The account to delete
    /// * `version` - The revision the caller expects to remove
    pub async fn delete(&self, id: Uuid, version: i64) -> Result<()> {
        self.inner
            .delete(&format!("{}{}?version={}", ACCOUNTS_ENDPOINT, id, version))
            .await
    }
}

fn decode(body: &[u8]) -> Result<AccountApiResponse> {
    serde_json::from_slice(body).map_err(Error::Decode)
}
