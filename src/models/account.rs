//! Account resource models and their JSON envelopes.
//!
//! Wire names are lowercase snake_case. Decoding also accepts the
//! capitalised names a Go `encoding/json` encoder writes for untagged fields
//! (`Data`, `ID`, `Attributes`, `Country`, ...), and missing fields decode to
//! zero values (nil UUID, empty strings, version 0).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Resource type tag carried by every account.
pub const ACCOUNTS_RESOURCE_TYPE: &str = "accounts";

fn default_resource_type() -> String {
    ACCOUNTS_RESOURCE_TYPE.to_string()
}

/// An account held by an organisation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Caller-supplied account identifier
    #[serde(default, alias = "ID", alias = "Id")]
    pub id: Uuid,
    /// Owning organisation
    #[serde(default, alias = "OrganisationID")]
    pub organisation_id: Uuid,
    /// Server-assigned revision, required to delete the account
    #[serde(default, alias = "Version")]
    pub version: i64,
    /// Resource type tag, always `"accounts"`
    #[serde(rename = "type", alias = "Type", default = "default_resource_type")]
    pub resource_type: String,
    /// When the account was created (ISO-8601, kept verbatim)
    #[serde(default, alias = "CreatedOn", skip_serializing_if = "Option::is_none")]
    pub created_on: Option<String>,
    /// When the account was last modified (ISO-8601, kept verbatim)
    #[serde(default, alias = "ModifiedOn", skip_serializing_if = "Option::is_none")]
    pub modified_on: Option<String>,
    /// Bank details
    #[serde(default, alias = "Attributes")]
    pub attributes: AccountAttributes,
}

impl Account {
    /// Create an account ready to be sent in a create request.
    ///
    /// The version starts at 0 and timestamps are left for the server to
    /// assign.
    ///
    /// # Example
    ///
    /// ```
    /// use accounts_api_client::models::{Account, AccountAttributes};
    /// use uuid::Uuid;
    ///
    /// let account = Account::new(Uuid::new_v4(), Uuid::new_v4(), AccountAttributes::default());
    /// assert_eq!(account.resource_type, "accounts");
    /// assert_eq!(account.version, 0);
    /// ```
    pub fn new(id: Uuid, organisation_id: Uuid, attributes: AccountAttributes) -> Self {
        Self {
            id,
            organisation_id,
            version: 0,
            resource_type: default_resource_type(),
            created_on: None,
            modified_on: None,
            attributes,
        }
    }
}

/// Bank details of an account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountAttributes {
    /// Alternative holder names
    #[serde(default, alias = "AlternativeNames", skip_serializing_if = "Option::is_none")]
    pub alternative_names: Option<Vec<String>>,
    /// Local bank identifier (e.g. sort code)
    #[serde(default, alias = "BankID")]
    pub bank_id: String,
    /// Identifies the type of `bank_id` (e.g. `GBDSC`)
    #[serde(default, alias = "BankIDCode")]
    pub bank_id_code: String,
    /// ISO 4217 currency code
    #[serde(default, alias = "BaseCurrency")]
    pub base_currency: String,
    /// SWIFT BIC
    #[serde(default, alias = "Bic", alias = "BIC")]
    pub bic: String,
    /// ISO 3166-1 country code
    #[serde(default, alias = "Country")]
    pub country: String,
    /// Account holder names
    #[serde(default, alias = "Name")]
    pub name: Vec<String>,
}

/// Links attached to an account response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Links {
    /// Path of the returned resource
    #[serde(rename = "self", alias = "Self", default)]
    pub self_link: String,
}

/// Response envelope returned by fetch and create.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountApiResponse {
    /// The account
    #[serde(alias = "Data")]
    pub data: Account,
    /// Links to the account
    #[serde(default, alias = "Links")]
    pub links: Links,
}

/// Request envelope sent to create an account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountCreateRequest {
    /// The account to create
    #[serde(alias = "Data")]
    pub data: Account,
}

impl AccountCreateRequest {
    /// Wrap an account in a create request.
    pub fn new(account: Account) -> Self {
        Self { data: account }
    }
}

impl From<Account> for AccountCreateRequest {
    fn from(account: Account) -> Self {
        Self::new(account)
    }
}
