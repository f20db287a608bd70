//! API service modules.
//!
//! Each service wraps one REST resource of the remote API.

mod accounts;

pub use accounts::{AccountsService, ACCOUNTS_ENDPOINT};
