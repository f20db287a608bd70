//! Data models for the accounts API.
//!
//! - [`account`] - The account resource and its request/response envelopes

pub mod account;

pub use account::*;
