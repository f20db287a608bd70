//! Pluggable transport used by [`RestClient`](super::RestClient).
//!
//! [`HttpTransport`] is the single capability the client needs: send one
//! request and hand back the status and body. It is implemented for
//! [`reqwest::Client`] and for plain closures, so tests can swap in a fake
//! transport without touching the network.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use accounts_api_client::client::{HttpRequest, HttpResponse, HttpTransport};
//! use accounts_api_client::error::BoxError;
//! use reqwest::StatusCode;
//!
//! let fake = |_request: HttpRequest| -> Result<HttpResponse, BoxError> {
//!     Ok(HttpResponse::new(StatusCode::NO_CONTENT, Vec::new()))
//! };
//! let transport: Arc<dyn HttpTransport> = Arc::new(fake);
//! ```

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode};
use url::Url;

use crate::error::BoxError;

/// A fully-resolved HTTP request.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP method
    pub method: Method,
    /// Absolute request URL
    pub url: Url,
    /// Request headers
    pub headers: HeaderMap,
    /// Request body, if any
    pub body: Option<Vec<u8>>,
}

/// The status and fully-read body of an HTTP response.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response body
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Create a response.
    pub fn new(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Something that can perform an HTTP request.
///
/// Implementations return `Err` only when no response was received; any
/// status code, successful or not, is returned as an [`HttpResponse`].
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send the request and read the whole response body.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, BoxError>;
}

#[async_trait]
impl HttpTransport for reqwest::Client {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, BoxError> {
        let mut builder = self
            .request(request.method, request.url)
            .headers(request.headers);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        Ok(HttpResponse::new(status, body.to_vec()))
    }
}

#[async_trait]
impl<F> HttpTransport for F
where
    F: Fn(HttpRequest) -> Result<HttpResponse, BoxError> + Send + Sync,
{
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, BoxError> {
        self(request)
    }
}
