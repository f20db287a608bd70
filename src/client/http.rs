//! HTTP transport adapter for the accounts API.

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use url::Url;

use super::transport::{HttpRequest, HttpResponse, HttpTransport};
use crate::{Error, Result};

/// Issues requests relative to a base URL and normalizes the outcome.
///
/// Each method expects exactly one success status (200 for GET, 201 for
/// POST, 204 for DELETE). Any other status, including other 2xx codes,
/// becomes [`Error::HttpStatus`] carrying the raw response body. Failures
/// to get a response at all become [`Error::Transport`].
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use accounts_api_client::client::RestClient;
/// use url::Url;
///
/// # async fn example() -> accounts_api_client::Result<()> {
/// let base_url = Url::parse("http://localhost:8080/")?;
/// let client = RestClient::new(base_url, Arc::new(reqwest::Client::new()));
///
/// let body = client.get("v1/health").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct RestClient {
    base_url: Url,
    transport: Arc<dyn HttpTransport>,
}

impl RestClient {
    /// Create an adapter over the given transport.
    ///
    /// A trailing `/` is appended to the base URL path if missing so that
    /// relative paths are always resolved beneath it.
    pub fn new(mut base_url: Url, transport: Arc<dyn HttpTransport>) -> Self {
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Self {
            base_url,
            transport,
        }
    }

    /// The base URL requests are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Make a GET request. Succeeds only on `200 OK`.
    pub async fn get(&self, path: &str) -> Result<Vec<u8>> {
        let response = self.execute(Method::GET, path, None).await?;
        Self::expect_status(response, StatusCode::OK)
    }

    /// Make a POST request with a JSON body. Succeeds only on `201 Created`.
    pub async fn post(&self, path: &str, body: Vec<u8>) -> Result<Vec<u8>> {
        let response = self.execute(Method::POST, path, Some(body)).await?;
        Self::expect_status(response, StatusCode::CREATED)
    }

    /// Make a DELETE request. Succeeds only on `204 No Content`.
    ///
    /// The transport still reads the response body; it is dropped on success
    /// and becomes the error message for any other status.
    pub async fn delete(&self, path: &str) -> Result<()> {
        let response = self.execute(Method::DELETE, path, None).await?;
        Self::expect_status(response, StatusCode::NO_CONTENT).map(|_| ())
    }

    fn build_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers
    }

    async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<HttpResponse> {
        let url = self.base_url.join(path)?;
        tracing::debug!(%method, %url, "sending request");

        let request = HttpRequest {
            method: method.clone(),
            url,
            headers: Self::build_headers(),
            body,
        };
        let response = self.transport.send(request).await.map_err(Error::Transport)?;

        tracing::debug!(%method, status = response.status.as_u16(), "received response");
        Ok(response)
    }

    fn expect_status(response: HttpResponse, expected: StatusCode) -> Result<Vec<u8>> {
        if response.status == expected {
            Ok(response.body)
        } else {
            Err(Error::from_status(response.status.as_u16(), &response.body))
        }
    }
}

impl std::fmt::Debug for RestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestClient")
            .field("base_url", &self.base_url.as_str())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BoxError;
    use std::sync::Mutex;

    const BASE_URL: &str = "http://localhost:8080/";
    const PATH: &str = "path/to/resource/endpoint";

    fn client_with<F>(transport: F) -> RestClient
    where
        F: Fn(HttpRequest) -> std::result::Result<HttpResponse, BoxError> + Send + Sync + 'static,
    {
        RestClient::new(Url::parse(BASE_URL).unwrap(), Arc::new(transport))
    }

    fn failing_transport(_: HttpRequest) -> std::result::Result<HttpResponse, BoxError> {
        Err("network request failed".into())
    }

    fn responding(
        status: StatusCode,
        body: &'static str,
    ) -> impl Fn(HttpRequest) -> std::result::Result<HttpResponse, BoxError> + Send + Sync + 'static
    {
        move |_: HttpRequest| -> std::result::Result<HttpResponse, BoxError> {
            Ok(HttpResponse::new(status, body))
        }
    }

    #[tokio::test]
    async fn test_get_returns_body_on_200() {
        let client = client_with(responding(StatusCode::OK, "A valid account"));
        let body = client.get(PATH).await.unwrap();
        assert_eq!(body, b"A valid account");
    }

    #[tokio::test]
    async fn test_get_maps_non_200_to_status_error() {
        let client = client_with(responding(StatusCode::NOT_FOUND, "not found"));
        let err = client.get(PATH).await.unwrap_err();

        assert_eq!(err.to_string(), "not found");
        assert_eq!(err.status(), Some(404));
    }

    #[tokio::test]
    async fn test_get_rejects_other_success_codes() {
        let client = client_with(responding(StatusCode::ACCEPTED, "accepted"));
        let err = client.get(PATH).await.unwrap_err();
        assert_eq!(err.status(), Some(202));
    }

    #[tokio::test]
    async fn test_get_propagates_transport_failure() {
        let client = client_with(failing_transport);
        let err = client.get(PATH).await.unwrap_err();

        assert!(err.is_transport_error());
        assert_eq!(err.to_string(), "network request failed");
    }

    #[tokio::test]
    async fn test_get_sends_json_content_type_to_joined_url() {
        let client = client_with(|request: HttpRequest| {
            assert_eq!(request.method, Method::GET);
            assert_eq!(request.url.as_str(), "http://localhost:8080/path/to/resource/endpoint");
            assert_eq!(request.headers[CONTENT_TYPE], "application/json");
            assert!(request.body.is_none());
            Ok(HttpResponse::new(StatusCode::OK, "{}"))
        });
        client.get(PATH).await.unwrap();
    }

    #[tokio::test]
    async fn test_post_returns_body_on_201() {
        let seen = Arc::new(Mutex::new(None));
        let recorder = seen.clone();
        let client = client_with(move |request: HttpRequest| {
            *recorder.lock().unwrap() = Some((request.method, request.body));
            Ok(HttpResponse::new(StatusCode::CREATED, "Account Created"))
        });

        let body = client.post(PATH, b"{\"data\":{}}".to_vec()).await.unwrap();

        assert_eq!(body, b"Account Created");
        let (method, sent) = seen.lock().unwrap().take().unwrap();
        assert_eq!(method, Method::POST);
        assert_eq!(sent.as_deref(), Some(&b"{\"data\":{}}"[..]));
    }

    #[tokio::test]
    async fn test_post_maps_non_201_to_status_error() {
        let client = client_with(responding(StatusCode::CONFLICT, "conflict"));
        let err = client.post(PATH, Vec::new()).await.unwrap_err();
        assert_eq!(err.to_string(), "conflict");
        assert_eq!(err.status(), Some(409));

        // 200 is not the documented success for create
        let client = client_with(responding(StatusCode::OK, "ok"));
        assert!(client.post(PATH, Vec::new()).await.is_err());
    }

    #[tokio::test]
    async fn test_post_propagates_transport_failure() {
        let client = client_with(failing_transport);
        let err = client.post(PATH, Vec::new()).await.unwrap_err();
        assert_eq!(err.to_string(), "network request failed");
    }

    #[tokio::test]
    async fn test_delete_succeeds_on_204() {
        let client = client_with(|request: HttpRequest| {
            assert_eq!(request.method, Method::DELETE);
            Ok(HttpResponse::new(StatusCode::NO_CONTENT, Vec::new()))
        });
        assert!(client.delete(PATH).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_ignores_body_on_204() {
        let client = client_with(responding(StatusCode::NO_CONTENT, "{\"unexpected\": true}"));
        assert!(client.delete(PATH).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_maps_non_204_to_status_error() {
        let client = client_with(responding(StatusCode::NOT_FOUND, "not found"));
        let err = client.delete(PATH).await.unwrap_err();
        assert_eq!(err.to_string(), "not found");

        let client = client_with(responding(StatusCode::OK, ""));
        assert_eq!(client.delete(PATH).await.unwrap_err().status(), Some(200));
    }

    #[tokio::test]
    async fn test_delete_propagates_transport_failure() {
        let client = client_with(failing_transport);
        let err = client.delete(PATH).await.unwrap_err();
        assert!(err.is_transport_error());
    }

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let client = RestClient::new(
            Url::parse("http://localhost:8080/api").unwrap(),
            Arc::new(failing_transport),
        );
        assert_eq!(client.base_url().as_str(), "http://localhost:8080/api/");
    }

    #[tokio::test]
    async fn test_path_is_resolved_beneath_base_path() {
        let transport = |request: HttpRequest| -> std::result::Result<HttpResponse, BoxError> {
            assert_eq!(request.url.as_str(), "http://localhost:8080/api/v1/items?version=3");
            Ok(HttpResponse::new(StatusCode::NO_CONTENT, Vec::new()))
        };
        let client = RestClient::new(Url::parse("http://localhost:8080/api").unwrap(), Arc::new(transport));
        client.delete("v1/items?version=3").await.unwrap();
    }
}
