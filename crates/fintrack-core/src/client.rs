//! Shared HTTP client for the Fintrack REST backend.
//!
//! One [`ApiClient`] is built at startup and cloned into every resource
//! accessor. It carries:
//! - The effective base URL (`<base>/api`)
//! - JSON `Accept` and `Content-Type` default headers
//! - A fixed request timeout
//! - The response interceptor that observes every exchange
//!
//! The client never retries, caches or reshapes responses.

use crate::config::ClientConfig;
use crate::error::{parse_payload, FintrackError, RequestError, Result};
use crate::interceptor::{LoggingInterceptor, ResponseInterceptor};
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// An opaque resource payload, passed through exactly as the backend sent it.
pub type Payload = serde_json::Value;

const USER_AGENT: &str = concat!("fintrack/", env!("CARGO_PKG_VERSION"));

/// Shared, cheaply clonable API client.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: reqwest::Client,
    base_url: String,
    timeout: Duration,
    interceptor: Arc<dyn ResponseInterceptor>,
}

impl ApiClient {
    /// Create a client that logs failed requests.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        Self::with_interceptor(config, Arc::new(LoggingInterceptor))
    }

    /// Create a client with a custom response interceptor.
    pub fn with_interceptor(
        config: &ClientConfig,
        interceptor: Arc<dyn ResponseInterceptor>,
    ) -> Result<Self> {
        let base_url = config.effective_base_url();
        validate_base_url(&base_url)?;

        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout())
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| FintrackError::Config {
                message: format!("Failed to create HTTP client: {}", e),
            })?;

        debug!(
            "API client targeting {} (timeout {:?})",
            base_url,
            config.timeout()
        );

        Ok(Self {
            inner: Arc::new(ClientInner {
                http,
                base_url,
                timeout: config.timeout(),
                interceptor,
            }),
        })
    }

    /// The effective base URL, including the `/api` segment.
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.inner.timeout
    }

    /// Resolve a request path (starting with `/`) against the base URL.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.inner.base_url, path)
    }

    /// Make a GET request.
    pub async fn get(&self, path: &str) -> Result<Payload> {
        self.send(Method::GET, path, None).await
    }

    /// Make a POST request with a JSON body.
    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Payload> {
        let body = serde_json::to_vec(body)?;
        self.send(Method::POST, path, Some(body)).await
    }

    /// Make a PUT request with a JSON body.
    pub async fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Payload> {
        let body = serde_json::to_vec(body)?;
        self.send(Method::PUT, path, Some(body)).await
    }

    /// Make a DELETE request.
    pub async fn delete(&self, path: &str) -> Result<Payload> {
        self.send(Method::DELETE, path, None).await
    }

    async fn send(&self, method: Method, path: &str, body: Option<Vec<u8>>) -> Result<Payload> {
        let url = self.url(path);
        debug!("{} {}", method, url);

        let mut request = self.inner.http.request(method.clone(), &url);
        if let Some(body) = body {
            request = request.body(body);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => return Err(self.reject(RequestError::from_transport(method, url, &e))),
        };

        let status = response.status();
        let text = match response.text().await {
            Ok(text) => text,
            Err(e) => return Err(self.reject(RequestError::from_transport(method, url, &e))),
        };

        if !status.is_success() {
            return Err(self.reject(RequestError::from_status(
                method,
                url,
                status.as_u16(),
                &text,
            )));
        }

        self.inner
            .interceptor
            .on_response(&method, &url, status.as_u16());
        Ok(parse_payload(&text).unwrap_or(Payload::Null))
    }

    /// Report a failure to the interceptor and hand it back unchanged.
    fn reject(&self, err: RequestError) -> FintrackError {
        self.inner.interceptor.on_error(&err);
        FintrackError::Request(err)
    }
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.inner.base_url)
            .field("timeout", &self.inner.timeout)
            .finish_non_exhaustive()
    }
}

/// Decode an opaque payload into a caller-chosen type.
pub fn decode<T: DeserializeOwned>(payload: Payload) -> Result<T> {
    Ok(serde_json::from_value(payload)?)
}

fn validate_base_url(base_url: &str) -> Result<()> {
    let parsed = url::Url::parse(base_url).map_err(|e| FintrackError::Config {
        message: format!("Invalid API base URL '{}': {}", base_url, e),
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(FintrackError::Config {
            message: format!(
                "Unsupported scheme '{}' in API base URL '{}'",
                other, base_url
            ),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[test]
    fn test_client_uses_effective_base() {
        let client = ApiClient::new(&ClientConfig::new("http://localhost:8000/")).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000/api");
        assert_eq!(client.url("/debts/7"), "http://localhost:8000/api/debts/7");
        assert_eq!(client.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_client_with_timeout() {
        let config = ClientConfig::default().with_timeout(Duration::from_secs(3));
        let client = ApiClient::new(&config).unwrap();
        assert_eq!(client.timeout(), Duration::from_secs(3));
    }

    #[test]
    fn test_rejects_unparseable_base() {
        let err = ApiClient::new(&ClientConfig::new("not a url")).unwrap_err();
        assert!(matches!(err, FintrackError::Config { .. }));
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        let err = ApiClient::new(&ClientConfig::new("ftp://files.example.com")).unwrap_err();
        match err {
            FintrackError::Config { message } => assert!(message.contains("ftp")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_clones_share_configuration() {
        let client = ApiClient::new(&ClientConfig::new("https://money.internal")).unwrap();
        let clone = client.clone();
        assert!(Arc::ptr_eq(&client.inner, &clone.inner));
    }

    #[test]
    fn test_decode_typed_payload() {
        #[derive(Debug, Deserialize, PartialEq)]
        struct Debt {
            id: u32,
            amount: i64,
        }

        let debt: Debt = decode(json!({"id": 2, "amount": 150000})).unwrap();
        assert_eq!(
            debt,
            Debt {
                id: 2,
                amount: 150000
            }
        );

        let err = decode::<Debt>(json!({"id": "two"})).unwrap_err();
        assert!(matches!(err, FintrackError::Json { .. }));
    }
}
