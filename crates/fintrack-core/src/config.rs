//! Client configuration.
//!
//! The backend base URL comes from the operator (flag or environment) and is
//! normalized into the effective `/api` root that every request is issued
//! against.

use std::time::Duration;

/// Configuration for the shared API client. Immutable once the client is
/// built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
    timeout: Duration,
}

impl ClientConfig {
    /// Base URL used when none is configured.
    pub const DEFAULT_BASE_URL: &'static str = "http://localhost:8000";
    /// Path segment appended to the base URL.
    pub const API_SUFFIX: &'static str = "/api";
    /// Environment variable holding the backend base URL.
    pub const BASE_URL_ENV: &'static str = "FINTRACK_API_URL";
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(10_000);

    /// Create a configuration for the given raw base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Read the base URL from [`Self::BASE_URL_ENV`].
    pub fn from_env() -> Self {
        Self::from_env_var_value(std::env::var(Self::BASE_URL_ENV).ok())
    }

    /// Build from an already-read environment value. Absent or empty values
    /// fall back to [`Self::DEFAULT_BASE_URL`].
    pub fn from_env_var_value(value: Option<String>) -> Self {
        match value {
            Some(url) if !url.is_empty() => Self::new(url),
            _ => Self::new(Self::DEFAULT_BASE_URL),
        }
    }

    /// Override the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The raw base URL as configured.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// The root all requests are issued against.
    pub fn effective_base_url(&self) -> String {
        effective_base_url(&self.base_url)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_BASE_URL)
    }
}

/// Strip one trailing slash from `raw` and append the `/api` segment.
pub fn effective_base_url(raw: &str) -> String {
    let trimmed = raw.strip_suffix('/').unwrap_or(raw);
    format!("{}{}", trimmed, ClientConfig::API_SUFFIX)
}
