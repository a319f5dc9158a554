//! Fintrack Core - REST client and routing for the Fintrack finance dashboard.
//!
//! This crate provides typed access to the Fintrack backend (categories,
//! transactions, debts, wishlist and investments) and the static route table
//! that maps dashboard paths to views. It performs no caching, retries or
//! validation: every operation is one HTTP exchange whose result, success or
//! failure, is handed straight back to the caller.
//!
//! # Example
//!
//! ```rust,ignore
//! use fintrack_core::{ClientConfig, FintrackApi};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> fintrack_core::Result<()> {
//!     let api = FintrackApi::new(ClientConfig::from_env())?;
//!
//!     let debts = api.debts().get_top_debts().await?;
//!     println!("Top debts: {}", debts);
//!
//!     api.transactions()
//!         .update(3, &json!({ "amount": 10 }))
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod interceptor;
pub mod resources;
pub mod routes;

// Re-export commonly used types
pub use client::{decode, ApiClient, Payload};
pub use config::ClientConfig;
pub use error::{FintrackError, RequestError, Result};
pub use interceptor::{LoggingInterceptor, ResponseInterceptor};
pub use resources::{Categories, Debts, Investments, ResourceAccessor, Transactions, Wishlists};
pub use routes::{HistoryRouter, Resolution, Route, View, ROUTES};

use std::sync::Arc;

/// Entry point for programmatic access to the backend.
///
/// Built once at startup; every accessor it hands out shares the same
/// [`ApiClient`].
#[derive(Debug, Clone)]
pub struct FintrackApi {
    client: ApiClient,
}

impl FintrackApi {
    /// Create an API whose failed requests are written to the log.
    pub fn new(config: ClientConfig) -> Result<Self> {
        Ok(Self::from_client(ApiClient::new(&config)?))
    }

    /// Create an API configured from `FINTRACK_API_URL`.
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env())
    }

    /// Create an API with a custom response interceptor.
    pub fn with_interceptor(
        config: ClientConfig,
        interceptor: Arc<dyn ResponseInterceptor>,
    ) -> Result<Self> {
        Ok(Self::from_client(ApiClient::with_interceptor(
            &config,
            interceptor,
        )?))
    }

    pub fn from_client(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// The effective base URL, including `/api`.
    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    pub fn categories(&self) -> Categories {
        Categories::new(self.client.clone())
    }

    pub fn transactions(&self) -> Transactions {
        Transactions::new(self.client.clone())
    }

    pub fn debts(&self) -> Debts {
        Debts::new(self.client.clone())
    }

    pub fn wishlists(&self) -> Wishlists {
        Wishlists::new(self.client.clone())
    }

    pub fn investments(&self) -> Investments {
        Investments::new(self.client.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors_share_client_base() {
        let api = FintrackApi::new(ClientConfig::new("https://money.internal/")).unwrap();
        assert_eq!(api.base_url(), "https://money.internal/api");
        assert_eq!(api.categories().collection(), "/categories");
        assert_eq!(api.transactions().collection(), "/transactions");
        assert_eq!(api.debts().collection(), "/debts");
        assert_eq!(api.wishlists().collection(), "/wishlist");
        assert_eq!(api.investments().collection(), "/invesments");
    }
}
