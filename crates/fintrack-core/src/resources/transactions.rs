//! Income and expense transactions.
//!
//! Besides plain CRUD the backend exposes two report endpoints used by the
//! dashboard:
//! - `/transactions/weekly` - totals for the current week
//! - `/transactions/expense-categories` - expenses grouped by category

use super::ResourceAccessor;
use crate::client::{ApiClient, Payload};
use crate::error::Result;
use std::ops::Deref;

/// Accessor for `/transactions`.
#[derive(Debug, Clone)]
pub struct Transactions(ResourceAccessor);

impl Transactions {
    pub const COLLECTION: &'static str = "/transactions";

    pub fn new(client: ApiClient) -> Self {
        Self(ResourceAccessor::new(client, Self::COLLECTION))
    }

    /// `GET /transactions/weekly`
    pub async fn get_weekly(&self) -> Result<Payload> {
        self.client().get(&self.sub_path("weekly")).await
    }

    /// `GET /transactions/expense-categories`
    pub async fn get_expense_categories(&self) -> Result<Payload> {
        self.client().get(&self.sub_path("expense-categories")).await
    }
}

impl Deref for Transactions {
    type Target = ResourceAccessor;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
