//! Debts owed and lent.

use super::ResourceAccessor;
use crate::client::{ApiClient, Payload};
use crate::error::Result;
use std::ops::Deref;

/// Accessor for `/debts`.
#[derive(Debug, Clone)]
pub struct Debts(ResourceAccessor);

impl Debts {
    pub const COLLECTION: &'static str = "/debts";

    pub fn new(client: ApiClient) -> Self {
        Self(ResourceAccessor::new(client, Self::COLLECTION))
    }

    /// `GET /debts/top`: the largest outstanding debts, ranked by the backend.
    pub async fn get_top_debts(&self) -> Result<Payload> {
        self.client().get(&self.sub_path("top")).await
    }
}

impl Deref for Debts {
    type Target = ResourceAccessor;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
