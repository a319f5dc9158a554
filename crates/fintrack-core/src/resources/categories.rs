//! Spending and income categories.

use super::ResourceAccessor;
use crate::client::ApiClient;
use std::ops::Deref;

/// Accessor for `/categories`.
#[derive(Debug, Clone)]
pub struct Categories(ResourceAccessor);

impl Categories {
    pub const COLLECTION: &'static str = "/categories";

    pub fn new(client: ApiClient) -> Self {
        Self(ResourceAccessor::new(client, Self::COLLECTION))
    }
}

impl Deref for Categories {
    type Target = ResourceAccessor;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
