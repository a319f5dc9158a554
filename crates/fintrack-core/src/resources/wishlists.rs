use super::ResourceAccessor;
use crate::client::ApiClient;
use std::ops::Deref;

/// Accessor for wishlist items.
///
/// The backend serves the collection under the singular `/wishlist` path even
/// though the dashboard route is `/wishlists`.
#[derive(Debug, Clone)]
pub struct Wishlists(ResourceAccessor);

impl Wishlists {
    pub const COLLECTION: &'static str = "/wishlist";

    pub fn new(client: ApiClient) -> Self {
        Self(ResourceAccessor::new(client, Self::COLLECTION))
    }
}

impl Deref for Wishlists {
    type Target = ResourceAccessor;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
