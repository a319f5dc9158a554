//! Investment holdings.

use super::ResourceAccessor;
use crate::client::ApiClient;
use std::ops::Deref;

/// Accessor for investments.
///
/// The collection path keeps the backend's `/invesments` spelling; correcting
/// it here would break every request.
#[derive(Debug, Clone)]
pub struct Investments(ResourceAccessor);

impl Investments {
    pub const COLLECTION: &'static str = "/invesments";

    pub fn new(client: ApiClient) -> Self {
        Self(ResourceAccessor::new(client, Self::COLLECTION))
    }
}

impl Deref for Investments {
    type Target = ResourceAccessor;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
