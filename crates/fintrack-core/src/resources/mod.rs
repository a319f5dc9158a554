//! Resource accessors for the Fintrack backend.
//!
//! Each backend collection gets one accessor type exposing the five CRUD
//! operations through [`ResourceAccessor`], plus any collection-specific
//! read endpoints:
//! - [`Categories`] - `/categories`
//! - [`Transactions`] - `/transactions`, plus weekly and expense-category reports
//! - [`Debts`] - `/debts`, plus the top debts report
//! - [`Wishlists`] - `/wishlist`
//! - [`Investments`] - `/invesments`
//!
//! Accessors are stateless. They validate nothing locally; the backend is the
//! only authority on required fields and id existence.

mod categories;
mod debts;
mod investments;
mod transactions;
mod wishlists;

pub use categories::Categories;
pub use debts::Debts;
pub use investments::Investments;
pub use transactions::Transactions;
pub use wishlists::Wishlists;

use crate::client::{decode, ApiClient, Payload};
use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Display;

/// CRUD operations against one backend collection.
#[derive(Debug, Clone)]
pub struct ResourceAccessor {
    client: ApiClient,
    collection: &'static str,
}

impl ResourceAccessor {
    /// Bind a client to a collection path such as `/debts`.
    pub fn new(client: ApiClient, collection: &'static str) -> Self {
        Self { client, collection }
    }

    /// The collection path, relative to the API base.
    pub fn collection(&self) -> &'static str {
        self.collection
    }

    pub(crate) fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Path of a single member of the collection.
    pub fn member_path(&self, id: impl Display) -> String {
        let id = id.to_string();
        format!("{}/{}", self.collection, urlencoding::encode(&id))
    }

    /// Path of a fixed sub-resource such as `/debts/top`.
    pub(crate) fn sub_path(&self, segment: &str) -> String {
        format!("{}/{}", self.collection, segment)
    }

    /// `GET /<resource>`
    pub async fn get_all(&self) -> Result<Payload> {
        self.client.get(self.collection).await
    }

    /// `GET /<resource>/<id>`
    pub async fn get_by_id(&self, id: impl Display) -> Result<Payload> {
        self.client.get(&self.member_path(id)).await
    }

    /// `POST /<resource>` with `data` as the JSON body.
    pub async fn create<B: Serialize + ?Sized>(&self, data: &B) -> Result<Payload> {
        self.client.post(self.collection, data).await
    }

    /// `PUT /<resource>/<id>` with `data` as the JSON body.
    pub async fn update<B: Serialize + ?Sized>(&self, id: impl Display, data: &B) -> Result<Payload> {
        self.client.put(&self.member_path(id), data).await
    }

    /// `DELETE /<resource>/<id>`
    pub async fn delete(&self, id: impl Display) -> Result<Payload> {
        self.client.delete(&self.member_path(id)).await
    }

    /// Like [`get_all`](Self::get_all), decoded into `T`.
    pub async fn get_all_as<T: DeserializeOwned>(&self) -> Result<T> {
        decode(self.get_all().await?)
    }

    /// Like [`get_by_id`](Self::get_by_id), decoded into `T`.
    pub async fn get_by_id_as<T: DeserializeOwned>(&self, id: impl Display) -> Result<T> {
        decode(self.get_by_id(id).await?)
    }
}
