//! Product storage interface.

use async_trait::async_trait;
use mockall::automock;
use stockroom::{NewProduct, ProductId, ProductRecord};
use thiserror::Error;

/// Why a storage operation failed.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No stored product carries the requested id.
    #[error("product not found")]
    NotFound,

    /// The backend could not execute the operation.
    #[error("product store unavailable")]
    Unavailable(#[source] sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(error: sqlx::Error) -> Self {
        if matches!(error, sqlx::Error::RowNotFound) {
            return Self::NotFound;
        }

        Self::Unavailable(error)
    }
}

/// Storage contract every product backend satisfies.
///
/// The store assigns identifiers on insert; callers never pick them, and an
/// id is not reused within the store's lifetime even after deletion.
#[automock]
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Persist an accepted product and return it with its assigned id.
    async fn insert(&self, product: NewProduct) -> Result<ProductRecord, StoreError>;

    /// Fetch a single product by id.
    async fn get(&self, id: ProductId) -> Result<ProductRecord, StoreError>;

    /// Fetch every stored product in ascending id order.
    async fn list_all(&self) -> Result<Vec<ProductRecord>, StoreError>;

    /// Overwrite the stored product carrying the record's id.
    async fn replace(&self, product: ProductRecord) -> Result<ProductRecord, StoreError>;

    /// Remove a product by id.
    async fn delete(&self, id: ProductId) -> Result<(), StoreError>;
}
