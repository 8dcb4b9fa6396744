//! In-memory product store.

use std::collections::BTreeMap;

use async_trait::async_trait;
use stockroom::{NewProduct, ProductId, ProductRecord};
use tokio::sync::Mutex;

use crate::products::store::{ProductStore, StoreError};

/// Process-local store for tests and single-process setups.
///
/// Identifiers count up from 1 and are never reused, so a deleted product's
/// id stays dead for the life of the store. Every operation either fully
/// succeeds or reports `NotFound`; this backend has no unavailable state.
#[derive(Debug, Default)]
pub struct MemoryProductStore {
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    last_id: i64,
    records: BTreeMap<i64, ProductRecord>,
}

impl MemoryProductStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    async fn insert(&self, product: NewProduct) -> Result<ProductRecord, StoreError> {
        let mut inner = self.inner.lock().await;

        inner.last_id += 1;

        let record = ProductRecord {
            id: ProductId::from_i64(inner.last_id),
            name: product.name,
            quantity: product.quantity,
            price: product.price,
        };

        let id = inner.last_id;
        inner.records.insert(id, record.clone());

        Ok(record)
    }

    async fn get(&self, id: ProductId) -> Result<ProductRecord, StoreError> {
        let inner = self.inner.lock().await;

        inner
            .records
            .get(&id.into_i64())
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn list_all(&self) -> Result<Vec<ProductRecord>, StoreError> {
        let inner = self.inner.lock().await;

        // BTreeMap iteration order is key order, so this is id-ascending.
        Ok(inner.records.values().cloned().collect())
    }

    async fn replace(&self, product: ProductRecord) -> Result<ProductRecord, StoreError> {
        let mut inner = self.inner.lock().await;

        let slot = inner
            .records
            .get_mut(&product.id.into_i64())
            .ok_or(StoreError::NotFound)?;

        slot.clone_from(&product);

        Ok(product)
    }

    async fn delete(&self, id: ProductId) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().await;

        inner
            .records
            .remove(&id.into_i64())
            .ok_or(StoreError::NotFound)?;

        Ok(())
    }
}
