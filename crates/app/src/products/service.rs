//! Products service.

use async_trait::async_trait;
use mockall::automock;
use stockroom::{
    ProductFields, ProductId, ProductPatch, ProductRecord, apply_create, apply_update,
};
use tracing::info;

use crate::products::{errors::ProductsServiceError, store::ProductStore};

/// Service applying the validation and merge policies in front of a
/// [`ProductStore`].
///
/// Every facade goes through this type, so a product accepted over one
/// surface is exactly the product every other surface reads back.
#[derive(Debug, Clone)]
pub struct StoreProductsService<S> {
    store: S,
}

impl<S> StoreProductsService<S> {
    #[must_use]
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S: ProductStore> ProductsService for StoreProductsService<S> {
    #[tracing::instrument(name = "products.service.list_products", skip(self), err)]
    async fn list_products(&self) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        let products = self.store.list_all().await?;

        Ok(products)
    }

    #[tracing::instrument(name = "products.service.get_product", skip(self), err)]
    async fn get_product(&self, id: ProductId) -> Result<ProductRecord, ProductsServiceError> {
        let product = self.store.get(id).await?;

        Ok(product)
    }

    #[tracing::instrument(name = "products.service.create_product", skip(self, fields), err)]
    async fn create_product(
        &self,
        fields: ProductFields,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let accepted = apply_create(&fields)?;

        let created = self.store.insert(accepted).await?;

        info!(product_id = %created.id, "created product");

        Ok(created)
    }

    #[tracing::instrument(name = "products.service.update_product", skip(self, patch), err)]
    async fn update_product(
        &self,
        id: ProductId,
        patch: ProductPatch,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let current = self.store.get(id).await?;

        // Nothing supplied: the stored record is already the answer.
        if patch.is_empty() {
            return Ok(current);
        }

        let merged = apply_update(&current, &patch)?;

        let updated = self.store.replace(merged).await?;

        info!(product_id = %updated.id, "updated product");

        Ok(updated)
    }

    #[tracing::instrument(name = "products.service.delete_product", skip(self), err)]
    async fn delete_product(&self, id: ProductId) -> Result<(), ProductsServiceError> {
        self.store.delete(id).await?;

        info!(product_id = %id, "deleted product");

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves all products in ascending id order.
    async fn list_products(&self) -> Result<Vec<ProductRecord>, ProductsServiceError>;

    /// Retrieve a single product.
    async fn get_product(&self, id: ProductId) -> Result<ProductRecord, ProductsServiceError>;

    /// Validate a full field set and persist the accepted product.
    async fn create_product(
        &self,
        fields: ProductFields,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Merge a patch over the stored product, validating supplied fields.
    ///
    /// An empty patch is a no-op that returns the stored product.
    async fn update_product(
        &self,
        id: ProductId,
        patch: ProductPatch,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Delete a product.
    async fn delete_product(&self, id: ProductId) -> Result<(), ProductsServiceError>;
}
