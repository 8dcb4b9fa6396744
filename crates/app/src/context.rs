//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    database,
    products::{PgProductStore, ProductsService, StoreProductsService},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),
}

#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
}

impl AppContext {
    /// Build application context from a database URL.
    ///
    /// Connects, bootstraps the schema, and wires the product service to a
    /// Postgres-backed store.
    ///
    /// # Errors
    ///
    /// Returns an error when connecting or bootstrapping the schema fails.
    pub async fn from_database_url(url: &str) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        PgProductStore::ensure_schema(&pool)
            .await
            .map_err(AppInitError::Database)?;

        Ok(Self {
            products: Arc::new(StoreProductsService::new(PgProductStore::new(pool))),
        })
    }
}
