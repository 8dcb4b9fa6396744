//! Products service errors.

use stockroom::ValidationError;
use thiserror::Error;

use crate::products::store::StoreError;

#[derive(Debug, Error)]
pub enum ProductsServiceError {
    /// A supplied field failed validation; nothing was written.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No product with the requested id.
    #[error("product not found")]
    NotFound,

    /// The storage backend failed.
    #[error("product store unavailable")]
    Unavailable(#[source] StoreError),
}

impl From<StoreError> for ProductsServiceError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::NotFound => Self::NotFound,
            other => Self::Unavailable(other),
        }
    }
}
