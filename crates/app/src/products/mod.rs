//! Products

pub mod errors;
pub mod memory;
pub mod postgres;
pub mod service;
pub mod store;

pub use errors::ProductsServiceError;
pub use memory::MemoryProductStore;
pub use postgres::PgProductStore;
pub use service::*;
pub use store::{MockProductStore, ProductStore, StoreError};
