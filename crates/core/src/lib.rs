//! Stockroom
//!
//! Shared inventory domain core: the product record, the field validation
//! policy, and the partial-update merge policy. This crate is pure — no IO,
//! no async, no logging — so every facade (REST, RPC, operator console)
//! applies exactly the same rules.

pub mod merge;
pub mod product;
pub mod validate;

pub use merge::{ProductPatch, apply_create, apply_update};
pub use product::{NewProduct, ProductFields, ProductId, ProductRecord};
pub use validate::ValidationError;
