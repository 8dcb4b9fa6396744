//! Partial-update merge policy.
//!
//! A patch carries an optional value per field. Merging validates each
//! supplied field against the same rules as creation, keeps the stored
//! value for each absent field, and fails as a whole on the first invalid
//! field — a rejected patch never partially applies.

use serde::{Deserialize, Serialize};

use crate::product::{NewProduct, ProductFields, ProductRecord};
use crate::validate::{self, ValidationError};

/// A partial update: absent fields keep their stored values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductPatch {
    /// Replacement name, if supplied.
    pub name: Option<String>,

    /// Replacement quantity, if supplied.
    pub quantity: Option<i64>,

    /// Replacement price, if supplied.
    pub price: Option<f64>,
}

impl ProductPatch {
    /// Whether the patch supplies no fields at all.
    ///
    /// Merging an empty patch yields the stored record unchanged.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.quantity.is_none() && self.price.is_none()
    }
}

/// Validate a full field set for creation.
///
/// Fields are checked in declaration order (name, quantity, price) and the
/// first failure is returned.
///
/// # Errors
///
/// Returns the [`ValidationError`] for the first invalid field.
pub fn apply_create(fields: &ProductFields) -> Result<NewProduct, ValidationError> {
    Ok(NewProduct {
        name: validate::validate_name(&fields.name)?,
        quantity: validate::validate_quantity(fields.quantity)?,
        price: validate::validate_price(fields.price)?,
    })
}

/// Merge a patch over a stored record.
///
/// Each supplied field is validated exactly as on creation; each absent
/// field keeps the stored value. The stored record is never mutated, so a
/// rejected patch leaves it untouched. Field checks run in declaration
/// order and the first failure is returned.
///
/// # Errors
///
/// Returns the [`ValidationError`] for the first invalid supplied field.
pub fn apply_update(
    current: &ProductRecord,
    patch: &ProductPatch,
) -> Result<ProductRecord, ValidationError> {
    let name = match &patch.name {
        Some(raw) => validate::validate_name(raw)?,
        None => current.name.clone(),
    };

    let quantity = match patch.quantity {
        Some(raw) => validate::validate_quantity(raw)?,
        None => current.quantity,
    };

    let price = match patch.price {
        Some(raw) => validate::validate_price(raw)?,
        None => current.price,
    };

    Ok(ProductRecord {
        id: current.id,
        name,
        quantity,
        price,
    })
}
