//! Product records.

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    num::ParseIntError,
    str::FromStr,
};

use serde::{Deserialize, Serialize};

/// Product identifier, assigned by the store on insertion and immutable
/// afterwards. The store never reassigns an id within its lifetime, even
/// after the product is deleted.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ProductId(i64);

impl ProductId {
    #[must_use]
    pub const fn from_i64(id: i64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn into_i64(self) -> i64 {
        self.0
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

impl From<i64> for ProductId {
    fn from(value: i64) -> Self {
        Self::from_i64(value)
    }
}

impl From<ProductId> for i64 {
    fn from(value: ProductId) -> Self {
        value.into_i64()
    }
}

impl FromStr for ProductId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>().map(Self::from_i64)
    }
}

/// A stored product row: the id plus the three caller-supplied fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Store-assigned identifier.
    pub id: ProductId,

    /// Display name, trimmed, 1–100 characters.
    pub name: String,

    /// Units on hand, 0–10000 inclusive.
    pub quantity: i32,

    /// Unit price, 0.0–1000000.0 inclusive.
    pub price: f64,
}

/// A validated product that has not been stored yet. There is deliberately
/// no id field: the store assigns one on insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    /// Trimmed display name.
    pub name: String,

    /// Units on hand.
    pub quantity: i32,

    /// Unit price.
    pub price: f64,
}

/// Raw create fields exactly as a caller supplied them, before validation.
/// Quantity is widened to `i64` so out-of-range wire values survive long
/// enough to be rejected with the right error.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductFields {
    /// Untrimmed name.
    pub name: String,

    /// Unvalidated quantity.
    pub quantity: i64,

    /// Unvalidated price.
    pub price: f64,
}
