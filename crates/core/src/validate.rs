//! Field validation policy.
//!
//! Pure checks shared by every facade. Each function either returns the
//! accepted (normalized) value or the typed rejection for that field; no
//! function has side effects.

use thiserror::Error;

/// Maximum accepted name length, counted in characters after trimming.
pub const NAME_MAX_CHARS: usize = 100;

/// Inclusive lower quantity bound.
pub const QUANTITY_MIN: i64 = 0;

/// Inclusive upper quantity bound.
pub const QUANTITY_MAX: i64 = 10_000;

/// Inclusive lower price bound.
pub const PRICE_MIN: f64 = 0.0;

/// Inclusive upper price bound.
pub const PRICE_MAX: f64 = 1_000_000.0;

/// Why a supplied field set was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Name empty after trimming, or longer than [`NAME_MAX_CHARS`].
    #[error("name must be 1-100 characters after trimming")]
    BlankName,

    /// Quantity not an integer, or outside `[QUANTITY_MIN, QUANTITY_MAX]`.
    #[error("quantity must be an integer between 0 and 10000")]
    InvalidQuantity,

    /// Price not a number, or outside `[PRICE_MIN, PRICE_MAX]`.
    #[error("price must be a number between 0 and 1000000")]
    InvalidPrice,
}

/// Validate and normalize a product name.
///
/// Surrounding whitespace is trimmed before the length check, so a
/// whitespace-only name is rejected even though it is non-empty as typed.
///
/// # Errors
///
/// Returns [`ValidationError::BlankName`] when the trimmed name is empty
/// or longer than [`NAME_MAX_CHARS`] characters.
pub fn validate_name(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() || trimmed.chars().count() > NAME_MAX_CHARS {
        return Err(ValidationError::BlankName);
    }

    Ok(trimmed.to_owned())
}

/// Validate a quantity, narrowing it to the stored width.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidQuantity`] when the value falls
/// outside `[QUANTITY_MIN, QUANTITY_MAX]`. Bounds are inclusive.
pub fn validate_quantity(raw: i64) -> Result<i32, ValidationError> {
    if !(QUANTITY_MIN..=QUANTITY_MAX).contains(&raw) {
        return Err(ValidationError::InvalidQuantity);
    }

    i32::try_from(raw).map_err(|_ignored| ValidationError::InvalidQuantity)
}

/// Validate a price.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidPrice`] when the value is not finite
/// or falls outside `[PRICE_MIN, PRICE_MAX]`. Bounds are inclusive; NaN
/// fails the range containment check.
pub fn validate_price(raw: f64) -> Result<f64, ValidationError> {
    if !raw.is_finite() || !(PRICE_MIN..=PRICE_MAX).contains(&raw) {
        return Err(ValidationError::InvalidPrice);
    }

    Ok(raw)
}

/// Validate a quantity supplied as free text (the console facade's input).
///
/// # Errors
///
/// Returns [`ValidationError::InvalidQuantity`] when the text does not
/// parse as an integer or the parsed value is out of range.
pub fn parse_quantity(raw: &str) -> Result<i32, ValidationError> {
    let value: i64 = raw
        .trim()
        .parse()
        .map_err(|_ignored| ValidationError::InvalidQuantity)?;

    validate_quantity(value)
}

/// Validate a price supplied as free text (the console facade's input).
///
/// # Errors
///
/// Returns [`ValidationError::InvalidPrice`] when the text does not parse
/// as a number or the parsed value is out of range.
pub fn parse_price(raw: &str) -> Result<f64, ValidationError> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_ignored| ValidationError::InvalidPrice)?;

    validate_price(value)
}
