//! Product field rules.
//!
//! The `products` table carries no CHECK constraints, so every write goes
//! through [`validate_product`] first. Inputs arrive as loosely typed JSON
//! (numbers or numeric strings are both accepted) and leave as
//! [`ProductFields`] with strong types.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use serde_json::Value;

use crate::error::CoreError;

/// Message returned when name, price, or stock is missing.
pub const MSG_REQUIRED: &str = "Name, price, and stock are required.";

/// Message returned when price or stock is out of range or not numeric.
pub const MSG_NUMERIC: &str =
    "Price must be a positive number and stock must be a non-negative integer.";

/// Decimal places stored for `price` (`NUMERIC(10, 2)`).
pub const PRICE_SCALE: u32 = 2;

/// Largest price representable by `NUMERIC(10, 2)`.
pub fn max_price() -> Decimal {
    Decimal::new(99_999_999_99, PRICE_SCALE)
}

/// Validated product fields, ready to be persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductFields {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub stock: i32,
}

/// Validate raw product fields.
///
/// Presence is checked first (absent, `null`, and empty strings all count
/// as missing), then types and ranges.
pub fn validate_product(
    name: Option<&Value>,
    description: Option<&Value>,
    price: Option<&Value>,
    stock: Option<&Value>,
) -> Result<ProductFields, CoreError> {
    if is_missing(name) || is_missing(price) || is_missing(stock) {
        return Err(CoreError::Validation(MSG_REQUIRED.into()));
    }

    let name = match name {
        Some(Value::String(s)) if !s.trim().is_empty() => s.clone(),
        Some(Value::String(_)) => return Err(CoreError::Validation(MSG_REQUIRED.into())),
        _ => return Err(CoreError::Validation("Name must be a string.".into())),
    };

    let description = match description {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            return Err(CoreError::Validation(
                "Description must be a string.".into(),
            ))
        }
    };

    let price = price
        .and_then(parse_price)
        .ok_or_else(|| CoreError::Validation(MSG_NUMERIC.into()))?;
    let stock = stock
        .and_then(parse_stock)
        .ok_or_else(|| CoreError::Validation(MSG_NUMERIC.into()))?;

    Ok(ProductFields {
        name,
        description,
        price,
        stock,
    })
}

fn is_missing(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.trim().is_empty(),
        Some(_) => false,
    }
}

/// Parse a price from a JSON number or numeric string.
///
/// The result is rounded half-away-from-zero to two places and must be
/// strictly positive and fit the column.
pub fn parse_price(value: &Value) -> Option<Decimal> {
    let raw = match value {
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.trim().to_string(),
        _ => return None,
    };

    let parsed = raw
        .parse::<Decimal>()
        .or_else(|_| Decimal::from_scientific(&raw))
        .ok()?;
    let mut rounded =
        parsed.round_dp_with_strategy(PRICE_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(PRICE_SCALE);

    (rounded > Decimal::ZERO && rounded <= max_price()).then_some(rounded)
}

/// Parse a stock count from a JSON integer or integer string.
pub fn parse_stock(value: &Value) -> Option<i32> {
    let parsed = match value {
        Value::Number(n) => n.as_i64()?,
        Value::String(s) => s.trim().parse::<i64>().ok()?,
        _ => return None,
    };

    i32::try_from(parsed).ok().filter(|stock| *stock >= 0)
}
