//! Exact decoding of monetary amounts.
//!
//! JSON numbers are read from their original text (serde_json is built with
//! `arbitrary_precision`), never through `f64`. Anything that cannot be held
//! exactly by a `Decimal` is rejected rather than rounded.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, de::Error as _};
use serde_json::Value;

/// Largest scale a `Decimal` can carry.
const MAX_SCALE: u32 = 28;

/// Error returned when an amount cannot be decoded exactly.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("amount {amount} is not an exactly representable decimal: {reason}")]
pub struct AmountError {
    pub amount: String,
    pub reason: String,
}

impl AmountError {
    fn new(amount: &str, reason: impl Into<String>) -> Self {
        Self {
            amount: amount.to_string(),
            reason: reason.into(),
        }
    }
}

/// Parses a decimal literal, with optional exponent, without losing digits.
pub fn parse_exact(text: &str) -> Result<Decimal, AmountError> {
    let (mantissa, exponent) = match text.find(['e', 'E']) {
        Some(i) => {
            let exponent = text[i + 1..]
                .parse::<i32>()
                .map_err(|_| AmountError::new(text, "invalid exponent"))?;
            (&text[..i], exponent)
        }
        None => (text, 0),
    };

    let mut value =
        Decimal::from_str_exact(mantissa).map_err(|e| AmountError::new(text, e.to_string()))?;

    if exponent < 0 {
        let scale = value
            .scale()
            .checked_add(exponent.unsigned_abs())
            .filter(|s| *s <= MAX_SCALE)
            .ok_or_else(|| AmountError::new(text, "too many decimal places"))?;
        value
            .set_scale(scale)
            .map_err(|e| AmountError::new(text, e.to_string()))?;
    } else if exponent > 0 {
        if value.is_zero() {
            return Ok(Decimal::ZERO);
        }
        if exponent > MAX_SCALE as i32 {
            return Err(AmountError::new(text, "value too large"));
        }
        for _ in 0..exponent {
            value = value
                .checked_mul(Decimal::TEN)
                .ok_or_else(|| AmountError::new(text, "value too large"))?;
        }
    }

    Ok(value)
}

/// Deserializes an optional amount from a JSON number or decimal string.
///
/// `null` maps to `None`; every other JSON type is an error.
pub fn deserialize_exact<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::Number(n) => parse_exact(&n.to_string())
            .map(Some)
            .map_err(D::Error::custom),
        Value::String(s) => parse_exact(s.trim()).map(Some).map_err(D::Error::custom),
        other => Err(D::Error::custom(format!(
            "amount must be a number or a decimal string, got {}",
            other
        ))),
    }
}
