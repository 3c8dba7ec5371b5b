//! Structural validation of payment requests.

use rust_decimal::Decimal;

use crate::domain::PaymentRequest;
use crate::error::ValidationError;

/// Checks that a payment request is structurally valid.
///
/// Rules are evaluated in a fixed order and the first violation is
/// returned:
/// 1. `payerId` present and not blank
/// 2. `payeeId` present and not blank
/// 3. `amount` present and strictly positive
/// 4. `currency` present and not blank
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestValidator;

impl RequestValidator {
    pub fn new() -> Self {
        Self
    }

    /// Validates the request without modifying it.
    pub fn validate(&self, request: &PaymentRequest) -> Result<(), ValidationError> {
        if is_blank(request.payer_id.as_deref()) {
            return Err(ValidationError::MissingPayerId);
        }
        if is_blank(request.payee_id.as_deref()) {
            return Err(ValidationError::MissingPayeeId);
        }
        if !request.amount.is_some_and(|amount| amount > Decimal::ZERO) {
            return Err(ValidationError::NonPositiveAmount);
        }
        if is_blank(request.currency.as_deref()) {
            return Err(ValidationError::MissingCurrency);
        }
        Ok(())
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|s| s.trim().is_empty())
}
