//! Payment request and result values.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::amount;
use super::reference::PaymentReference;

/// A payment request as decoded from the caller.
///
/// Every field is optional on the wire so that an absent field surfaces as a
/// validation failure naming that field rather than as a decode error.
/// `amount` is an exact decimal; JSON numbers and decimal strings are both
/// accepted, and a value that would need rounding is a decode error.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    /// Identifier of the paying party
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "alice")]
    pub payer_id: Option<String>,
    /// Identifier of the receiving party
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "bob")]
    pub payee_id: Option<String>,
    /// Amount to pay, strictly greater than zero
    #[serde(
        default,
        deserialize_with = "amount::deserialize_exact",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<String>, example = "10.00")]
    pub amount: Option<Decimal>,
    /// Currency code, e.g. ISO 4217
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "USD")]
    pub currency: Option<String>,
}

impl PaymentRequest {
    /// Creates a request with every field populated.
    pub fn new(
        payer_id: impl Into<String>,
        payee_id: impl Into<String>,
        amount: Decimal,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            payer_id: Some(payer_id.into()),
            payee_id: Some(payee_id.into()),
            amount: Some(amount),
            currency: Some(currency.into()),
        }
    }
}

/// Outcome of processing a payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Accepted,
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentStatus::Accepted => write!(f, "ACCEPTED"),
        }
    }
}

/// Result handed back for an accepted payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PaymentResult {
    pub status: PaymentStatus,
    pub reference: PaymentReference,
}

impl PaymentResult {
    /// Builds an accepted result carrying the given reference.
    pub fn accepted(reference: PaymentReference) -> Self {
        Self {
            status: PaymentStatus::Accepted,
            reference,
        }
    }
}
