//! Error types for the payments gateway.

/// Validation failures for a payment request.
///
/// Each variant names exactly one offending field. The validator stops at
/// the first violated rule, so a request never carries more than one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("payerId is required")]
    MissingPayerId,

    #[error("payeeId is required")]
    MissingPayeeId,

    #[error("amount must be > 0")]
    NonPositiveAmount,

    #[error("currency is required")]
    MissingCurrency,
}

impl ValidationError {
    /// Returns the wire name of the field that failed validation.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::MissingPayerId => "payerId",
            ValidationError::MissingPayeeId => "payeeId",
            ValidationError::NonPositiveAmount => "amount",
            ValidationError::MissingCurrency => "currency",
        }
    }
}

/// Application-level errors (for HTTP responses).
///
/// Maps cleanly to HTTP status codes. Processing has no infrastructure
/// behind it, so every failure is the caller's.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}
