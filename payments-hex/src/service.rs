//! Payment Processor Application Service
//!
//! Validates payment requests and accepts the valid ones.
//! Contains NO infrastructure logic - pure business orchestration.

use payments_types::{
    PaymentRequest, PaymentResult, ReferenceGenerator, RequestValidator, UuidReferenceGenerator,
    ValidationError,
};

/// Application service for payment processing.
///
/// Generic over `G: ReferenceGenerator` - the reference scheme is injected.
/// The processor holds no mutable state, so a single instance can be shared
/// across concurrent requests without locking.
pub struct PaymentProcessor<G: ReferenceGenerator = UuidReferenceGenerator> {
    validator: RequestValidator,
    references: G,
}

impl PaymentProcessor<UuidReferenceGenerator> {
    /// Creates a processor issuing random UUID references.
    pub fn new() -> Self {
        Self::with_generator(UuidReferenceGenerator)
    }
}

impl Default for PaymentProcessor<UuidReferenceGenerator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: ReferenceGenerator> PaymentProcessor<G> {
    /// Creates a processor backed by the given reference generator.
    pub fn with_generator(references: G) -> Self {
        Self {
            validator: RequestValidator::new(),
            references,
        }
    }

    /// Returns the reference generator in use.
    pub fn references(&self) -> &G {
        &self.references
    }

    /// Validates the request and, if valid, accepts it.
    ///
    /// Validation failures are returned unchanged; no reference is drawn for
    /// a rejected request.
    #[tracing::instrument(
        skip(self, request),
        fields(payer_id = ?request.payer_id, payee_id = ?request.payee_id, currency = ?request.currency)
    )]
    pub fn process(&self, request: &PaymentRequest) -> Result<PaymentResult, ValidationError> {
        if let Err(e) = self.validator.validate(request) {
            tracing::warn!(field = e.field(), "Payment rejected: {}", e);
            return Err(e);
        }

        let result = PaymentResult::accepted(self.references.next_reference());
        tracing::info!(reference = %result.reference, "Payment accepted");
        Ok(result)
    }
}
