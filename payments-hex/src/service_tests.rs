//! PaymentProcessor unit tests.

use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use rust_decimal_macros::dec;

use payments_types::{
    PaymentReference, PaymentRequest, PaymentStatus, ReferenceGenerator, ReferenceScheme,
    ValidationError,
};

use crate::PaymentProcessor;

/// Deterministic generator that counts how many references were drawn.
struct SequenceGenerator {
    next: AtomicUsize,
}

impl SequenceGenerator {
    fn new() -> Self {
        Self {
            next: AtomicUsize::new(1),
        }
    }

    fn issued(&self) -> usize {
        self.next.load(Ordering::SeqCst) - 1
    }
}

impl ReferenceGenerator for SequenceGenerator {
    fn next_reference(&self) -> PaymentReference {
        PaymentReference::with_suffix(self.next.fetch_add(1, Ordering::SeqCst))
    }
}

fn alice_pays_bob() -> PaymentRequest {
    PaymentRequest::new("alice", "bob", dec!(10.00), "USD")
}

#[test]
fn test_process_valid_request_is_accepted() {
    let processor = PaymentProcessor::with_generator(SequenceGenerator::new());

    let result = processor.process(&alice_pays_bob()).unwrap();

    assert_eq!(result.status, PaymentStatus::Accepted);
    assert_eq!(result.reference.as_str(), "REF-1");
}

#[test]
fn test_process_default_processor_issues_ref_prefix() {
    let processor = PaymentProcessor::new();

    let result = processor.process(&alice_pays_bob()).unwrap();

    assert_eq!(result.status, PaymentStatus::Accepted);
    assert!(result.reference.as_str().starts_with("REF-"));
    assert!(result.reference.as_str().len() > "REF-".len());
}

#[test]
fn test_process_empty_payer_fails() {
    let processor = PaymentProcessor::new();
    let req = PaymentRequest {
        payer_id: Some(String::new()),
        ..alice_pays_bob()
    };

    let err = processor.process(&req).unwrap_err();

    assert_eq!(err, ValidationError::MissingPayerId);
    assert_eq!(err.to_string(), "payerId is required");
}

#[test]
fn test_process_zero_amount_fails() {
    let processor = PaymentProcessor::new();
    let req = PaymentRequest {
        amount: Some(dec!(0)),
        ..alice_pays_bob()
    };

    let err = processor.process(&req).unwrap_err();

    assert_eq!(err.to_string(), "amount must be > 0");
}

#[test]
fn test_process_negative_amount_fails() {
    let processor = PaymentProcessor::new();
    let req = PaymentRequest {
        amount: Some(dec!(-10.00)),
        ..alice_pays_bob()
    };

    assert_eq!(
        processor.process(&req),
        Err(ValidationError::NonPositiveAmount)
    );
}

#[test]
fn test_process_blank_payee_and_currency_fail() {
    let processor = PaymentProcessor::new();

    let req = PaymentRequest {
        payee_id: Some("  ".into()),
        ..alice_pays_bob()
    };
    assert_eq!(processor.process(&req), Err(ValidationError::MissingPayeeId));

    let req = PaymentRequest {
        currency: None,
        ..alice_pays_bob()
    };
    assert_eq!(
        processor.process(&req),
        Err(ValidationError::MissingCurrency)
    );
}

#[test]
fn test_rejected_request_draws_no_reference() {
    let processor = PaymentProcessor::with_generator(SequenceGenerator::new());

    let _ = processor.process(&PaymentRequest::default());
    assert_eq!(processor.references().issued(), 0);

    processor.process(&alice_pays_bob()).unwrap();
    assert_eq!(processor.references().issued(), 1);
}

#[test]
fn test_identical_requests_get_distinct_references() {
    let processor = PaymentProcessor::new();
    let req = alice_pays_bob();

    let first = processor.process(&req).unwrap();
    let second = processor.process(&req).unwrap();

    assert_ne!(first.reference, second.reference);
}

#[test]
fn test_processor_from_configured_scheme() {
    let processor = PaymentProcessor::with_generator(ReferenceScheme::Timestamp.generator());

    let result = processor.process(&alice_pays_bob()).unwrap();

    let suffix = result.reference.as_str().strip_prefix("REF-").unwrap();
    assert!(suffix.parse::<i64>().is_ok());
}

#[tokio::test]
async fn test_concurrent_processing_shares_one_processor() {
    let processor = Arc::new(PaymentProcessor::new());

    let handles: Vec<_> = (0..32)
        .map(|_| {
            let processor = processor.clone();
            tokio::spawn(async move { processor.process(&alice_pays_bob()).unwrap() })
        })
        .collect();

    let mut refs = HashSet::new();
    for handle in handles {
        refs.insert(handle.await.unwrap().reference);
    }
    assert_eq!(refs.len(), 32);
}
