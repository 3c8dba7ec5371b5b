//! Reference generator port.
//!
//! The processor asks this port for the reference attached to an accepted
//! payment. Implementations must be safe to call concurrently.

use std::str::FromStr;

use chrono::Utc;
use uuid::Uuid;

use crate::domain::PaymentReference;

/// Port trait for producing payment references.
pub trait ReferenceGenerator: Send + Sync {
    /// Produces the reference for the next accepted payment.
    fn next_reference(&self) -> PaymentReference;
}

impl<G: ReferenceGenerator + ?Sized> ReferenceGenerator for Box<G> {
    fn next_reference(&self) -> PaymentReference {
        (**self).next_reference()
    }
}

impl<G: ReferenceGenerator + ?Sized> ReferenceGenerator for std::sync::Arc<G> {
    fn next_reference(&self) -> PaymentReference {
        (**self).next_reference()
    }
}

/// Random v4 UUID references: `REF-<32 hex digits>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidReferenceGenerator;

impl ReferenceGenerator for UuidReferenceGenerator {
    fn next_reference(&self) -> PaymentReference {
        PaymentReference::with_suffix(Uuid::new_v4().simple())
    }
}

/// Wall-clock references: `REF-<unix epoch millis>`.
///
/// Two payments accepted within the same millisecond get the same
/// reference. Only use where callers do not rely on uniqueness.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimestampReferenceGenerator;

impl ReferenceGenerator for TimestampReferenceGenerator {
    fn next_reference(&self) -> PaymentReference {
        PaymentReference::with_suffix(Utc::now().timestamp_millis())
    }
}

/// Selects which generator backs the processor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReferenceScheme {
    #[default]
    Uuid,
    Timestamp,
}

impl ReferenceScheme {
    /// Builds the generator for this scheme.
    pub fn generator(self) -> Box<dyn ReferenceGenerator> {
        match self {
            ReferenceScheme::Uuid => Box::new(UuidReferenceGenerator),
            ReferenceScheme::Timestamp => Box::new(TimestampReferenceGenerator),
        }
    }
}

impl std::fmt::Display for ReferenceScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReferenceScheme::Uuid => write!(f, "uuid"),
            ReferenceScheme::Timestamp => write!(f, "timestamp"),
        }
    }
}

/// Error returned when parsing an unknown reference scheme.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown reference scheme: {0}. Supported: uuid, timestamp")]
pub struct UnknownReferenceScheme(pub String);

impl FromStr for ReferenceScheme {
    type Err = UnknownReferenceScheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "uuid" => Ok(ReferenceScheme::Uuid),
            "timestamp" => Ok(ReferenceScheme::Timestamp),
            _ => Err(UnknownReferenceScheme(s.to_string())),
        }
    }
}
