//! # Payments Types
//!
//! Domain types, validation rules and port traits for the payments gateway.
//! This crate has ZERO IO dependencies - only data structures,
//! business rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain values (PaymentRequest, PaymentResult, PaymentReference)
//! - `validation/` - Structural rules a payment request must satisfy
//! - `ports/` - Trait definitions that adapters must implement
//! - `dto/` - Data Transfer Objects for API boundaries
//! - `error/` - Domain and application error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;
pub mod validation;

// Re-export commonly used types
pub use domain::{AmountError, PaymentReference, PaymentRequest, PaymentResult, PaymentStatus};
pub use dto::*;
pub use error::{AppError, ValidationError};
pub use ports::{
    ReferenceGenerator, ReferenceScheme, TimestampReferenceGenerator, UnknownReferenceScheme,
    UuidReferenceGenerator,
};
pub use validation::RequestValidator;
