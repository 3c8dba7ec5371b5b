//! # Payments Hex
//!
//! Payment processor service and HTTP adapter for the payments gateway.
//!
//! ## Architecture
//!
//! - `service/` - Application service (validates, then accepts payments)
//! - `inbound/` - HTTP adapter (Axum server)
//! - `openapi/` - OpenAPI document served by the adapter
//!
//! The processor is generic over `G: ReferenceGenerator`, allowing
//! different reference schemes to be injected.

pub mod inbound;
pub mod openapi;
pub mod service;

#[cfg(test)]
mod service_tests;

pub use service::PaymentProcessor;
