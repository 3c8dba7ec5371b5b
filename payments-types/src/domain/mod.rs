//! Domain models for the payments gateway.

pub mod amount;
pub mod payment;
pub mod reference;

pub use amount::AmountError;
pub use payment::{PaymentRequest, PaymentResult, PaymentStatus};
pub use reference::PaymentReference;
