//! Opaque reference handed back for an accepted payment.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Identifies an accepted payment attempt.
///
/// Always carries the `REF-` prefix. The remainder depends on the
/// generator that produced it and must be treated as opaque by callers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = String, example = "REF-3f2b8c1e9a4d4e6fb0c2d7a15e9f0b44")]
pub struct PaymentReference(String);

impl PaymentReference {
    /// Prefix shared by every reference.
    pub const PREFIX: &'static str = "REF-";

    /// Builds a reference from the generator-specific suffix.
    pub fn with_suffix(suffix: impl std::fmt::Display) -> Self {
        Self(format!("{}{}", Self::PREFIX, suffix))
    }

    /// Returns the full reference string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the reference, returning the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for PaymentReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
