//! Data Transfer Objects (DTOs) for requests and responses.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// Body returned by the health check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    pub status: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".into(),
        }
    }
}

/// Body returned by the echo endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EchoResponse {
    /// The JSON object the caller sent, unchanged
    #[schema(value_type = Object, example = json!({"hello": "world"}))]
    pub received: Map<String, Value>,
}

/// Error body returned for failed requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable reason
    #[schema(example = "payerId is required")]
    pub error: String,
    /// HTTP status code
    #[schema(example = 400)]
    pub code: u16,
}
