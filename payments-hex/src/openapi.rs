//! OpenAPI specification and documentation.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use payments_types::domain::{PaymentReference, PaymentRequest, PaymentResult, PaymentStatus};
use payments_types::dto::{EchoResponse, ErrorResponse, HealthResponse};
use utoipa::OpenApi;

// Dummy functions to generate path documentation
// These are not the actual handlers, just for OpenAPI path generation

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/api/v1/healthz",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse, example = json!({"status": "ok"}))
    )
)]
async fn health() {}

/// Echo a JSON object back to the caller
#[utoipa::path(
    post,
    path = "/api/v1/payments/echo",
    tag = "diagnostics",
    request_body(content = inline(serde_json::Value), description = "Any JSON object"),
    responses(
        (status = 200, description = "The payload wrapped in `received`", body = EchoResponse),
        (status = 400, description = "Body is not a JSON object", body = ErrorResponse)
    )
)]
async fn echo() {}

/// Validate and accept a payment
#[utoipa::path(
    post,
    path = "/api/v1/payments",
    tag = "payments",
    request_body = PaymentRequest,
    responses(
        (status = 200, description = "Payment accepted", body = PaymentResult),
        (status = 400, description = "Validation failed or body not decodable", body = ErrorResponse, example = json!({"error": "payerId is required", "code": 400})),
        (status = 429, description = "Rate limit exceeded")
    )
)]
async fn process_payment() {}

/// OpenAPI documentation for the Payments API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Payments Gateway API",
        version = "1.0.0",
        description = "Validates payment requests and returns a reference for each accepted payment.\n\nThe gateway keeps no state: there is no ledger, no idempotency and no persistence. Two identical requests produce two independent acceptances.",
        license(name = "MIT"),
    ),
    paths(health, echo, process_payment),
    components(
        schemas(
            HealthResponse,
            EchoResponse,
            ErrorResponse,
            PaymentRequest,
            PaymentResult,
            PaymentStatus,
            PaymentReference,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "diagnostics", description = "Diagnostic endpoints"),
        (name = "payments", description = "Payment processing"),
    )
)]
pub struct ApiDoc;
