//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Map, Value};
use utoipa::OpenApi;

use payments_types::{
    AppError, EchoResponse, ErrorResponse, HealthResponse, PaymentRequest, ReferenceGenerator,
    ValidationError,
};

use crate::PaymentProcessor;
use crate::openapi::ApiDoc;

/// Application state shared across handlers.
pub struct AppState<G: ReferenceGenerator> {
    pub processor: PaymentProcessor<G>,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError(err.into())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text()).into()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self.0 {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
        };

        let body = ErrorResponse {
            error: message,
            code: status.as_u16(),
        };

        (status, Json(body)).into_response()
    }
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse::ok())
}

/// Echo the caller's JSON object back, wrapped in `received`.
///
/// Key order and number text survive the round trip (serde_json is built
/// with `preserve_order` and `arbitrary_precision`).
pub async fn echo(
    payload: Result<Json<Map<String, Value>>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(received) = payload?;
    Ok(Json(EchoResponse { received }))
}

/// Validate and accept a payment.
#[tracing::instrument(skip(state, payload))]
pub async fn process_payment<G: ReferenceGenerator + 'static>(
    State(state): State<Arc<AppState<G>>>,
    payload: Result<Json<PaymentRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) = payload?;
    let result = state.processor.process(&req)?;
    Ok(Json(result))
}

/// Serve the OpenAPI document.
pub async fn openapi() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}
