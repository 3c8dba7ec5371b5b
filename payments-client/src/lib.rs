//! # Payments Client SDK
//!
//! A typed Rust client for the Payments Gateway API.

use payments_types::{EchoResponse, HealthResponse, PaymentRequest, PaymentResult};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Payments API client.
#[derive(Debug, Clone)]
pub struct PaymentsClient {
    base_url: String,
    http: Client,
}

impl PaymentsClient {
    /// Creates a new client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Checks if the API is healthy.
    pub async fn health(&self) -> Result<bool, ClientError> {
        let resp = self
            .http
            .get(self.url("/api/v1/healthz"))
            .send()
            .await?;
        if !resp.status().is_success() {
            return Ok(false);
        }
        let body: HealthResponse = serde_json::from_str(&resp.text().await?)?;
        Ok(body.status == "ok")
    }

    /// Sends a JSON object to the echo endpoint and returns what came back.
    pub async fn echo(&self, payload: Map<String, Value>) -> Result<Map<String, Value>, ClientError> {
        let resp: EchoResponse = self.post("/api/v1/payments/echo", &payload).await?;
        Ok(resp.received)
    }

    /// Submits a payment for processing.
    pub async fn process_payment(&self, req: &PaymentRequest) -> Result<PaymentResult, ClientError> {
        self.post("/api/v1/payments", req).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post<T: DeserializeOwned, B: serde::Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let resp = self.http.post(self.url(path)).json(body).send().await?;
        self.handle_response(resp).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            Ok(serde_json::from_str(&body)?)
        } else {
            let body = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<Value>(&body)
                .ok()
                .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
                .unwrap_or(body);
            Err(ClientError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}
