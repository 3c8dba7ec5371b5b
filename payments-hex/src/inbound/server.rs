//! HTTP Server configuration and startup.

use std::net::SocketAddr;
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router, middleware,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use payments_types::ReferenceGenerator;

use super::handlers::{self, AppState};
use super::rate_limit::{RateLimiterState, rate_limit_middleware};
use crate::PaymentProcessor;

/// Prefix shared by every API route.
pub const API_PREFIX: &str = "/api/v1";

/// Full path of the health check, exempt from rate limiting.
pub const HEALTH_PATH: &str = "/api/v1/healthz";

/// Interval between background sweeps of idle rate-limit buckets.
const SWEEP_INTERVAL: Duration = Duration::from_secs(60);

/// HTTP Server for the Payments API.
pub struct HttpServer<G: ReferenceGenerator> {
    state: Arc<AppState<G>>,
    rate_limiter: Arc<RateLimiterState>,
}

impl<G: ReferenceGenerator + 'static> HttpServer<G> {
    /// Creates a new HTTP server with the given processor.
    pub fn new(processor: PaymentProcessor<G>) -> Self {
        Self {
            state: Arc::new(AppState { processor }),
            rate_limiter: Arc::new(RateLimiterState::default()), // 100 req/min default
        }
    }

    /// Creates a new HTTP server with custom rate limiting.
    pub fn with_rate_limit(processor: PaymentProcessor<G>, requests_per_minute: NonZeroU32) -> Self {
        Self::with_rate_limiter(processor, RateLimiterState::new(requests_per_minute))
    }

    /// Creates a new HTTP server with a fully configured rate limiter.
    pub fn with_rate_limiter(processor: PaymentProcessor<G>, rate_limiter: RateLimiterState) -> Self {
        Self {
            state: Arc::new(AppState { processor }),
            rate_limiter: Arc::new(rate_limiter),
        }
    }

    /// Returns the shared rate limiter state.
    pub fn rate_limiter(&self) -> Arc<RateLimiterState> {
        self.rate_limiter.clone()
    }

    /// Builds the Axum router with all routes.
    pub fn router(&self) -> Router {
        // Build HTTP metrics layer (uses globally set MeterProvider)
        let metrics = axum_otel_metrics::HttpMetricsLayerBuilder::new().build();

        let api = Router::new()
            .route("/healthz", get(handlers::health))
            .route("/payments", post(handlers::process_payment::<G>))
            .route("/payments/echo", post(handlers::echo))
            .route("/openapi.json", get(handlers::openapi));

        Router::new()
            .nest(API_PREFIX, api)
            .layer(metrics)
            .layer(middleware::from_fn_with_state(
                self.rate_limiter.clone(),
                rate_limit_middleware,
            ))
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Runs the server on the given address with graceful shutdown.
    ///
    /// Peer addresses are attached to every request for rate limiting.
    pub async fn run(self, addr: &str) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("Server listening on {}", listener.local_addr()?);

        let rate_limiter = self.rate_limiter.clone();
        let sweeper = tokio::spawn(async move {
            let mut interval = tokio::time::interval(SWEEP_INTERVAL);
            loop {
                interval.tick().await;
                rate_limiter.sweep();
                tracing::debug!(clients = rate_limiter.tracked_clients(), "Rate limiter swept");
            }
        });

        let result = axum::serve(
            listener,
            self.router()
                .into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(shutdown_signal())
        .await;

        sweeper.abort();
        result?;
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}
