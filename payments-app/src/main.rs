//! # Payments Application
//!
//! Binary that wires together all the components:
//! - Load configuration from environment
//! - Initialize tracing (and OTLP export when configured)
//! - Create the payment processor
//! - Start the HTTP server

mod config;

use opentelemetry::global;
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::{propagation::TraceContextPropagator, trace as sdktrace};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use payments_hex::{
    PaymentProcessor,
    inbound::{HttpServer, RateLimiterState},
};

fn init_tracer(endpoint: &str) -> anyhow::Result<(sdktrace::Tracer, sdktrace::SdkTracerProvider)> {
    global::set_text_map_propagator(TraceContextPropagator::new());

    // Use gRPC exporter with batch processing (non-blocking)
    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(endpoint)
        .build()?;

    let provider = sdktrace::SdkTracerProvider::builder()
        .with_batch_exporter(exporter)
        .build();

    global::set_tracer_provider(provider.clone());

    use opentelemetry::trace::TracerProvider as _;
    Ok((provider.tracer("payments-gateway"), provider))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Load configuration
    let config = config::Config::from_env()?;

    // Initialize OpenTelemetry tracing only when an OTLP endpoint is configured
    let otel = config
        .otlp_endpoint
        .as_deref()
        .map(init_tracer)
        .transpose()?;
    let telemetry = otel
        .as_ref()
        .map(|(tracer, _)| tracing_opentelemetry::layer().with_tracer(tracer.clone()));

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,payments_app=debug,payments_hex=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .with(telemetry)
        .init();

    tracing::info!("Starting payments gateway on {}", config.bind_addr());
    tracing::info!(
        reference_scheme = %config.reference_scheme,
        rate_limit_per_minute = config.rate_limit_per_minute.get(),
        trusted_proxies = ?config.trusted_proxies,
        otlp = config.otlp_endpoint.is_some(),
        "Configuration loaded"
    );

    // Create the payment processor
    let processor = PaymentProcessor::with_generator(config.reference_scheme.generator());

    // Create and run the HTTP server
    let rate_limiter = RateLimiterState::new(config.rate_limit_per_minute)
        .with_trusted_proxies(config.trusted_proxies.clone());
    let server = HttpServer::with_rate_limiter(processor, rate_limiter);

    server.run(&config.bind_addr()).await?;

    // Ensure traces are flushed before exit
    if let Some((_, provider)) = otel {
        let _ = provider.shutdown();
    }
    Ok(())
}
