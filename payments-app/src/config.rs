//! Configuration loading from environment.

use std::env;
use std::net::IpAddr;
use std::num::NonZeroU32;

use payments_types::ReferenceScheme;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub rate_limit_per_minute: NonZeroU32,
    /// Proxies allowed to name the client through `X-Forwarded-For`
    pub trusted_proxies: Vec<IpAddr>,
    pub reference_scheme: ReferenceScheme,
    pub otlp_endpoint: Option<String>,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let port = lookup("PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse::<u16>()
            .map_err(|e| anyhow::anyhow!("PORT must be a valid port number: {}", e))?;

        let rate_limit_per_minute = lookup("RATE_LIMIT_PER_MINUTE")
            .unwrap_or_else(|| "100".to_string())
            .parse::<NonZeroU32>()
            .map_err(|e| anyhow::anyhow!("RATE_LIMIT_PER_MINUTE must be a positive integer: {}", e))?;

        let trusted_proxies = lookup("TRUSTED_PROXIES")
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| {
                s.parse::<IpAddr>()
                    .map_err(|e| anyhow::anyhow!("TRUSTED_PROXIES entry '{}' is not an IP address: {}", s, e))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        let reference_scheme = match lookup("REFERENCE_SCHEME") {
            Some(raw) => raw.parse::<ReferenceScheme>()?,
            None => ReferenceScheme::default(),
        };

        let otlp_endpoint = lookup("OTEL_EXPORTER_OTLP_ENDPOINT").filter(|s| !s.trim().is_empty());

        Ok(Self {
            host,
            port,
            rate_limit_per_minute,
            trusted_proxies,
            reference_scheme,
            otlp_endpoint,
        })
    }

    /// Address the server binds to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
