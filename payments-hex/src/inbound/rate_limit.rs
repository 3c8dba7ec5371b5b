//! Rate limiting middleware using Governor.
//!
//! Implements per-client rate limiting with a token bucket algorithm.
//! Clients are identified by the TCP peer address. `X-Forwarded-For` is only
//! consulted when the peer is a configured trusted proxy.

use axum::{
    Json,
    body::Body,
    extract::{ConnectInfo, State},
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use governor::{DefaultKeyedRateLimiter, Quota, RateLimiter};
use serde_json::json;
use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    num::NonZeroU32,
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
};

use super::server::HEALTH_PATH;

const DEFAULT_REQUESTS_PER_MINUTE: NonZeroU32 = NonZeroU32::new(100).unwrap();

/// Number of checks between two inline sweeps of idle buckets.
const SWEEP_EVERY: u64 = 1024;

/// Rate limiter state shared across requests.
pub struct RateLimiterState {
    /// One bucket per client address
    limiter: DefaultKeyedRateLimiter<IpAddr>,
    /// Proxies whose `X-Forwarded-For` header is believed
    trusted_proxies: Vec<IpAddr>,
    checks: AtomicU64,
}

impl Default for RateLimiterState {
    fn default() -> Self {
        Self::new(DEFAULT_REQUESTS_PER_MINUTE)
    }
}

impl RateLimiterState {
    /// Creates a new rate limiter state allowing `requests_per_minute`
    /// requests per client, all of which may arrive in a single burst.
    pub fn new(requests_per_minute: NonZeroU32) -> Self {
        Self {
            limiter: RateLimiter::keyed(Quota::per_minute(requests_per_minute)),
            trusted_proxies: Vec::new(),
            checks: AtomicU64::new(0),
        }
    }

    /// Trusts `X-Forwarded-For` from the given proxy addresses.
    pub fn with_trusted_proxies(mut self, proxies: Vec<IpAddr>) -> Self {
        self.trusted_proxies = proxies;
        self
    }

    /// Checks if a request should be rate limited.
    /// Returns true if the request is allowed, false if rate limited.
    pub fn check(&self, client: IpAddr) -> bool {
        let allowed = self.limiter.check_key(&client).is_ok();

        if self.checks.fetch_add(1, Ordering::Relaxed) % SWEEP_EVERY == SWEEP_EVERY - 1 {
            self.sweep();
        }

        allowed
    }

    /// Drops buckets that have fully replenished.
    pub fn sweep(&self) {
        self.limiter.retain_recent();
        self.limiter.shrink_to_fit();
    }

    /// Number of clients currently tracked.
    pub fn tracked_clients(&self) -> usize {
        self.limiter.len()
    }

    /// Resolves the client address for a request.
    ///
    /// The peer address is used unless it is a trusted proxy, in which case
    /// `X-Forwarded-For` is walked from the right, skipping trusted hops, and
    /// the first untrusted address wins. Requests without a peer address all
    /// share the unspecified address.
    pub fn client_ip(&self, peer: Option<IpAddr>, forwarded_for: Option<&str>) -> IpAddr {
        let Some(peer) = peer else {
            return IpAddr::V4(Ipv4Addr::UNSPECIFIED);
        };
        if !self.trusted_proxies.contains(&peer) {
            return peer;
        }

        forwarded_for
            .into_iter()
            .flat_map(|h| h.rsplit(','))
            .map_while(|hop| hop.trim().parse::<IpAddr>().ok())
            .find(|ip| !self.trusted_proxies.contains(ip))
            .unwrap_or(peer)
    }
}

/// Rate limiting middleware.
pub async fn rate_limit_middleware(
    State(limiter): State<Arc<RateLimiterState>>,
    request: Request<Body>,
    next: Next,
) -> Response {
    // Skip rate limiting for health endpoint
    if request.uri().path() == HEALTH_PATH {
        return next.run(request).await;
    }

    let peer = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip());
    let forwarded_for = request
        .headers()
        .get("X-Forwarded-For")
        .and_then(|h| h.to_str().ok());
    let client = limiter.client_ip(peer, forwarded_for);

    if !limiter.check(client) {
        tracing::warn!(client = %client, "Rate limit exceeded");
        return (
            StatusCode::TOO_MANY_REQUESTS,
            Json(json!({
                "error": "Rate limit exceeded. Please try again later.",
                "retry_after_seconds": 60
            })),
        )
            .into_response();
    }

    next.run(request).await
}
