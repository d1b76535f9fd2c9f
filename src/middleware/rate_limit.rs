//! Rate limiting for login submissions using the token bucket algorithm.

use anyhow::{Context, Result};
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

/// Layer type applied to `POST /`.
pub type LoginRateLimiter =
    GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

/// Creates a per-IP rate limiter for login submissions.
///
/// # Limits
///
/// - **Rate**: one submission token refilled every `refill_secs` seconds
/// - **Burst**: `burst` submissions
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
///
/// # Key Extraction
///
/// Keys on the socket peer address, so the server must be started with
/// `into_make_service_with_connect_info::<SocketAddr>()`.
///
/// # Errors
///
/// Returns an error if `refill_secs` or `burst` is zero.
pub fn login_layer(refill_secs: u64, burst: u32) -> Result<LoginRateLimiter> {
    let governor_conf = GovernorConfigBuilder::default()
        .per_second(refill_secs)
        .burst_size(burst)
        .finish()
        .context("Login rate limit must have a non-zero rate and burst")?;

    Ok(GovernorLayer::new(Arc::new(governor_conf)))
}
