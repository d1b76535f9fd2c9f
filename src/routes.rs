//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`       - Login form (public)
//! - `POST /`       - Login submission (public, optionally rate limited)
//! - `GET  /home`   - Container dashboard (redirects to `/` without a session)
//! - `POST /logout` - Clear the session
//! - anything else  - Redirect to `/`
//!
//! Paths match exactly; `/home/` is not `/home`.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket on login submissions

use axum::Router;

use crate::middleware::rate_limit::LoginRateLimiter;
use crate::middleware::tracing;
use crate::state::AppState;
use crate::web;
use crate::web::handlers::redirect_to_login;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `login_limiter` - rate limiter for `POST /`; `None` disables throttling
pub fn app_router(state: AppState, login_limiter: Option<LoginRateLimiter>) -> Router {
    Router::new()
        .merge(web::routes::public_routes(login_limiter))
        .merge(web::routes::session_routes())
        .fallback(redirect_to_login)
        .with_state(state)
        .layer(tracing::layer())
}
