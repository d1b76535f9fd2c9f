//! Web frontend route configuration.

use axum::{
    Router,
    handler::Handler,
    routing::{get, post},
};

use crate::middleware::rate_limit::LoginRateLimiter;
use crate::state::AppState;
use crate::web::handlers::{
    dashboard_handler, login_page, login_submit, logout_handler, redirect_to_login,
};

/// Public login routes.
///
/// # Endpoints
///
/// - `GET  /` - Login form
/// - `POST /` - Login submission, throttled by `limiter` when given
///
/// Any other method on `/` redirects back to the form.
pub fn public_routes(limiter: Option<LoginRateLimiter>) -> Router<AppState> {
    let submit = match limiter {
        Some(limiter) => post(login_submit.layer(limiter)),
        None => post(login_submit),
    };

    Router::new().route(
        "/",
        get(login_page).merge(submit).fallback(redirect_to_login),
    )
}

/// Routes that depend on the session cookie.
///
/// These are not behind a middleware: the dashboard checks the cookie itself
/// and redirects to `/` when it is missing.
///
/// # Endpoints
///
/// - `GET  /home`   - Container dashboard
/// - `POST /logout` - Clear the session cookie
pub fn session_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/home",
            get(dashboard_handler).fallback(redirect_to_login),
        )
        .route(
            "/logout",
            post(logout_handler).fallback(redirect_to_login),
        )
}
