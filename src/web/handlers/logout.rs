//! Logout handler.

use axum::{
    extract::State,
    http::header::SET_COOKIE,
    response::{AppendHeaders, IntoResponse, Redirect},
};

use crate::state::AppState;

/// Clears the session cookie and returns to the login page.
///
/// # Endpoint
///
/// `POST /logout`
///
/// No call is made to the remote API; the token is simply forgotten.
pub async fn logout_handler(State(state): State<AppState>) -> impl IntoResponse {
    (
        AppendHeaders([(SET_COOKIE, state.session.clear())]),
        Redirect::to("/"),
    )
}
