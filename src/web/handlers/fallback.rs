//! Catch-all for unknown paths and methods.

use axum::response::Redirect;

/// Sends the browser to the login page.
pub async fn redirect_to_login() -> Redirect {
    Redirect::to("/")
}
