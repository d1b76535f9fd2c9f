//! Login page and login form submission.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::header::SET_COOKIE,
    response::{AppendHeaders, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use validator::Validate;

use crate::domain::entities::Credentials;
use crate::error::ApiError;
use crate::state::AppState;

/// Shown when a field is submitted empty.
pub const MISSING_FIELDS_MESSAGE: &str = "Username and password are required.";
/// Shown when the API rejects the login without a message of its own.
pub const LOGIN_REJECTED_MESSAGE: &str = "Login failed. Please check your credentials.";
/// Shown when the API could not be reached or answered nonsense.
pub const LOGIN_UNAVAILABLE_MESSAGE: &str =
    "An error occurred during login. Please try again later.";

/// Template for the login page.
///
/// Renders `templates/login.html`. `username` is echoed back after a failed
/// attempt; the password never is.
#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub username: String,
    pub error: Option<String>,
}

/// Submitted login form. Missing fields deserialize as empty and fail validation.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginForm {
    #[serde(default)]
    #[validate(length(min = 1))]
    pub username: String,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub password: String,
}

/// Renders the empty login form.
///
/// # Endpoint
///
/// `GET /`
pub async fn login_page() -> impl IntoResponse {
    LoginTemplate {
        username: String::new(),
        error: None,
    }
}

/// Submits credentials to the remote API.
///
/// # Endpoint
///
/// `POST /` (form-encoded `username`, `password`)
///
/// # Outcomes
///
/// - Accepted: stores the token in the session cookie and redirects to `/home`
/// - Rejected: re-renders the form with the server's `message`, or a generic one
/// - Unreachable / malformed answer: re-renders the form with a try-again message
pub async fn login_submit(State(state): State<AppState>, Form(form): Form<LoginForm>) -> Response {
    if form.validate().is_err() {
        return LoginTemplate {
            username: form.username,
            error: Some(MISSING_FIELDS_MESSAGE.to_string()),
        }
        .into_response();
    }

    let credentials = Credentials::new(form.username, form.password);

    match state.api.login(&credentials).await {
        Ok(token) => {
            tracing::info!(username = %credentials.username, "Login succeeded");
            (
                AppendHeaders([(SET_COOKIE, state.session.set(&token))]),
                Redirect::to("/home"),
            )
                .into_response()
        }
        Err(err) => {
            match &err {
                ApiError::Status { .. } => {
                    tracing::warn!(username = %credentials.username, error = %err, "Login rejected");
                }
                _ => tracing::error!(username = %credentials.username, error = %err, "Login error"),
            }

            LoginTemplate {
                username: credentials.username,
                error: Some(failure_message(&err)),
            }
            .into_response()
        }
    }
}

/// Maps a failed login to the message shown on the form.
fn failure_message(err: &ApiError) -> String {
    match err {
        ApiError::Status { .. } => err
            .server_message()
            .unwrap_or(LOGIN_REJECTED_MESSAGE)
            .to_string(),
        ApiError::Network(_) | ApiError::Decode(_) => LOGIN_UNAVAILABLE_MESSAGE.to_string(),
    }
}
