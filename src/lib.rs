//! # Container Dashboard
//!
//! A server-rendered web frontend for the Sonorx container API: a login form
//! and a dashboard listing containers and their devices.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - API data model and the [`domain::ContainerApi`] trait
//! - **Infrastructure Layer** ([`infrastructure`]) - reqwest client for the remote API
//! - **Web Layer** ([`web`]) - Askama pages, session cookie, dashboard state
//! - **Middleware** ([`middleware`]) - Request tracing and login rate limiting
//!
//! ## Request Flow
//!
//! 1. `POST /` forwards credentials to `POST /v1/api/login`
//! 2. The returned token is stored in the `token` cookie
//! 3. `GET /home` reads the cookie and calls `GET /v1/api/container` with it
//! 4. The result is rendered as one card per container
//!
//! ## Quick Start
//!
//! ```bash
//! export API_BASE_URL="https://sonorx.soil.mn"  # Optional
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod middleware;
pub mod state;
pub mod web;

pub mod config;
pub mod logging;
pub mod server;

pub mod routes;

pub use error::ApiError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::domain::ContainerApi;
    pub use crate::domain::entities::{Container, ContainerSetting, Credentials, Device};
    pub use crate::error::ApiError;
    pub use crate::infrastructure::http::SonorxClient;
    pub use crate::routes::app_router;
    pub use crate::state::AppState;
    pub use crate::web::session::SessionCookie;
}
