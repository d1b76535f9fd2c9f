//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::domain::ContainerApi;
use crate::web::session::SessionCookie;

/// Handler dependencies: the remote API and the session cookie settings.
///
/// Holds no per-user data; the session lives in the browser's cookie.
#[derive(Clone)]
pub struct AppState {
    pub api: Arc<dyn ContainerApi>,
    pub session: SessionCookie,
}

impl AppState {
    /// Creates application state.
    pub fn new(api: Arc<dyn ContainerApi>, session: SessionCookie) -> Self {
        Self { api, session }
    }
}
