//! Dashboard page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::State,
    http::HeaderMap,
    response::{IntoResponse, Redirect, Response},
};

use crate::state::AppState;
use crate::web::view::{ContainerCard, DashboardState};

/// Template for the dashboard.
///
/// Renders `templates/home.html`. Exactly one of `loading`, `error`, a
/// non-empty `cards` list, or the "no data" notice is shown.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub loading: bool,
    pub error: Option<&'static str>,
    pub cards: Vec<ContainerCard>,
}

impl From<DashboardState> for HomeTemplate {
    fn from(state: DashboardState) -> Self {
        let cards = state.cards();
        let (loading, error) = match state {
            DashboardState::Loading => (true, None),
            DashboardState::Failed(message) => (false, Some(message)),
            DashboardState::Loaded(_) | DashboardState::Empty => (false, None),
        };

        Self {
            loading,
            error,
            cards,
        }
    }
}

/// Renders the container dashboard.
///
/// # Endpoint
///
/// `GET /home`
///
/// # Flow
///
/// 1. No session token: redirect to `/` without calling the API
/// 2. One `GET /v1/api/container` with the token as bearer credential
/// 3. Render the settled [`DashboardState`]
pub async fn dashboard_handler(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let Some(token) = state.session.get(&headers) else {
        return Redirect::to("/").into_response();
    };

    let result = state.api.list_containers(&token).await;
    if let Err(err) = &result {
        tracing::error!(error = %err, "Failed to load containers");
    }

    HomeTemplate::from(DashboardState::default().settle(result)).into_response()
}
