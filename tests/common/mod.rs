#![allow(dead_code)]

use axum::{
    Router,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use axum_test::TestServer;
use serde_json::Value;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

use container_dashboard::middleware::rate_limit::login_layer;
use container_dashboard::prelude::*;

/// A fixed response the stub API returns for one endpoint.
#[derive(Clone)]
pub struct Canned {
    pub status: StatusCode,
    pub body: String,
}

impl Canned {
    pub fn json(status: StatusCode, body: Value) -> Self {
        Self {
            status,
            body: body.to_string(),
        }
    }

    pub fn raw(status: StatusCode, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
        }
    }
}

/// What the stub API received.
#[derive(Clone, Default)]
pub struct Recorded {
    login_bodies: Arc<Mutex<Vec<Value>>>,
    container_auth: Arc<Mutex<Vec<Option<String>>>>,
}

impl Recorded {
    pub fn login_bodies(&self) -> Vec<Value> {
        self.login_bodies.lock().unwrap().clone()
    }

    /// `Authorization` header of every container request, in order.
    pub fn container_auth(&self) -> Vec<Option<String>> {
        self.container_auth.lock().unwrap().clone()
    }
}

#[derive(Clone)]
struct StubState {
    login: Canned,
    containers: Canned,
    recorded: Recorded,
}

/// A running stub of the remote API.
pub struct StubApi {
    pub base_url: String,
    pub recorded: Recorded,
}

fn reply(canned: &Canned) -> Response {
    (
        canned.status,
        [(header::CONTENT_TYPE, "application/json")],
        canned.body.clone(),
    )
        .into_response()
}

async fn stub_login(State(stub): State<StubState>, body: String) -> Response {
    let parsed = serde_json::from_str(&body).unwrap_or(Value::Null);
    stub.recorded.login_bodies.lock().unwrap().push(parsed);
    reply(&stub.login)
}

async fn stub_containers(State(stub): State<StubState>, headers: HeaderMap) -> Response {
    let auth = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    stub.recorded.container_auth.lock().unwrap().push(auth);
    reply(&stub.containers)
}

/// Serves `login` and `containers` on an ephemeral local port.
pub async fn spawn_stub_api(login: Canned, containers: Canned) -> StubApi {
    let recorded = Recorded::default();
    let state = StubState {
        login,
        containers,
        recorded: recorded.clone(),
    };

    let app = Router::new()
        .route("/v1/api/login", post(stub_login))
        .route("/v1/api/container", get(stub_containers))
        .with_state(state);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    StubApi {
        base_url: format!("http://{addr}"),
        recorded,
    }
}

/// A base URL nothing is listening on.
pub async fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

/// API client for `base_url` that ignores any system proxy.
pub fn create_client(base_url: &str) -> SonorxClient {
    let http = reqwest::Client::builder().no_proxy().build().unwrap();
    SonorxClient::with_http_client(base_url, http).unwrap()
}

/// The full application, talking to the API at `base_url`.
pub fn create_test_server(base_url: &str) -> TestServer {
    let api = create_client(base_url);
    let state = AppState::new(Arc::new(api), SessionCookie::default());
    TestServer::new(app_router(state, None)).unwrap()
}

/// Like [`create_test_server`], but with per-IP login throttling.
///
/// Served over a real socket so the limiter can see the peer address.
pub fn create_rate_limited_server(base_url: &str, refill_secs: u64, burst: u32) -> TestServer {
    let api = create_client(base_url);
    let state = AppState::new(Arc::new(api), SessionCookie::default());
    let limiter = login_layer(refill_secs, burst).unwrap();
    let app = app_router(state, Some(limiter));

    TestServer::builder()
        .http_transport()
        .build(app.into_make_service_with_connect_info::<SocketAddr>())
        .unwrap()
}

/// Name/value pair from a `Set-Cookie` header, e.g. `token=abc`.
pub fn cookie_pair(set_cookie: &str) -> String {
    set_cookie.split(';').next().unwrap_or_default().trim().to_string()
}

pub fn login_ok(token: &str) -> Canned {
    Canned::json(StatusCode::OK, serde_json::json!({ "token": token }))
}

pub fn containers_ok(datas: Value) -> Canned {
    Canned::json(
        StatusCode::OK,
        serde_json::json!({ "message": "success", "code": 200, "datas": datas }),
    )
}
