//! reqwest implementation of [`ContainerApi`] for the Sonorx API.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde_json::Value;
use url::Url;

use super::dto::{ContainerEnvelope, ErrorBody, LoginResponse};
use crate::domain::ContainerApi;
use crate::domain::entities::{Container, Credentials};
use crate::error::ApiError;

const LOGIN_PATH: &str = "v1/api/login";
const CONTAINER_PATH: &str = "v1/api/container";

/// HTTP client for the two remote endpoints.
///
/// Cheap to clone; clones share one connection pool. No timeout is set, so
/// requests complete or hang per the network layer.
#[derive(Debug, Clone)]
pub struct SonorxClient {
    http: Client,
    login_url: Url,
    container_url: Url,
}

impl SonorxClient {
    /// Creates a client for the API rooted at `base_url`.
    ///
    /// A path prefix in `base_url` is kept: `https://host/prefix` resolves
    /// the login endpoint to `https://host/prefix/v1/api/login`.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not an absolute URL or the TLS
    /// backend fails to initialize.
    pub fn new(base_url: &str) -> Result<Self> {
        let http = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;

        Self::with_http_client(base_url, http)
    }

    /// Same as [`SonorxClient::new`] but with a preconfigured reqwest client
    /// (proxy, TLS roots, timeouts).
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not an absolute URL.
    pub fn with_http_client(base_url: &str, http: Client) -> Result<Self> {
        let mut base =
            Url::parse(base_url).with_context(|| format!("Invalid API base URL '{base_url}'"))?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        Ok(Self {
            http,
            login_url: base.join(LOGIN_PATH)?,
            container_url: base.join(CONTAINER_PATH)?,
        })
    }

    /// Resolved login endpoint.
    pub fn login_url(&self) -> &Url {
        &self.login_url
    }

    /// Resolved container list endpoint.
    pub fn container_url(&self) -> &Url {
        &self.container_url
    }
}

/// Turns a non-success response into [`ApiError::Status`], salvaging the
/// server's `message` when the body carries one.
async fn rejection(response: Response) -> ApiError {
    let status = response.status();
    let body = response.bytes().await.unwrap_or_default();
    let message = serde_json::from_slice::<ErrorBody>(&body)
        .unwrap_or_default()
        .message;

    ApiError::status(status, message)
}

#[async_trait]
impl ContainerApi for SonorxClient {
    async fn login(&self, credentials: &Credentials) -> Result<String, ApiError> {
        let response = self
            .http
            .post(self.login_url.clone())
            .json(credentials)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(rejection(response).await);
        }

        let body = response.bytes().await?;
        let LoginResponse { token } = serde_json::from_slice(&body)?;

        token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ApiError::Decode("login response has no token".to_string()))
    }

    async fn list_containers(&self, token: &str) -> Result<Vec<Container>, ApiError> {
        let response = self
            .http
            .get(self.container_url.clone())
            .bearer_auth(token)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(rejection(response).await);
        }

        let body = response.bytes().await?;
        let envelope: ContainerEnvelope = serde_json::from_slice(&body)?;

        let containers = match envelope.datas {
            Some(datas @ Value::Array(_)) => serde_json::from_value::<Vec<Container>>(datas)?,
            Some(_) => return Err(ApiError::Decode("`datas` is not an array".to_string())),
            None => return Err(ApiError::Decode("`datas` is missing".to_string())),
        };

        tracing::debug!(
            code = ?envelope.code,
            message = envelope.message.as_deref().unwrap_or_default(),
            count = containers.len(),
            "Container list received"
        );

        Ok(containers)
    }
}
