//! Contract for the remote container API.

use async_trait::async_trait;

use crate::domain::entities::{Container, Credentials};
use crate::error::ApiError;

/// The two remote calls the dashboard makes.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::SonorxClient`] - reqwest over HTTPS
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContainerApi: Send + Sync {
    /// Exchanges credentials for a bearer token.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Status`] if the server rejected the credentials; carries
    ///   the server's `message` when it sent one
    /// - [`ApiError::Network`] if the request never completed
    /// - [`ApiError::Decode`] if the success body has no usable `token`
    async fn login(&self, credentials: &Credentials) -> Result<String, ApiError>;

    /// Fetches every container visible to the token's owner.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Status`] on a non-success status
    /// - [`ApiError::Network`] if the request never completed
    /// - [`ApiError::Decode`] if `datas` is missing or not an array
    async fn list_containers(&self, token: &str) -> Result<Vec<Container>, ApiError>;
}
