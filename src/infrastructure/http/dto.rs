//! Wire shapes of the remote API's responses.

use serde::Deserialize;
use serde_json::Value;

/// Success body of `POST /v1/api/login`.
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub token: Option<String>,
}

/// Error body either endpoint may send with a non-success status.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    pub message: Option<String>,
}

/// Envelope of `GET /v1/api/container`.
///
/// `datas` is kept as raw JSON so a missing or non-array value can be told
/// apart from an element that fails to decode.
#[derive(Debug, Deserialize)]
pub struct ContainerEnvelope {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub code: Option<Value>,
    #[serde(default)]
    pub datas: Option<Value>,
}
