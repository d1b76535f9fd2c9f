//! Container entity: a grouping that owns zero or more devices.

use serde::Deserialize;
use serde_with::{DefaultOnError, DefaultOnNull, serde_as};

use super::{ContainerSetting, Device};

/// A container as returned by `GET /v1/api/container`.
///
/// Received wholesale from the server and never mutated. Fields the server
/// omits or sends as `null` fall back to their empty defaults so a single
/// sparse record does not fail the whole list. Fields the dashboard never
/// shows (`location`, `settings`) also fall back when they have the wrong type.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Container {
    pub id: i64,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub name: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub address: String,
    /// The server spells this field `localtion`.
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default, rename = "localtion", alias = "location")]
    pub location: Option<String>,
    /// Raw CSS color value, passed to the page unvalidated.
    #[serde(default)]
    pub color: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default, rename = "type")]
    pub kind: i64,
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default)]
    pub settings: Vec<ContainerSetting>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub devices: Vec<Device>,
}
