//! Device entity and its optional environment reading descriptor.

use serde::Deserialize;
use serde_json::Value;
use serde_with::{DefaultOnError, DefaultOnNull, serde_as};

/// A sensor or endpoint belonging to a container.
///
/// Only `name`, `imei` and `environment` reach the dashboard. The remaining
/// fields are kept as the server sent them, so an unexpected type there never
/// fails the container list.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    pub id: i64,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub name: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub imei: String,
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default, rename = "type")]
    pub kind: i64,
    #[serde(default)]
    pub last_update: Option<Value>,
    #[serde(default)]
    pub last_value: Option<Value>,
    #[serde(default)]
    pub extension: Option<Value>,
    #[serde(default)]
    pub environment: Option<Environment>,
}

/// What a device measures, e.g. soil temperature.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Environment {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub name: String,
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub unit: Option<Unit>,
}

/// Measurement unit. On the wire the display symbol is the `unit` field.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Unit {
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default)]
    pub id: i64,
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default)]
    pub name: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default, rename = "unit")]
    pub symbol: String,
}

impl Environment {
    /// Unit symbol, or an empty string when the unit is missing.
    pub fn unit_symbol(&self) -> &str {
        self.unit.as_ref().map_or("", |unit| unit.symbol.as_str())
    }
}
