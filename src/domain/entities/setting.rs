//! Container setting entity.

use std::fmt;

use serde::Deserialize;
use serde_with::{DefaultOnError, serde_as};

/// A named, typed configuration value attached to a container.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ContainerSetting {
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default)]
    pub id: i64,
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: Option<SettingValue>,
    /// Tag describing how `value` should be interpreted.
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default, rename = "type")]
    pub kind: String,
}

/// Setting payload; the server sends whichever JSON primitive fits.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    Bool(bool),
    Number(serde_json::Number),
    Text(String),
    /// Arrays and objects, kept verbatim.
    Other(serde_json::Value),
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "{value}"),
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
            Self::Other(value) => write!(f, "{value}"),
        }
    }
}
