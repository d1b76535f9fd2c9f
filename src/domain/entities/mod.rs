//! Data model of the remote container API.
//!
//! All entities are read-only snapshots received from the server and
//! re-fetched on every dashboard request.
//!
//! # Entity Types
//!
//! - [`Container`] - A grouping that owns devices and settings
//! - [`Device`] - A sensor or endpoint inside a container
//! - [`ContainerSetting`] - A typed configuration value on a container
//! - [`Credentials`] - Login request payload

pub mod container;
pub mod credentials;
pub mod device;
pub mod setting;

pub use container::Container;
pub use credentials::Credentials;
pub use device::{Device, Environment, Unit};
pub use setting::{ContainerSetting, SettingValue};
