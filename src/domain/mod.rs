//! Domain layer: the remote API's data model and the trait that fetches it.
//!
//! # Architecture
//!
//! - [`entities`] - Containers, devices, settings and login credentials
//! - [`api`] - The [`api::ContainerApi`] contract implemented by the infrastructure layer
//!
//! The domain layer has no dependency on HTTP frameworks or templates.

pub mod api;
pub mod entities;

pub use api::ContainerApi;
#[cfg(test)]
pub use api::MockContainerApi;
