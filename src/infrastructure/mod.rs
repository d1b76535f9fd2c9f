//! Infrastructure layer for external integrations.
//!
//! Implements the [`crate::domain::ContainerApi`] contract against the real
//! remote service.
//!
//! # Modules
//!
//! - [`http`] - reqwest client for the Sonorx API

pub mod http;
