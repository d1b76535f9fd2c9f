//! Server-rendered web frontend.
//!
//! Two pages rendered with Askama templates: the login form and the
//! container dashboard.
//!
//! # Modules
//!
//! - [`handlers`] - Page handlers
//! - [`routes`] - Route configuration
//! - [`session`] - Session token cookie
//! - [`view`] - Dashboard state machine and card view models

pub mod handlers;
pub mod routes;
pub mod session;
pub mod view;
