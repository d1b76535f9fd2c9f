//! HTTP client for the remote container API.

mod dto;
mod sonorx_client;

pub use sonorx_client::SonorxClient;
