//! HTTP API client for the secret-management server.
//!
//! This crate provides:
//! - The [`RemoteClient`] contract used by the auth command
//! - [`ApiClient`], a reqwest implementation talking to `/v1/...`
//! - [`ApiClientFactory`], which builds clients bound to a token
//! - Response types ([`Secret`], [`AuthMount`])

mod client;
mod error;
mod types;

pub use client::{ApiClient, ApiClientFactory, ClientFactory, ClientSettings, RemoteClient};
pub use error::{ApiError, ApiResult};
pub use types::{AuthMount, Secret};

/// Header carrying the client token on every request.
pub const TOKEN_HEADER: &str = "X-Vault-Token";
