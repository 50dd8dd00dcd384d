//! API error types.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for API client construction and requests.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Configuration could not be turned into a client
    #[error(transparent)]
    Config(#[from] vault_config::CoreError),

    /// The token bound to the client could not be resolved
    #[error("error looking up token: {0}")]
    TokenHelper(#[from] vault_token::TokenHelperError),

    /// A CA certificate file or directory could not be read
    #[error("failed to read CA certificate {path}: {source}")]
    CaCert {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TLS setup failed (bad PEM, builder error)
    #[error("TLS configuration error: {0}")]
    Tls(String),

    /// Transport level failure
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error(
        "Error making API request.\n\nURL: {method} {url}\nCode: {status}. Errors:\n\n{}",
        bullet_list(.errors)
    )]
    Status {
        method: &'static str,
        url: String,
        status: u16,
        errors: Vec<String>,
    },

    /// Response body did not have the expected shape
    #[error("invalid response: {0}")]
    Decode(String),
}

/// Result type for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

fn bullet_list(errors: &[String]) -> String {
    if errors.is_empty() {
        return "* (no error details returned)".to_string();
    }
    errors
        .iter()
        .map(|e| format!("* {}", e))
        .collect::<Vec<_>>()
        .join("\n")
}
