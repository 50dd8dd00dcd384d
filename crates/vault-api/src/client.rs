//! reqwest-backed API client.

use crate::types::ErrorBody;
use crate::{ApiError, ApiResult, AuthMount, Secret, TOKEN_HEADER};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use url::Url;
use vault_config::Config;
use vault_token::Token;

/// Remote operations the auth command depends on.
#[async_trait]
pub trait RemoteClient: Send + Sync {
    /// `GET auth/token/lookup-self`: describe the token the client is bound to.
    async fn lookup_self(&self) -> ApiResult<Secret>;

    /// `GET sys/auth`: enabled auth methods keyed by mount path.
    async fn list_auth_methods(&self) -> ApiResult<HashMap<String, AuthMount>>;
}

/// Builds remote clients bound to a token.
pub trait ClientFactory: Send + Sync {
    fn client(&self, token: Option<&Token>) -> ApiResult<Box<dyn RemoteClient>>;
}

/// Connection settings for [`ApiClient`].
#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub address: Url,
    pub ca_cert: Option<PathBuf>,
    pub ca_path: Option<PathBuf>,
    pub insecure: bool,
}

impl ClientSettings {
    pub fn from_config(config: &Config) -> ApiResult<Self> {
        Ok(Self {
            address: config.address()?,
            ca_cert: config.ca_cert.clone(),
            ca_path: config.ca_path.clone(),
            insecure: config.insecure,
        })
    }
}

/// HTTP client for the `/v1` API.
pub struct ApiClient {
    http_client: reqwest::Client,
    address: String,
    token: Option<Token>,
}

impl ApiClient {
    /// Create a new client.
    ///
    /// # Arguments
    /// * `settings` - Server address and TLS options
    /// * `token` - Token sent as `X-Vault-Token`, if any
    pub fn new(settings: &ClientSettings, token: Option<&Token>) -> ApiResult<Self> {
        let mut builder = reqwest::Client::builder();

        // ca_path wins when both are set
        let ca_files = match (&settings.ca_path, &settings.ca_cert) {
            (Some(dir), _) => pem_files_in(dir)?,
            (None, Some(file)) => vec![file.clone()],
            (None, None) => Vec::new(),
        };
        for path in ca_files {
            let pem = std::fs::read(&path).map_err(|source| ApiError::CaCert {
                path: path.clone(),
                source,
            })?;
            let cert = reqwest::Certificate::from_pem(&pem)
                .map_err(|e| ApiError::Tls(format!("{}: {}", path.display(), e)))?;
            builder = builder.add_root_certificate(cert);
        }

        if settings.insecure {
            tracing::warn!("TLS certificate verification disabled");
            builder = builder.danger_accept_invalid_certs(true);
        }

        let http_client = builder.build().map_err(|e| ApiError::Tls(e.to_string()))?;

        Ok(Self {
            http_client,
            address: settings.address.as_str().trim_end_matches('/').to_string(),
            token: token.cloned(),
        })
    }

    /// Build the URL for an API path.
    fn api_url(&self, path: &str) -> String {
        format!("{}/v1/{}", self.address, path.trim_start_matches('/'))
    }

    /// Issue a GET and return the JSON body of a success response.
    async fn get_json(&self, path: &str) -> ApiResult<Value> {
        let url = self.api_url(path);
        tracing::debug!(url = %url, has_token = self.token.is_some(), "GET");

        let mut request = self
            .http_client
            .get(&url)
            .header("Accept", "application/json");
        if let Some(token) = &self.token {
            request = request.header(TOKEN_HEADER, token.expose());
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let errors = serde_json::from_str::<ErrorBody>(&body)
                .map(|b| b.errors)
                .unwrap_or_default();
            tracing::debug!(status = %status, error_count = errors.len(), "request failed");
            return Err(ApiError::Status {
                method: "GET",
                url,
                status: status.as_u16(),
                errors,
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[async_trait]
impl RemoteClient for ApiClient {
    async fn lookup_self(&self) -> ApiResult<Secret> {
        let body = self.get_json("auth/token/lookup-self").await?;
        serde_json::from_value(body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn list_auth_methods(&self) -> ApiResult<HashMap<String, AuthMount>> {
        let body = self.get_json("sys/auth").await?;
        let mounts = parse_auth_table(body)?;
        tracing::debug!(count = mounts.len(), "listed auth methods");
        Ok(mounts)
    }
}

/// Decode a `sys/auth` body.
///
/// Current servers wrap the table in `data`; older ones return it at the top
/// level next to envelope fields such as `request_id`, which are skipped.
fn parse_auth_table(body: Value) -> ApiResult<HashMap<String, AuthMount>> {
    let mut root = match body {
        Value::Object(map) => map,
        other => {
            return Err(ApiError::Decode(format!(
                "expected an object from sys/auth, got {}",
                other
            )))
        }
    };

    let table = match root.remove("data") {
        Some(Value::Object(data)) => data,
        _ => root,
    };

    table
        .into_iter()
        .filter(|(_, value)| value.is_object())
        .map(|(path, value)| {
            serde_json::from_value::<AuthMount>(value)
                .map(|mount| (path.clone(), mount))
                .map_err(|e| ApiError::Decode(format!("auth method {}: {}", path, e)))
        })
        .collect()
}

fn pem_files_in(dir: &Path) -> ApiResult<Vec<PathBuf>> {
    let read_err = |source: std::io::Error| ApiError::CaCert {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(read_err)? {
        let path = entry.map_err(read_err)?.path();
        let is_cert = matches!(
            path.extension().and_then(|e| e.to_str()),
            Some("pem" | "crt")
        );
        if path.is_file() && is_cert {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Default [`ClientFactory`]: reads connection settings from [`Config`] each
/// time a client is requested, so a bad address surfaces as a client
/// construction failure.
#[derive(Debug, Clone)]
pub struct ApiClientFactory {
    config: Config,
}

impl ApiClientFactory {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

impl ClientFactory for ApiClientFactory {
    fn client(&self, token: Option<&Token>) -> ApiResult<Box<dyn RemoteClient>> {
        let settings = ClientSettings::from_config(&self.config)?;
        Ok(Box::new(ApiClient::new(&settings, token)?))
    }
}
