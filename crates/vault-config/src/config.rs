//! Configuration management for the CLI.

use crate::{CoreError, CoreResult, Paths};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use url::Url;

/// Default server address.
pub const DEFAULT_ADDRESS: &str = "https://127.0.0.1:8200";

/// Default log level. The CLI stays quiet unless asked.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// CLI configuration.
///
/// Precedence, lowest first: built-in defaults, `~/.vault/config.json`,
/// environment variables, command-line flags (applied by the binary).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Server address, e.g. `https://vault.example.com:8200`.
    pub address: String,
    /// PEM encoded CA certificate file used to verify the server.
    pub ca_cert: Option<PathBuf>,
    /// Directory of PEM encoded CA certificates. Wins over `ca_cert`.
    pub ca_path: Option<PathBuf>,
    /// Skip TLS certificate verification.
    pub insecure: bool,
    /// Absolute path to an external token helper program.
    /// When unset the token is kept in `~/.vault-token`.
    pub token_helper: Option<PathBuf>,
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS.to_string(),
            ca_cert: None,
            ca_path: None,
            insecure: false,
            token_helper: None,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the config file (if present), then apply
    /// environment overrides.
    pub fn load(paths: &Paths) -> CoreResult<Self> {
        let config_path = paths.config_file();

        let mut config = if config_path.exists() {
            Self::load_from_file(&config_path)?
        } else {
            Self::default()
        };

        config.load_from_env();
        Ok(config)
    }

    /// Load configuration from a specific file.
    pub fn load_from_file(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Override configuration from the process environment.
    fn load_from_env(&mut self) {
        self.apply_env(|key| std::env::var(key).ok());
    }

    /// Override configuration from an arbitrary variable lookup.
    ///
    /// Empty values are ignored. `VAULT_SKIP_VERIFY` accepts the usual
    /// boolean spellings; anything else leaves `insecure` unchanged.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(address) = var("VAULT_ADDR") {
            self.address = address;
        }
        if let Some(ca_cert) = var("VAULT_CACERT") {
            self.ca_cert = Some(PathBuf::from(ca_cert));
        }
        if let Some(ca_path) = var("VAULT_CAPATH") {
            self.ca_path = Some(PathBuf::from(ca_path));
        }
        if let Some(skip) = var("VAULT_SKIP_VERIFY") {
            match parse_bool(&skip) {
                Some(insecure) => self.insecure = insecure,
                None => tracing::warn!(value = %skip, "ignoring unparsable VAULT_SKIP_VERIFY"),
            }
        }
        if let Some(log_level) = var("VAULT_LOG_LEVEL") {
            self.log_level = log_level;
        }
    }

    /// Get the server address as a parsed URL.
    pub fn address(&self) -> CoreResult<Url> {
        let url = Url::parse(&self.address)?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(CoreError::Config(format!(
                "unsupported address scheme '{}'",
                other
            ))),
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "t" | "true" | "yes" => Some(true),
        "0" | "f" | "false" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::tempdir;

    fn env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.address, DEFAULT_ADDRESS);
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
        assert!(!config.insecure);
        assert!(config.token_helper.is_none());
    }

    #[test]
    fn test_config_load_from_file_partial() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.json");
        std::fs::write(
            &config_path,
            r#"{ "address": "http://10.0.0.5:8200", "token_helper": "/usr/local/bin/helper" }"#,
        )
        .unwrap();

        let config = Config::load_from_file(&config_path).unwrap();
        assert_eq!(config.address, "http://10.0.0.5:8200");
        assert_eq!(
            config.token_helper,
            Some(PathBuf::from("/usr/local/bin/helper"))
        );
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_config_load_without_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let paths = Paths::with_base_dir(dir.path().to_path_buf());

        let config = Config::load(&paths).unwrap();
        assert!(!paths.config_file().exists());
        assert!(config.token_helper.is_none());
    }

    #[test]
    fn test_config_invalid_json_is_error() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.json");
        std::fs::write(&config_path, "{ not json").unwrap();

        assert!(matches!(
            Config::load_from_file(&config_path),
            Err(CoreError::Json(_))
        ));
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::default();
        config.apply_env(env(&[
            ("VAULT_ADDR", "http://127.0.0.1:8201"),
            ("VAULT_CACERT", "/etc/ca.pem"),
            ("VAULT_CAPATH", "/etc/ca.d"),
            ("VAULT_SKIP_VERIFY", "true"),
            ("VAULT_LOG_LEVEL", "debug"),
        ]));

        assert_eq!(config.address, "http://127.0.0.1:8201");
        assert_eq!(config.ca_cert, Some(PathBuf::from("/etc/ca.pem")));
        assert_eq!(config.ca_path, Some(PathBuf::from("/etc/ca.d")));
        assert!(config.insecure);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_env_empty_and_invalid_values_ignored() {
        let mut config = Config::default();
        config.apply_env(env(&[("VAULT_ADDR", "  "), ("VAULT_SKIP_VERIFY", "maybe")]));

        assert_eq!(config.address, DEFAULT_ADDRESS);
        assert!(!config.insecure);
    }

    #[test]
    fn test_address_parse() {
        let config = Config::default();
        let url = config.address().unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.port(), Some(8200));
    }

    #[test]
    fn test_address_rejects_bad_values() {
        let mut config = Config::default();
        config.address = "not a url".to_string();
        assert!(matches!(config.address(), Err(CoreError::InvalidUrl(_))));

        config.address = "ftp://vault:8200".to_string();
        assert!(matches!(config.address(), Err(CoreError::Config(_))));
    }
}
