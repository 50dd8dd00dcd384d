//! CLI command implementations.

mod auth;

pub use auth::auth;

use anyhow::{Context as _, Result};
use std::path::PathBuf;
use vault_config::{Config, Paths};

/// Connection flags shared by every command. Unset flags leave the
/// configured value alone.
#[derive(Debug, Clone, Default)]
pub struct ConnectionOverrides {
    pub address: Option<String>,
    pub ca_cert: Option<PathBuf>,
    pub ca_path: Option<PathBuf>,
    pub insecure: bool,
}

/// Resolved environment a command runs in.
pub struct Context {
    pub paths: Paths,
    pub config: Config,
}

impl Context {
    /// Load config file and environment, then apply command-line flags.
    pub fn load(overrides: ConnectionOverrides) -> Result<Self> {
        let paths = Paths::new()?;
        let mut config = Config::load(&paths).with_context(|| {
            format!(
                "Error loading configuration from {}",
                paths.config_file().display()
            )
        })?;

        if let Some(address) = overrides.address {
            config.address = address;
        }
        if let Some(ca_cert) = overrides.ca_cert {
            config.ca_cert = Some(ca_cert);
        }
        if let Some(ca_path) = overrides.ca_path {
            config.ca_path = Some(ca_path);
        }
        if overrides.insecure {
            config.insecure = true;
        }

        Ok(Self { paths, config })
    }
}
