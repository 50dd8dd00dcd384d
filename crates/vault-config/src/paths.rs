//! File system paths used by the CLI.

use crate::{CoreError, CoreResult};
use std::path::PathBuf;

/// Token file written by the internal token helper.
const TOKEN_FILE_NAME: &str = ".vault-token";

/// Manages file system paths for the CLI.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Base directory for CLI files (~/.vault)
    base_dir: PathBuf,
    /// Directory holding the token file (the home directory)
    token_dir: PathBuf,
}

impl Paths {
    /// Create a new Paths instance rooted at the user's home directory.
    pub fn new() -> CoreResult<Self> {
        let home = dirs::home_dir()
            .ok_or_else(|| CoreError::Path("Could not determine home directory".to_string()))?;

        Ok(Self {
            base_dir: home.join(".vault"),
            token_dir: home,
        })
    }

    /// Create a new Paths instance with a custom base directory.
    /// The token file is kept inside the base directory as well.
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self {
            token_dir: base_dir.clone(),
            base_dir,
        }
    }

    /// Get the config file path (~/.vault/config.json).
    pub fn config_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the token file path used by the internal helper (~/.vault-token).
    pub fn token_file(&self) -> PathBuf {
        self.token_dir.join(TOKEN_FILE_NAME)
    }

    /// Get the logs directory (~/.vault/logs).
    pub fn logs_dir(&self) -> PathBuf {
        self.base_dir.join("logs")
    }
}
