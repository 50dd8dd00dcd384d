//! Token persistence for the vault CLI.
//!
//! This crate provides the [`Token`] credential type, the [`TokenPersistence`]
//! contract, and two backends:
//! - **Internal**: the token lives in `~/.vault-token` (mode 0600 on unix)
//! - **External**: an operator-supplied helper program speaking the
//!   `get` / `store` protocol

mod external;
mod file;
mod token;
mod traits;

pub use external::ExternalTokenHelper;
pub use file::FileTokenHelper;
pub use token::Token;
pub use traits::{TokenHelperProvider, TokenPersistence};

use std::path::PathBuf;
use thiserror::Error;
use vault_config::{Config, Paths};

/// Error type for token helper operations.
#[derive(Error, Debug)]
pub enum TokenHelperError {
    /// External helper path is not absolute
    #[error("token helper path must be absolute: {0}")]
    RelativePath(PathBuf),

    /// External helper program does not exist
    #[error("token helper program not found: {0}")]
    NotFound(PathBuf),

    /// External helper ran but reported failure
    #[error("token helper {action} failed: {message}")]
    Helper {
        action: &'static str,
        message: String,
    },

    /// Helper output was not valid UTF-8
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for token helper operations.
pub type TokenHelperResult<T> = Result<T, TokenHelperError>;

/// Picks the token helper from configuration: the external program when
/// `token_helper` is set, otherwise the internal token file.
#[derive(Debug, Clone)]
pub struct ConfiguredTokenHelper {
    program: Option<PathBuf>,
    token_file: PathBuf,
}

impl ConfiguredTokenHelper {
    pub fn new(config: &Config, paths: &Paths) -> Self {
        Self {
            program: config.token_helper.clone(),
            token_file: paths.token_file(),
        }
    }
}

impl TokenHelperProvider for ConfiguredTokenHelper {
    fn token_helper(&self) -> TokenHelperResult<Box<dyn TokenPersistence>> {
        match &self.program {
            Some(program) => {
                let helper = ExternalTokenHelper::new(program.clone())?;
                tracing::debug!(program = %program.display(), "using external token helper");
                Ok(Box::new(helper))
            }
            None => {
                tracing::debug!(path = %self.token_file.display(), "using internal token helper");
                Ok(Box::new(FileTokenHelper::new(self.token_file.clone())))
            }
        }
    }
}
