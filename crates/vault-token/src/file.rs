//! Internal token helper backed by a single file.

use crate::{Token, TokenHelperResult, TokenPersistence};
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::PathBuf;

/// Stores the token in a file readable only by the current user.
#[derive(Debug, Clone)]
pub struct FileTokenHelper {
    path: PathBuf,
}

impl FileTokenHelper {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl TokenPersistence for FileTokenHelper {
    fn store(&self, token: &Token) -> TokenHelperResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }

        let mut file = options.open(&self.path)?;
        file.write_all(token.expose().as_bytes())?;
        file.flush()?;

        // mode() only applies on creation
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&self.path, std::fs::Permissions::from_mode(0o600))?;
        }

        tracing::debug!(path = %self.path.display(), "token stored");
        Ok(())
    }

    fn get(&self) -> TokenHelperResult<Option<Token>> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => Ok(Token::new(content.trim())),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
