//! External token helper program.
//!
//! The program is invoked as `<program> get|store`. `store` receives
//! the token on stdin, `get` prints it on stdout. A non-zero exit status is
//! a failure and its stderr becomes the error message.

use crate::{Token, TokenHelperError, TokenHelperResult, TokenPersistence};
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

#[derive(Debug, Clone)]
pub struct ExternalTokenHelper {
    program: PathBuf,
}

impl ExternalTokenHelper {
    /// Validate the helper location. The path must be absolute and exist.
    pub fn new(program: PathBuf) -> TokenHelperResult<Self> {
        if !program.is_absolute() {
            return Err(TokenHelperError::RelativePath(program));
        }
        if !program.exists() {
            return Err(TokenHelperError::NotFound(program));
        }
        Ok(Self { program })
    }

    fn run(&self, action: &'static str, stdin: Option<&str>) -> TokenHelperResult<Output> {
        tracing::debug!(program = %self.program.display(), action, "running token helper");

        let mut child = Command::new(&self.program)
            .arg(action)
            .stdin(if stdin.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        if let Some(input) = stdin {
            if let Some(mut pipe) = child.stdin.take() {
                match pipe.write_all(input.as_bytes()) {
                    // the exit status below reports why the program quit early
                    Err(e) if e.kind() == std::io::ErrorKind::BrokenPipe => {}
                    result => result?,
                }
            }
        }

        let output = child.wait_with_output()?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let message = if stderr.is_empty() {
                format!("exited with {}", output.status)
            } else {
                stderr
            };
            tracing::warn!(action, status = %output.status, "token helper failed");
            return Err(TokenHelperError::Helper { action, message });
        }

        Ok(output)
    }
}

impl TokenPersistence for ExternalTokenHelper {
    fn store(&self, token: &Token) -> TokenHelperResult<()> {
        self.run("store", Some(token.expose()))?;
        Ok(())
    }

    fn get(&self) -> TokenHelperResult<Option<Token>> {
        let output = self.run("get", None)?;
        let stdout = String::from_utf8(output.stdout)
            .map_err(|e| TokenHelperError::Encoding(e.to_string()))?;
        Ok(Token::new(stdout.trim()))
    }
}
