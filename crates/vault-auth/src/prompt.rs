//! Hidden interactive input.

use std::io;

/// Label shown before reading the token.
pub const TOKEN_PROMPT: &str = "Token (will be hidden): ";

/// Reads a secret from the operator without echoing it.
pub trait SecretPrompt: Send + Sync {
    fn prompt_secret(&self, label: &str) -> io::Result<String>;
}

/// Prompt on the controlling terminal via `rpassword`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalPrompt;

impl SecretPrompt for TerminalPrompt {
    fn prompt_secret(&self, label: &str) -> io::Result<String> {
        rpassword::prompt_password(label)
    }
}
