//! Token persistence trait definitions.

use crate::{Token, TokenHelperResult};

/// Pluggable local storage for the authentication token.
pub trait TokenPersistence: Send + Sync {
    /// Persist the token, replacing any previous one.
    fn store(&self, token: &Token) -> TokenHelperResult<()>;

    /// Retrieve the stored token, if any.
    fn get(&self) -> TokenHelperResult<Option<Token>>;
}

/// Resolves the token helper to use for this invocation.
pub trait TokenHelperProvider: Send + Sync {
    fn token_helper(&self) -> TokenHelperResult<Box<dyn TokenPersistence>>;
}
