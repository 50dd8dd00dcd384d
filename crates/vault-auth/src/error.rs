//! Errors of the auth command.
//!
//! Every variant renders as the complete diagnostic shown to the operator.

use thiserror::Error;
use vault_api::ApiError;
use vault_token::TokenHelperError;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Bad flag or argument combination
    #[error("{usage}\n\nError: {message}")]
    Usage { usage: String, message: String },

    /// `--method` names an alternate auth method this client cannot drive
    #[error(
        "Auth method '{method}' is not supported by this client.\n\
         Pass a token as the argument, or omit it to be prompted for one."
    )]
    UnsupportedMethod { method: String },

    /// The hidden prompt could not be read
    #[error(
        "Error attempting to ask for token. The raw error message\n\
         is shown below, but the most common reason for this error is\n\
         that you attempted to pipe a value into auth. Piping a token\n\
         is not supported; pass it as the argument instead.\n\n\
         Raw error: {0}"
    )]
    Prompt(#[source] std::io::Error),

    /// No usable token was obtained
    #[error("A token must be passed to auth. Please view the help\nfor more information.")]
    EmptyToken,

    /// The token helper could not be set up
    #[error(
        "Error initializing token helper: {0}\n\n\
         Please verify that the token helper is available and properly\n\
         configured for your system. Please refer to the documentation\n\
         on token helpers for more information."
    )]
    TokenHelperInit(#[source] TokenHelperError),

    /// The token helper refused to store the token
    #[error(
        "Error storing token: {0}\n\n\
         Authentication was not successful and did not persist.\n\
         Please reauthenticate, or fix the issue above if possible."
    )]
    Persistence(#[source] TokenHelperError),

    /// The API client could not be built, including resolving its token
    #[error("Error initializing client: {0}")]
    ClientInit(#[source] ApiError),

    /// `lookup-self` failed
    #[error("Error validating token: {0}")]
    Verification(#[source] ApiError),

    /// `lookup-self` answered but `policies` is not a list of strings
    #[error("Error reading token policies: {0}")]
    MalformedResponse(String),

    /// `sys/auth` failed
    #[error("Error reading auth table: {0}")]
    ListMethods(#[source] ApiError),
}

impl AuthError {
    /// Usage error carrying the full help text.
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage {
            usage: crate::help::HELP.trim().to_string(),
            message: message.into(),
        }
    }

    /// Process exit status for this failure.
    pub fn exit_code(&self) -> i32 {
        1
    }
}

/// Result type for the auth command.
pub type AuthResult<T> = Result<T, AuthError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_error_includes_help_and_message() {
        let err = AuthError::usage("auth expects at most one argument");
        let message = err.to_string();

        assert!(message.starts_with("Usage: vault auth"));
        assert!(message.ends_with("\n\nError: auth expects at most one argument"));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_persistence_error_says_auth_did_not_persist() {
        let err = AuthError::Persistence(TokenHelperError::Helper {
            action: "store",
            message: "disk full".to_string(),
        });
        let message = err.to_string();

        assert!(message.contains("disk full"));
        assert!(message.contains("did not persist"));
    }
}
