//! Authentication workflow for the vault CLI.
//!
//! This crate provides:
//! - Validation of the `auth` command's flags and arguments
//! - Token acquisition from an argument or a hidden interactive prompt
//! - Persistence through a pluggable token helper, then verification
//!   with `lookup-self` and reporting of the token's policies
//! - Listing of enabled auth methods as an aligned table
//!
//! All collaborators (token helper, API client, prompt) are injected into
//! [`AuthCommand`], so the whole flow runs against fakes in tests.

mod acquire;
mod error;
mod flow;
pub mod help;
mod methods;
mod options;
mod policies;
mod prompt;
pub mod table;

pub use acquire::acquire_token;
pub use error::{AuthError, AuthResult};
pub use flow::{AuthCommand, AuthOutcome};
pub use methods::{list_auth_methods, AuthMethodRow, AuthMethodTable, TABLE_HEADER};
pub use options::{AuthArgs, AuthOptions, TokenSource};
pub use policies::{extract_policies, UNKNOWN_POLICY};
pub use prompt::{SecretPrompt, TerminalPrompt, TOKEN_PROMPT};
