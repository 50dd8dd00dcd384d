//! Flag and argument validation for `auth`.

use crate::{AuthError, AuthResult};

/// Raw inputs of the `auth` command as parsed from the command line.
#[derive(Debug, Clone, Default)]
pub struct AuthArgs {
    /// `--method=<name>`; an empty string counts as unset.
    pub method: Option<String>,
    /// `--methods`
    pub list_methods: bool,
    /// Positional arguments.
    pub args: Vec<String>,
}

/// Where the token comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenSource {
    /// Alternate auth method by name.
    Method(String),
    /// The positional argument, verbatim.
    Argument(String),
    /// Hidden interactive prompt.
    Prompt,
}

/// Validated `auth` options. Conflicting combinations are unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOptions {
    ListMethods,
    Login(TokenSource),
}

impl TryFrom<AuthArgs> for AuthOptions {
    type Error = AuthError;

    fn try_from(input: AuthArgs) -> AuthResult<Self> {
        let method = input.method.filter(|m| !m.is_empty());
        let mut args = input.args;

        if input.list_methods {
            if method.is_some() || !args.is_empty() {
                return Err(AuthError::usage(
                    "auth expects no arguments and no --method if --methods is specified",
                ));
            }
            return Ok(Self::ListMethods);
        }

        if args.len() > 1 {
            return Err(AuthError::usage("auth expects at most one argument"));
        }

        if let Some(method) = method {
            if !args.is_empty() {
                return Err(AuthError::usage(
                    "auth expects no arguments if --method is specified",
                ));
            }
            return Ok(Self::Login(TokenSource::Method(method)));
        }

        match args.pop() {
            Some(arg) if arg == "-" => Err(AuthError::usage(
                "reading the token from stdin (\"-\") is not supported; \
                 pass the token as the argument or omit it to be prompted",
            )),
            Some(arg) => Ok(Self::Login(TokenSource::Argument(arg))),
            None => Ok(Self::Login(TokenSource::Prompt)),
        }
    }
}
