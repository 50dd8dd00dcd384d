//! Token acquisition.

use crate::{AuthError, AuthResult, SecretPrompt, TokenSource, TOKEN_PROMPT};
use vault_token::Token;

/// Obtain the token from its source.
///
/// Arguments are taken verbatim; prompted input loses trailing whitespace.
/// An empty result is [`AuthError::EmptyToken`].
pub fn acquire_token(source: &TokenSource, prompt: &dyn SecretPrompt) -> AuthResult<Token> {
    let raw = match source {
        TokenSource::Method(method) => {
            return Err(AuthError::UnsupportedMethod {
                method: method.clone(),
            })
        }
        TokenSource::Argument(arg) => arg.clone(),
        TokenSource::Prompt => {
            let input = prompt
                .prompt_secret(TOKEN_PROMPT)
                .map_err(AuthError::Prompt)?;
            input.trim_end().to_string()
        }
    };

    Token::new(raw).ok_or(AuthError::EmptyToken)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    struct Scripted(Result<&'static str, io::ErrorKind>);

    impl SecretPrompt for Scripted {
        fn prompt_secret(&self, label: &str) -> io::Result<String> {
            assert_eq!(label, TOKEN_PROMPT);
            self.0.map(String::from).map_err(io::Error::from)
        }
    }

    #[test]
    fn test_prompt_trims_trailing_newline() {
        let token = acquire_token(&TokenSource::Prompt, &Scripted(Ok("s.abc123\r\n"))).unwrap();
        assert_eq!(token.expose(), "s.abc123");
    }

    #[test]
    fn test_prompt_whitespace_only_is_empty() {
        let err = acquire_token(&TokenSource::Prompt, &Scripted(Ok(" \t\n"))).unwrap_err();
        assert!(matches!(err, AuthError::EmptyToken));
    }

    #[test]
    fn test_prompt_failure() {
        let err = acquire_token(
            &TokenSource::Prompt,
            &Scripted(Err(io::ErrorKind::UnexpectedEof)),
        )
        .unwrap_err();
        assert!(matches!(err, AuthError::Prompt(_)));
    }

    #[test]
    fn test_argument_is_verbatim() {
        let source = TokenSource::Argument("s.abc123 ".to_string());
        let token = acquire_token(&source, &Scripted(Ok("unused"))).unwrap();
        assert_eq!(token.expose(), "s.abc123 ");
    }

    #[test]
    fn test_empty_argument() {
        let source = TokenSource::Argument(String::new());
        let err = acquire_token(&source, &Scripted(Ok("unused"))).unwrap_err();
        assert!(matches!(err, AuthError::EmptyToken));
    }

    #[test]
    fn test_method_is_unsupported() {
        let source = TokenSource::Method("github".to_string());
        match acquire_token(&source, &Scripted(Ok("unused"))).unwrap_err() {
            AuthError::UnsupportedMethod { method } => assert_eq!(method, "github"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
