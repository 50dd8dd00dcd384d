//! The `auth` command.

use super::Context;
use crate::output::{self, OutputFormat};
use tracing::debug;
use vault_api::ApiClientFactory;
use vault_auth::{AuthCommand, AuthError, AuthOptions, TerminalPrompt};
use vault_token::{ConfiguredTokenHelper, Token};

/// Environment variable holding a token to use instead of the stored one.
const TOKEN_ENV: &str = "VAULT_TOKEN";

/// Authenticate, or list auth methods with `--methods`.
pub async fn auth(
    ctx: &Context,
    options: AuthOptions,
    format: &OutputFormat,
) -> Result<(), AuthError> {
    let token_override = std::env::var(TOKEN_ENV).ok().and_then(Token::new);
    debug!(
        address = %ctx.config.address,
        token_override = token_override.is_some(),
        "running auth"
    );

    let command = AuthCommand::new(
        Box::new(ConfiguredTokenHelper::new(&ctx.config, &ctx.paths)),
        Box::new(ApiClientFactory::new(ctx.config.clone())),
        Box::new(TerminalPrompt),
    )
    .with_token_override(token_override);

    let outcome = command.execute(options).await?;
    output::print(&outcome.render_text(), &outcome.to_json(), format);
    Ok(())
}
