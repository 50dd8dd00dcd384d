//! The `auth` command pipeline.

use crate::methods::{list_auth_methods, AuthMethodTable};
use crate::{
    acquire_token, extract_policies, AuthArgs, AuthError, AuthOptions, AuthResult, SecretPrompt,
    TokenSource,
};
use serde_json::json;
use tracing::{debug, info};
use vault_api::ClientFactory;
use vault_token::{Token, TokenHelperProvider, TokenHelperResult};

/// Successful result of one `auth` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    /// Token stored and verified; policies in server order.
    Authenticated { policies: Vec<String> },
    /// `--methods` listing.
    Methods(AuthMethodTable),
}

impl AuthOutcome {
    /// Text shown on stdout.
    pub fn render_text(&self) -> String {
        match self {
            Self::Authenticated { policies } => format!(
                "Successfully authenticated! The policies that are associated\n\
                 with this token are listed below:\n\n{}",
                policies.join(", ")
            ),
            Self::Methods(table) => table.render(),
        }
    }

    /// Machine-readable form for `--format json`.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Authenticated { policies } => json!({ "policies": policies }),
            Self::Methods(table) => json!({ "auth_methods": table }),
        }
    }
}

/// Runs `auth` against injected collaborators.
///
/// The login path is strictly linear: validate, resolve the token helper,
/// acquire, store, build a client, `lookup-self`, decode policies. The first
/// failure ends the run. Storing happens before verification, so a token the
/// server rejects stays persisted.
pub struct AuthCommand {
    token_helpers: Box<dyn TokenHelperProvider>,
    clients: Box<dyn ClientFactory>,
    prompt: Box<dyn SecretPrompt>,
    token_override: Option<Token>,
}

impl AuthCommand {
    pub fn new(
        token_helpers: Box<dyn TokenHelperProvider>,
        clients: Box<dyn ClientFactory>,
        prompt: Box<dyn SecretPrompt>,
    ) -> Self {
        Self {
            token_helpers,
            clients,
            prompt,
            token_override: None,
        }
    }

    /// Token used for `--methods` instead of the stored one (`VAULT_TOKEN`).
    pub fn with_token_override(mut self, token: Option<Token>) -> Self {
        self.token_override = token;
        self
    }

    pub async fn run(&self, args: AuthArgs) -> AuthResult<AuthOutcome> {
        self.execute(AuthOptions::try_from(args)?).await
    }

    /// Run already validated options.
    pub async fn execute(&self, options: AuthOptions) -> AuthResult<AuthOutcome> {
        match options {
            AuthOptions::ListMethods => self.list_methods().await,
            AuthOptions::Login(source) => self.login(&source).await,
        }
    }

    async fn login(&self, source: &TokenSource) -> AuthResult<AuthOutcome> {
        let helper = self
            .token_helpers
            .token_helper()
            .map_err(AuthError::TokenHelperInit)?;

        let token = acquire_token(source, self.prompt.as_ref())?;

        helper.store(&token).map_err(AuthError::Persistence)?;
        debug!("token stored, verifying");

        let client = self
            .clients
            .client(Some(&token))
            .map_err(AuthError::ClientInit)?;
        let secret = client
            .lookup_self()
            .await
            .map_err(AuthError::Verification)?;

        let policies = extract_policies(&secret)?;
        info!(policy_count = policies.len(), "authenticated");

        Ok(AuthOutcome::Authenticated { policies })
    }

    async fn list_methods(&self) -> AuthResult<AuthOutcome> {
        let token = self
            .listing_token()
            .map_err(|e| AuthError::ClientInit(e.into()))?;

        let table = list_auth_methods(self.clients.as_ref(), token.as_ref()).await?;
        Ok(AuthOutcome::Methods(table))
    }

    /// Token for `--methods`: the override, else whatever the helper holds.
    /// Resolving it is part of building the client.
    fn listing_token(&self) -> TokenHelperResult<Option<Token>> {
        if let Some(token) = &self.token_override {
            return Ok(Some(token.clone()));
        }
        self.token_helpers.token_helper()?.get()
    }
}
