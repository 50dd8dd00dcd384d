#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::io;
use std::sync::{Arc, Mutex};
use vault_api::{ApiError, ApiResult, AuthMount, ClientFactory, RemoteClient, Secret};
use vault_auth::{AuthCommand, SecretPrompt};
use vault_token::{
    Token, TokenHelperError, TokenHelperProvider, TokenHelperResult, TokenPersistence,
};

/// Everything the fakes saw during one run.
#[derive(Default)]
pub struct Calls {
    pub helper_inits: usize,
    pub stored: Vec<String>,
    pub gets: usize,
    pub prompts: usize,
    pub clients_built: Vec<Option<String>>,
    pub lookups: usize,
    pub listings: usize,
}

pub type Shared = Arc<Mutex<Calls>>;

/// Scripted behaviour of every collaborator.
pub struct Script {
    pub helper_init_fails: bool,
    pub store_fails: bool,
    pub stored_token: Option<&'static str>,
    pub stored_token_unreadable: bool,
    pub prompt_input: io::Result<String>,
    pub client_init_fails: bool,
    pub lookup: Result<Value, u16>,
    pub mounts: Result<HashMap<String, AuthMount>, u16>,
}

impl Default for Script {
    fn default() -> Self {
        Self {
            helper_init_fails: false,
            store_fails: false,
            stored_token: None,
            stored_token_unreadable: false,
            prompt_input: Ok(String::new()),
            client_init_fails: false,
            lookup: Ok(serde_json::json!({ "data": { "policies": ["default"] } })),
            mounts: Ok(HashMap::new()),
        }
    }
}

struct Helper {
    calls: Shared,
    store_fails: bool,
    stored_token: Option<&'static str>,
    get_fails: bool,
}

impl TokenPersistence for Helper {
    fn store(&self, token: &Token) -> TokenHelperResult<()> {
        if self.store_fails {
            return Err(TokenHelperError::Helper {
                action: "store",
                message: "keyring locked".to_string(),
            });
        }
        self.calls.lock().unwrap().stored.push(token.expose().to_string());
        Ok(())
    }

    fn get(&self) -> TokenHelperResult<Option<Token>> {
        self.calls.lock().unwrap().gets += 1;
        if self.get_fails {
            return Err(TokenHelperError::Helper {
                action: "get",
                message: "keyring locked".to_string(),
            });
        }
        Ok(self.stored_token.and_then(Token::new))
    }
}

struct Provider {
    calls: Shared,
    init_fails: bool,
    store_fails: bool,
    stored_token: Option<&'static str>,
    get_fails: bool,
}

impl TokenHelperProvider for Provider {
    fn token_helper(&self) -> TokenHelperResult<Box<dyn TokenPersistence>> {
        self.calls.lock().unwrap().helper_inits += 1;
        if self.init_fails {
            return Err(TokenHelperError::NotFound("/opt/helper".into()));
        }
        Ok(Box::new(Helper {
            calls: self.calls.clone(),
            store_fails: self.store_fails,
            stored_token: self.stored_token,
            get_fails: self.get_fails,
        }))
    }
}

struct Prompt {
    calls: Shared,
    input: Mutex<Option<io::Result<String>>>,
}

impl SecretPrompt for Prompt {
    fn prompt_secret(&self, _label: &str) -> io::Result<String> {
        self.calls.lock().unwrap().prompts += 1;
        self.input
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Err(io::Error::from(io::ErrorKind::UnexpectedEof)))
    }
}

fn status_error(status: u16) -> ApiError {
    ApiError::Status {
        method: "GET",
        url: "http://127.0.0.1:8200/v1/test".to_string(),
        status,
        errors: vec!["permission denied".to_string()],
    }
}

struct Client {
    calls: Shared,
    lookup: Result<Value, u16>,
    mounts: Result<HashMap<String, AuthMount>, u16>,
}

#[async_trait]
impl RemoteClient for Client {
    async fn lookup_self(&self) -> ApiResult<Secret> {
        self.calls.lock().unwrap().lookups += 1;
        match &self.lookup {
            Ok(body) => {
                serde_json::from_value(body.clone()).map_err(|e| ApiError::Decode(e.to_string()))
            }
            Err(status) => Err(status_error(*status)),
        }
    }

    async fn list_auth_methods(&self) -> ApiResult<HashMap<String, AuthMount>> {
        self.calls.lock().unwrap().listings += 1;
        self.mounts.clone().map_err(status_error)
    }
}

struct Clients {
    calls: Shared,
    init_fails: bool,
    lookup: Result<Value, u16>,
    mounts: Result<HashMap<String, AuthMount>, u16>,
}

impl ClientFactory for Clients {
    fn client(&self, token: Option<&Token>) -> ApiResult<Box<dyn RemoteClient>> {
        self.calls
            .lock()
            .unwrap()
            .clients_built
            .push(token.map(|t| t.expose().to_string()));
        if self.init_fails {
            return Err(ApiError::Tls("bad CA bundle".to_string()));
        }
        Ok(Box::new(Client {
            calls: self.calls.clone(),
            lookup: self.lookup.clone(),
            mounts: self.mounts.clone(),
        }))
    }
}

/// Build an [`AuthCommand`] wired to fakes following `script`.
pub fn command(script: Script) -> (AuthCommand, Shared) {
    let calls: Shared = Arc::default();

    let command = AuthCommand::new(
        Box::new(Provider {
            calls: calls.clone(),
            init_fails: script.helper_init_fails,
            store_fails: script.store_fails,
            stored_token: script.stored_token,
            get_fails: script.stored_token_unreadable,
        }),
        Box::new(Clients {
            calls: calls.clone(),
            init_fails: script.client_init_fails,
            lookup: script.lookup,
            mounts: script.mounts,
        }),
        Box::new(Prompt {
            calls: calls.clone(),
            input: Mutex::new(Some(script.prompt_input)),
        }),
    );

    (command, calls)
}

pub fn mount(kind: &str, description: &str) -> AuthMount {
    AuthMount {
        kind: kind.to_string(),
        description: description.to_string(),
    }
}
