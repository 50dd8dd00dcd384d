//! Listing of enabled auth methods.

use crate::table::simple_format;
use crate::{AuthError, AuthResult};
use serde::Serialize;
use std::collections::HashMap;
use vault_api::{AuthMount, ClientFactory};
use vault_token::Token;

/// First row of the rendered table.
pub const TABLE_HEADER: &str = "Path | Type | Description";

/// One auth method, flattened for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthMethodRow {
    pub path: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
}

/// Auth methods sorted by path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AuthMethodTable {
    rows: Vec<AuthMethodRow>,
}

impl AuthMethodTable {
    pub fn from_mounts(mounts: HashMap<String, AuthMount>) -> Self {
        let mut rows: Vec<AuthMethodRow> = mounts
            .into_iter()
            .map(|(path, mount)| AuthMethodRow {
                path,
                kind: mount.kind,
                description: mount.description,
            })
            .collect();
        rows.sort_by(|a, b| a.path.cmp(&b.path));
        Self { rows }
    }

    /// Pipe-delimited lines, header first.
    pub fn lines(&self) -> Vec<String> {
        std::iter::once(TABLE_HEADER.to_string())
            .chain(
                self.rows
                    .iter()
                    .map(|r| format!("{} | {} | {}", r.path, r.kind, r.description)),
            )
            .collect()
    }

    /// Column-aligned text.
    pub fn render(&self) -> String {
        simple_format(&self.lines())
    }
}

/// Query the server for its enabled auth methods.
pub async fn list_auth_methods(
    clients: &dyn ClientFactory,
    token: Option<&Token>,
) -> AuthResult<AuthMethodTable> {
    let client = clients.client(token).map_err(AuthError::ClientInit)?;
    let mounts = client
        .list_auth_methods()
        .await
        .map_err(AuthError::ListMethods)?;

    tracing::debug!(count = mounts.len(), "building auth method table");
    Ok(AuthMethodTable::from_mounts(mounts))
}
