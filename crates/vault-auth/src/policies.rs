//! Typed decoding of the policies attached to a token.

use crate::{AuthError, AuthResult};
use serde_json::Value;
use vault_api::Secret;

/// Reported when the server does not say which policies apply.
pub const UNKNOWN_POLICY: &str = "unknown";

/// Read `data.policies` from a `lookup-self` response, in server order.
///
/// A missing field yields `["unknown"]`. Anything other than an array of
/// strings is [`AuthError::MalformedResponse`].
pub fn extract_policies(secret: &Secret) -> AuthResult<Vec<String>> {
    let items = match secret.data_field("policies") {
        None => return Ok(vec![UNKNOWN_POLICY.to_string()]),
        Some(Value::Array(items)) => items,
        Some(other) => {
            return Err(AuthError::MalformedResponse(format!(
                "expected a list of policy names, got {}",
                kind(other)
            )))
        }
    };

    items
        .iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::String(name) => Ok(name.clone()),
            other => Err(AuthError::MalformedResponse(format!(
                "policy at index {} is {}, expected a string",
                index,
                kind(other)
            ))),
        })
        .collect()
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
