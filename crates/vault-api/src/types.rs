//! Response payloads.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Generic secret envelope returned by most read endpoints, including
/// `auth/token/lookup-self`.
///
/// `data` is kept as raw JSON; callers decode the fields they need.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Secret {
    #[serde(default)]
    pub request_id: String,
    #[serde(default)]
    pub lease_id: String,
    #[serde(default)]
    pub lease_duration: i64,
    #[serde(default)]
    pub renewable: bool,
    #[serde(default)]
    pub data: Option<Map<String, Value>>,
    #[serde(default)]
    pub warnings: Option<Vec<String>>,
}

impl Secret {
    /// Look up a single field of `data`.
    pub fn data_field(&self, key: &str) -> Option<&Value> {
        self.data.as_ref().and_then(|data| data.get(key))
    }
}

/// One enabled auth method, as listed by `sys/auth`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthMount {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub description: String,
}

/// Error envelope of non-success responses.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub errors: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_secret_decodes_lookup_self_body() {
        let secret: Secret = serde_json::from_value(json!({
            "request_id": "8c1f",
            "lease_id": "",
            "renewable": false,
            "lease_duration": 0,
            "data": { "policies": ["default"], "ttl": 0 },
            "warnings": null
        }))
        .unwrap();

        assert_eq!(secret.request_id, "8c1f");
        assert_eq!(secret.data_field("policies"), Some(&json!(["default"])));
        assert!(secret.data_field("missing").is_none());
    }

    #[test]
    fn test_secret_tolerates_null_data() {
        let secret: Secret = serde_json::from_value(json!({ "data": null })).unwrap();
        assert!(secret.data.is_none());
        assert!(secret.data_field("policies").is_none());
    }

    #[test]
    fn test_auth_mount_requires_type() {
        let mount: AuthMount =
            serde_json::from_value(json!({ "type": "github", "description": "GitHub auth" }))
                .unwrap();
        assert_eq!(mount.kind, "github");

        let no_description: AuthMount = serde_json::from_value(json!({ "type": "token" })).unwrap();
        assert_eq!(no_description.description, "");

        assert!(serde_json::from_value::<AuthMount>(json!({ "description": "x" })).is_err());
    }
}
