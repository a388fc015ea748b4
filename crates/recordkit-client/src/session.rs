//! Account/session context resolution.
//!
//! Account settings arrive as a serde-deserializable document supplied by
//! the deployment's sign-in flow. Resolution happens once, outside the
//! per-call hot path: extract the record-storage token and user id, and
//! pick the endpoint URL (per-service override with the `/api/client`
//! suffix, falling back to the environment's production URL).

use std::collections::BTreeMap;

use serde::Deserialize;
use tracing::debug;

use recordkit_core::error::ClientError;

/// Token key carrying the record-storage auth token.
pub const RECORD_STORAGE_TOKEN: &str = "recordStorageToken";

/// Service key whose URL, when present, overrides the production endpoint.
pub const RECORD_STORAGE_SERVICE: &str = "recordStorage";

/// Raw account settings document.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSettings {
    pub account: AccountInfo,
    pub tokens: BTreeMap<String, String>,
    #[serde(default)]
    pub services: BTreeMap<String, ServiceEndpoint>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountInfo {
    pub user_id: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceEndpoint {
    pub url: Option<String>,
}

impl AccountSettings {
    /// Parse a JSON-encoded settings document.
    pub fn from_json(bytes: &[u8]) -> Result<Self, ClientError> {
        serde_json::from_slice(bytes)
            .map_err(|e| ClientError::Configuration(format!("invalid account settings: {e}")))
    }
}

/// Resolved session context: everything a client needs to talk to the
/// record-storage endpoint.
#[derive(Debug, Clone)]
pub struct AccountSession {
    pub user_id: String,
    pub auth_token: String,
    pub base_url: String,
}

impl AccountSession {
    /// Resolve a session from `settings`, using `production_url` when the
    /// settings carry no service override.
    pub fn resolve(
        settings: &AccountSettings,
        production_url: &str,
    ) -> Result<Self, ClientError> {
        let user_id = settings.account.user_id.clone();
        if user_id.is_empty() {
            return Err(ClientError::Configuration(
                "account settings carry no user id".into(),
            ));
        }

        let auth_token = settings
            .tokens
            .get(RECORD_STORAGE_TOKEN)
            .cloned()
            .ok_or_else(|| {
                ClientError::Configuration(format!("missing token '{RECORD_STORAGE_TOKEN}'"))
            })?;

        // Service overrides take precedence over the production endpoint.
        let base_url = settings
            .services
            .get(RECORD_STORAGE_SERVICE)
            .and_then(|service| service.url.clone())
            .map(|url| format!("{url}/api/client"))
            .unwrap_or_else(|| production_url.to_string());

        debug!(user_id = %user_id, base_url = %base_url, "resolved account session");
        Ok(Self { user_id, auth_token, base_url })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings_json(with_override: bool) -> String {
        let services = if with_override {
            r#","services": {"recordStorage": {"url": "https://records-eu.example.com"}}"#
        } else {
            ""
        };
        format!(
            r#"{{
                "account": {{"userId": "user-42"}},
                "tokens": {{"recordStorageToken": "tok-abc"}}
                {services}
            }}"#
        )
    }

    #[test]
    fn resolves_with_service_override() {
        let settings = AccountSettings::from_json(settings_json(true).as_bytes()).unwrap();
        let session =
            AccountSession::resolve(&settings, "https://records.example.com/api/client").unwrap();
        assert_eq!(session.user_id, "user-42");
        assert_eq!(session.auth_token, "tok-abc");
        assert_eq!(session.base_url, "https://records-eu.example.com/api/client");
    }

    #[test]
    fn falls_back_to_production_url() {
        let settings = AccountSettings::from_json(settings_json(false).as_bytes()).unwrap();
        let session =
            AccountSession::resolve(&settings, "https://records.example.com/api/client").unwrap();
        assert_eq!(session.base_url, "https://records.example.com/api/client");
    }

    #[test]
    fn missing_token_is_a_configuration_error() {
        let settings = AccountSettings::from_json(
            br#"{"account": {"userId": "user-42"}, "tokens": {}}"#,
        )
        .unwrap();
        let err = AccountSession::resolve(&settings, "https://records.example.com").unwrap_err();
        assert!(matches!(err, ClientError::Configuration(_)));
    }

    #[test]
    fn malformed_settings_are_a_configuration_error() {
        let err = AccountSettings::from_json(b"not json").unwrap_err();
        assert!(matches!(err, ClientError::Configuration(_)));
    }
}
