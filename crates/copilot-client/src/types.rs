//! Data types shared between the session controller and its collaborators
//!
//! These types are the values the identity provider and the backend
//! services hand back to the controller. The controller never mutates them.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Authentication status as reported by the identity provider
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuthStatus {
    /// No signed-in account (default until the provider reports otherwise)
    #[default]
    Unauthenticated,
    /// An account is signed in
    Authenticated,
}

impl AuthStatus {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthStatus::Authenticated)
    }
}

/// Active account descriptor resolved by the identity provider
///
/// `username` is the canonical account identifier and holds the email address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountInfo {
    pub home_account_id: String,
    pub username: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl AccountInfo {
    pub fn new(home_account_id: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            home_account_id: home_account_id.into(),
            username: username.into(),
            name: None,
        }
    }

    /// Set the display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Domain part of the username (text between the first and second `@`)
    ///
    /// Returns `None` when the username has no `@`.
    pub fn email_domain(&self) -> Option<&str> {
        self.username.split('@').nth(1)
    }
}

/// Service options blob returned by the chat backend
///
/// The controller treats the content as opaque configuration and only
/// stores it for the rest of the session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceOptions(Value);

impl ServiceOptions {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Look up a top-level key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Raw JSON value
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}

impl From<Value> for ServiceOptions {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Content safety availability as reported by the backend
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentSafetyStatus {
    pub is_enabled: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_email_domain() {
        let account = AccountInfo::new("id-1", "alice@microsoft.com");
        assert_eq!(account.email_domain(), Some("microsoft.com"));

        let account = AccountInfo::new("id-2", "no-at-sign");
        assert_eq!(account.email_domain(), None);

        // Only the segment after the first '@' counts
        let account = AccountInfo::new("id-3", "odd@microsoft.com@evil.com");
        assert_eq!(account.email_domain(), Some("microsoft.com"));
    }

    #[test]
    fn test_account_info_deserialize() {
        let account: AccountInfo = serde_json::from_value(json!({
            "homeAccountId": "abc.def",
            "username": "bob@example.com"
        }))
        .unwrap();
        assert_eq!(account.home_account_id, "abc.def");
        assert_eq!(account.name, None);
    }

    #[test]
    fn test_service_options_transparent() {
        let raw = json!({
            "memoriesStore": { "types": ["Volatile", "Qdrant"], "selectedType": "Volatile" },
            "version": "1.0.0"
        });
        let options: ServiceOptions = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(options.get("version"), Some(&json!("1.0.0")));
        assert_eq!(serde_json::to_value(&options).unwrap(), raw);
    }

    #[test]
    fn test_content_safety_status_deserialize() {
        let status: ContentSafetyStatus =
            serde_json::from_value(json!({ "isEnabled": true })).unwrap();
        assert!(status.is_enabled);
    }
}
