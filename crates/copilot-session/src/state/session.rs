//! Session Context
//!
//! Per-session data: created on sign-in, torn down on sign-out.

use copilot_client::{AccountInfo, ServiceOptions};

/// Profile of the signed-in user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub display_name: String,
}

impl UserProfile {
    /// Build the profile from the identity provider's active account
    ///
    /// The account username is the email address; it doubles as display
    /// name when the account carries none.
    pub fn from_account(account: &AccountInfo) -> Self {
        Self {
            id: account.home_account_id.clone(),
            email: account.username.clone(),
            display_name: account
                .name
                .clone()
                .unwrap_or_else(|| account.username.clone()),
        }
    }
}

/// Session-wide data gathered during bootstrap
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionContext {
    /// Resolved user profile, set once per session
    pub user: Option<UserProfile>,
    /// Content safety availability (disabled until the backend says otherwise)
    pub content_safety_enabled: bool,
    /// Backend service options, last write wins
    pub service_options: Option<ServiceOptions>,
}

impl SessionContext {
    /// Context for a restored session with a known user
    pub fn with_user(user: UserProfile) -> Self {
        Self {
            user: Some(user),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_from_account_with_name() {
        let account = AccountInfo::new("home-1", "alice@microsoft.com").with_name("Alice");
        let profile = UserProfile::from_account(&account);
        assert_eq!(profile.id, "home-1");
        assert_eq!(profile.email, "alice@microsoft.com");
        assert_eq!(profile.display_name, "Alice");
    }

    #[test]
    fn test_profile_from_account_without_name() {
        let account = AccountInfo::new("home-2", "bob@example.com");
        let profile = UserProfile::from_account(&account);
        assert_eq!(profile.display_name, "bob@example.com");
    }
}
