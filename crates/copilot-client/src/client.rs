//! Collaborator traits
//!
//! The session controller depends on four capabilities it does not
//! implement. Each one is a trait so hosts can plug in their own identity
//! provider and backend client, and tests can plug in mocks.
//!
//! Implementations own their own timeout and retry policies. Errors are
//! returned as `anyhow::Result` and converted into outcome actions by the
//! controller; they never abort the session.

use crate::types::{AccountInfo, AuthStatus, ContentSafetyStatus, ServiceOptions};
use async_trait::async_trait;

/// Identity provider capability
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so they can be shared with
/// the controller's background tasks.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Current authentication status
    fn auth_status(&self) -> AuthStatus;

    /// The active account, if the provider has one
    fn active_account(&self) -> Option<AccountInfo>;

    /// End the provider session (redirect, token purge, ...)
    async fn sign_out(&self) -> anyhow::Result<()>;
}

/// Backend availability probe
#[async_trait]
pub trait BackendProbe: Send + Sync {
    /// Resolve once the backend at `uri` is reachable
    ///
    /// The probe keeps trying on its own schedule. An error means it gave up.
    async fn probe(&self, uri: &str) -> anyhow::Result<()>;
}

/// Chat data service
#[async_trait]
pub trait ChatDataService: Send + Sync {
    /// Load the conversation list for the signed-in user
    async fn load_chats(&self) -> anyhow::Result<()>;

    /// Fetch backend service options
    ///
    /// `Ok(None)` means the backend answered without options.
    async fn service_options(&self) -> anyhow::Result<Option<ServiceOptions>>;
}

/// Content safety capability
#[async_trait]
pub trait ContentSafetyProbe: Send + Sync {
    /// Fetch whether content safety checks are available
    async fn content_safety_status(&self) -> anyhow::Result<ContentSafetyStatus>;
}
