//! Bootstrap actions
//!
//! Typed events consumed by the bootstrap state machine.

use crate::state::UserProfile;

/// Inputs of the bootstrap state machine
#[derive(Debug, Clone, PartialEq)]
pub enum BootstrapAction {
    /// Bootstrap process started; kicks off the backend probe
    Start,
    /// Backend probe reported the backend as reachable
    BackendFound,
    /// User profile resolved (freshly built or already known)
    AuthResolved(UserProfile),
    /// Authenticated, but the identity provider has no active account
    AccountMissing,
    /// Chat list loaded
    ChatsLoaded,
    /// Chat list load failed (1-based attempt number)
    ChatsLoadFailed { attempt: u32 },
    /// User asked to sign out
    SignOutRequested,
}
