//! Application State

use copilot_client::AuthStatus;

use super::{AlertQueue, BootstrapState, SessionContext};

/// Controller state - everything the presentation layer may read
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    /// Current step of the bootstrap sequence
    pub bootstrap: BootstrapState,
    /// Last authentication status observed from the identity provider
    pub auth_status: AuthStatus,
    pub session: SessionContext,
    pub alerts: AlertQueue,
    /// Backend base address handed to the backend probe
    pub backend_uri: String,
}

impl AppState {
    pub fn new(backend_uri: impl Into<String>, max_alerts: usize) -> Self {
        Self {
            backend_uri: backend_uri.into(),
            alerts: AlertQueue::with_capacity(max_alerts),
            ..Self::default()
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth_status.is_authenticated()
    }
}
