//! Session actions
//!
//! Observations that update the session context without driving the
//! bootstrap state machine.

use copilot_client::{AuthStatus, ServiceOptions};

#[derive(Debug, Clone, PartialEq)]
pub enum SessionAction {
    /// The identity provider reported a (possibly unchanged) auth status
    AuthStatusChanged(AuthStatus),
    /// Content safety availability fetched from the backend
    ContentSafetyStatusLoaded(bool),
    /// Service options fetched from the backend
    ServiceOptionsLoaded(ServiceOptions),
}
