//! Event types
//!
//! Events represent facts that middleware observes. They are never reduced.
//!
//! ## Naming Convention
//!
//! Events use past tense or descriptive names indicating something has happened:
//! - `SessionChanged` (not `ReevaluateSession`)

use copilot_client::AuthStatus;

use crate::state::BootstrapState;

/// Events observed by the middleware chain
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Bootstrap state or auth status changed
    ///
    /// Emitted by the controller after a reduction that changed either value.
    /// Middleware re-evaluates its transition rules on this event only.
    SessionChanged {
        previous: BootstrapState,
        current: BootstrapState,
        auth: AuthStatus,
    },
}
