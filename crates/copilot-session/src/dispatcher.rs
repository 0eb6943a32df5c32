//! Dispatcher for middleware action dispatch
//!
//! When middleware or a background task needs to dispatch actions that should
//! re-enter the middleware chain, it uses the Dispatcher. Dispatched actions are
//! queued on the controller's action channel and processed in order by
//! `Controller::poll`.
//!
//! This enables patterns like:
//! - the backend probe task resolving and dispatching `BackendFound`
//! - `Event::SessionChanged` triggering user info resolution

use crate::actions::Action;
use std::sync::mpsc::Sender;

/// Dispatcher for sending actions through the middleware chain
///
/// Cheap to clone and safe to move into async tasks.
#[derive(Clone)]
pub struct Dispatcher {
    action_tx: Sender<Action>,
}

impl Dispatcher {
    /// Create a new dispatcher feeding the controller's action channel
    pub fn new(action_tx: Sender<Action>) -> Self {
        Self { action_tx }
    }

    /// Dispatch an action to be processed through the middleware chain
    pub fn dispatch(&self, action: Action) {
        if let Err(e) = self.action_tx.send(action) {
            log::error!("Dispatcher: failed to send action: {}", e);
        }
    }
}

/// Presentation-layer callback for requesting sign-out
#[derive(Clone)]
pub struct SignOutHandle {
    dispatcher: Dispatcher,
}

impl SignOutHandle {
    pub(crate) fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Request sign-out; takes effect on the controller's next poll
    pub fn request(&self) {
        self.dispatcher.dispatch(Action::Bootstrap(
            crate::actions::BootstrapAction::SignOutRequested,
        ));
    }
}
