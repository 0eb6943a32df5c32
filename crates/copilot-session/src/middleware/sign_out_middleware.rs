//! Sign-out Middleware
//!
//! Handles `SignOutRequested`:
//! - drops the request when nobody is signed in
//! - cancels every task of the current session
//! - asks the identity provider to end its session

use crate::actions::{Action, BootstrapAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::{AppState, BootstrapState};
use crate::tasks::TaskScope;
use copilot_client::IdentityProvider;
use std::sync::Arc;

pub struct SignOutMiddleware {
    identity: Arc<dyn IdentityProvider>,
    /// Outlives the session; runs the provider sign-out
    lifetime: TaskScope,
    session: TaskScope,
}

impl SignOutMiddleware {
    pub fn new(identity: Arc<dyn IdentityProvider>, lifetime: TaskScope, session: TaskScope) -> Self {
        Self {
            identity,
            lifetime,
            session,
        }
    }
}

impl Middleware for SignOutMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, _dispatcher: &Dispatcher) -> bool {
        if !matches!(action, Action::Bootstrap(BootstrapAction::SignOutRequested)) {
            return true;
        }

        if state.bootstrap == BootstrapState::SigningOut {
            log::debug!("SignOutMiddleware: Already signing out");
            return false;
        }

        if !state.is_authenticated() {
            log::warn!("SignOutMiddleware: Ignoring sign-out request, not authenticated");
            return false;
        }

        log::info!("SignOutMiddleware: Signing out from {}", state.bootstrap);
        self.session.cancel();

        let identity = Arc::clone(&self.identity);
        self.lifetime.spawn_detached(async move {
            if let Err(e) = identity.sign_out().await {
                log::error!("SignOutMiddleware: Identity provider sign-out failed: {}", e);
            }
        });

        true
    }
}
