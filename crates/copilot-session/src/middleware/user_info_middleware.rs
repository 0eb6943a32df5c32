//! User Info Middleware
//!
//! Resolves the user profile once the backend is found and the user is
//! authenticated:
//! - reuses an already known profile without asking the identity provider
//! - otherwise builds the profile from the active account
//! - a missing active account is fatal for the session (`AccountMissing`)
//! - accounts of the internal organization get a usage notice

use crate::actions::{Action, AlertAction, BootstrapAction, Event};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::{Alert, AppState, BootstrapState, UserProfile};
use copilot_client::IdentityProvider;
use std::sync::Arc;

pub struct UserInfoMiddleware {
    identity: Arc<dyn IdentityProvider>,
    internal_domain: String,
    internal_use_notice: String,
    /// Set once the outcome has been dispatched; resolution runs once per session
    resolved: bool,
}

impl UserInfoMiddleware {
    pub fn new(
        identity: Arc<dyn IdentityProvider>,
        internal_domain: impl Into<String>,
        internal_use_notice: impl Into<String>,
    ) -> Self {
        Self {
            identity,
            internal_domain: internal_domain.into(),
            internal_use_notice: internal_use_notice.into(),
            resolved: false,
        }
    }

    fn resolve(&mut self, state: &AppState, dispatcher: &Dispatcher) {
        self.resolved = true;

        if let Some(user) = &state.session.user {
            log::info!("UserInfoMiddleware: Reusing profile of {}", user.email);
            dispatcher.dispatch(Action::Bootstrap(BootstrapAction::AuthResolved(user.clone())));
            return;
        }

        let Some(account) = self.identity.active_account() else {
            log::error!("UserInfoMiddleware: Authenticated, but no active account");
            dispatcher.dispatch(Action::Bootstrap(BootstrapAction::AccountMissing));
            return;
        };

        let profile = UserProfile::from_account(&account);
        log::info!("UserInfoMiddleware: Resolved profile of {}", profile.email);

        if account.email_domain() == Some(self.internal_domain.as_str()) {
            dispatcher.dispatch(Action::Alert(AlertAction::Push(Alert::info(
                self.internal_use_notice.clone(),
            ))));
        }

        dispatcher.dispatch(Action::Bootstrap(BootstrapAction::AuthResolved(profile)));
    }
}

impl Middleware for UserInfoMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        if let Action::Event(Event::SessionChanged { .. }) = action {
            if !self.resolved
                && state.is_authenticated()
                && state.bootstrap == BootstrapState::SettingUserInfo
            {
                self.resolve(state, dispatcher);
            }
        }
        true
    }
}
