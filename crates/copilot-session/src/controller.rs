//! Bootstrap Controller
//!
//! Holds the application state and runs the action loop:
//!
//! ```text
//!   dispatch(action) ──► middleware chain ──► reducer ──► state
//!        ▲                     │                            │
//!        │                spawns tasks          bootstrap / auth changed?
//!        │                     │                            │
//!        └── action channel ◄──┴──── Event::SessionChanged ◄┘
//! ```
//!
//! The controller is single-threaded: all middleware and reducers run on the
//! thread that calls [`Controller::poll`]. Collaborator calls run on the
//! tokio runtime and report back through the action channel.

use crate::actions::{Action, AlertAction, BootstrapAction, Event, SessionAction};
use crate::auth_watcher::spawn_auth_watcher;
use crate::dispatcher::{Dispatcher, SignOutHandle};
use crate::error::SessionError;
use crate::middleware::bootstrap_middleware::{BackendServices, BootstrapMiddleware};
use crate::middleware::logging::LoggingMiddleware;
use crate::middleware::sign_out_middleware::SignOutMiddleware;
use crate::middleware::user_info_middleware::UserInfoMiddleware;
use crate::middleware::Middleware;
use crate::reducers::app_reducer::reduce;
use crate::state::{AlertQueue, AppState, BootstrapState, SessionContext, UserProfile};
use crate::tasks::{TaskHandle, TaskScope};
use crate::view_models::ScreenViewModel;
use copilot_client::{AuthStatus, BackendProbe, ChatDataService, ContentSafetyProbe, IdentityProvider};
use copilot_config::AppConfig;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, TryRecvError};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::runtime::{Handle, Runtime};
use tokio::sync::watch;

/// External capabilities the controller depends on
#[derive(Clone)]
pub struct Collaborators {
    pub identity: Arc<dyn IdentityProvider>,
    pub probe: Arc<dyn BackendProbe>,
    pub chats: Arc<dyn ChatDataService>,
    pub content_safety: Arc<dyn ContentSafetyProbe>,
}

/// Builder for [`Controller`]
pub struct ControllerBuilder {
    config: AppConfig,
    collaborators: Collaborators,
    user: Option<UserProfile>,
    handle: Option<Handle>,
}

impl ControllerBuilder {
    pub fn new(config: AppConfig, collaborators: Collaborators) -> Self {
        Self {
            config,
            collaborators,
            user: None,
            handle: None,
        }
    }

    /// Start with a known profile; the identity provider is then not queried
    pub fn with_user(mut self, user: UserProfile) -> Self {
        self.user = Some(user);
        self
    }

    /// Run collaborator calls on an existing runtime instead of an owned one
    pub fn with_runtime_handle(mut self, handle: Handle) -> Self {
        self.handle = Some(handle);
        self
    }

    pub fn build(self) -> Result<Controller, SessionError> {
        let (runtime, handle) = match self.handle {
            Some(handle) => (None, handle),
            None => {
                let runtime = Runtime::new().map_err(SessionError::Runtime)?;
                let handle = runtime.handle().clone();
                (Some(runtime), handle)
            }
        };

        let (action_tx, action_rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(action_tx);

        let lifetime = TaskScope::new(handle);
        let session = lifetime.child();

        let mut state = AppState::new(&self.config.backend_uri, self.config.max_alerts);
        if let Some(user) = self.user {
            state.session = SessionContext::with_user(user);
        }

        let Collaborators {
            identity,
            probe,
            chats,
            content_safety,
        } = self.collaborators;

        // Middleware executes in this order
        let middleware: Vec<Box<dyn Middleware>> = vec![
            Box::new(LoggingMiddleware::new()),
            Box::new(SignOutMiddleware::new(
                Arc::clone(&identity),
                lifetime.clone(),
                session.clone(),
            )),
            Box::new(UserInfoMiddleware::new(
                Arc::clone(&identity),
                self.config.internal_domain.clone(),
                self.config.internal_use_notice.clone(),
            )),
            Box::new(BootstrapMiddleware::new(
                BackendServices {
                    probe,
                    chats,
                    content_safety,
                },
                session,
                self.config.chat_load_retry,
            )),
        ];

        Ok(Controller {
            state,
            middleware,
            dispatcher,
            action_rx,
            identity,
            lifetime,
            _runtime: runtime,
        })
    }
}

/// The bootstrap/session controller
///
/// State only moves through the collaborators and the public mutators; raw
/// actions cannot be injected from outside the crate:
///
/// ```compile_fail
/// use copilot_session::{Action, BootstrapAction, Controller};
///
/// fn skip_probe(controller: &mut Controller) {
///     controller.dispatch(Action::Bootstrap(BootstrapAction::BackendFound));
/// }
/// ```
pub struct Controller {
    state: AppState,
    middleware: Vec<Box<dyn Middleware>>,
    dispatcher: Dispatcher,
    action_rx: Receiver<Action>,
    identity: Arc<dyn IdentityProvider>,
    /// Cancelled on drop; parent of the session scope
    lifetime: TaskScope,
    // Declared last so it is dropped after the scopes are cancelled
    _runtime: Option<Runtime>,
}

impl Controller {
    pub fn builder(config: AppConfig, collaborators: Collaborators) -> ControllerBuilder {
        ControllerBuilder::new(config, collaborators)
    }

    /// Begin the bootstrap sequence
    ///
    /// Seeds the auth status from the identity provider and starts probing
    /// for the backend as soon as the user is authenticated.
    pub fn start(&mut self) {
        let status = self.identity.auth_status();
        self.dispatch(Action::Session(SessionAction::AuthStatusChanged(status)));
        self.dispatch(Action::Bootstrap(BootstrapAction::Start));
        self.process_pending();
    }

    /// Report a new auth status from the identity provider
    pub fn set_auth_status(&mut self, status: AuthStatus) {
        self.dispatch(Action::Session(SessionAction::AuthStatusChanged(status)));
        self.process_pending();
    }

    /// Follow an auth status signal for the lifetime of the controller
    pub fn watch_auth_status(&self, status: watch::Receiver<AuthStatus>) -> TaskHandle {
        spawn_auth_watcher(&self.lifetime, status, self.dispatcher.clone())
    }

    /// Request sign-out (see [`SignOutHandle`] for a detached callback)
    pub fn request_sign_out(&mut self) {
        self.dispatch(Action::Bootstrap(BootstrapAction::SignOutRequested));
        self.process_pending();
    }

    /// Callback the presentation layer can hold to request sign-out
    pub fn sign_out_handle(&self) -> SignOutHandle {
        SignOutHandle::new(self.dispatcher.clone())
    }

    pub fn dismiss_alert(&mut self, index: usize) {
        self.dispatch(Action::Alert(AlertAction::Dismiss(index)));
        self.process_pending();
    }

    /// Get the current state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn bootstrap_state(&self) -> BootstrapState {
        self.state.bootstrap
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.state.session.user.as_ref()
    }

    pub fn alerts(&self) -> &AlertQueue {
        &self.state.alerts
    }

    pub fn view_model(&self) -> ScreenViewModel {
        ScreenViewModel::from_state(&self.state)
    }

    /// Process an action through middleware chain and reducer
    ///
    /// Emits `Event::SessionChanged` when the bootstrap state or the auth
    /// status changed.
    pub(crate) fn dispatch(&mut self, action: Action) {
        let previous = self.state.bootstrap;
        let previous_auth = self.state.auth_status;

        let mut should_reduce = true;
        for middleware in &mut self.middleware {
            if !middleware.handle(&action, &self.state, &self.dispatcher) {
                should_reduce = false;
                break;
            }
        }

        // Events are only for middleware observation
        if should_reduce && !matches!(action, Action::Event(_)) {
            self.state = reduce(std::mem::take(&mut self.state), &action);
        }

        if self.state.bootstrap != previous || self.state.auth_status != previous_auth {
            self.dispatcher
                .dispatch(Action::event(Event::SessionChanged {
                    previous,
                    current: self.state.bootstrap,
                    auth: self.state.auth_status,
                }));
        }
    }

    /// Process every queued action without waiting; returns how many ran
    pub fn process_pending(&mut self) -> usize {
        let mut processed = 0;
        loop {
            match self.action_rx.try_recv() {
                Ok(action) => {
                    self.dispatch(action);
                    processed += 1;
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        processed
    }

    /// Wait up to `timeout` for an action, then process everything queued
    ///
    /// Returns `true` if anything was processed.
    pub fn poll(&mut self, timeout: Duration) -> bool {
        match self.action_rx.recv_timeout(timeout) {
            Ok(action) => {
                self.dispatch(action);
                self.process_pending();
                true
            }
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => false,
        }
    }

    /// Poll until `condition` holds or `timeout` elapses
    pub fn wait_until<F>(&mut self, timeout: Duration, condition: F) -> bool
    where
        F: Fn(&AppState) -> bool,
    {
        let deadline = Instant::now() + timeout;
        self.process_pending();

        while !condition(&self.state) {
            let now = Instant::now();
            if now >= deadline {
                return false;
            }
            self.poll(deadline - now);
        }
        true
    }
}

impl Drop for Controller {
    fn drop(&mut self) {
        log::debug!("Controller dropped, cancelling session tasks");
        self.lifetime.cancel();
    }
}
