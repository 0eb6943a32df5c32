//! Bootstrap Middleware
//!
//! Manages the asynchronous parts of the startup sequence:
//! - Starts the backend probe on `Start` (once authenticated) and dispatches
//!   `BackendFound` when it resolves
//! - On entering `LoadingChats` while authenticated, fans out three
//!   independent fetches exactly once:
//!   1. chat list (with retry) -> `ChatsLoaded` / `ChatsLoadFailed`
//!   2. content safety status -> session context only
//!   3. service options -> session context only
//!
//! All tasks run in the session scope and stop on sign-out.

use crate::actions::{Action, AlertAction, BootstrapAction, Event, SessionAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::{Alert, AppState, BootstrapState};
use crate::tasks::{TaskHandle, TaskScope};
use copilot_client::{BackendProbe, ChatDataService, ContentSafetyProbe};
use copilot_config::RetryPolicy;
use std::sync::Arc;

/// Shown when every chat load attempt failed
pub const CHATS_LOAD_FAILED_MESSAGE: &str =
    "Unable to load chats. Please check your connection, or sign out and sign back in.";

/// Backend collaborators used during bootstrap
#[derive(Clone)]
pub struct BackendServices {
    pub probe: Arc<dyn BackendProbe>,
    pub chats: Arc<dyn ChatDataService>,
    pub content_safety: Arc<dyn ContentSafetyProbe>,
}

/// Handles of the startup fetches
#[derive(Debug)]
struct FanOut {
    chats: TaskHandle,
    content_safety: TaskHandle,
    service_options: TaskHandle,
}

pub struct BootstrapMiddleware {
    services: BackendServices,
    session: TaskScope,
    chat_load_retry: RetryPolicy,
    started: bool,
    probe: Option<TaskHandle>,
    fan_out: Option<FanOut>,
}

impl BootstrapMiddleware {
    pub fn new(services: BackendServices, session: TaskScope, chat_load_retry: RetryPolicy) -> Self {
        Self {
            services,
            session,
            chat_load_retry,
            started: false,
            probe: None,
            fan_out: None,
        }
    }

    /// Start whatever the current state calls for and has not run yet
    fn evaluate(&mut self, state: &AppState, dispatcher: &Dispatcher) {
        if !self.started || !state.is_authenticated() {
            return;
        }

        match state.bootstrap {
            BootstrapState::ProbingBackend if self.probe.is_none() => {
                self.probe = Some(self.start_probe(&state.backend_uri, dispatcher));
            }
            BootstrapState::LoadingChats if self.fan_out.is_none() => {
                self.fan_out = Some(self.start_fan_out(dispatcher));
            }
            _ => {}
        }
    }

    fn start_probe(&self, uri: &str, dispatcher: &Dispatcher) -> TaskHandle {
        log::info!("BootstrapMiddleware: Probing backend at {}", uri);
        let probe = Arc::clone(&self.services.probe);
        let uri = uri.to_string();
        let dispatcher = dispatcher.clone();

        self.session.spawn("backend_probe", async move {
            match probe.probe(&uri).await {
                Ok(()) => {
                    log::info!("BootstrapMiddleware: Backend found at {}", uri);
                    dispatcher.dispatch(Action::Bootstrap(BootstrapAction::BackendFound));
                }
                Err(e) => {
                    log::error!("BootstrapMiddleware: Backend probe gave up: {}", e);
                }
            }
        })
    }

    fn start_fan_out(&self, dispatcher: &Dispatcher) -> FanOut {
        log::info!("BootstrapMiddleware: Loading chats, content safety status and service options");

        let chats = {
            let service = Arc::clone(&self.services.chats);
            let retry = self.chat_load_retry;
            let dispatcher = dispatcher.clone();
            self.session.spawn("load_chats", async move {
                load_chats(service, retry, dispatcher).await;
            })
        };

        let content_safety = {
            let probe = Arc::clone(&self.services.content_safety);
            let dispatcher = dispatcher.clone();
            self.session.spawn("content_safety_status", async move {
                match probe.content_safety_status().await {
                    Ok(status) => {
                        dispatcher.dispatch(Action::Session(
                            SessionAction::ContentSafetyStatusLoaded(status.is_enabled),
                        ));
                    }
                    Err(e) => {
                        log::warn!(
                            "BootstrapMiddleware: Content safety status unavailable, assuming disabled: {}",
                            e
                        );
                    }
                }
            })
        };

        let service_options = {
            let service = Arc::clone(&self.services.chats);
            let dispatcher = dispatcher.clone();
            self.session.spawn("service_options", async move {
                match service.service_options().await {
                    Ok(Some(options)) => {
                        dispatcher.dispatch(Action::Session(SessionAction::ServiceOptionsLoaded(
                            options,
                        )));
                    }
                    Ok(None) => {
                        log::debug!("BootstrapMiddleware: Backend returned no service options");
                    }
                    Err(e) => {
                        log::warn!(
                            "BootstrapMiddleware: Service options unavailable, using defaults: {}",
                            e
                        );
                    }
                }
            })
        };

        let fan_out = FanOut {
            chats,
            content_safety,
            service_options,
        };
        log::debug!("BootstrapMiddleware: Started {:?}", fan_out);
        fan_out
    }
}

/// Load the chat list, retrying per policy
///
/// Every failed attempt is reported; exhausting the policy raises an error alert.
async fn load_chats(service: Arc<dyn ChatDataService>, retry: RetryPolicy, dispatcher: Dispatcher) {
    let attempts = retry.attempts();

    for attempt in 1..=attempts {
        match service.load_chats().await {
            Ok(()) => {
                dispatcher.dispatch(Action::Bootstrap(BootstrapAction::ChatsLoaded));
                return;
            }
            Err(e) => {
                log::warn!(
                    "BootstrapMiddleware: Loading chats failed (attempt {}/{}): {}",
                    attempt,
                    attempts,
                    e
                );
                dispatcher.dispatch(Action::Bootstrap(BootstrapAction::ChatsLoadFailed {
                    attempt,
                }));
                if attempt < attempts {
                    tokio::time::sleep(retry.delay_after(attempt)).await;
                }
            }
        }
    }

    log::error!("BootstrapMiddleware: Giving up loading chats after {} attempts", attempts);
    dispatcher.dispatch(Action::Alert(AlertAction::Push(Alert::error(
        CHATS_LOAD_FAILED_MESSAGE,
    ))));
}

impl Middleware for BootstrapMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Bootstrap(BootstrapAction::Start) => {
                if self.started {
                    log::debug!("BootstrapMiddleware: Already started");
                    return false;
                }
                log::info!("BootstrapMiddleware: Bootstrap starting");
                self.started = true;
                self.evaluate(state, dispatcher);
                true
            }

            Action::Event(Event::SessionChanged { .. }) => {
                self.evaluate(state, dispatcher);
                true
            }

            _ => true,
        }
    }
}

impl Drop for BootstrapMiddleware {
    fn drop(&mut self) {
        if let Some(fan_out) = &self.fan_out {
            fan_out.chats.cancel();
            fan_out.content_safety.cancel();
            fan_out.service_options.cancel();
        }
        if let Some(probe) = &self.probe {
            probe.cancel();
        }
    }
}
