use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::state::AppState;

pub mod bootstrap_middleware;
pub mod logging;
pub mod sign_out_middleware;
pub mod user_info_middleware;

/// Middleware trait - intercepts actions before they reach the reducer
///
/// Middleware runs on the controller's thread and must not block. Slow work
/// (collaborator calls) is spawned onto the runtime and reports back through
/// the dispatcher.
pub trait Middleware: Send {
    /// Handle an action
    ///
    /// - `action`: The action to process
    /// - `state`: Current application state (read-only snapshot)
    /// - `dispatcher`: Use to dispatch actions that should re-enter middleware chain
    ///
    /// Returns `true` to continue chain, `false` to consume action
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool;
}
