//! Auth status watcher
//!
//! Translates changes of an external auth status signal into
//! `SessionAction::AuthStatusChanged` actions.

use crate::actions::{Action, SessionAction};
use crate::dispatcher::Dispatcher;
use crate::tasks::{TaskHandle, TaskScope};
use copilot_client::AuthStatus;
use tokio::sync::watch;

/// Forward the current value and every later change of `status` to the controller
///
/// The task ends when the sender is dropped or `scope` is cancelled.
pub fn spawn_auth_watcher(
    scope: &TaskScope,
    mut status: watch::Receiver<AuthStatus>,
    dispatcher: Dispatcher,
) -> TaskHandle {
    scope.spawn("auth_watcher", async move {
        loop {
            let current = *status.borrow_and_update();
            log::debug!("Auth watcher: status is {:?}", current);
            dispatcher.dispatch(Action::Session(SessionAction::AuthStatusChanged(current)));

            if status.changed().await.is_err() {
                log::debug!("Auth watcher: sender dropped");
                break;
            }
        }
    })
}
