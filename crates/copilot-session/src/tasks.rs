//! Task scopes
//!
//! Every future the controller starts runs inside a `TaskScope`. Cancelling
//! a scope (or any of its parents) stops all of its tasks at their next
//! await point. The controller owns two scopes:
//! - the lifetime scope, cancelled when the controller is dropped
//! - the session scope (a child), also cancelled on sign-out

use std::future::Future;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Runtime handle plus the cancellation token tasks are bound to
#[derive(Clone)]
pub struct TaskScope {
    handle: Handle,
    token: CancellationToken,
}

impl TaskScope {
    pub fn new(handle: Handle) -> Self {
        Self {
            handle,
            token: CancellationToken::new(),
        }
    }

    /// Scope that is cancelled together with this one
    pub fn child(&self) -> Self {
        Self {
            handle: self.handle.clone(),
            token: self.token.child_token(),
        }
    }

    /// Spawn a task that stops when the scope is cancelled
    pub fn spawn<F>(&self, name: &'static str, future: F) -> TaskHandle
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let token = self.token.child_token();
        let cancelled = token.clone();
        let join = self.handle.spawn(async move {
            tokio::select! {
                _ = cancelled.cancelled() => {
                    log::debug!("Task '{}' cancelled", name);
                }
                _ = future => {
                    log::debug!("Task '{}' finished", name);
                }
            }
        });

        TaskHandle { name, token, join }
    }

    /// Spawn a task that outlives this scope's cancellation
    pub fn spawn_detached<F>(&self, future: F) -> JoinHandle<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.handle.spawn(future)
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}

/// Handle to a single scoped task
pub struct TaskHandle {
    name: &'static str,
    token: CancellationToken,
    join: JoinHandle<()>,
}

impl TaskHandle {
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Cancel just this task
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_finished(&self) -> bool {
        self.join.is_finished()
    }
}

impl std::fmt::Debug for TaskHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskHandle")
            .field("name", &self.name)
            .field("cancelled", &self.token.is_cancelled())
            .field("finished", &self.join.is_finished())
            .finish()
    }
}
