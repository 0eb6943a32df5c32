//! Actions module
//!
//! All inputs to the controller are actions. They flow through the
//! middleware chain first, then (unless consumed) into the reducers:
//! - `Bootstrap`: the typed state-machine events
//! - `Session`: observations that update the session context
//! - `Alert`: alert queue management
//! - `Event`: facts for middleware only, never reduced

pub mod alert;
pub mod bootstrap;
pub mod event;
pub mod session;

pub use alert::AlertAction;
pub use bootstrap::BootstrapAction;
pub use event::Event;
pub use session::SessionAction;

/// Root action enum - tagged by domain
#[derive(Debug, Clone)]
pub enum Action {
    /// Events are facts/observations that re-enter the middleware chain.
    /// Use `Action::event(Event::X)` to create - ensures visibility at call site.
    Event(Event),
    /// Bootstrap state machine events
    Bootstrap(BootstrapAction),
    /// Session context updates
    Session(SessionAction),
    /// Alert queue actions
    Alert(AlertAction),
}

impl Action {
    /// Factory method for creating events.
    ///
    /// Using this factory makes event creation visually distinct at the call site,
    /// signaling that the action is only observed by middleware.
    pub fn event(event: Event) -> Action {
        Action::Event(event)
    }
}
