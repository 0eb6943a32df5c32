//! Bootstrap and session controller for the chat copilot client
//!
//! Sequences backend probing, user profile resolution and the initial data
//! load before the chat interface takes over. The presentation layer reads
//! [`Controller::view_model`] to decide what to render and holds a
//! [`SignOutHandle`] to end the session.
//!
//! ```text
//! ProbingBackend ──BackendFound──► SettingUserInfo ──AuthResolved──► LoadingChats ──ChatsLoaded──► Chat
//!                                        │
//!                                        └──AccountMissing──► ErrorLoadingUserInfo
//!
//! any state ──SignOutRequested──► SigningOut
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use copilot_session::{Collaborators, Controller};
//! use copilot_config::AppConfig;
//!
//! let mut controller = Controller::builder(AppConfig::load(), collaborators).build()?;
//! controller.start();
//! loop {
//!     controller.poll(std::time::Duration::from_millis(100));
//!     render(&controller.view_model());
//! }
//! ```

pub mod actions;
pub mod auth_watcher;
pub mod controller;
pub mod dispatcher;
pub mod error;
pub mod logger;
pub mod middleware;
pub mod reducers;
pub mod state;
pub mod tasks;
pub mod view_models;

pub use actions::{Action, AlertAction, BootstrapAction, Event, SessionAction};
pub use controller::{Collaborators, Controller, ControllerBuilder};
pub use dispatcher::{Dispatcher, SignOutHandle};
pub use error::SessionError;
pub use state::{
    Alert, AlertQueue, AlertSeverity, AppState, BootstrapState, SessionContext, UserProfile,
};
pub use view_models::{Screen, ScreenViewModel};
