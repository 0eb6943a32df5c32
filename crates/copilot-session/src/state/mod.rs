//! Application State Module
//!
//! Contains all state types owned by the controller, organized by concern.

mod alerts;
mod app;
mod bootstrap;
mod session;

pub use alerts::{Alert, AlertQueue, AlertSeverity};
pub use app::AppState;
pub use bootstrap::BootstrapState;
pub use session::{SessionContext, UserProfile};
