//! Session Reducer
//!
//! Handles session context updates.

use crate::actions::SessionAction;
use crate::state::SessionContext;

/// Reduce session context
pub fn reduce_session(mut state: SessionContext, action: &SessionAction) -> SessionContext {
    match action {
        SessionAction::ContentSafetyStatusLoaded(enabled) => {
            state.content_safety_enabled = *enabled;
        }
        SessionAction::ServiceOptionsLoaded(options) => {
            state.service_options = Some(options.clone());
        }
        SessionAction::AuthStatusChanged(_) => {
            // Auth status lives on AppState
        }
    }
    state
}
