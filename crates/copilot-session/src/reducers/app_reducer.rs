use crate::actions::{Action, BootstrapAction, SessionAction};
use crate::reducers::{alert_reducer, bootstrap_reducer, session_reducer};
use crate::state::{AppState, BootstrapState, SessionContext};

/// Reducer - pure function that produces new state from current state + action
/// This is the root reducer that orchestrates all sub-reducers
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    match action {
        Action::Bootstrap(bootstrap_action) => {
            let previous = state.bootstrap;
            let next = bootstrap_reducer::transition(previous, bootstrap_action);

            match bootstrap_action {
                // The profile is created once per session and never replaced
                BootstrapAction::AuthResolved(profile)
                    if previous == BootstrapState::SettingUserInfo
                        && state.session.user.is_none() =>
                {
                    state.session.user = Some(profile.clone());
                }
                // Session teardown
                BootstrapAction::SignOutRequested if previous != BootstrapState::SigningOut => {
                    state.session = SessionContext::default();
                }
                _ => {}
            }

            if next != previous {
                log::info!("Bootstrap state: {} -> {}", previous, next);
            }
            state.bootstrap = next;
        }
        Action::Session(SessionAction::AuthStatusChanged(status)) => {
            state.auth_status = *status;
        }
        Action::Session(session_action) => {
            // Late results from a torn-down session must not repopulate it
            if state.bootstrap == BootstrapState::SigningOut {
                log::debug!("Ignoring {:?} after sign-out", session_action);
            } else {
                state.session = session_reducer::reduce_session(state.session, session_action);
            }
        }
        Action::Alert(alert_action) => {
            state.alerts = alert_reducer::reduce_alerts(state.alerts, alert_action);
        }
        Action::Event(_) => {
            // Events are observed by middleware only
        }
    }

    state
}
