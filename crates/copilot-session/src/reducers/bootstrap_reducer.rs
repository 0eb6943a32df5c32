//! Bootstrap Reducer
//!
//! The pure transition function of the bootstrap state machine.

use crate::actions::BootstrapAction;
use crate::state::BootstrapState;

/// Compute the next bootstrap state
///
/// Pairs not listed leave the state unchanged, so late or duplicate events
/// are harmless. The result is never smaller than `state`.
pub fn transition(state: BootstrapState, action: &BootstrapAction) -> BootstrapState {
    use BootstrapAction as A;
    use BootstrapState as S;

    match (state, action) {
        (S::SigningOut, _) => S::SigningOut,
        (_, A::SignOutRequested) => S::SigningOut,
        (S::ProbingBackend, A::BackendFound) => S::SettingUserInfo,
        (S::SettingUserInfo, A::AuthResolved(_)) => S::LoadingChats,
        (S::SettingUserInfo, A::AccountMissing) => S::ErrorLoadingUserInfo,
        (S::LoadingChats, A::ChatsLoaded) => S::Chat,
        (S::LoadingChats, A::ChatsLoadFailed { .. }) => S::LoadingChats,
        (state, _) => state,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::UserProfile;
    use strum::IntoEnumIterator;

    fn profile() -> UserProfile {
        UserProfile {
            id: "id".to_string(),
            email: "alice@example.com".to_string(),
            display_name: "Alice".to_string(),
        }
    }

    fn all_actions() -> Vec<BootstrapAction> {
        vec![
            BootstrapAction::Start,
            BootstrapAction::BackendFound,
            BootstrapAction::AuthResolved(profile()),
            BootstrapAction::AccountMissing,
            BootstrapAction::ChatsLoaded,
            BootstrapAction::ChatsLoadFailed { attempt: 1 },
            BootstrapAction::SignOutRequested,
        ]
    }

    #[test]
    fn test_happy_path() {
        let mut state = BootstrapState::default();
        for action in [
            BootstrapAction::BackendFound,
            BootstrapAction::AuthResolved(profile()),
            BootstrapAction::ChatsLoaded,
        ] {
            state = transition(state, &action);
        }
        assert_eq!(state, BootstrapState::Chat);
    }

    #[test]
    fn test_account_missing_is_terminal() {
        let state = transition(
            BootstrapState::SettingUserInfo,
            &BootstrapAction::AccountMissing,
        );
        assert_eq!(state, BootstrapState::ErrorLoadingUserInfo);

        for action in all_actions() {
            if action == BootstrapAction::SignOutRequested {
                continue;
            }
            assert_eq!(transition(state, &action), state, "{:?}", action);
        }
    }

    #[test]
    fn test_chat_load_failure_stays_loading() {
        let state = transition(
            BootstrapState::LoadingChats,
            &BootstrapAction::ChatsLoadFailed { attempt: 3 },
        );
        assert_eq!(state, BootstrapState::LoadingChats);
    }

    #[test]
    fn test_events_out_of_order_are_ignored() {
        assert_eq!(
            transition(BootstrapState::ProbingBackend, &BootstrapAction::ChatsLoaded),
            BootstrapState::ProbingBackend
        );
        assert_eq!(
            transition(
                BootstrapState::ProbingBackend,
                &BootstrapAction::AuthResolved(profile())
            ),
            BootstrapState::ProbingBackend
        );
        assert_eq!(
            transition(BootstrapState::Chat, &BootstrapAction::BackendFound),
            BootstrapState::Chat
        );
    }

    #[test]
    fn test_sign_out_from_every_state() {
        for state in BootstrapState::iter() {
            assert_eq!(
                transition(state, &BootstrapAction::SignOutRequested),
                BootstrapState::SigningOut
            );
        }
    }

    #[test]
    fn test_signing_out_is_irreversible() {
        for action in all_actions() {
            assert_eq!(
                transition(BootstrapState::SigningOut, &action),
                BootstrapState::SigningOut
            );
        }
    }

    #[test]
    fn test_transitions_never_go_backwards() {
        for state in BootstrapState::iter() {
            for action in all_actions() {
                let next = transition(state, &action);
                assert!(next >= state, "{:?} --{:?}--> {:?}", state, action, next);
            }
        }
    }
}
