//! Bootstrap State

use strum::{Display, EnumIter};

/// Where the session is in its startup sequence
///
/// Variants are declared in startup order. The derived ordering is relied
/// upon: the controller never moves to a smaller state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter)]
pub enum BootstrapState {
    /// Waiting for the backend probe to report the backend as reachable
    #[default]
    ProbingBackend,
    /// Resolving the user profile from the active account
    SettingUserInfo,
    /// Authenticated but no active account; fatal until sign-out
    ErrorLoadingUserInfo,
    /// Chat list, content safety and service options are being fetched
    LoadingChats,
    /// Chat is ready
    Chat,
    /// Sign-out in progress; terminal for this session
    SigningOut,
}

impl BootstrapState {
    /// No controller-driven transition leaves this state
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            BootstrapState::ErrorLoadingUserInfo | BootstrapState::Chat | BootstrapState::SigningOut
        )
    }

    /// States in which the user menu (and with it sign-out) is offered
    pub fn is_past_user_info(&self) -> bool {
        *self > BootstrapState::SettingUserInfo
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_startup_order() {
        let states: Vec<_> = BootstrapState::iter().collect();
        let mut sorted = states.clone();
        sorted.sort();
        assert_eq!(states, sorted);
        assert_eq!(states.first(), Some(&BootstrapState::ProbingBackend));
        assert_eq!(states.last(), Some(&BootstrapState::SigningOut));
    }

    #[test]
    fn test_terminal_states() {
        let terminal: Vec<_> = BootstrapState::iter().filter(|s| s.is_terminal()).collect();
        assert_eq!(
            terminal,
            vec![
                BootstrapState::ErrorLoadingUserInfo,
                BootstrapState::Chat,
                BootstrapState::SigningOut
            ]
        );
    }

    #[test]
    fn test_user_menu_visibility() {
        assert!(!BootstrapState::ProbingBackend.is_past_user_info());
        assert!(!BootstrapState::SettingUserInfo.is_past_user_info());
        assert!(BootstrapState::ErrorLoadingUserInfo.is_past_user_info());
        assert!(BootstrapState::Chat.is_past_user_info());
    }
}
