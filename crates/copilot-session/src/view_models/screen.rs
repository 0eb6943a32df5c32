//! Screen View Model
//!
//! Decides what the presentation layer renders for the current state.

use crate::state::{AppState, BootstrapState};
use copilot_client::AuthStatus;

pub const FETCHING_USER_INFO_TEXT: &str = "Hang tight while we fetch your information...";
pub const LOADING_CHATS_TEXT: &str = "Loading Chats...";
pub const SIGNING_OUT_TEXT: &str = "Signing you out...";
pub const USER_INFO_ERROR_TEXT: &str =
    "Oops, something went wrong. Please try signing out and signing back in.";

/// The main content to render
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// Sign-in prompt
    Login,
    /// Backend probe indicator for the given base address
    BackendProbe { uri: String },
    /// Spinner with a message
    Loading { text: &'static str },
    /// Error panel with a message
    Error { text: &'static str },
    /// The chat interface
    ChatView,
}

/// Map bootstrap state and auth status to a screen
///
/// Without authentication only the sign-in prompt or the sign-out
/// progress is shown, whatever the bootstrap state.
pub fn screen_for(state: BootstrapState, auth: AuthStatus, backend_uri: &str) -> Screen {
    if state == BootstrapState::SigningOut {
        return Screen::Loading {
            text: SIGNING_OUT_TEXT,
        };
    }

    if !auth.is_authenticated() {
        return Screen::Login;
    }

    match state {
        BootstrapState::ProbingBackend => Screen::BackendProbe {
            uri: backend_uri.to_string(),
        },
        BootstrapState::SettingUserInfo => Screen::Loading {
            text: FETCHING_USER_INFO_TEXT,
        },
        BootstrapState::ErrorLoadingUserInfo => Screen::Error {
            text: USER_INFO_ERROR_TEXT,
        },
        BootstrapState::LoadingChats => Screen::Loading {
            text: LOADING_CHATS_TEXT,
        },
        BootstrapState::Chat => Screen::ChatView,
        BootstrapState::SigningOut => Screen::Loading {
            text: SIGNING_OUT_TEXT,
        },
    }
}

/// Everything the header and main area need
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenViewModel {
    pub screen: Screen,
    /// Plugin gallery and user settings menu (with sign-out) visible
    pub show_user_menu: bool,
    pub user_display_name: Option<String>,
}

impl ScreenViewModel {
    pub fn from_state(state: &AppState) -> Self {
        Self {
            screen: screen_for(state.bootstrap, state.auth_status, &state.backend_uri),
            show_user_menu: state.is_authenticated() && state.bootstrap.is_past_user_info(),
            user_display_name: state
                .session
                .user
                .as_ref()
                .map(|user| user.display_name.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_unauthenticated_always_shows_login_path() {
        for state in BootstrapState::iter() {
            let screen = screen_for(state, AuthStatus::Unauthenticated, "https://b/");
            let expected = if state == BootstrapState::SigningOut {
                Screen::Loading {
                    text: SIGNING_OUT_TEXT,
                }
            } else {
                Screen::Login
            };
            assert_eq!(screen, expected, "state {}", state);
        }
    }

    #[test]
    fn test_authenticated_screens() {
        let auth = AuthStatus::Authenticated;
        assert_eq!(
            screen_for(BootstrapState::ProbingBackend, auth, "https://b/"),
            Screen::BackendProbe {
                uri: "https://b/".to_string()
            }
        );
        assert_eq!(
            screen_for(BootstrapState::ErrorLoadingUserInfo, auth, ""),
            Screen::Error {
                text: USER_INFO_ERROR_TEXT
            }
        );
        assert_eq!(
            screen_for(BootstrapState::LoadingChats, auth, ""),
            Screen::Loading {
                text: LOADING_CHATS_TEXT
            }
        );
        assert_eq!(screen_for(BootstrapState::Chat, auth, ""), Screen::ChatView);
    }

    #[test]
    fn test_user_menu_requires_authentication() {
        let mut state = AppState {
            bootstrap: BootstrapState::Chat,
            ..AppState::default()
        };
        assert!(!ScreenViewModel::from_state(&state).show_user_menu);

        state.auth_status = AuthStatus::Authenticated;
        assert!(ScreenViewModel::from_state(&state).show_user_menu);

        state.bootstrap = BootstrapState::SettingUserInfo;
        assert!(!ScreenViewModel::from_state(&state).show_user_menu);
    }
}
