//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The home page renders the login form, the register form, or the dashboard
//! from this state. Session resolution starts in `Loading` and settles once.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use shortener::SessionState;

/// Resolved session plus which auth form is visible while signed out.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub session: SessionState,
    pub show_register: bool,
}

impl AuthState {
    /// Initial state before the first resolution completes.
    pub fn loading() -> Self {
        Self { session: SessionState::Loading, show_register: false }
    }

    /// Signed-in username, if any.
    pub fn username(&self) -> Option<&str> {
        self.session.username()
    }

    pub fn is_loading(&self) -> bool {
        self.session.is_loading()
    }

    /// Apply a settled session. Signing out always returns to the login form.
    pub fn settle(&mut self, session: SessionState) {
        if session.username().is_none() {
            self.show_register = false;
        }
        self.session = session;
    }
}
