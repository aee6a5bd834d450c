#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::data::{self, User};

/// Session state tracking the current (mock) user.
///
/// There is no authentication backend; login and registration forms simply
/// replace the user held here.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub user: Option<User>,
}

impl SessionState {
    /// The state every session starts with: the mock user is signed in.
    #[must_use]
    pub fn seeded() -> Self {
        Self { user: Some(data::mock_user()) }
    }

    /// Sign in as the given user, replacing any current one.
    pub fn sign_in(&mut self, user: User) {
        self.user = Some(user);
    }

    /// Sign the current user out.
    pub fn sign_out(&mut self) {
        self.user = None;
    }

    /// Whether a user is signed in.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// First letter of the user's name, for avatar fallbacks.
    #[must_use]
    pub fn initial(&self) -> String {
        self.user
            .as_ref()
            .and_then(|u| u.name.chars().next())
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_else(|| "?".to_owned())
    }
}
