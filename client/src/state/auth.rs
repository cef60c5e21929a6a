//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards, the header, and the post-auth flow to coordinate
//! login redirects and identity-dependent rendering.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state tracking the current user and loading status.
///
/// `loading` starts `true` so guards wait for the initial `/api/auth/me`
/// probe before deciding a visitor is anonymous.
#[derive(Clone, Debug)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl AuthState {
    /// Record a freshly authenticated user.
    pub fn login(&mut self, user: User) {
        self.user = Some(user);
        self.loading = false;
    }

    /// Drop the current user.
    pub fn logout(&mut self) {
        self.user = None;
        self.loading = false;
    }

    /// Resolve the initial session probe.
    pub fn resolve(&mut self, user: Option<User>) {
        self.user = user;
        self.loading = false;
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    #[must_use]
    pub fn is_staff(&self) -> bool {
        self.user.as_ref().is_some_and(User::is_staff)
    }
}
