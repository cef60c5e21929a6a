//! Client-side deployment settings.
//!
//! DESIGN
//! ======
//! Values that a deployment might reasonably tune (the session-storage key,
//! the landing route, the post-auth delay) live in one plain struct with a
//! `Default` for this storefront, instead of being scattered as literals
//! through pages and helpers.

use std::time::Duration;

/// Session-storage key holding the pending post-auth destination.
pub const REDIRECT_STORAGE_KEY: &str = "freshcart_redirect_after_login";

/// Route the app lands on when no destination was remembered.
pub const HOME_PATH: &str = "/";

/// Authentication entry point the route guard redirects to.
pub const LOGIN_PATH: &str = "/login";

/// Delay between committing the session and navigating away.
///
/// Leptos runs effects on its async executor, so state-driven views elsewhere
/// in the tree need a tick to observe the new session before the route flips.
pub const NAVIGATE_DELAY: Duration = Duration::from_millis(100);

/// Settings shared by the redirect memory and the post-auth flow. The login
/// route belongs to `util::auth::GuardConfig`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RedirectConfig {
    pub storage_key: String,
    pub default_path: String,
    pub navigate_delay: Duration,
}

impl Default for RedirectConfig {
    fn default() -> Self {
        Self {
            storage_key: REDIRECT_STORAGE_KEY.to_owned(),
            default_path: HOME_PATH.to_owned(),
            navigate_delay: NAVIGATE_DELAY,
        }
    }
}
