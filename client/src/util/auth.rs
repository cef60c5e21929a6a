//! Route guard for account-only areas.
//!
//! SYSTEM CONTEXT
//! ==============
//! Cart, checkout, orders, profile and address pages need a signed-in
//! shopper. Rather than every page repeating the check, one guard watches the
//! current location and auth state; when an anonymous visitor lands on a
//! protected path it remembers the path for the post-auth flow and sends them
//! to `/login`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::config::LOGIN_PATH;
use crate::state::auth::AuthState;
use crate::util::redirect::RedirectMemory;
use crate::util::storage::SessionStore;

/// Path prefixes that require an authenticated session in this deployment.
pub const PROTECTED_PREFIXES: &[&str] = &["/profile", "/cart", "/checkout", "/orders", "/address"];

/// Which paths the guard protects and where it sends anonymous visitors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuardConfig {
    pub protected_prefixes: Vec<String>,
    pub login_path: String,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            protected_prefixes: PROTECTED_PREFIXES.iter().map(|p| (*p).to_owned()).collect(),
            login_path: LOGIN_PATH.to_owned(),
        }
    }
}

impl GuardConfig {
    /// Whether `path` falls under one of the protected prefixes.
    ///
    /// Prefixes match on segment boundaries: `/cart` covers `/cart` and
    /// `/cart/edit` but not `/cartoons`. Query strings and fragments are
    /// ignored.
    pub fn is_protected(&self, path: &str) -> bool {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        self.protected_prefixes.iter().any(|prefix| {
            let prefix = prefix.trim_end_matches('/');
            match path.strip_prefix(prefix) {
                Some(rest) => rest.is_empty() || rest.starts_with('/'),
                None => false,
            }
        })
    }
}

/// Outcome of evaluating the guard for one location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// The session probe has not finished; do nothing yet.
    Wait,
    /// The visitor may stay on this path.
    Allow,
    /// Remember `path` and redirect to `login_path`.
    Deny { path: String, login_path: String },
}

/// `true` once auth has loaded and nobody is signed in.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.user.is_none()
}

/// Decide what the guard should do for `path`.
pub fn evaluate(config: &GuardConfig, state: &AuthState, path: &str) -> GuardDecision {
    if !config.is_protected(path) {
        return GuardDecision::Allow;
    }
    if state.loading {
        return GuardDecision::Wait;
    }
    if should_redirect_unauth(state) {
        return GuardDecision::Deny {
            path: path.to_owned(),
            login_path: config.login_path.clone(),
        };
    }
    GuardDecision::Allow
}

/// Apply a decision: remember the denied path and navigate to the login page.
pub fn enforce<S, F>(decision: &GuardDecision, redirect: &RedirectMemory<S>, navigate: &F)
where
    S: SessionStore,
    F: Fn(&str),
{
    if let GuardDecision::Deny { path, login_path } = decision {
        log::debug!("guard: {path} requires sign-in");
        redirect.remember(path);
        navigate(login_path);
    }
}

/// Re-evaluate the guard whenever auth state or the location changes.
pub fn install_route_guard<S, F>(
    auth: RwSignal<AuthState>,
    location: Memo<String>,
    config: GuardConfig,
    redirect: RedirectMemory<S>,
    navigate: F,
) where
    S: SessionStore + 'static,
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let path = location.get();
        let decision = auth.with(|state| evaluate(&config, state, &path));
        let go = |to: &str| navigate(to, NavigateOptions::default());
        enforce(&decision, &redirect, &go);
    });
}

/// Join a router pathname and raw query into the path the guard remembers.
pub fn location_path(pathname: &str, search: &str) -> String {
    let search = search.trim_start_matches('?');
    if search.is_empty() {
        pathname.to_owned()
    } else {
        format!("{pathname}?{search}")
    }
}
