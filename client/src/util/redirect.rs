//! Post-login redirect memory.
//!
//! SYSTEM CONTEXT
//! ==============
//! The route guard writes the path an anonymous shopper tried to open; the
//! post-auth flow reads it back once they sign in so they land where they
//! meant to go (usually `/checkout`). Everything here is a UX nicety: storage
//! problems degrade to "nothing remembered" and are never surfaced.
//!
//! INVARIANTS
//! ==========
//! - One slot, one fixed key: the latest `remember` wins.
//! - `peek` never clears; `consume` always clears.
//! - Unavailable storage reads as empty and ignores writes.

#[cfg(test)]
#[path = "redirect_test.rs"]
mod redirect_test;

use crate::config::RedirectConfig;
use crate::util::storage::SessionStore;

/// A single remembered destination backed by session-scoped storage.
pub struct RedirectMemory<S: SessionStore> {
    store: S,
    available: bool,
    key: String,
    default_path: String,
}

impl<S: SessionStore> RedirectMemory<S> {
    /// Wrap `store` using the key and fallback destination from `config`.
    pub fn new(store: S, config: &RedirectConfig) -> Self {
        let available = store.is_available();
        Self {
            store,
            available,
            key: config.storage_key.clone(),
            default_path: config.default_path.clone(),
        }
    }

    /// Whether the backing store could be used when this memory was built.
    pub fn is_available(&self) -> bool {
        self.available
    }

    /// Destination returned by [`consume`](Self::consume) when nothing is stored.
    pub fn default_path(&self) -> &str {
        &self.default_path
    }

    /// Remember `path` as the post-auth destination, replacing any earlier one.
    pub fn remember(&self, path: &str) {
        if path.trim().is_empty() {
            log::debug!("redirect: ignoring empty path");
            return;
        }
        if !self.available {
            return;
        }
        if let Err(e) = self.store.set(&self.key, path) {
            log::warn!("redirect: failed to remember {path}: {e}");
        }
    }

    /// Currently remembered destination, without clearing it.
    pub fn peek(&self) -> Option<String> {
        if !self.available {
            return None;
        }
        match self.store.get(&self.key) {
            Ok(value) => value.filter(|p| !p.trim().is_empty()),
            Err(e) => {
                log::warn!("redirect: failed to read slot: {e}");
                None
            }
        }
    }

    /// Drop any remembered destination.
    pub fn forget(&self) {
        if !self.available {
            return;
        }
        if let Err(e) = self.store.remove(&self.key) {
            log::warn!("redirect: failed to clear slot: {e}");
        }
    }

    /// Take the remembered destination, falling back to the default path.
    ///
    /// The slot is cleared whether or not it held a value.
    pub fn consume(&self) -> String {
        let target = self.peek();
        self.forget();
        target.unwrap_or_else(|| self.default_path.clone())
    }
}
