//! String key/value storage backends for per-tab client state.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser exposes `window.sessionStorage`, which lives as long as the tab
//! and is not shared between tabs. Server rendering and native tests have no
//! such thing, so callers depend on the [`SessionStore`] trait and pick a
//! backend at construction time.
//!
//! ERROR HANDLING
//! ==============
//! Backends report failures as [`StorageError`]; higher layers decide whether
//! to surface or swallow them. Availability is a capability flag checked once,
//! not a per-call exception path.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Failure modes of a [`SessionStore`] backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No storage area exists in this environment (SSR, disabled storage).
    #[error("session storage unavailable")]
    Unavailable,
    /// The storage area exists but refused the operation (quota, privacy mode).
    #[error("session storage rejected operation: {0}")]
    Rejected(String),
}

/// Minimal string key/value contract over a session-scoped storage area.
pub trait SessionStore {
    /// Whether this backend can hold values at all.
    fn is_available(&self) -> bool;

    /// Read the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backend refuses the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing a missing key succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backend cannot be modified.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Shared handles delegate to the inner store.
impl<T: SessionStore + ?Sized> SessionStore for Rc<T> {
    fn is_available(&self) -> bool {
        (**self).is_available()
    }

    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

// =============================================================================
// BROWSER
// =============================================================================

/// `window.sessionStorage`, resolved once at construction.
///
/// Outside the browser (SSR, native tests) the handle is always absent and
/// every operation reports [`StorageError::Unavailable`].
pub struct BrowserSessionStore {
    #[cfg(feature = "hydrate")]
    storage: Option<web_sys::Storage>,
}

impl BrowserSessionStore {
    #[must_use]
    pub fn new() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window().and_then(|w| w.session_storage().ok().flatten());
            if storage.is_none() {
                log::warn!("sessionStorage is not available; post-login redirects disabled");
            }
            Self { storage }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self {}
        }
    }
}

impl Default for BrowserSessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "hydrate")]
fn js_error_text(err: &wasm_bindgen::JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

impl SessionStore for BrowserSessionStore {
    fn is_available(&self) -> bool {
        #[cfg(feature = "hydrate")]
        {
            self.storage.is_some()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            false
        }
    }

    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = self.storage.as_ref().ok_or(StorageError::Unavailable)?;
            storage.get_item(key).map_err(|e| StorageError::Rejected(js_error_text(&e)))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = self.storage.as_ref().ok_or(StorageError::Unavailable)?;
            storage.set_item(key, value).map_err(|e| StorageError::Rejected(js_error_text(&e)))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = self.storage.as_ref().ok_or(StorageError::Unavailable)?;
            storage.remove_item(key).map_err(|e| StorageError::Rejected(js_error_text(&e)))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }
}

// =============================================================================
// IN-MEMORY
// =============================================================================

/// Process-local map standing in for session storage.
///
/// Used by tests, and by anything that wants tab-like semantics without a
/// browser. Interior mutability keeps the trait methods `&self` like the
/// browser API.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl SessionStore for MemoryStore {
    fn is_available(&self) -> bool {
        true
    }

    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}
