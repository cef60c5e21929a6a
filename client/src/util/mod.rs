//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (session storage,
//! local storage, timers, navigation) from page and component logic so the
//! redirect and post-auth flow can be tested without a browser.

pub mod auth;
pub mod format;
pub mod persistence;
pub mod post_auth;
pub mod redirect;
pub mod storage;
