//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render storefront chrome and catalog tiles while reading/writing
//! shared state from Leptos context providers.

pub mod footer;
pub mod header;
pub mod product_card;
pub mod route_guard;
