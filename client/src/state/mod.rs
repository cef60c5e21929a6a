//! Client state held in context-provided signals.

pub mod auth;
pub mod cart;
