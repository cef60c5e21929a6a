//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetching, form state, submit
//! flow) and delegates shared chrome and tiles to `components`.

pub mod address;
pub mod cart;
pub mod checkout;
pub mod home;
pub mod login;
pub mod not_found;
pub mod orders;
pub mod profile;
pub mod register;
pub mod reports;
pub mod reset_password;
