//! # storefront
//!
//! Leptos + WASM frontend for the FreshCart grocery-delivery storefront.
//!
//! This crate contains pages, components, client state, REST helpers and the
//! post-authentication redirect flow: `util::redirect` remembers where an
//! anonymous shopper was headed, and `util::post_auth` commits the session and
//! sends them back there after login or registration. The `server` crate
//! renders [`app::App`] with the `ssr` feature; the browser bundle is built
//! with `hydrate`.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs logging and hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
