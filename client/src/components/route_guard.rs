//! Invisible component that installs the account-area route guard.
//!
//! Must be mounted inside `<Router>` so it can observe the location.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::config::RedirectConfig;
use crate::state::auth::AuthState;
use crate::util::auth::{GuardConfig, install_route_guard, location_path};
use crate::util::redirect::RedirectMemory;
use crate::util::storage::BrowserSessionStore;

#[component]
pub fn RouteGuard() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let redirect_config = use_context::<RedirectConfig>().unwrap_or_default();
    let guard_config = use_context::<GuardConfig>().unwrap_or_default();
    let location = use_location();
    let navigate = use_navigate();

    let current = Memo::new(move |_| location_path(&location.pathname.get(), &location.search.get()));
    let redirect = RedirectMemory::new(BrowserSessionStore::new(), &redirect_config);
    install_route_guard(auth, current, guard_config, redirect, navigate);
}
