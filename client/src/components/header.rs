//! Site header with primary navigation, account links and the cart badge.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered on every route. Reads auth and cart state from context so the
//! account links and badge update as soon as either changes.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::auth::AuthState;
use crate::state::cart::CartState;

/// Badge text for the cart link; large counts are capped.
pub(crate) fn cart_badge(count: u32) -> Option<String> {
    match count {
        0 => None,
        1..=99 => Some(count.to_string()),
        _ => Some("99+".to_owned()),
    }
}

/// Whether nav item `href` should be highlighted for the current `path`.
pub(crate) fn is_active(href: &str, path: &str) -> bool {
    if href == "/" {
        return path == "/";
    }
    path == href || path.strip_prefix(href).is_some_and(|rest| rest.starts_with('/'))
}

#[component]
pub fn SiteHeader() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let cart = expect_context::<RwSignal<CartState>>();
    let location = use_location();

    let path = move || location.pathname.get();
    let badge = move || cart_badge(cart.with(CartState::item_count));
    let user_name = move || auth.with(|a| a.user.as_ref().map(|u| u.name.clone()));
    let is_staff = move || auth.with(AuthState::is_staff);

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                crate::net::api::logout().await;
                auth.update(AuthState::logout);
                if let Some(w) = web_sys::window() {
                    let _ = w.location().set_href("/");
                }
            });
        }
    };

    view! {
        <header class="site-header">
            <a href="/" class="site-header__brand">"FreshCart"</a>
            <nav class="site-header__nav">
                <a href="/" class=("nav-link--active", move || is_active("/", &path()))>"Shop"</a>
                <a href="/orders" class=("nav-link--active", move || is_active("/orders", &path()))>
                    "Orders"
                </a>
                <Show when=is_staff>
                    <a
                        href="/reports/sales"
                        class=("nav-link--active", move || is_active("/reports", &path()))
                    >
                        "Reports"
                    </a>
                </Show>
            </nav>
            <span class="site-header__spacer"></span>
            <Show
                when=move || user_name().is_some()
                fallback=move || {
                    view! {
                        <a href="/login" class="btn site-header__login">"Sign in"</a>
                    }
                }
            >
                <a href="/profile" class="site-header__user">{move || user_name().unwrap_or_default()}</a>
                <button class="btn site-header__logout" on:click=on_logout>"Sign out"</button>
            </Show>
            <a href="/cart" class="site-header__cart" title="Cart">
                "Cart"
                {move || badge().map(|b| view! { <span class="cart-badge">{b}</span> })}
            </a>
        </header>
    }
}
