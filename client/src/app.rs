//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{footer::Footer, header::SiteHeader, route_guard::RouteGuard};
use crate::config::RedirectConfig;
use crate::pages::{
    address::AddressPage,
    cart::CartPage,
    checkout::CheckoutPage,
    home::HomePage,
    login::LoginPage,
    not_found::NotFoundPage,
    orders::OrdersPage,
    profile::ProfilePage,
    register::RegisterPage,
    reports::{SalesReportPage, StockReportPage},
    reset_password::ResetPasswordPage,
};
use crate::state::{auth::AuthState, cart::CartState};
use crate::util::auth::GuardConfig;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth and cart signals plus redirect/guard configuration,
/// resolves the current session once on the client, and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let cart = RwSignal::new(CartState::default());

    provide_context(auth);
    provide_context(cart);
    provide_context(RedirectConfig::default());
    provide_context(GuardConfig::default());

    #[cfg(feature = "hydrate")]
    {
        use crate::util::persistence::{load_cart, save_cart};

        leptos::task::spawn_local(async move {
            let user = crate::net::api::fetch_current_user().await;
            auth.update(|a| a.resolve(user));
        });

        // First run restores the saved cart; later runs persist every change.
        Effect::new(move |restored: Option<bool>| {
            if restored.is_none() {
                if let Some(saved) = load_cart() {
                    cart.set(saved);
                }
                cart.track();
                return true;
            }
            cart.with(save_cart);
            true
        });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/freshcart.css"/>
        <Title text="FreshCart"/>

        <Router>
            <SiteHeader/>
            <RouteGuard/>
            <main class="site-main">
                <Routes fallback=NotFoundPage>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("reset-password") view=ResetPasswordPage/>
                    <Route path=StaticSegment("cart") view=CartPage/>
                    <Route path=StaticSegment("checkout") view=CheckoutPage/>
                    <Route path=StaticSegment("orders") view=OrdersPage/>
                    <Route path=StaticSegment("profile") view=ProfilePage/>
                    <Route path=StaticSegment("address") view=AddressPage/>
                    <Route path=(StaticSegment("reports"), StaticSegment("sales")) view=SalesReportPage/>
                    <Route path=(StaticSegment("reports"), StaticSegment("stock")) view=StockReportPage/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}
