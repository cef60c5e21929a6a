//! Site footer.

use leptos::prelude::*;

/// Static footer with help links and the store's service area.
#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="site-footer__column">
                <h4>"FreshCart"</h4>
                <p>"Groceries from local stores, delivered in under an hour."</p>
            </div>
            <div class="site-footer__column">
                <h4>"Your account"</h4>
                <a href="/profile">"Profile"</a>
                <a href="/orders">"Orders"</a>
                <a href="/address">"Addresses"</a>
            </div>
            <div class="site-footer__column">
                <h4>"Help"</h4>
                <a href="/reset-password">"Reset password"</a>
                <a href="mailto:help@freshcart.example">"Contact support"</a>
            </div>
            <p class="site-footer__legal">"© FreshCart. Prices include tax."</p>
        </footer>
    }
}
