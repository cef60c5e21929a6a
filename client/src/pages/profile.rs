//! Account overview for the signed-in shopper.

use leptos::prelude::*;

use crate::state::auth::AuthState;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let name = move || auth.with(|a| a.user.as_ref().map(|u| u.name.clone()).unwrap_or_default());
    let email = move || auth.with(|a| a.user.as_ref().map(|u| u.email.clone()).unwrap_or_default());

    view! {
        <div class="profile-page">
            <h1>"Your account"</h1>
            <Show
                when=move || auth.with(AuthState::is_authenticated)
                fallback=move || view! { <p class="page-loading">"Loading..."</p> }
            >
                <dl class="profile-details">
                    <dt>"Name"</dt>
                    <dd>{name}</dd>
                    <dt>"Email"</dt>
                    <dd>{email}</dd>
                </dl>
                <ul class="profile-links">
                    <li><a href="/orders">"Order history"</a></li>
                    <li><a href="/address">"Delivery addresses"</a></li>
                    <li><a href="/reset-password">"Change password"</a></li>
                </ul>
            </Show>
        </div>
    }
}
