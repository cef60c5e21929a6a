//! Checkout page: pick an address and delivery slot, then place the order.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reached from the cart (or via the post-auth redirect when an anonymous
//! shopper was bounced to `/login`). Payment is collected on delivery, so
//! placing the order is a single `POST /api/orders`.

#[cfg(test)]
#[path = "checkout_test.rs"]
mod checkout_test;

use leptos::prelude::*;

use crate::net::types::{Address, CheckoutRequest};
use crate::state::cart::CartState;
use crate::util::format::format_cents;

/// Delivery windows offered at checkout: `(value, label)`.
pub const DELIVERY_SLOTS: &[(&str, &str)] = &[
    ("asap", "As soon as possible"),
    ("today-pm", "Today, 4pm - 8pm"),
    ("tomorrow-am", "Tomorrow, 8am - 12pm"),
    ("tomorrow-pm", "Tomorrow, 4pm - 8pm"),
];

/// Longest delivery note accepted.
pub const MAX_NOTE_LEN: usize = 280;

pub(crate) fn validate_checkout(
    cart: &CartState,
    address_id: Option<&str>,
    slot: &str,
    note: &str,
) -> Result<CheckoutRequest, &'static str> {
    if cart.is_empty() {
        return Err("Your cart is empty.");
    }
    let Some(address_id) = address_id.filter(|a| !a.is_empty()) else {
        return Err("Choose a delivery address.");
    };
    if !DELIVERY_SLOTS.iter().any(|(value, _)| *value == slot) {
        return Err("Choose a delivery slot.");
    }
    let note = note.trim();
    if note.chars().count() > MAX_NOTE_LEN {
        return Err("Delivery note is too long.");
    }
    Ok(CheckoutRequest {
        address_id: address_id.to_owned(),
        delivery_slot: slot.to_owned(),
        items: cart.order_items(),
        note: (!note.is_empty()).then(|| note.to_owned()),
    })
}

#[component]
pub fn CheckoutPage() -> impl IntoView {
    let cart = expect_context::<RwSignal<CartState>>();
    let addresses = RwSignal::new(Vec::<Address>::new());
    let address_id = RwSignal::new(None::<String>);
    let slot = RwSignal::new(DELIVERY_SLOTS[0].0.to_owned());
    let note = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_addresses().await {
            Ok(items) => {
                if address_id.get_untracked().is_none() {
                    address_id.set(items.first().map(|a| a.id.clone()));
                }
                addresses.set(items);
            }
            Err(e) => info.set(format!("Could not load addresses: {e}")),
        }
    });

    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match cart.with(|c| {
            validate_checkout(c, address_id.get().as_deref(), &slot.get(), &note.get())
        }) {
            Ok(request) => request,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Placing your order...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::place_order(&request).await {
                    Ok(order) => {
                        log::info!("order {} placed", order.id);
                        cart.update(CartState::clear);
                        info.set(String::new());
                        navigate("/orders", leptos_router::NavigateOptions::default());
                    }
                    Err(e) => info.set(format!("Checkout failed: {e}")),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
        }
    };

    view! {
        <div class="checkout-page">
            <h1>"Checkout"</h1>
            <form class="checkout-form" on:submit=on_submit>
                <fieldset>
                    <legend>"Deliver to"</legend>
                    <Show
                        when=move || !addresses.get().is_empty()
                        fallback=move || {
                            view! {
                                <p>"No saved addresses. " <a href="/address">"Add one"</a></p>
                            }
                        }
                    >
                        {move || {
                            addresses
                                .get()
                                .into_iter()
                                .map(|a| {
                                    let id = a.id.clone();
                                    let checked_id = a.id.clone();
                                    view! {
                                        <label class="checkout-address">
                                            <input
                                                type="radio"
                                                name="address"
                                                prop:checked=move || address_id.get().as_deref() == Some(checked_id.as_str())
                                                on:change=move |_| address_id.set(Some(id.clone()))
                                            />
                                            <strong>{a.label}</strong>
                                            " "
                                            {format!("{}, {} {}", a.line1, a.city, a.postcode)}
                                        </label>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </Show>
                </fieldset>
                <fieldset>
                    <legend>"Delivery slot"</legend>
                    <select
                        prop:value=move || slot.get()
                        on:change=move |ev| slot.set(event_target_value(&ev))
                    >
                        {DELIVERY_SLOTS
                            .iter()
                            .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </fieldset>
                <fieldset>
                    <legend>"Note for the driver"</legend>
                    <textarea
                        maxlength="280"
                        prop:value=move || note.get()
                        on:input=move |ev| note.set(event_target_value(&ev))
                    ></textarea>
                </fieldset>
                <p class="checkout-total">
                    "Total due on delivery: " {move || format_cents(cart.with(CartState::total_cents))}
                </p>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Place order"
                </button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="checkout-message">{move || info.get()}</p>
            </Show>
        </div>
    }
}
