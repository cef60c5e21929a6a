//! Cart page: review lines, adjust quantities, proceed to checkout.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::state::cart::{CartState, FREE_DELIVERY_THRESHOLD_CENTS};
use crate::util::format::{format_cents, item_count_label};

#[component]
pub fn CartPage() -> impl IntoView {
    let cart = expect_context::<RwSignal<CartState>>();

    let lines = move || {
        cart.get()
            .lines
            .into_iter()
            .map(|line| {
                let id_dec = line.product.id.clone();
                let id_inc = line.product.id.clone();
                let id_remove = line.product.id.clone();
                let qty = line.quantity;
                let total = format_cents(line.line_total_cents());
                view! {
                    <li class="cart-line">
                        <span class="cart-line__name">{line.product.name.clone()}</span>
                        <span class="cart-line__unit">{line.product.unit.clone()}</span>
                        <div class="cart-line__qty">
                            <button
                                class="btn btn--icon"
                                title="Decrease"
                                on:click=move |_| cart.update(|c| c.set_quantity(&id_dec, qty.saturating_sub(1)))
                            >
                                "−"
                            </button>
                            <span>{qty}</span>
                            <button
                                class="btn btn--icon"
                                title="Increase"
                                on:click=move |_| cart.update(|c| c.set_quantity(&id_inc, qty + 1))
                            >
                                "+"
                            </button>
                        </div>
                        <span class="cart-line__total">{total}</span>
                        <button class="btn btn--link" on:click=move |_| cart.update(|c| c.remove(&id_remove))>
                            "Remove"
                        </button>
                    </li>
                }
            })
            .collect::<Vec<_>>()
    };

    let free_delivery_hint = move || {
        let remaining = FREE_DELIVERY_THRESHOLD_CENTS - cart.with(CartState::subtotal_cents);
        (remaining > 0).then(|| format!("Add {} more for free delivery.", format_cents(remaining)))
    };

    view! {
        <div class="cart-page">
            <h1>"Your cart"</h1>
            {move || {
                if cart.with(CartState::is_empty) {
                    view! {
                        <div class="cart-page__empty">
                            <p>"Your cart is empty."</p>
                            <a href="/" class="btn btn--primary">"Start shopping"</a>
                        </div>
                    }
                        .into_any()
                } else {
                    view! {
                        <ul class="cart-lines">{lines}</ul>
                        <div class="cart-summary">
                            <p>{move || item_count_label(cart.with(CartState::item_count))}</p>
                            <p>"Subtotal: " {move || format_cents(cart.with(CartState::subtotal_cents))}</p>
                            <p>"Delivery: " {move || format_cents(cart.with(CartState::delivery_fee_cents))}</p>
                            <p class="cart-summary__total">
                                "Total: " {move || format_cents(cart.with(CartState::total_cents))}
                            </p>
                            {move || free_delivery_hint().map(|hint| view! { <p class="cart-summary__hint">{hint}</p> })}
                            <a href="/checkout" class="btn btn--primary">"Checkout"</a>
                            <button class="btn btn--link" on:click=move |_| cart.update(CartState::clear)>
                                "Empty cart"
                            </button>
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
