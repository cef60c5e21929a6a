//! Catalog tile for one product with an add-to-cart control.

use leptos::prelude::*;

use crate::net::types::Product;
use crate::state::cart::CartState;
use crate::util::format::format_cents;

#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let cart = expect_context::<RwSignal<CartState>>();

    let id = product.id.clone();
    let in_cart = move || cart.with(|c| c.quantity_of(&id));
    let in_stock = product.in_stock;
    let price = format_cents(product.price_cents);
    let image = product.image_url.clone().unwrap_or_else(|| "/img/placeholder.svg".to_owned());
    let alt = product.name.clone();
    let name = product.name.clone();
    let unit = product.unit.clone();

    let on_add = move |_| {
        cart.update(|c| {
            c.add(&product, 1);
        });
    };

    view! {
        <article class="product-card" class=("product-card--sold-out", !in_stock)>
            <img class="product-card__image" src=image alt=alt loading="lazy"/>
            <h3 class="product-card__name">{name}</h3>
            <p class="product-card__unit">{unit}</p>
            <p class="product-card__price">{price}</p>
            <button class="btn btn--primary product-card__add" disabled=!in_stock on:click=on_add>
                {move || {
                    if !in_stock {
                        "Sold out".to_owned()
                    } else {
                        match in_cart() {
                            0 => "Add to cart".to_owned(),
                            n => format!("Add another ({n} in cart)"),
                        }
                    }
                }}
            </button>
        </article>
    }
}
