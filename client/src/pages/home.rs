//! Home page: the product catalog with category filter and search.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the public landing route. The full product list is fetched once;
//! search and category filtering happen client-side over that list.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::product_card::ProductCard;
use crate::net::types::Product;

/// Distinct categories in first-seen order.
pub(crate) fn categories(products: &[Product]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for p in products {
        if !out.iter().any(|c| c == &p.category) {
            out.push(p.category.clone());
        }
    }
    out
}

/// Products matching a case-insensitive name `query` within `category`
/// (`None` means all categories). In-stock products sort ahead of
/// out-of-stock ones; otherwise catalog order is kept.
pub(crate) fn filter_products(products: &[Product], query: &str, category: Option<&str>) -> Vec<Product> {
    let needle = query.trim().to_lowercase();
    let mut matches: Vec<Product> = products
        .iter()
        .filter(|p| category.is_none_or(|c| p.category == c))
        .filter(|p| needle.is_empty() || p.name.to_lowercase().contains(&needle))
        .cloned()
        .collect();
    matches.sort_by_key(|p| !p.in_stock);
    matches
}

#[component]
pub fn HomePage() -> impl IntoView {
    let products = RwSignal::new(Vec::<Product>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let query = RwSignal::new(String::new());
    let category = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_products(None).await {
            Ok(items) => products.set(items),
            Err(e) => error.set(Some(format!("Could not load products: {e}"))),
        }
        loading.set(false);
    });

    let visible = move || {
        let selected = category.get();
        products.with(|all| filter_products(all, &query.get(), selected.as_deref()))
    };

    view! {
        <div class="home-page">
            <section class="home-page__hero">
                <h1>"Fresh groceries, delivered"</h1>
                <p>"Order by noon for same-day delivery."</p>
            </section>

            <div class="home-page__controls">
                <input
                    class="search-input"
                    type="search"
                    placeholder="Search products"
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
                <div class="category-chips">
                    <button
                        class="chip"
                        class=("chip--active", move || category.get().is_none())
                        on:click=move |_| category.set(None)
                    >
                        "All"
                    </button>
                    {move || {
                        products
                            .with(|all| categories(all))
                            .into_iter()
                            .map(|c| {
                                let label = c.clone();
                                let active = c.clone();
                                view! {
                                    <button
                                        class="chip"
                                        class=("chip--active", move || category.get().as_deref() == Some(active.as_str()))
                                        on:click=move |_| category.set(Some(c.clone()))
                                    >
                                        {label}
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </div>

            <Show when=move || error.get().is_some()>
                <p class="page-error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show
                when=move || !loading.get()
                fallback=move || view! { <p class="page-loading">"Loading products..."</p> }
            >
                <div class="product-grid">
                    {move || {
                        let items = visible();
                        if items.is_empty() {
                            view! { <p class="product-grid__empty">"No products match your search."</p> }
                                .into_any()
                        } else {
                            items
                                .into_iter()
                                .map(|p| view! { <ProductCard product=p/> })
                                .collect::<Vec<_>>()
                                .into_any()
                        }
                    }}
                </div>
            </Show>
        </div>
    }
}
