//! Order history page.

#[cfg(test)]
#[path = "orders_test.rs"]
mod orders_test;

use leptos::prelude::*;

use crate::net::types::OrderSummary;
use crate::util::format::{format_cents, item_count_label};

/// Date part of an ISO-8601 timestamp, e.g. `"2026-03-04T10:15:00Z"` -> `"2026-03-04"`.
pub(crate) fn order_date(placed_at: &str) -> &str {
    placed_at.split('T').next().unwrap_or(placed_at)
}

#[component]
pub fn OrdersPage() -> impl IntoView {
    let orders = RwSignal::new(Vec::<OrderSummary>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_orders().await {
            Ok(items) => orders.set(items),
            Err(e) => error.set(Some(format!("Could not load orders: {e}"))),
        }
        loading.set(false);
    });

    view! {
        <div class="orders-page">
            <h1>"Your orders"</h1>
            <Show when=move || error.get().is_some()>
                <p class="page-error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show
                when=move || !loading.get()
                fallback=move || view! { <p class="page-loading">"Loading orders..."</p> }
            >
                <Show
                    when=move || !orders.get().is_empty()
                    fallback=move || view! { <p>"You haven't placed any orders yet."</p> }
                >
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Order"</th>
                                <th>"Placed"</th>
                                <th>"Items"</th>
                                <th>"Total"</th>
                                <th>"Status"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                orders
                                    .get()
                                    .into_iter()
                                    .map(|o| {
                                        view! {
                                            <tr>
                                                <td>{o.id.clone()}</td>
                                                <td>{order_date(&o.placed_at).to_owned()}</td>
                                                <td>{item_count_label(o.item_count)}</td>
                                                <td>{format_cents(o.total_cents)}</td>
                                                <td>{o.status.label()}</td>
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </tbody>
                    </table>
                </Show>
            </Show>
        </div>
    }
}
