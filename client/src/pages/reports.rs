//! Staff report views: daily sales and current stock levels.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both tables render rows fetched from `/api/reports/*` as-is. Access is
//! gated on the staff role client-side; the backend enforces the same rule.

#[cfg(test)]
#[path = "reports_test.rs"]
mod reports_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::net::types::{SalesReportRecord, StockLevel, StockReportRecord};
use crate::state::auth::AuthState;
use crate::util::format::{format_cents, group_thousands};

/// Column sums for the sales table footer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct SalesTotals {
    pub orders: u64,
    pub items_sold: u64,
    pub revenue_cents: i64,
}

impl SalesTotals {
    /// Mean order value, or zero with no orders.
    pub fn average_order_cents(self) -> i64 {
        match i64::try_from(self.orders) {
            Ok(n) if n > 0 => self.revenue_cents / n,
            _ => 0,
        }
    }
}

pub(crate) fn sales_totals(records: &[SalesReportRecord]) -> SalesTotals {
    records.iter().fold(SalesTotals::default(), |acc, r| SalesTotals {
        orders: acc.orders + u64::from(r.orders),
        items_sold: acc.items_sold + u64::from(r.items_sold),
        revenue_cents: acc.revenue_cents + r.revenue_cents,
    })
}

/// Most urgent first: out of stock, then low, then healthy. Within a level,
/// fewer units on hand sort first and ties break on name.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
pub(crate) fn sort_by_urgency(records: &mut [StockReportRecord]) {
    records.sort_by(|a, b| {
        a.level()
            .cmp(&b.level())
            .then(a.on_hand.cmp(&b.on_hand))
            .then_with(|| a.product_name.cmp(&b.product_name))
    });
}

pub(crate) fn stock_level_label(level: StockLevel) -> &'static str {
    match level {
        StockLevel::Out => "Out of stock",
        StockLevel::Low => "Reorder",
        StockLevel::Healthy => "OK",
    }
}

#[component]
fn StaffOnly(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    view! {
        <Show
            when=move || auth.with(AuthState::is_staff)
            fallback=move || view! { <p class="page-error">"Staff only."</p> }
        >
            {children()}
        </Show>
    }
}

#[component]
pub fn SalesReportPage() -> impl IntoView {
    let records = RwSignal::new(Vec::<SalesReportRecord>::new());
    let error = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    {
        let auth = expect_context::<RwSignal<AuthState>>();
        Effect::new(move |fetched: Option<bool>| {
            if fetched == Some(true) || !auth.with(AuthState::is_staff) {
                return fetched.unwrap_or(false);
            }
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_sales_report().await {
                    Ok(rows) => records.set(rows),
                    Err(e) => error.set(Some(format!("Could not load sales report: {e}"))),
                }
            });
            true
        });
    }

    let rows = move || {
        records
            .get()
            .into_iter()
            .map(|r| {
                view! {
                    <tr>
                        <td>{r.date}</td>
                        <td class="num">{group_thousands(u64::from(r.orders))}</td>
                        <td class="num">{group_thousands(u64::from(r.items_sold))}</td>
                        <td class="num">{format_cents(r.revenue_cents)}</td>
                    </tr>
                }
            })
            .collect::<Vec<_>>()
    };
    let totals = move || records.with(|r| sales_totals(r));

    view! {
        <div class="report-page">
            <h1>"Sales report"</h1>
            <StaffOnly>
                <Show when=move || error.get().is_some()>
                    <p class="page-error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <table class="report-table">
                    <thead>
                        <tr>
                            <th>"Date"</th>
                            <th>"Orders"</th>
                            <th>"Items sold"</th>
                            <th>"Revenue"</th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                    <tfoot>
                        <tr>
                            <th>"Total"</th>
                            <th class="num">{move || group_thousands(totals().orders)}</th>
                            <th class="num">{move || group_thousands(totals().items_sold)}</th>
                            <th class="num">{move || format_cents(totals().revenue_cents)}</th>
                        </tr>
                    </tfoot>
                </table>
                <p class="report-note">
                    "Average order: " {move || format_cents(totals().average_order_cents())}
                </p>
            </StaffOnly>
        </div>
    }
}

#[component]
pub fn StockReportPage() -> impl IntoView {
    let records = RwSignal::new(Vec::<StockReportRecord>::new());
    let error = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    {
        let auth = expect_context::<RwSignal<AuthState>>();
        Effect::new(move |fetched: Option<bool>| {
            if fetched == Some(true) || !auth.with(AuthState::is_staff) {
                return fetched.unwrap_or(false);
            }
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_stock_report().await {
                    Ok(mut rows) => {
                        sort_by_urgency(&mut rows);
                        records.set(rows);
                    }
                    Err(e) => error.set(Some(format!("Could not load stock report: {e}"))),
                }
            });
            true
        });
    }

    let needs_attention =
        move || records.with(|r| r.iter().filter(|s| s.level() != StockLevel::Healthy).count());

    view! {
        <div class="report-page">
            <h1>"Stock report"</h1>
            <StaffOnly>
                <Show when=move || error.get().is_some()>
                    <p class="page-error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <p class="report-note">{move || format!("{} products need attention.", needs_attention())}</p>
                {move || {
                    if records.with(Vec::is_empty) {
                        return view! { <p class="page-loading">"No stock data yet."</p> }.into_any();
                    }
                    view! {
                        <table class="report-table">
                            <thead>
                                <tr>
                                    <th>"Product"</th>
                                    <th>"Category"</th>
                                    <th>"On hand"</th>
                                    <th>"Reorder at"</th>
                                    <th>"Status"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {records
                                    .get()
                                    .into_iter()
                                    .map(|s| {
                                        let level = s.level();
                                        view! {
                                            <tr class=level.css_class()>
                                                <td>{s.product_name}</td>
                                                <td>{s.category}</td>
                                                <td class="num">{s.on_hand}</td>
                                                <td class="num">{s.reorder_level}</td>
                                                <td>{stock_level_label(level)}</td>
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </tbody>
                        </table>
                    }
                        .into_any()
                }}
            </StaffOnly>
        </div>
    }
}
