use super::*;

fn sales(date: &str, orders: u32, items_sold: u32, revenue_cents: i64) -> SalesReportRecord {
    SalesReportRecord { date: date.to_owned(), orders, items_sold, revenue_cents }
}

fn stock(name: &str, on_hand: u32, reorder_level: u32) -> StockReportRecord {
    StockReportRecord {
        product_id: name.to_lowercase(),
        product_name: name.to_owned(),
        category: "Produce".to_owned(),
        on_hand,
        reorder_level,
    }
}

#[test]
fn sales_totals_sums_columns() {
    let totals = sales_totals(&[sales("2026-03-01", 3, 10, 4_500), sales("2026-03-02", 2, 4, 1_500)]);
    assert_eq!(totals, SalesTotals { orders: 5, items_sold: 14, revenue_cents: 6_000 });
    assert_eq!(totals.average_order_cents(), 1_200);
}

#[test]
fn sales_totals_of_nothing_is_zero() {
    let totals = sales_totals(&[]);
    assert_eq!(totals, SalesTotals::default());
    assert_eq!(totals.average_order_cents(), 0);
}

#[test]
fn sort_by_urgency_puts_out_of_stock_first() {
    let mut rows = vec![stock("Apples", 40, 10), stock("Milk", 3, 5), stock("Bread", 0, 5), stock("Eggs", 1, 5)];
    sort_by_urgency(&mut rows);
    let names: Vec<_> = rows.iter().map(|r| r.product_name.as_str()).collect();
    assert_eq!(names, ["Bread", "Eggs", "Milk", "Apples"]);
}

#[test]
fn sort_by_urgency_breaks_ties_on_name() {
    let mut rows = vec![stock("Pears", 0, 5), stock("Figs", 0, 5)];
    sort_by_urgency(&mut rows);
    assert_eq!(rows[0].product_name, "Figs");
}

#[test]
fn stock_level_labels() {
    assert_eq!(stock_level_label(stock("a", 0, 5).level()), "Out of stock");
    assert_eq!(stock_level_label(stock("a", 5, 5).level()), "Reorder");
    assert_eq!(stock_level_label(stock("a", 6, 5).level()), "OK");
}
