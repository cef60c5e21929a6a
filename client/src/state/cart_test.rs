use super::*;

// =============================================================
// Helpers
// =============================================================

fn product(id: &str, price_cents: i64) -> Product {
    Product {
        id: id.to_owned(),
        name: format!("Product {id}"),
        category: "pantry".to_owned(),
        unit: "each".to_owned(),
        price_cents,
        image_url: None,
        in_stock: true,
    }
}

// =============================================================
// add / set_quantity / remove
// =============================================================

#[test]
fn cart_default_is_empty() {
    let cart = CartState::default();
    assert!(cart.is_empty());
    assert_eq!(cart.item_count(), 0);
    assert_eq!(cart.total_cents(), 0);
}

#[test]
fn add_merges_lines_for_same_product() {
    let mut cart = CartState::default();
    let apples = product("apples", 250);
    assert!(cart.add(&apples, 2));
    assert!(cart.add(&apples, 3));
    assert_eq!(cart.lines.len(), 1);
    assert_eq!(cart.quantity_of("apples"), 5);
}

#[test]
fn add_keeps_insertion_order() {
    let mut cart = CartState::default();
    cart.add(&product("b", 100), 1);
    cart.add(&product("a", 100), 1);
    let ids: Vec<_> = cart.lines.iter().map(|l| l.product.id.as_str()).collect();
    assert_eq!(ids, vec!["b", "a"]);
}

#[test]
fn add_rejects_out_of_stock_and_zero_quantity() {
    let mut cart = CartState::default();
    let mut gone = product("gone", 100);
    gone.in_stock = false;
    assert!(!cart.add(&gone, 1));
    assert!(!cart.add(&product("x", 100), 0));
    assert!(cart.is_empty());
}

#[test]
fn add_saturates_at_max_quantity() {
    let mut cart = CartState::default();
    let rice = product("rice", 399);
    cart.add(&rice, 90);
    cart.add(&rice, 50);
    assert_eq!(cart.quantity_of("rice"), MAX_LINE_QUANTITY);
}

#[test]
fn set_quantity_zero_removes_line() {
    let mut cart = CartState::default();
    cart.add(&product("milk", 129), 2);
    cart.set_quantity("milk", 0);
    assert!(cart.is_empty());
}

#[test]
fn set_quantity_unknown_product_is_noop() {
    let mut cart = CartState::default();
    cart.add(&product("milk", 129), 2);
    cart.set_quantity("bread", 4);
    assert_eq!(cart.item_count(), 2);
}

#[test]
fn remove_and_clear() {
    let mut cart = CartState::default();
    cart.add(&product("a", 100), 1);
    cart.add(&product("b", 100), 1);
    cart.remove("a");
    assert_eq!(cart.lines.len(), 1);
    cart.clear();
    assert!(cart.is_empty());
}

// =============================================================
// Totals
// =============================================================

#[test]
fn subtotal_sums_line_totals() {
    let mut cart = CartState::default();
    cart.add(&product("a", 250), 2);
    cart.add(&product("b", 199), 3);
    assert_eq!(cart.subtotal_cents(), 500 + 597);
    assert_eq!(cart.item_count(), 5);
}

#[test]
fn delivery_fee_applies_below_threshold() {
    let mut cart = CartState::default();
    cart.add(&product("a", 1_000), 1);
    assert_eq!(cart.delivery_fee_cents(), DELIVERY_FEE_CENTS);
    assert_eq!(cart.total_cents(), 1_000 + DELIVERY_FEE_CENTS);
}

#[test]
fn delivery_is_free_at_threshold() {
    let mut cart = CartState::default();
    cart.add(&product("a", FREE_DELIVERY_THRESHOLD_CENTS), 1);
    assert_eq!(cart.delivery_fee_cents(), 0);
}

#[test]
fn order_items_mirror_lines() {
    let mut cart = CartState::default();
    cart.add(&product("a", 100), 2);
    cart.add(&product("b", 100), 1);
    let items = cart.order_items();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0], OrderItem { product_id: "a".to_owned(), quantity: 2 });
}

// =============================================================
// normalized
// =============================================================

fn line(id: &str, quantity: u32) -> CartLine {
    CartLine { product: product(id, 100), quantity }
}

#[test]
fn normalized_merges_duplicates_and_caps_quantity() {
    let raw = r#"{"lines":[
        {"product":{"id":"p1","name":"Milk","category":"dairy","unit":"1 l","price_cents":129},"quantity":4000000000},
        {"product":{"id":"p1","name":"Milk","category":"dairy","unit":"1 l","price_cents":129},"quantity":4000000000}
    ]}"#;
    let restored: CartState = serde_json::from_str(raw).expect("cart json");
    assert_eq!(restored.lines.len(), 2);

    let cart = restored.normalized();
    assert_eq!(cart.lines.len(), 1);
    assert_eq!(cart.quantity_of("p1"), MAX_LINE_QUANTITY);
    assert_eq!(cart.item_count(), MAX_LINE_QUANTITY);
}

#[test]
fn normalized_keeps_first_position_and_drops_empty_lines() {
    let cart = CartState { lines: vec![line("a", 2), line("b", 0), line("c", 1), line("a", 3)] }.normalized();
    let ids: Vec<_> = cart.lines.iter().map(|l| l.product.id.as_str()).collect();
    assert_eq!(ids, ["a", "c"]);
    assert_eq!(cart.quantity_of("a"), 5);
}

#[test]
fn normalized_leaves_valid_cart_unchanged() {
    let cart = CartState { lines: vec![line("a", 2), line("b", 99)] };
    assert_eq!(cart.clone().normalized(), cart);
}

#[test]
fn item_count_saturates_instead_of_overflowing() {
    let cart = CartState { lines: vec![line("a", u32::MAX), line("b", 5)] };
    assert_eq!(cart.item_count(), u32::MAX);
}
