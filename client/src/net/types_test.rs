use super::*;

// =============================================================
// Helpers
// =============================================================

fn stock(on_hand: u32, reorder_level: u32) -> StockReportRecord {
    StockReportRecord {
        product_id: "p-1".to_owned(),
        product_name: "Bananas".to_owned(),
        category: "produce".to_owned(),
        on_hand,
        reorder_level,
    }
}

// =============================================================
// User
// =============================================================

#[test]
fn user_role_defaults_to_customer_when_missing() {
    let user: User =
        serde_json::from_str(r#"{"id":"u-1","name":"Ana","email":"ana@example.com"}"#).unwrap();
    assert_eq!(user.role, UserRole::Customer);
    assert!(!user.is_staff());
}

#[test]
fn user_role_parses_snake_case() {
    let user: User = serde_json::from_str(
        r#"{"id":"u-2","name":"Bo","email":"bo@example.com","role":"staff"}"#,
    )
    .unwrap();
    assert!(user.is_staff());
}

// =============================================================
// Product
// =============================================================

#[test]
fn product_in_stock_defaults_true() {
    let product: Product = serde_json::from_str(
        r#"{"id":"p-1","name":"Milk","category":"dairy","unit":"1 l","price_cents":129,"image_url":null}"#,
    )
    .unwrap();
    assert!(product.in_stock);
    assert_eq!(product.price_cents, 129);
}

// =============================================================
// Orders
// =============================================================

#[test]
fn order_status_uses_snake_case_on_the_wire() {
    assert_eq!(
        serde_json::to_string(&OrderStatus::OutForDelivery).unwrap(),
        "\"out_for_delivery\""
    );
    let parsed: OrderStatus = serde_json::from_str("\"delivered\"").unwrap();
    assert_eq!(parsed, OrderStatus::Delivered);
}

#[test]
fn order_status_labels_are_human_readable() {
    assert_eq!(OrderStatus::OutForDelivery.label(), "Out for delivery");
    assert_eq!(OrderStatus::Pending.label(), "Pending");
}

#[test]
fn checkout_request_serializes_items() {
    let req = CheckoutRequest {
        address_id: "a-1".to_owned(),
        delivery_slot: "tomorrow-am".to_owned(),
        items: vec![OrderItem { product_id: "p-1".to_owned(), quantity: 3 }],
        note: None,
    };
    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(json["items"][0]["quantity"], 3);
    assert_eq!(json["note"], serde_json::Value::Null);
}

// =============================================================
// Stock levels
// =============================================================

#[test]
fn stock_level_out_when_empty() {
    assert_eq!(stock(0, 5).level(), StockLevel::Out);
}

#[test]
fn stock_level_low_at_or_below_reorder_level() {
    assert_eq!(stock(5, 5).level(), StockLevel::Low);
    assert_eq!(stock(1, 5).level(), StockLevel::Low);
}

#[test]
fn stock_level_healthy_above_reorder_level() {
    assert_eq!(stock(6, 5).level(), StockLevel::Healthy);
}

#[test]
fn stock_level_zero_reorder_level_still_flags_out() {
    assert_eq!(stock(0, 0).level(), StockLevel::Out);
    assert_eq!(stock(1, 0).level(), StockLevel::Healthy);
}

#[test]
fn stock_levels_order_by_urgency() {
    assert!(StockLevel::Out < StockLevel::Low);
    assert!(StockLevel::Low < StockLevel::Healthy);
}
