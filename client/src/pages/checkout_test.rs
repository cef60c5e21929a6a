use super::*;
use crate::net::types::{OrderItem, Product};

fn cart_with(quantity: u32) -> CartState {
    let mut cart = CartState::default();
    cart.add(
        &Product {
            id: "p-1".to_owned(),
            name: "Eggs".to_owned(),
            category: "dairy".to_owned(),
            unit: "dozen".to_owned(),
            price_cents: 399,
            image_url: None,
            in_stock: true,
        },
        quantity,
    );
    cart
}

#[test]
fn validate_checkout_builds_request() {
    let request = validate_checkout(&cart_with(2), Some("a-1"), "tomorrow-am", "  Ring twice ").unwrap();
    assert_eq!(request.address_id, "a-1");
    assert_eq!(request.delivery_slot, "tomorrow-am");
    assert_eq!(request.items, vec![OrderItem { product_id: "p-1".to_owned(), quantity: 2 }]);
    assert_eq!(request.note.as_deref(), Some("Ring twice"));
}

#[test]
fn validate_checkout_blank_note_is_none() {
    let request = validate_checkout(&cart_with(1), Some("a-1"), "asap", "   ").unwrap();
    assert_eq!(request.note, None);
}

#[test]
fn validate_checkout_rejects_empty_cart() {
    assert_eq!(
        validate_checkout(&CartState::default(), Some("a-1"), "asap", ""),
        Err("Your cart is empty.")
    );
}

#[test]
fn validate_checkout_requires_address() {
    assert_eq!(validate_checkout(&cart_with(1), None, "asap", ""), Err("Choose a delivery address."));
    assert_eq!(validate_checkout(&cart_with(1), Some(""), "asap", ""), Err("Choose a delivery address."));
}

#[test]
fn validate_checkout_rejects_unknown_slot() {
    assert_eq!(
        validate_checkout(&cart_with(1), Some("a-1"), "midnight", ""),
        Err("Choose a delivery slot.")
    );
}

#[test]
fn validate_checkout_rejects_long_note() {
    let note = "x".repeat(MAX_NOTE_LEN + 1);
    assert_eq!(
        validate_checkout(&cart_with(1), Some("a-1"), "asap", &note),
        Err("Delivery note is too long.")
    );
}

#[test]
fn every_slot_value_is_accepted() {
    for (value, _) in DELIVERY_SLOTS {
        assert!(validate_checkout(&cart_with(1), Some("a-1"), value, "").is_ok(), "{value}");
    }
}
