use super::*;

#[test]
fn format_cents_pads_fraction() {
    assert_eq!(format_cents(0), "$0.00");
    assert_eq!(format_cents(5), "$0.05");
    assert_eq!(format_cents(1299), "$12.99");
}

#[test]
fn format_cents_groups_thousands() {
    assert_eq!(format_cents(123_456_789), "$1,234,567.89");
}

#[test]
fn format_cents_negative_amounts() {
    assert_eq!(format_cents(-250), "-$2.50");
}

#[test]
fn group_thousands_boundaries() {
    assert_eq!(group_thousands(0), "0");
    assert_eq!(group_thousands(999), "999");
    assert_eq!(group_thousands(1000), "1,000");
    assert_eq!(group_thousands(100_000), "100,000");
}

#[test]
fn item_count_label_pluralises() {
    assert_eq!(item_count_label(0), "0 items");
    assert_eq!(item_count_label(1), "1 item");
    assert_eq!(item_count_label(12), "12 items");
}
