use super::*;

#[test]
fn order_date_strips_time() {
    assert_eq!(order_date("2026-03-04T10:15:00Z"), "2026-03-04");
}

#[test]
fn order_date_passes_through_plain_dates() {
    assert_eq!(order_date("2026-03-04"), "2026-03-04");
}
