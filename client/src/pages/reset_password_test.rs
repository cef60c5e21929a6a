use super::*;

#[test]
fn validate_reset_email_normalises() {
    assert_eq!(validate_reset_email("  Bo@Example.com "), Ok("bo@example.com".to_owned()));
}

#[test]
fn validate_reset_email_requires_value() {
    assert_eq!(validate_reset_email("  "), Err("Enter the email you registered with."));
}

#[test]
fn validate_reset_email_rejects_malformed() {
    assert_eq!(validate_reset_email("bo@"), Err("Enter a valid email address."));
}

#[test]
fn reset_message_does_not_reveal_account_existence() {
    assert!(!RESET_SENT_MESSAGE.contains("not found"));
    assert!(RESET_SENT_MESSAGE.starts_with("If that address"));
}
