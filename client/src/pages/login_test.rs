use super::*;

#[test]
fn looks_like_email_accepts_common_addresses() {
    assert!(looks_like_email("ana@example.com"));
    assert!(looks_like_email("first.last+tag@shop.co.uk"));
}

#[test]
fn looks_like_email_rejects_malformed_addresses() {
    for bad in ["", "ana", "@example.com", "ana@", "ana@example", "ana@.com", "ana@example.", "a na@example.com"] {
        assert!(!looks_like_email(bad), "{bad:?} should be rejected");
    }
}

#[test]
fn validate_login_input_trims_and_lowercases_email() {
    assert_eq!(
        validate_login_input("  Ana@Example.COM ", "hunter22"),
        Ok(LoginRequest { email: "ana@example.com".to_owned(), password: "hunter22".to_owned() })
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("   ", "pw"), Err("Enter your email and password."));
    assert_eq!(validate_login_input("ana@example.com", ""), Err("Enter your email and password."));
}

#[test]
fn validate_login_input_rejects_bad_email() {
    assert_eq!(validate_login_input("ana", "pw"), Err("Enter a valid email address."));
}

#[test]
fn validate_login_input_keeps_password_verbatim() {
    let request = validate_login_input("ana@example.com", "  spaced  ").unwrap();
    assert_eq!(request.password, "  spaced  ");
}
