use super::*;

fn form() -> AddressForm {
    AddressForm {
        label: String::new(),
        line1: " 12 Market Street ".to_owned(),
        line2: String::new(),
        city: "Lisbon".to_owned(),
        postcode: "1100-148".to_owned(),
        phone: String::new(),
    }
}

#[test]
fn validate_address_trims_and_defaults_label() {
    assert_eq!(
        validate_address(&form()),
        Ok(NewAddress {
            label: "Home".to_owned(),
            line1: "12 Market Street".to_owned(),
            line2: None,
            city: "Lisbon".to_owned(),
            postcode: "1100-148".to_owned(),
            phone: None,
        })
    );
}

#[test]
fn validate_address_keeps_optional_fields() {
    let mut f = form();
    f.label = "Work".to_owned();
    f.line2 = " Floor 3 ".to_owned();
    f.phone = "+351 912-345-678".to_owned();
    let address = validate_address(&f).expect("valid");
    assert_eq!(address.label, "Work");
    assert_eq!(address.line2.as_deref(), Some("Floor 3"));
    assert_eq!(address.phone.as_deref(), Some("+351 912-345-678"));
}

#[test]
fn validate_address_uppercases_postcode() {
    let mut f = form();
    f.postcode = "sw1a 1aa".to_owned();
    assert_eq!(validate_address(&f).map(|a| a.postcode), Ok("SW1A 1AA".to_owned()));
}

#[test]
fn validate_address_requires_street_city_and_postcode() {
    for clear in [
        |f: &mut AddressForm| f.line1.clear(),
        |f: &mut AddressForm| f.city = "   ".to_owned(),
        |f: &mut AddressForm| f.postcode.clear(),
    ] {
        let mut f = form();
        clear(&mut f);
        assert_eq!(validate_address(&f), Err("Street, city and postcode are required."));
    }
}

#[test]
fn validate_address_rejects_bad_postcode() {
    let mut f = form();
    f.postcode = "12".to_owned();
    assert_eq!(validate_address(&f), Err("Enter a valid postcode."));
    f.postcode = "12#45".to_owned();
    assert_eq!(validate_address(&f), Err("Enter a valid postcode."));
}

#[test]
fn validate_address_rejects_bad_phone() {
    let mut f = form();
    f.phone = "12345".to_owned();
    assert_eq!(validate_address(&f), Err("Enter a valid phone number."));
    f.phone = "call me maybe".to_owned();
    assert_eq!(validate_address(&f), Err("Enter a valid phone number."));
}

#[test]
fn address_field_slot_and_value_agree() {
    let mut f = AddressForm::default();
    for which in [
        AddressField::Label,
        AddressField::Line1,
        AddressField::Line2,
        AddressField::City,
        AddressField::Postcode,
        AddressField::Phone,
    ] {
        *which.slot(&mut f) = which.placeholder().to_owned();
        assert_eq!(which.value(&f), which.placeholder());
    }
    assert_eq!(f.city, "City");
}
