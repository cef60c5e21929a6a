//! Address book: list saved delivery addresses and add new ones.

#[cfg(test)]
#[path = "address_test.rs"]
mod address_test;

use leptos::prelude::*;

use crate::net::types::{Address, NewAddress};

/// Raw form fields before validation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct AddressForm {
    pub label: String,
    pub line1: String,
    pub line2: String,
    pub city: String,
    pub postcode: String,
    pub phone: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AddressField {
    Label,
    Line1,
    Line2,
    City,
    Postcode,
    Phone,
}

impl AddressField {
    fn placeholder(self) -> &'static str {
        match self {
            Self::Label => "Label (e.g. Home)",
            Self::Line1 => "Street address",
            Self::Line2 => "Apartment, floor (optional)",
            Self::City => "City",
            Self::Postcode => "Postcode",
            Self::Phone => "Phone (optional)",
        }
    }

    fn slot(self, form: &mut AddressForm) -> &mut String {
        match self {
            Self::Label => &mut form.label,
            Self::Line1 => &mut form.line1,
            Self::Line2 => &mut form.line2,
            Self::City => &mut form.city,
            Self::Postcode => &mut form.postcode,
            Self::Phone => &mut form.phone,
        }
    }

    fn value(self, form: &AddressForm) -> &str {
        match self {
            Self::Label => &form.label,
            Self::Line1 => &form.line1,
            Self::Line2 => &form.line2,
            Self::City => &form.city,
            Self::Postcode => &form.postcode,
            Self::Phone => &form.phone,
        }
    }
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_owned())
}

/// Postcodes are 3-10 characters of letters, digits, spaces or dashes.
fn valid_postcode(value: &str) -> bool {
    (3..=10).contains(&value.len())
        && value.chars().all(|c| c.is_ascii_alphanumeric() || c == ' ' || c == '-')
}

/// Phone numbers need at least 7 digits; `+`, spaces, dashes and brackets are allowed.
fn valid_phone(value: &str) -> bool {
    let digits = value.chars().filter(char::is_ascii_digit).count();
    digits >= 7 && value.chars().all(|c| c.is_ascii_digit() || " +-()".contains(c))
}

pub(crate) fn validate_address(form: &AddressForm) -> Result<NewAddress, &'static str> {
    let line1 = form.line1.trim();
    let city = form.city.trim();
    let postcode = form.postcode.trim().to_ascii_uppercase();
    if line1.is_empty() || city.is_empty() || postcode.is_empty() {
        return Err("Street, city and postcode are required.");
    }
    if !valid_postcode(&postcode) {
        return Err("Enter a valid postcode.");
    }
    let phone = optional(&form.phone);
    if phone.as_deref().is_some_and(|p| !valid_phone(p)) {
        return Err("Enter a valid phone number.");
    }
    Ok(NewAddress {
        label: optional(&form.label).unwrap_or_else(|| "Home".to_owned()),
        line1: line1.to_owned(),
        line2: optional(&form.line2),
        city: city.to_owned(),
        postcode,
        phone,
    })
}

#[component]
pub fn AddressPage() -> impl IntoView {
    let addresses = RwSignal::new(Vec::<Address>::new());
    let form = RwSignal::new(AddressForm::default());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_addresses().await {
            Ok(items) => addresses.set(items),
            Err(e) => info.set(format!("Could not load addresses: {e}")),
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match form.with(validate_address) {
            Ok(request) => request,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Saving...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_address(&request).await {
                Ok(saved) => {
                    addresses.update(|list| list.push(saved));
                    form.set(AddressForm::default());
                    info.set("Address saved.".to_owned());
                }
                Err(e) => info.set(format!("Could not save address: {e}")),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
        }
    };

    let field = move |which: AddressField| {
        view! {
            <input
                class="form-input"
                type="text"
                placeholder=which.placeholder()
                prop:value=move || form.with(|f| which.value(f).to_owned())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| *which.slot(f) = value);
                }
            />
        }
    };

    view! {
        <div class="address-page">
            <h1>"Delivery addresses"</h1>
            <ul class="address-list">
                {move || {
                    addresses
                        .get()
                        .into_iter()
                        .map(|a| {
                            view! {
                                <li class="address-card">
                                    <strong>{a.label}</strong>
                                    <span>{a.line1}</span>
                                    {a.line2.map(|l| view! { <span>{l}</span> })}
                                    <span>{format!("{} {}", a.city, a.postcode)}</span>
                                    {a.phone.map(|p| view! { <span class="address-card__phone">{p}</span> })}
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </ul>
            <form class="address-form" on:submit=on_submit>
                <h2>"Add an address"</h2>
                {field(AddressField::Label)}
                {field(AddressField::Line1)}
                {field(AddressField::Line2)}
                {field(AddressField::City)}
                {field(AddressField::Postcode)}
                {field(AddressField::Phone)}
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Save address"
                </button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="form-message">{move || info.get()}</p>
            </Show>
        </div>
    }
}
