//! Display formatting for prices and report figures.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Format integer cents as a dollar amount, e.g. `1299` -> `"$12.99"`.
pub fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{sign}${}.{:02}", group_thousands(abs / 100), abs % 100)
}

/// Insert `,` separators every three digits.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Short noun phrase for an item count, e.g. `"1 item"`, `"3 items"`.
pub fn item_count_label(count: u32) -> String {
    if count == 1 { "1 item".to_owned() } else { format!("{count} items") }
}
