//! Conversions between user-typed prices and integer cents.
//!
//! Prices are stored as cents. Users type decimal amounts and may use a
//! comma as the decimal separator.
//!
//! ```rust
//! use shop_console::console::price::{format_price, parse_price};
//!
//! assert_eq!(parse_price("12,50"), 1250);
//! assert_eq!(format_price(1250), "12.50");
//! ```

/// Currency symbol appended by [`display_price`].
pub const CURRENCY_SYMBOL: &str = "€";

/// Parses a typed amount into cents.
///
/// The first comma is read as a decimal point and the longest leading
/// numeric prefix is used, so `"3.5 eur"` is 350. Input with no leading
/// number yields 0. The amount is rounded to the nearest cent.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn parse_price(text: &str) -> i64 {
    let normalized = text.trim().replacen(',', ".", 1);
    let amount = numeric_prefix(&normalized)
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0);

    (amount * 100.0).round() as i64
}

/// Formats cents as a decimal amount with two digits, e.g. `"12.50"`.
#[must_use]
pub fn format_price(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{sign}{}.{:02}", abs / 100, abs % 100)
}

/// Formats cents with the currency symbol, e.g. `"12.50 €"`.
#[must_use]
pub fn display_price(cents: i64) -> String {
    format!("{} {CURRENCY_SYMBOL}", format_price(cents))
}

/// Returns the longest prefix of `s` shaped like `[+-]digits[.digits]`.
fn numeric_prefix(s: &str) -> &str {
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let mut seen_dot = false;
    let mut seen_digit = false;
    while let Some(&b) = bytes.get(end) {
        match b {
            b'0'..=b'9' => seen_digit = true,
            b'.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end += 1;
    }

    if seen_digit {
        &s[..end]
    } else {
        ""
    }
}
