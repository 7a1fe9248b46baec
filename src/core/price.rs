//! Price parsing and pt-BR currency formatting.
//!
//! Catalog prices are free text typed by whoever maintains the inventory:
//! `"R$ 10.299,00"`, `"10299.00"`, `"10.299,00"` or nothing at all.

use regex::Regex;
use std::sync::LazyLock;

/// Shown instead of an amount when the price is unknown.
pub const PRICE_UNKNOWN_LABEL: &str = "Consulte";

static LEADING_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?").expect("Invalid number regex")
});

/// Parses a human-entered price into a number.
///
/// Returns `0.0` for absent, empty or unparseable input. `0.0` means
/// "price unknown", never "free".
///
/// If the text contains a comma it is read as Brazilian notation (`.` for
/// thousands, `,` for decimals); otherwise `.` is the decimal separator.
/// Only the leading numeric part is used, so malformed input such as
/// `"10,00,5"` still yields a number (`10.0`).
pub fn parse_price(raw: Option<&str>) -> f64 {
    let Some(raw) = raw else {
        return 0.0;
    };

    let cleaned: String = raw
        .chars()
        .filter(|c| !matches!(c, 'R' | '$') && !c.is_whitespace())
        .collect();
    if cleaned.is_empty() {
        return 0.0;
    }

    let normalized = if cleaned.contains(',') {
        cleaned.replace('.', "").replacen(',', ".", 1)
    } else {
        cleaned
    };

    leading_number(&normalized).unwrap_or(0.0)
}

fn leading_number(text: &str) -> Option<f64> {
    LEADING_NUMBER
        .find(text)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|value| value.is_finite())
}

/// `10299.0` -> `"R$ 10.299,00"`
pub fn format_brl(value: f64) -> String {
    format_brl_with(value, 2)
}

/// `20000.0` -> `"R$ 20.000"`, used for range labels.
pub fn format_brl_whole(value: f64) -> String {
    format_brl_with(value, 0)
}

/// Formatted price, or [`PRICE_UNKNOWN_LABEL`] when it cannot be parsed.
pub fn price_label(price_text: Option<&str>) -> String {
    let value = parse_price(price_text);
    if value == 0.0 {
        PRICE_UNKNOWN_LABEL.to_string()
    } else {
        format_brl(value)
    }
}

fn format_brl_with(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (formatted.as_str(), None),
    };

    let mut out = String::with_capacity(formatted.len() + 8);
    if value.is_sign_negative() && value != 0.0 {
        out.push('-');
    }
    out.push_str("R$ ");
    out.push_str(&group_thousands(int_part));
    if let Some(frac) = frac_part {
        out.push(',');
        out.push_str(frac);
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}
