//! Display formatting for dashboard values.
//!
//! Thousands-grouped currency and volume strings, signed percentages, and a
//! placeholder for values that are absent or unknown. Pure string work, no
//! locale machinery.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rendered in place of an absent indicator or an unknown percentage.
pub const PLACEHOLDER: &str = "–";

/// Trims trailing zeros, adds thousands separators.
fn group_thousands(formatted: String) -> String {
    let trimmed = if formatted.contains('.') {
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        formatted
    };

    let parts = trimmed.split('.').collect::<Vec<_>>();

    let integer_part = parts[0]
        .chars()
        .rev()
        .collect::<String>()
        .as_bytes()
        .chunks(3)
        .map(|c| std::str::from_utf8(c).unwrap_or_default())
        .collect::<Vec<_>>()
        .join(",")
        .chars()
        .rev()
        .collect::<String>();

    let integer_part = integer_part
        .strip_prefix("-,")
        .map(|rest| format!("-{}", rest))
        .unwrap_or(integer_part);

    if parts.len() > 1 {
        format!("{}.{}", integer_part, parts[1])
    } else {
        integer_part
    }
}

/// Format a currency amount with a yen sign, e.g. `¥38,500` / `-¥120.5`.
pub fn format_yen(amount: &Decimal) -> String {
    let grouped = group_thousands(amount.abs().to_string());
    if amount.is_sign_negative() && !amount.is_zero() {
        format!("-¥{}", grouped)
    } else {
        format!("¥{}", grouped)
    }
}

/// Format a share volume with thousands separators, e.g. `1,350,000`.
pub fn format_volume(volume: u64) -> String {
    group_thousands(volume.to_string())
}

/// Format a signed percentage to two decimal places, e.g. `+0.79%`.
///
/// `None` is the "change unknown" sentinel and renders as the placeholder.
pub fn format_percent(percent: Option<&Decimal>) -> String {
    match percent {
        Some(p) => {
            let mut rounded =
                p.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            rounded.rescale(2);
            if rounded.is_sign_negative() && !rounded.is_zero() {
                format!("{}%", rounded)
            } else {
                format!("+{}%", rounded)
            }
        }
        None => PLACEHOLDER.to_string(),
    }
}

/// Format an optional indicator value, falling back to the placeholder.
pub fn format_opt(value: Option<&Decimal>) -> String {
    match value {
        Some(v) => group_thousands(v.to_string()),
        None => PLACEHOLDER.to_string(),
    }
}
