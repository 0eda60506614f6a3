//! Small formatting helpers for inline styles and class lists.

#[cfg(test)]
#[path = "css_test.rs"]
mod css_test;

/// Format a CSS number rounded to three decimals, without a trailing `.0`
/// and with negative zero folded to `0`.
#[must_use]
pub fn css_number(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_owned();
    }
    let rounded = (value * 1000.0).round() / 1000.0;
    format!("{}", rounded + 0.0)
}

/// Join non-empty class fragments with single spaces.
#[must_use]
pub fn class_list(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
