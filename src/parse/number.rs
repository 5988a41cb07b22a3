//! Locale-aware number parsing and formatting for cell text
//!
//! Parsing accepts both `1.234,5` (es-CL) and `1234.5` style input. A dot is
//! read as a thousands separator only when exactly three digits follow it and
//! the group ends there. Every comma is a decimal mark.

use super::locale::NumberLocale;

/// A number read from cell text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParsedNumber {
    pub value: f64,
    /// Source text ended with `%`
    pub is_percent: bool,
}

pub fn parse_number(raw: &str) -> Option<ParsedNumber> {
    let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    let (body, is_percent) = match compact.strip_suffix('%') {
        Some(body) => (body, true),
        None => (compact.as_str(), false),
    };

    if !body.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }

    let value: f64 = normalize_separators(body).parse().ok()?;
    if !value.is_finite() {
        return None;
    }

    Some(ParsedNumber { value, is_percent })
}

/// Drop grouping dots and turn commas into decimal points
fn normalize_separators(body: &str) -> String {
    let chars: Vec<char> = body.chars().collect();
    let mut out = String::with_capacity(body.len());
    for (i, &c) in chars.iter().enumerate() {
        match c {
            '.' if is_grouping_dot(&chars, i) => {}
            ',' => out.push('.'),
            _ => out.push(c),
        }
    }
    out
}

/// `.` followed by exactly three digits, then a non-digit or the end
fn is_grouping_dot(chars: &[char], i: usize) -> bool {
    match chars.get(i + 1..i + 4) {
        Some(group) if group.iter().all(char::is_ascii_digit) => {
            !chars.get(i + 4).is_some_and(char::is_ascii_digit)
        }
        _ => false,
    }
}

/// Render with locale grouping and at most `max_fraction_digits` decimals,
/// trailing zeros dropped
pub fn format_number(number: ParsedNumber, locale: &NumberLocale) -> String {
    let places = locale.max_fraction_digits;
    let abs = number.value.abs();
    let scale = 10f64.powi(places as i32);
    let rounded = if (abs * scale).is_finite() {
        (abs * scale).round() / scale
    } else {
        abs
    };

    let fixed = format!("{:.prec$}", rounded, prec = places);
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::new();
    // negatives keep their sign even when they round to zero ("-0")
    if number.value.is_sign_negative() {
        out.push('-');
    }
    out.push_str(&locale.group_integer(int_part));
    if !frac_part.is_empty() {
        out.push(locale.decimal_separator);
        out.push_str(frac_part);
    }
    if number.is_percent {
        out.push('%');
    }
    out
}

/// Parse then format; `None` means "not numeric"
pub fn format_number_text(raw: &str, locale: &NumberLocale) -> Option<String> {
    parse_number(raw).map(|n| format_number(n, locale))
}
