//! Number parsing and formatting with browser-compatible text semantics.
//!
//! Form fields hold free text. Parsing follows the lenient prefix rules of
//! `parseFloat`, and formatting follows `Number.prototype.toString`, so the
//! user sees the same text a plain script would render.

#[cfg(test)]
#[path = "number_test.rs"]
mod number_test;

/// Parse the longest numeric prefix of `text`.
///
/// Leading whitespace is skipped and trailing garbage is ignored
/// (`"3abc"` parses as `3`). Returns `None` when no numeric prefix exists or
/// the value is not finite.
#[must_use]
pub fn parse_float(text: &str) -> Option<f64> {
    let trimmed = text.trim_start();
    let end = numeric_prefix_len(trimmed.as_bytes());
    if end == 0 {
        return None;
    }
    trimmed
        .get(..end)?
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Byte length of the numeric prefix: `[+-]? digits? (. digits?)? ([eE][+-]?digits)?`
/// with at least one mantissa digit. Returns 0 when there is none.
fn numeric_prefix_len(bytes: &[u8]) -> usize {
    let mut pos = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        pos += 1;
    }

    let int_digits = count_digits(bytes, pos);
    pos += int_digits;

    let mut frac_digits = 0;
    if bytes.get(pos) == Some(&b'.') {
        frac_digits = count_digits(bytes, pos + 1);
        if int_digits > 0 || frac_digits > 0 {
            pos += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return 0;
    }

    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        let mut exp = pos + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = count_digits(bytes, exp);
        if exp_digits > 0 {
            pos = exp + exp_digits;
        }
    }

    pos
}

fn count_digits(bytes: &[u8], start: usize) -> usize {
    bytes
        .get(start..)
        .map_or(0, |rest| rest.iter().take_while(|b| b.is_ascii_digit()).count())
}

/// Render a number the way a browser renders it into text content.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
    }
    if value == 0.0 {
        return "0".to_owned();
    }

    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return value.to_string();
    }

    // Exponent form; browsers always sign a positive exponent.
    let exp = format!("{value:e}");
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
        _ => exp,
    }
}
