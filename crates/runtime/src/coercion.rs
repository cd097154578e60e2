//!
//! String to number coercion
//!
//! Strings are trimmed, then read as either a decimal literal (with an
//! optional sign, fraction and exponent), a signed `Infinity`, or an unsigned
//! binary, octal or hexadecimal integer. Empty strings convert to zero and
//! anything else converts to NaN.
//!

use std::sync::LazyLock;

use regex::Regex;

static DECIMAL_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?$").unwrap()
});

static RADIX_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^0(?:[xX](?<hex>[0-9a-fA-F]+)|[oO](?<oct>[0-7]+)|[bB](?<bin>[01]+))$").unwrap()
});

/// Convert a string to a number
pub fn string_to_number(string: &str) -> f64 {
    let string = string.trim_matches(is_coercion_whitespace);

    if string.is_empty() {
        return 0.0;
    }

    match string {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    if DECIMAL_LITERAL.is_match(string) {
        // The pattern is a subset of what Rust's float parser accepts
        return string.parse::<f64>().unwrap_or(f64::NAN);
    }

    match RADIX_LITERAL.captures(string) {
        Some(captures) => {
            let (digits, radix) = if let Some(hex) = captures.name("hex") {
                (hex, 16)
            } else if let Some(oct) = captures.name("oct") {
                (oct, 8)
            } else if let Some(bin) = captures.name("bin") {
                (bin, 2)
            } else {
                return f64::NAN;
            };

            radix_digits_to_number(digits.as_str(), radix)
        }

        None => f64::NAN,
    }
}

fn radix_digits_to_number(digits: &str, radix: u32) -> f64 {
    digits.chars().fold(0.0, |acc, c| {
        acc * f64::from(radix) + c.to_digit(radix).map_or(f64::NAN, f64::from)
    })
}

fn is_coercion_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}'
}
