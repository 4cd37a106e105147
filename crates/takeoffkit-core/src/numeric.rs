//! Decimal precision helpers.
//!
//! Two precision policies coexist and must not be mixed up:
//! - formula results are truncated downward at the third decimal
//!   ([`truncate_3`]) using the exact decimal text of the number;
//! - stored shape values are rounded to five decimals ([`round_stored`]).

use crate::constants::STORED_VALUE_PLACES;

/// Truncates `x` downward at the third fractional digit.
///
/// Works on the shortest decimal representation of the float rather than on
/// `x * 1000`, so `1.005` stays `1.005` even though its binary value is
/// slightly below it. Truncation always moves toward negative infinity:
/// `4.2325 -> 4.232`, `-1.0005 -> -1.001`. Non-finite input is returned as is.
pub fn truncate_3(x: f64) -> f64 {
    if !x.is_finite() {
        return x;
    }

    // Display for f64 is the shortest round-trip form and never uses exponents.
    let text = x.to_string();
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.as_str()),
    };
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits, ""));
    if frac_part.len() <= 3 {
        return x;
    }

    let (kept, dropped) = frac_part.split_at(3);
    let mut mills = format!("{}{}", int_part, kept);
    if negative && dropped.bytes().any(|b| b != b'0') {
        mills = increment_digits(&mills);
    }

    let split = mills.len() - 3;
    let literal = format!(
        "{}{}.{}",
        if negative { "-" } else { "" },
        &mills[..split],
        &mills[split..]
    );
    literal.parse().unwrap_or(x)
}

/// Adds one to a string of ASCII digits, growing it on overflow.
fn increment_digits(digits: &str) -> String {
    let mut bytes = digits.as_bytes().to_vec();
    for b in bytes.iter_mut().rev() {
        if *b == b'9' {
            *b = b'0';
        } else {
            *b += 1;
            return String::from_utf8_lossy(&bytes).into_owned();
        }
    }
    format!("1{}", String::from_utf8_lossy(&bytes))
}

/// Rounds a derived value to the stored precision (five decimals).
pub fn round_stored(x: f64) -> f64 {
    round_to_places(x, STORED_VALUE_PLACES)
}

/// Rounds half away from zero at `places` decimals.
pub fn round_to_places(x: f64, places: u32) -> f64 {
    if !x.is_finite() {
        return x;
    }
    let factor = 10f64.powi(places as i32);
    let scaled = x * factor;
    // Too large to carry a fractional part anyway
    if !scaled.is_finite() {
        return x;
    }
    scaled.round() / factor
}

/// Formats with a fixed number of decimals, never printing `-0.000`.
pub fn format_fixed(x: f64, places: usize) -> String {
    let text = format!("{:.*}", places, x);
    if text.starts_with('-') && text[1..].bytes().all(|b| b == b'0' || b == b'.') {
        text[1..].to_string()
    } else {
        text
    }
}
