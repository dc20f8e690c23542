//! Type promotion for free tokens in value position.
//!
//! The notation carries no type annotations, so an unquoted value like `58`
//! or `3.14` has to be promoted to a number by shape. Two shape tests drive
//! this, explicit-scanner equivalents of the classic regexes
//! `^-?(?=[1-9]|0(?!\d))\d+(\.\d+)?([eE][+-]?\d+)?$` and `^[-+]?[0-9]+$`.
//!
//! The leading-zero exclusion is deliberate: `007` keeps whatever meaning
//! the producer gave it and stays a string. Quoted strings and dict keys
//! never pass through here at all.

use crate::Value;

/// Whether `s` as a whole looks numeric: optional `-`, digits with no
/// leading zero on a multi-digit run, optional `.digits`, optional exponent.
pub(crate) fn is_numeric_shape(s: &str) -> bool {
    let b = s.as_bytes();
    let mut i = 0;

    if i < b.len() && b[i] == b'-' {
        i += 1;
    }

    let digits_start = i;
    while i < b.len() && b[i].is_ascii_digit() {
        i += 1;
    }
    if i == digits_start {
        return false;
    }
    if b[digits_start] == b'0' && i - digits_start > 1 {
        return false;
    }

    if i < b.len() && b[i] == b'.' {
        i += 1;
        let frac_start = i;
        while i < b.len() && b[i].is_ascii_digit() {
            i += 1;
        }
        if i == frac_start {
            return false;
        }
    }

    if i < b.len() && (b[i] == b'e' || b[i] == b'E') {
        i += 1;
        if i < b.len() && (b[i] == b'+' || b[i] == b'-') {
            i += 1;
        }
        let exp_start = i;
        while i < b.len() && b[i].is_ascii_digit() {
            i += 1;
        }
        if i == exp_start {
            return false;
        }
    }

    i == b.len()
}

/// Whether `s` is a pure integer: optional sign, digits only.
pub(crate) fn is_integer_shape(s: &str) -> bool {
    let b = s.as_bytes();
    let digits = match b.first() {
        Some(b'+' | b'-') => &b[1..],
        _ => b,
    };
    !digits.is_empty() && digits.iter().all(u8::is_ascii_digit)
}

/// Promotes a free token's text to a typed scalar.
///
/// Numeric-looking text becomes `Int` or `Float`; everything else stays a
/// `String`. Never fails: a conversion failure after a shape match (e.g. an
/// integer beyond `i64`) falls through to the next rung, ending at `String`.
pub(crate) fn promote(s: &str) -> Value {
    if !is_numeric_shape(s) {
        return Value::String(s.to_string());
    }
    if is_integer_shape(s) {
        if let Ok(i) = s.parse::<i64>() {
            return Value::Int(i);
        }
    }
    match s.parse::<f64>() {
        Ok(f) => Value::Float(f),
        // Unreachable for shape-matched text; keep the token rather than fail
        Err(_) => Value::String(s.to_string()),
    }
}
