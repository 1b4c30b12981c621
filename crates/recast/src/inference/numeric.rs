//! Numeric lexical grammar shared by the profiler and the coercion engine.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

// =============================================================================
// LAZY STATIC PATTERNS
// =============================================================================
// ASCII digits only: `\d` would also match non-ASCII decimal digits that
// neither `i64` nor `f64` parsing accepts.

static NUMBER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?$").unwrap()
});

static INTEGER_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[+-]?[0-9]+$").unwrap());

/// A successfully parsed number.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl Number {
    /// The value as a float.
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Integer(i) => i as f64,
            Number::Float(f) => f,
        }
    }
}

/// Parse a token as a number.
///
/// Leading and trailing whitespace is ignored. Accepts an optional sign,
/// digits with an optional decimal point, and an optional exponent.
/// Integer-shaped tokens that fit in `i64` become [`Number::Integer`]; anything
/// else that matches becomes a finite [`Number::Float`]. `nan`, `inf` and
/// overflowing exponents are rejected.
pub fn parse_number(token: &str) -> Option<Number> {
    let trimmed = token.trim();
    if trimmed.is_empty() || !NUMBER_PATTERN.is_match(trimmed) {
        return None;
    }

    if INTEGER_PATTERN.is_match(trimmed) {
        if let Ok(i) = trimmed.parse::<i64>() {
            return Some(Number::Integer(i));
        }
    }

    trimmed
        .parse::<f64>()
        .ok()
        .filter(|f| f.is_finite())
        .map(Number::Float)
}

/// Check whether a token matches the numeric grammar.
pub fn is_numeric_token(token: &str) -> bool {
    parse_number(token).is_some()
}
