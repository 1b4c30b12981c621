//! Dynamically typed cell values.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::inference::{Number, parse_number};

/// A single cell value.
///
/// `Missing` is the one canonical missing-value marker. A `Float` holding NaN
/// is read as missing everywhere and never produced by coercion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    /// No value.
    #[default]
    Missing,
    /// Boolean value.
    Boolean(bool),
    /// Whole number.
    Integer(i64),
    /// Floating-point number.
    Float(f64),
    /// Text value.
    Text(String),
}

impl Cell {
    /// Create a text cell.
    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }

    /// Check whether this cell is missing (including a NaN float).
    pub fn is_missing(&self) -> bool {
        match self {
            Cell::Missing => true,
            Cell::Float(f) => f.is_nan(),
            _ => false,
        }
    }

    /// Interpret the cell as a number under the shared numeric grammar.
    ///
    /// Booleans and missing cells are not numbers.
    pub fn to_number(&self) -> Option<Number> {
        match self {
            Cell::Integer(i) => Some(Number::Integer(*i)),
            Cell::Float(f) if f.is_finite() => Some(Number::Float(*f)),
            Cell::Text(s) => parse_number(s),
            _ => None,
        }
    }

    /// Textual rendering of a non-missing cell, `None` for missing.
    pub fn render(&self) -> Option<String> {
        if self.is_missing() {
            return None;
        }
        Some(self.to_string())
    }

    /// Replace a NaN float with the canonical missing marker.
    pub fn normalized(self) -> Self {
        if self.is_missing() { Cell::Missing } else { self }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Missing => Ok(()),
            Cell::Boolean(b) => write!(f, "{}", b),
            Cell::Integer(i) => write!(f, "{}", i),
            Cell::Float(v) if v.is_nan() => Ok(()),
            Cell::Float(v) => write!(f, "{}", v),
            Cell::Text(s) => f.write_str(s),
        }
    }
}

impl From<Number> for Cell {
    fn from(number: Number) -> Self {
        match number {
            Number::Integer(i) => Cell::Integer(i),
            Number::Float(v) => Cell::Float(v),
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Cell::Integer(value)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Float(value).normalized()
    }
}

impl From<bool> for Cell {
    fn from(value: bool) -> Self {
        Cell::Boolean(value)
    }
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Cell::Missing)
    }
}
