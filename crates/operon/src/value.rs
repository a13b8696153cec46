//! Runtime value representation
//!
//! The closed set of concrete kinds that all evaluation resolves to.
//! Values are immutable once produced and cheap to clone. `DateTime`
//! carries no zone; its arithmetic unit is the day, honored to millisecond
//! resolution.

use std::fmt;
use std::sync::Arc;

use chrono::{Duration, NaiveDateTime};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{EvalError, Result};

const MILLIS_PER_DAY: i64 = 86_400_000;

/// Tag identifying the concrete kind of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Exact decimal number
    Number,
    /// `true` or `false`
    Boolean,
    /// Calendar date and time of day, no zone
    DateTime,
    /// Immutable text
    Text,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Number => "Number",
            Kind::Boolean => "Boolean",
            Kind::DateTime => "DateTime",
            Kind::Text => "Text",
        };
        write!(f, "{}", name)
    }
}

/// A concrete runtime value.
///
/// A value always carries exactly one kind; operators never observe
/// anything unresolved.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Exact decimal number
    Number(Decimal),
    /// Boolean: `true` or `false`
    Bool(bool),
    /// Date and time, millisecond resolution
    DateTime(NaiveDateTime),
    /// Heap-allocated immutable text
    Text(Arc<str>),
}

// ═══════════════════════════════════════════════════════════════════════
// Convenience Constructors, Predicates, Extractors
// ═══════════════════════════════════════════════════════════════════════

impl Value {
    /// Create a number value
    pub fn number(n: impl Into<Decimal>) -> Self {
        Value::Number(n.into())
    }

    /// Create a text value
    pub fn text(s: impl Into<Arc<str>>) -> Self {
        Value::Text(s.into())
    }

    /// The kind tag of this value
    pub fn kind(&self) -> Kind {
        match self {
            Value::Number(_) => Kind::Number,
            Value::Bool(_) => Kind::Boolean,
            Value::DateTime(_) => Kind::DateTime,
            Value::Text(_) => Kind::Text,
        }
    }

    /// Check if value is a number
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Check if value is boolean
    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Check if value is a date/time
    pub fn is_date_time(&self) -> bool {
        matches!(self, Value::DateTime(_))
    }

    /// Check if value is text
    pub fn is_text(&self) -> bool {
        matches!(self, Value::Text(_))
    }

    /// Extract the numeric payload
    pub fn as_number(&self) -> Option<Decimal> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Extract the boolean payload
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Extract the date/time payload
    pub fn as_date_time(&self) -> Option<NaiveDateTime> {
        match self {
            Value::DateTime(d) => Some(*d),
            _ => None,
        }
    }

    /// Extract the text payload as a string slice
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<Decimal> for Value {
    fn from(n: Decimal) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(Decimal::from(n))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(d: NaiveDateTime) -> Self {
        Value::DateTime(d)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(Arc::from(s))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(Arc::from(s))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Bool(b) => write!(f, "{}", b),
            Value::DateTime(d) => write!(f, "{}", d.format("%Y-%m-%d %H:%M:%S")),
            Value::Text(s) => write!(f, "{}", s), // No quotes for Display
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Date Arithmetic
// ═══════════════════════════════════════════════════════════════════════

/// Advance an instant by a (possibly fractional) count of days.
pub fn date_plus_days(instant: NaiveDateTime, days: Decimal) -> Result<NaiveDateTime> {
    instant
        .checked_add_signed(Duration::milliseconds(days_to_millis(days)?))
        .ok_or(EvalError::DateOutOfRange)
}

/// Move an instant back by a (possibly fractional) count of days.
pub fn date_minus_days(instant: NaiveDateTime, days: Decimal) -> Result<NaiveDateTime> {
    instant
        .checked_sub_signed(Duration::milliseconds(days_to_millis(days)?))
        .ok_or(EvalError::DateOutOfRange)
}

/// Elapsed days between two instants, left minus right.
///
/// The result is fractional when the instants are not a whole number of
/// days apart, and its sign reflects operand order.
pub fn date_difference_days(left: NaiveDateTime, right: NaiveDateTime) -> Decimal {
    let millis = left.signed_duration_since(right).num_milliseconds();
    Decimal::from(millis) / Decimal::from(MILLIS_PER_DAY)
}

/// Convert a day count to whole milliseconds, rounding the half-millisecond
/// away from zero.
fn days_to_millis(days: Decimal) -> Result<i64> {
    days.checked_mul(Decimal::from(MILLIS_PER_DAY))
        .map(|m| m.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|m| m.to_i64())
        .ok_or(EvalError::DateOutOfRange)
}
