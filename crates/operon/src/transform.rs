//! The transformation step
//!
//! Converts a generic construct into a value of a requested kind, reducing
//! the construct first when it is not already a concrete value. Every
//! operator funnels its operands through this step, so "operand is an
//! unevaluated sub-expression" and "operand is already a value" are one
//! code path.

use std::sync::Arc;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use crate::construct::Construct;
use crate::error::{EvalError, Result};
use crate::value::{Kind, Value};

/// Conversion target for the transformation step.
///
/// Implemented by each concrete kind's payload type. A failed conversion
/// hands the value back so the caller can name the observed kind.
pub trait FromValue: Sized {
    /// The kind this conversion requires, named in mismatch failures.
    const EXPECTED: Kind;

    /// Convert from a reduced value.
    fn from_value(value: Value) -> std::result::Result<Self, Value>;
}

impl FromValue for Decimal {
    const EXPECTED: Kind = Kind::Number;

    fn from_value(value: Value) -> std::result::Result<Self, Value> {
        match value {
            Value::Number(n) => Ok(n),
            other => Err(other),
        }
    }
}

impl FromValue for bool {
    const EXPECTED: Kind = Kind::Boolean;

    fn from_value(value: Value) -> std::result::Result<Self, Value> {
        match value {
            Value::Bool(b) => Ok(b),
            other => Err(other),
        }
    }
}

impl FromValue for NaiveDateTime {
    const EXPECTED: Kind = Kind::DateTime;

    fn from_value(value: Value) -> std::result::Result<Self, Value> {
        match value {
            Value::DateTime(d) => Ok(d),
            other => Err(other),
        }
    }
}

impl FromValue for Arc<str> {
    const EXPECTED: Kind = Kind::Text;

    fn from_value(value: Value) -> std::result::Result<Self, Value> {
        match value {
            Value::Text(s) => Ok(s),
            other => Err(other),
        }
    }
}

/// Reduce a construct and require a specific kind of it.
///
/// Fails with [`EvalError::TypeMismatch`] when the reduced value is not of
/// the requested kind; failures raised by the reduction itself propagate
/// unchanged.
pub fn transformed<T: FromValue>(construct: &dyn Construct) -> Result<T> {
    let value = construct.reduce()?;
    T::from_value(value).map_err(|value| EvalError::TypeMismatch {
        expected: T::EXPECTED,
        got: value.kind(),
    })
}
