//! Arithmetic operators
//!
//! Numbers use checked decimal arithmetic. A date/time takes a count of
//! days on the right of `+` and `-`, and subtracting two instants yields
//! the elapsed days between them.

use crate::construct::Construct;
use crate::error::{EvalError, Result};
use crate::value::{self, Value};

use super::{binary_operands, unsupported, Operator};

/// Addition, token `+`.
///
/// Adds two numbers, advances a date/time by a count of days, or
/// concatenates two text values.
pub struct Add;

impl Operator for Add {
    fn token(&self) -> &'static str {
        "+"
    }

    fn evaluate(&self, left: &dyn Construct, right: &dyn Construct) -> Result<Value> {
        let token = self.token();
        let (left, right) = binary_operands(left, right)?;
        match (&left, &right) {
            (Value::Number(a), Value::Number(b)) => a
                .checked_add(*b)
                .map(Value::Number)
                .ok_or(EvalError::NumericOverflow { token }),
            (Value::DateTime(d), Value::Number(n)) => {
                value::date_plus_days(*d, *n).map(Value::DateTime)
            }
            (Value::Text(a), Value::Text(b)) => Ok(Value::text(format!("{}{}", a, b))),
            _ => Err(unsupported(token, &left, &right)),
        }
    }
}

/// Subtraction, token `-`.
///
/// Subtracts one number from another, a count of days from a date/time,
/// or one instant from another (elapsed days, left minus right; the sign
/// reflects operand order).
pub struct Subtract;

impl Operator for Subtract {
    fn token(&self) -> &'static str {
        "-"
    }

    fn evaluate(&self, left: &dyn Construct, right: &dyn Construct) -> Result<Value> {
        let token = self.token();
        let (left, right) = binary_operands(left, right)?;
        match (&left, &right) {
            (Value::Number(a), Value::Number(b)) => a
                .checked_sub(*b)
                .map(Value::Number)
                .ok_or(EvalError::NumericOverflow { token }),
            (Value::DateTime(d), Value::Number(n)) => {
                value::date_minus_days(*d, *n).map(Value::DateTime)
            }
            (Value::DateTime(a), Value::DateTime(b)) => {
                Ok(Value::Number(value::date_difference_days(*a, *b)))
            }
            _ => Err(unsupported(token, &left, &right)),
        }
    }
}

/// Multiplication, token `*`.
pub struct Multiply;

impl Operator for Multiply {
    fn token(&self) -> &'static str {
        "*"
    }

    fn evaluate(&self, left: &dyn Construct, right: &dyn Construct) -> Result<Value> {
        let token = self.token();
        let (left, right) = binary_operands(left, right)?;
        match (&left, &right) {
            (Value::Number(a), Value::Number(b)) => a
                .checked_mul(*b)
                .map(Value::Number)
                .ok_or(EvalError::NumericOverflow { token }),
            _ => Err(unsupported(token, &left, &right)),
        }
    }
}

/// Division, token `/`.
///
/// A zero divisor fails before the dividend is inspected.
pub struct Divide;

impl Operator for Divide {
    fn token(&self) -> &'static str {
        "/"
    }

    fn evaluate(&self, left: &dyn Construct, right: &dyn Construct) -> Result<Value> {
        let token = self.token();
        let (left, right) = binary_operands(left, right)?;
        match (&left, &right) {
            (Value::Number(a), Value::Number(b)) => {
                if b.is_zero() {
                    return Err(EvalError::DivisionByZero);
                }
                a.checked_div(*b)
                    .map(Value::Number)
                    .ok_or(EvalError::NumericOverflow { token })
            }
            _ => Err(unsupported(token, &left, &right)),
        }
    }
}
