//! Equality operators
//!
//! Compare two numeric, boolean or date/time values.

use crate::construct::Construct;
use crate::error::Result;
use crate::value::Value;

use super::{binary_operands, unsupported, Operator};

/// Whether two values of a comparable kind are equal.
///
/// Equality is symmetric and total within each accepted combination; any
/// finer-grained semantics belong to the kind itself.
fn equality(token: &'static str, left: &Value, right: &Value) -> Result<bool> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok(a == b),
        (Value::Bool(a), Value::Bool(b)) => Ok(a == b),
        (Value::DateTime(a), Value::DateTime(b)) => Ok(a == b),
        _ => Err(unsupported(token, left, right)),
    }
}

/// Equality comparison, token `=`.
pub struct EqualTo;

impl Operator for EqualTo {
    fn token(&self) -> &'static str {
        "="
    }

    fn evaluate(&self, left: &dyn Construct, right: &dyn Construct) -> Result<Value> {
        let (left, right) = binary_operands(left, right)?;
        equality(self.token(), &left, &right).map(Value::Bool)
    }
}

/// Inequality comparison, token `<>`.
pub struct NotEqualTo;

impl Operator for NotEqualTo {
    fn token(&self) -> &'static str {
        "<>"
    }

    fn evaluate(&self, left: &dyn Construct, right: &dyn Construct) -> Result<Value> {
        let (left, right) = binary_operands(left, right)?;
        equality(self.token(), &left, &right).map(|eq| Value::Bool(!eq))
    }
}
