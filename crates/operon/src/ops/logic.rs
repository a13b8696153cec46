//! Logical operators
//!
//! `AND` and `OR` require Boolean operands up front, so a non-Boolean
//! operand reports a type mismatch rather than an unsupported pair. Both
//! sides are always evaluated; this operator family does not
//! short-circuit.

use crate::construct::Construct;
use crate::error::Result;
use crate::transform::transformed;
use crate::value::Value;

use super::Operator;

/// Logical conjunction, token `AND`.
pub struct And;

impl Operator for And {
    fn token(&self) -> &'static str {
        "AND"
    }

    fn evaluate(&self, left: &dyn Construct, right: &dyn Construct) -> Result<Value> {
        let left: bool = transformed(left)?;
        let right: bool = transformed(right)?;
        Ok(Value::Bool(left && right))
    }
}

/// Logical disjunction, token `OR`.
pub struct Or;

impl Operator for Or {
    fn token(&self) -> &'static str {
        "OR"
    }

    fn evaluate(&self, left: &dyn Construct, right: &dyn Construct) -> Result<Value> {
        let left: bool = transformed(left)?;
        let right: bool = transformed(right)?;
        Ok(Value::Bool(left || right))
    }
}
