//! Binary operator evaluation
//!
//! Every operator follows the same shape: a unique token the parser
//! dispatches on, an ordered list of accepted kind combinations checked
//! first-match-wins, and a terminal unsupported-operands failure. Adding
//! an operator never touches the transformation step or any other
//! operator.

pub mod arithmetic;
pub mod comparison;
pub mod equality;
pub mod logic;

use crate::construct::Construct;
use crate::error::{EvalError, Result};
use crate::value::Value;

pub use arithmetic::{Add, Divide, Multiply, Subtract};
pub use comparison::{GreaterThan, GreaterThanOrEqualTo, LessThan, LessThanOrEqualTo};
pub use equality::{EqualTo, NotEqualTo};
pub use logic::{And, Or};

/// Trait for binary operators over evaluable constructs.
///
/// Implementations are stateless unit types: one instance, typically
/// created at parser-setup time, serves any number of evaluations,
/// concurrently if needed. Operand normalization always reduces the left
/// construct first, then the right; both operands are reduced even when
/// one alone would decide the result.
pub trait Operator: Send + Sync {
    /// The textual symbol the parser matches to select this operator.
    fn token(&self) -> &'static str;

    /// Evaluate the operator over two operand constructs.
    fn evaluate(&self, left: &dyn Construct, right: &dyn Construct) -> Result<Value>;
}

/// Reduce both operands to concrete values, left first.
pub(crate) fn binary_operands(
    left: &dyn Construct,
    right: &dyn Construct,
) -> Result<(Value, Value)> {
    let left = left.reduce()?;
    let right = right.reduce()?;
    Ok((left, right))
}

/// Terminal failure for a kind pair no rule matched.
pub(crate) fn unsupported(token: &'static str, left: &Value, right: &Value) -> EvalError {
    EvalError::UnsupportedOperands {
        token,
        left: left.kind(),
        right: right.kind(),
    }
}
