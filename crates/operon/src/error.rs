//! Error types for Operon evaluation

use thiserror::Error;

use crate::value::Kind;

/// Failures surfaced while evaluating an operator.
///
/// Every variant is terminal for the evaluation call that produced it: the
/// core never retries or substitutes defaults, and failures raised while
/// reducing an operand pass through the operator layer unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// An operand reduced to a value of the wrong kind for a conversion
    /// the transformation step was explicitly asked for
    #[error("type mismatch: expected {expected}, got {got}")]
    TypeMismatch {
        /// Kind the transformation step was asked to produce
        expected: Kind,
        /// Kind the operand actually reduced to
        got: Kind,
    },

    /// Both operands reduced to concrete values, but the operator has no
    /// rule for that pair of kinds
    #[error("`{token}` operator does not support operands of kind {left} and {right}")]
    UnsupportedOperands {
        /// Token of the operator that rejected the pair
        token: &'static str,
        /// Kind of the left operand
        left: Kind,
        /// Kind of the right operand
        right: Kind,
    },

    /// Division with a zero divisor
    #[error("division by zero")]
    DivisionByZero,

    /// Numeric arithmetic exceeded the representable range
    #[error("numeric overflow in `{token}`")]
    NumericOverflow {
        /// Token of the operator whose arithmetic overflowed
        token: &'static str,
    },

    /// Date/time arithmetic produced an instant outside the representable range
    #[error("date/time arithmetic out of range")]
    DateOutOfRange,
}

/// Failures while wiring operators into an [`OperatorSet`](crate::OperatorSet).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Two operators claimed the same token; tokens are the parser's
    /// dispatch key and must stay unique across the family
    #[error("operator token `{0}` is already registered")]
    DuplicateToken(String),
}

/// Result type alias for Operon evaluation
pub type Result<T> = std::result::Result<T, EvalError>;
