//! Relational comparison operators
//!
//! Numbers compare numerically, date/time values by instant. No other
//! kind combination is ordered.

use crate::construct::Construct;
use crate::error::Result;
use crate::value::Value;

use super::{binary_operands, unsupported, Operator};

macro_rules! comparison_operator {
    ($(#[$meta:meta])* $name:ident, $token:literal, $op:tt) => {
        $(#[$meta])*
        pub struct $name;

        impl Operator for $name {
            fn token(&self) -> &'static str {
                $token
            }

            fn evaluate(&self, left: &dyn Construct, right: &dyn Construct) -> Result<Value> {
                let (left, right) = binary_operands(left, right)?;
                match (&left, &right) {
                    (Value::Number(a), Value::Number(b)) => Ok(Value::Bool(a $op b)),
                    (Value::DateTime(a), Value::DateTime(b)) => Ok(Value::Bool(a $op b)),
                    _ => Err(unsupported($token, &left, &right)),
                }
            }
        }
    };
}

comparison_operator!(
    /// Strictly-less-than comparison, token `<`.
    LessThan,
    "<",
    <
);

comparison_operator!(
    /// Less-than-or-equal comparison, token `<=`.
    LessThanOrEqualTo,
    "<=",
    <=
);

comparison_operator!(
    /// Strictly-greater-than comparison, token `>`.
    GreaterThan,
    ">",
    >
);

comparison_operator!(
    /// Greater-than-or-equal comparison, token `>=`.
    GreaterThanOrEqualTo,
    ">=",
    >=
);
