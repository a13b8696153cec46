//! The evaluable-construct capability
//!
//! Anything the host's tree layer can hand an operator: a node that can
//! reduce itself to a concrete [`Value`]. Operators borrow constructs
//! transiently for a single evaluation and retain nothing across calls.

use crate::error::Result;
use crate::value::Value;

/// Trait for anything that can be reduced to a concrete value.
///
/// This is the only surface operators see of the expression tree. Reducing
/// a non-literal node may recursively evaluate arbitrary sub-expressions;
/// from the operator's perspective that recursion is invisible.
pub trait Construct {
    /// Reduce this construct to a concrete value.
    fn reduce(&self) -> Result<Value>;
}

/// A value is a trivial construct: it reduces to itself.
impl Construct for Value {
    fn reduce(&self) -> Result<Value> {
        Ok(self.clone())
    }
}

impl<T: Construct + ?Sized> Construct for &T {
    fn reduce(&self) -> Result<Value> {
        (**self).reduce()
    }
}

impl<T: Construct + ?Sized> Construct for Box<T> {
    fn reduce(&self) -> Result<Value> {
        (**self).reduce()
    }
}
