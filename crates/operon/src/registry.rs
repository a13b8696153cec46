//! Operator registry
//!
//! An explicit token-to-operator dispatch table, built once at
//! parser-setup time and shared read-only for the lifetime of the
//! interpreter.

use std::sync::Arc;

use indexmap::IndexMap;

use crate::error::RegistryError;
use crate::ops::{
    Add, And, Divide, EqualTo, GreaterThan, GreaterThanOrEqualTo, LessThan, LessThanOrEqualTo,
    Multiply, NotEqualTo, Operator, Or, Subtract,
};

/// Dispatch table mapping operator tokens to their implementations.
///
/// The parser looks a matched symbol up here to bind it to an operator.
/// Insertion order is preserved, so token listings are deterministic.
#[derive(Clone, Default)]
pub struct OperatorSet {
    operators: IndexMap<&'static str, Arc<dyn Operator>>,
}

impl OperatorSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// The full standard operator family.
    pub fn standard() -> Self {
        let mut set = Self::new();
        set.insert(Arc::new(EqualTo));
        set.insert(Arc::new(NotEqualTo));
        set.insert(Arc::new(LessThan));
        set.insert(Arc::new(LessThanOrEqualTo));
        set.insert(Arc::new(GreaterThan));
        set.insert(Arc::new(GreaterThanOrEqualTo));
        set.insert(Arc::new(Add));
        set.insert(Arc::new(Subtract));
        set.insert(Arc::new(Multiply));
        set.insert(Arc::new(Divide));
        set.insert(Arc::new(And));
        set.insert(Arc::new(Or));
        set
    }

    /// Register an operator under its token.
    ///
    /// Fails when another operator already claimed the token.
    pub fn register(
        &mut self,
        operator: Arc<dyn Operator>,
    ) -> std::result::Result<(), RegistryError> {
        if self.operators.contains_key(operator.token()) {
            return Err(RegistryError::DuplicateToken(operator.token().to_string()));
        }
        self.insert(operator);
        Ok(())
    }

    /// Look up an operator by its token.
    pub fn get(&self, token: &str) -> Option<&Arc<dyn Operator>> {
        self.operators.get(token)
    }

    /// Registered tokens, in registration order.
    pub fn tokens(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.operators.keys().copied()
    }

    /// Number of registered operators.
    pub fn len(&self) -> usize {
        self.operators.len()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }

    fn insert(&mut self, operator: Arc<dyn Operator>) {
        self.operators.insert(operator.token(), operator);
    }
}
