use std::sync::Arc;

use operon::{EqualTo, Operator, OperatorSet, RegistryError, Value};
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

#[test]
fn test_standard_family_tokens() {
    let set = OperatorSet::standard();
    let tokens: Vec<&str> = set.tokens().collect();
    assert_eq!(
        tokens,
        vec!["=", "<>", "<", "<=", ">", ">=", "+", "-", "*", "/", "AND", "OR"]
    );
}

#[test]
fn test_lookup_binds_token_to_operator() {
    let set = OperatorSet::standard();
    let subtract = set.get("-").expect("subtract is registered");
    assert_eq!(subtract.token(), "-");

    let result = subtract
        .evaluate(&Value::number(dec!(10)), &Value::number(dec!(4)))
        .unwrap();
    assert_eq!(result, Value::number(dec!(6)));
}

#[test]
fn test_lookup_miss() {
    assert!(OperatorSet::standard().get("**").is_none());
}

#[test]
fn test_duplicate_token_rejected() {
    let mut set = OperatorSet::standard();
    let before = set.len();

    let result = set.register(Arc::new(EqualTo));
    assert_eq!(result, Err(RegistryError::DuplicateToken("=".to_string())));
    assert_eq!(set.len(), before);
}

#[test]
fn test_register_into_empty_set() {
    let mut set = OperatorSet::new();
    assert!(set.is_empty());

    set.register(Arc::new(EqualTo)).unwrap();
    assert_eq!(set.len(), 1);
    assert!(set.get("=").is_some());
}

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_operator_set_shareable_across_threads() {
    assert_send_sync::<OperatorSet>();
}
