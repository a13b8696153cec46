use chrono::{NaiveDate, NaiveDateTime};
use operon::value::{date_difference_days, date_minus_days, date_plus_days};
use operon::{Kind, Value};
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

fn instant(y: i32, m: u32, d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

#[test]
fn test_value_kinds() {
    assert_eq!(Value::number(dec!(1)).kind(), Kind::Number);
    assert_eq!(Value::Bool(true).kind(), Kind::Boolean);
    assert_eq!(Value::DateTime(instant(2024, 1, 1)).kind(), Kind::DateTime);
    assert_eq!(Value::text("hi").kind(), Kind::Text);
}

#[test]
fn test_kind_display() {
    assert_eq!(Kind::Number.to_string(), "Number");
    assert_eq!(Kind::Boolean.to_string(), "Boolean");
    assert_eq!(Kind::DateTime.to_string(), "DateTime");
    assert_eq!(Kind::Text.to_string(), "Text");
}

#[test]
fn test_value_display() {
    assert_eq!(Value::number(dec!(6)).to_string(), "6");
    assert_eq!(Value::number(dec!(2.50)).to_string(), "2.50");
    assert_eq!(Value::Bool(true).to_string(), "true");
    assert_eq!(
        Value::DateTime(instant(2024, 1, 7)).to_string(),
        "2024-01-07 00:00:00"
    );
    // No quotes for Display
    assert_eq!(Value::text("hello").to_string(), "hello");
}

#[test]
fn test_from_conversions() {
    assert_eq!(Value::from(5i64), Value::number(dec!(5)));
    assert_eq!(Value::from(true), Value::Bool(true));
    assert_eq!(
        Value::from(instant(2024, 1, 1)),
        Value::DateTime(instant(2024, 1, 1))
    );
    assert_eq!(Value::from("hi"), Value::text("hi"));
    assert_eq!(Value::from(String::from("hi")), Value::text("hi"));
}

#[test]
fn test_extractors() {
    assert_eq!(Value::number(dec!(5)).as_number(), Some(dec!(5)));
    assert_eq!(Value::number(dec!(5)).as_bool(), None);
    assert_eq!(Value::Bool(false).as_bool(), Some(false));
    assert_eq!(
        Value::DateTime(instant(2024, 1, 1)).as_date_time(),
        Some(instant(2024, 1, 1))
    );
    assert_eq!(Value::text("hi").as_text(), Some("hi"));
    assert_eq!(Value::text("hi").as_number(), None);
}

#[test]
fn test_predicates() {
    assert!(Value::number(dec!(1)).is_number());
    assert!(Value::Bool(true).is_bool());
    assert!(Value::DateTime(instant(2024, 1, 1)).is_date_time());
    assert!(Value::text("hi").is_text());
    assert!(!Value::text("hi").is_number());
}

#[test]
fn test_date_plus_and_minus_whole_days() {
    assert_eq!(
        date_plus_days(instant(2024, 1, 7), dec!(3)).unwrap(),
        instant(2024, 1, 10)
    );
    assert_eq!(
        date_minus_days(instant(2024, 1, 10), dec!(3)).unwrap(),
        instant(2024, 1, 7)
    );
}

#[test]
fn test_date_minus_negative_days_advances() {
    assert_eq!(
        date_minus_days(instant(2024, 1, 7), dec!(-3)).unwrap(),
        instant(2024, 1, 10)
    );
}

#[test]
fn test_date_difference_sign_reflects_order() {
    assert_eq!(
        date_difference_days(instant(2024, 1, 10), instant(2024, 1, 1)),
        dec!(9)
    );
    assert_eq!(
        date_difference_days(instant(2024, 1, 1), instant(2024, 1, 10)),
        dec!(-9)
    );
}
