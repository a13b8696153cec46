//! Property-based tests using QuickCheck

use chrono::{Duration, NaiveDate, NaiveDateTime};
use operon::{EqualTo, Operator, Subtract, Value};
use quickcheck::quickcheck;
use rust_decimal::Decimal;

fn num(n: i64) -> Value {
    Value::from(n)
}

fn instant(offset_secs: i32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
        + Duration::seconds(offset_secs as i64)
}

quickcheck! {
    fn prop_number_equality_reflexive(a: i64) -> bool {
        EqualTo.evaluate(&num(a), &num(a)).unwrap() == Value::Bool(true)
    }

    fn prop_number_equality_agrees_with_integers(a: i64, b: i64) -> bool {
        EqualTo.evaluate(&num(a), &num(b)).unwrap() == Value::Bool(a == b)
    }

    fn prop_subtract_antisymmetric(a: i64, b: i64) -> bool {
        let ab = Subtract.evaluate(&num(a), &num(b)).unwrap().as_number().unwrap();
        let ba = Subtract.evaluate(&num(b), &num(a)).unwrap().as_number().unwrap();
        ab == -ba
    }

    fn prop_date_difference_antisymmetric(a: i32, b: i32) -> bool {
        let d1 = Value::DateTime(instant(a));
        let d2 = Value::DateTime(instant(b));
        let fwd = Subtract.evaluate(&d1, &d2).unwrap().as_number().unwrap();
        let rev = Subtract.evaluate(&d2, &d1).unwrap().as_number().unwrap();
        fwd == -rev
    }

    fn prop_date_minus_days_round_trips(offset_secs: i32, hundredths: i16) -> bool {
        // Day counts at hundredth-of-a-day granularity are exact in
        // milliseconds, so the shift must invert exactly.
        let days = Decimal::new(hundredths as i64, 2);
        let d = Value::DateTime(instant(offset_secs));
        let shifted = Subtract.evaluate(&d, &Value::Number(days)).unwrap();
        let back = Subtract.evaluate(&shifted, &Value::Number(-days)).unwrap();
        back == d
    }
}
