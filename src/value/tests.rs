#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use std::cmp::Ordering;

use pretty_assertions::assert_eq;

use super::*;

#[test]
fn falsy_values_are_empty() {
    for value in [
        Value::Null,
        Value::Bool(false),
        Value::Int(0),
        Value::Float(0.0),
        Value::from(""),
        Value::from("0"),
        Value::Array(Arrayy::new()),
    ] {
        assert!(value.is_empty(), "{value:?} should be empty");
    }
}

#[test]
fn truthy_values_are_not_empty() {
    for value in [
        Value::Bool(true),
        Value::Int(-1),
        Value::Float(0.5),
        Value::from("x"),
        Value::from("0.0"),
        Value::from(vec![0]),
        Value::Function(NativeFn::new(|_| Value::Null)),
    ] {
        assert!(value.is_truthy(), "{value:?} should be truthy");
    }
}

#[test]
fn numeric_string_keys_normalize_to_ints() {
    assert_eq!(Key::from("7"), Key::Int(7));
    assert_eq!(Key::from("-3"), Key::Int(-3));
    assert_eq!(Key::from("07"), Key::Str("07".to_string()));
    assert_eq!(Key::from("a"), Key::Str("a".to_string()));
}

#[test]
fn key_from_value_rejects_arrays_and_functions() {
    assert_eq!(Key::from_value(&Value::Bool(true)), Some(Key::Int(1)));
    assert_eq!(Key::from_value(&Value::Float(2.9)), Some(Key::Int(2)));
    assert_eq!(Key::from_value(&Value::from(vec![1])), None);
    assert_eq!(
        Key::from_value(&Value::Function(NativeFn::new(|_| Value::Null))),
        None
    );
}

#[test]
fn to_int_coercion() {
    assert_eq!(Value::from("12abc").to_int(), 12);
    assert_eq!(Value::from("  -4").to_int(), -4);
    assert_eq!(Value::from("abc").to_int(), 0);
    assert_eq!(Value::Float(3.99).to_int(), 3);
    assert_eq!(Value::Float(f64::NAN).to_int(), 0);
    assert_eq!(Value::Bool(true).to_int(), 1);
    assert_eq!(Value::Null.to_int(), 0);
}

#[test]
fn stringify_scalars() {
    assert_eq!(Value::Bool(true).stringify(), "1");
    assert_eq!(Value::Bool(false).stringify(), "");
    assert_eq!(Value::Float(2.0).stringify(), "2");
    assert_eq!(Value::Float(2.5).stringify(), "2.5");
    assert_eq!(Value::Null.stringify(), "");
}

#[test]
fn loose_equality_crosses_numeric_kinds() {
    assert!(Value::equals_loose(&Value::Int(1), &Value::Float(1.0)));
    assert!(Value::equals_loose(&Value::Int(1), &Value::from("1")));
    assert!(Value::equals_loose(&Value::from("1.0"), &Value::from("1")));
    assert!(Value::equals_loose(&Value::Null, &Value::Bool(false)));
    assert!(Value::equals_loose(&Value::Null, &Value::from("")));
    assert!(!Value::equals_loose(&Value::from("abc"), &Value::Int(0)));
    assert!(!Value::equals_loose(&Value::Null, &Value::from("0")));
}

#[test]
fn strict_equality_requires_same_kind() {
    assert_ne!(Value::Int(1), Value::Float(1.0));
    assert_ne!(Value::Int(1), Value::from("1"));
    assert_eq!(Value::from(vec![1, 2]), Value::from(vec![1, 2]));
    assert_ne!(Value::from(vec![1, 2]), Value::from(vec![2, 1]));
}

#[test]
fn functions_compare_by_identity() {
    let f = NativeFn::new(|_| Value::Null);
    let g = NativeFn::new(|_| Value::Null);
    assert_eq!(Value::Function(f.clone()), Value::Function(f.clone()));
    assert_ne!(Value::Function(f), Value::Function(g));
}

#[test]
fn compare_orders_numbers_numerically() {
    assert_eq!(Value::compare(&Value::from("10"), &Value::from("9")), Ordering::Greater);
    assert_eq!(Value::compare(&Value::Int(2), &Value::Float(2.5)), Ordering::Less);
    assert_eq!(Value::compare(&Value::from("b"), &Value::from("a")), Ordering::Greater);
    assert_eq!(Value::compare(&Value::Null, &Value::Int(0)), Ordering::Less);
}

#[test]
fn from_json_keeps_object_order() {
    let json = serde_json::json!({ "b": 1, "a": [true, null, 1.5] });
    let Value::Array(array) = Value::from_json(json) else {
        panic!("expected an array");
    };
    let keys: Vec<Key> = array.keys().cloned().collect();
    assert_eq!(keys, vec![Key::from("b"), Key::from("a")]);
    assert_eq!(
        array.get(&Key::from("a")),
        Some(&Value::from(vec![Value::Bool(true), Value::Null, Value::Float(1.5)]))
    );
}
