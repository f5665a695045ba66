#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;
use rustc_hash::FxHashSet;

use super::*;
use crate::arrayy::MAX_ARRAY_SIZE;
use crate::value::NativeFn;

fn list<T: Into<Value> + Clone>(values: &[T]) -> Arrayy {
    values.iter().cloned().map(Into::into).collect()
}

fn pairs(entries: &[(&str, i64)]) -> Arrayy {
    entries
        .iter()
        .map(|(k, v)| (Key::from(*k), Value::Int(*v)))
        .collect()
}

fn call(array: &Arrayy, name: &str, args: Vec<Value>) -> Value {
    array.invoke(name, args).unwrap()
}

fn call_array(array: &Arrayy, name: &str, args: Vec<Value>) -> Arrayy {
    call(array, name, args).into_array().unwrap()
}

fn double() -> Value {
    Value::Function(NativeFn::new(|args| {
        Value::Int(args.first().map_or(0, Value::to_int) * 2)
    }))
}

fn is_even() -> Value {
    Value::Function(NativeFn::new(|args| {
        Value::Bool(args.first().map_or(0, Value::to_int) % 2 == 0)
    }))
}

#[test]
fn method_names_are_unique() {
    let mut seen = FxHashSet::default();
    for name in method_names() {
        assert!(seen.insert(name), "duplicate method {name}");
    }
}

#[test]
fn required_never_exceeds_params() {
    for def in METHODS {
        assert!(def.required <= def.params, "{def:?}");
    }
}

#[test]
fn lookup_is_exact() {
    assert_eq!(lookup("count").map(|d| d.params), Some(0));
    assert!(lookup("Count").is_none());
}

// Element access

#[test]
fn append_and_prepend() {
    let array = list(&[1, 2]);
    assert_eq!(call_array(&array, "append", vec![3.into()]), list(&[1, 2, 3]));
    assert_eq!(call_array(&array, "prepend", vec![0.into()]), list(&[0, 1, 2]));

    let keyed = call_array(&array, "append", vec![9.into(), "k".into()]);
    assert_eq!(keyed.get(&Key::from("k")), Some(&Value::Int(9)));
}

#[test]
fn prepend_with_key_moves_it_first() {
    let array = pairs(&[("a", 1), ("b", 2)]);
    let out = call_array(&array, "prepend", vec![5.into(), "b".into()]);
    assert_eq!(out, pairs(&[("b", 5), ("a", 1)]));
}

#[test]
fn get_with_fallback_and_path() {
    let array = Arrayy::from_json(r#"{"user":{"name":"sam"},"n":1}"#).unwrap();
    assert_eq!(call(&array, "get", vec!["n".into()]), Value::Int(1));
    assert_eq!(call(&array, "get", vec!["user.name".into()]), Value::from("sam"));
    assert_eq!(call(&array, "get", vec!["missing".into(), "dflt".into()]), Value::from("dflt"));
    assert_eq!(call(&array, "get", vec!["user.age".into()]), Value::Null);
    assert_eq!(call(&array, "has", vec!["user.name".into()]), Value::Bool(true));
    assert_eq!(call(&array, "has", vec!["nope".into()]), Value::Bool(false));
}

#[test]
fn set_and_remove() {
    let array = pairs(&[("a", 1)]);
    let set = call_array(&array, "set", vec!["b".into(), 2.into()]);
    assert_eq!(set, pairs(&[("a", 1), ("b", 2)]));
    assert_eq!(call_array(&set, "remove", vec!["a".into()]), pairs(&[("b", 2)]));
}

#[test]
fn first_and_last() {
    let array = list(&["x", "y", "z"]);
    assert_eq!(call(&array, "first", vec![]), Value::from("x"));
    assert_eq!(call(&array, "last", vec![]), Value::from("z"));
    assert_eq!(call(&Arrayy::new(), "first", vec![]), Value::Null);
}

#[test]
fn firsts_and_lasts() {
    let array = list(&[1, 2, 3, 4]);
    assert_eq!(call_array(&array, "firstsImmutable", vec![]), list(&[1]));
    assert_eq!(call_array(&array, "firstsImmutable", vec![2.into()]), list(&[1, 2]));
    assert_eq!(call_array(&array, "firstsImmutable", vec![(-1).into()]), list(&[1, 2, 3]));
    assert_eq!(call_array(&array, "lastsImmutable", vec![]), list(&[4]));
    assert_eq!(call_array(&array, "lastsImmutable", vec![3.into()]), list(&[2, 3, 4]));
}

#[test]
fn random_value_comes_from_collection() {
    let array = list(&[1, 2, 3]);
    let picked = call(&array, "randomValue", vec![]);
    assert!(array.values().any(|v| *v == picked));
    assert_eq!(call(&Arrayy::new(), "randomValue", vec![]), Value::Null);
}

#[test]
fn random_values_are_distinct() {
    let array = list(&[1, 2, 3, 4, 5]);
    let picked = call_array(&array, "randomValues", vec![3.into()]);
    assert_eq!(picked.len(), 3);
    let unique = call_array(&picked, "unique", vec![]);
    assert_eq!(unique.len(), 3);
}

#[test]
fn random_values_rejects_too_many() {
    let err = list(&[1]).invoke("randomValues", vec![2.into()]).unwrap_err();
    assert_eq!(err.code(), "E_ARGUMENT");
}

// Search

#[test]
fn contains_strict_and_loose() {
    let array = list(&[1, 2]);
    assert_eq!(call(&array, "contains", vec!["1".into()]), Value::Bool(false));
    assert_eq!(call(&array, "contains", vec!["1".into(), false.into()]), Value::Bool(true));
    assert_eq!(call(&array, "contains", vec![2.into()]), Value::Bool(true));
}

#[test]
fn index_of_returns_key_or_false() {
    let array = pairs(&[("a", 1), ("b", 2)]);
    assert_eq!(call(&array, "indexOf", vec![2.into()]), Value::from("b"));
    assert_eq!(call(&array, "indexOf", vec![3.into()]), Value::Bool(false));
}

#[test]
fn find_returns_first_match() {
    let array = list(&[1, 3, 4, 6]);
    assert_eq!(call(&array, "find", vec![is_even()]), Value::Int(4));
    assert_eq!(call(&list(&[1, 3]), "find", vec![is_even()]), Value::Bool(false));
}

// Shape

#[test]
fn count_keys_values() {
    let array = pairs(&[("a", 1), ("b", 2)]);
    assert_eq!(call(&array, "count", vec![]), Value::Int(2));
    assert_eq!(call(&array, "isEmpty", vec![]), Value::Bool(false));
    assert_eq!(call_array(&array, "keys", vec![]), list(&["a", "b"]));
    assert_eq!(call_array(&array, "values", vec![]), list(&[1, 2]));
}

// Callbacks

#[test]
fn map_preserves_keys() {
    let array = pairs(&[("a", 1), ("b", 2)]);
    assert_eq!(call_array(&array, "map", vec![double()]), pairs(&[("a", 2), ("b", 4)]));
}

#[test]
fn map_with_key_passes_key_second() {
    let key_of = Value::Function(NativeFn::new(|args| args.get(1).cloned().unwrap_or_default()));
    let array = pairs(&[("a", 1)]);
    let out = call_array(&array, "map", vec![key_of, true.into()]);
    assert_eq!(out.get(&Key::from("a")), Some(&Value::from("a")));
}

#[test]
fn filter_with_and_without_callback() {
    let array = list(&[1, 2, 3, 4]);
    let evens = call_array(&array, "filter", vec![is_even()]);
    assert_eq!(evens.keys().cloned().collect::<Vec<_>>(), vec![Key::Int(1), Key::Int(3)]);

    let mixed = list(&[Value::Int(0), Value::from("a"), Value::Null, Value::from("0")]);
    let cleaned = call_array(&mixed, "filter", vec![]);
    assert_eq!(cleaned.to_vec(), vec![Value::from("a")]);
    assert_eq!(call_array(&mixed, "clean", vec![]), cleaned);
}

#[test]
fn each_stores_results() {
    let array = list(&[1, 2]);
    assert_eq!(call_array(&array, "each", vec![double()]), list(&[2, 4]));
}

#[test]
fn reduce_folds_with_initial() {
    let add = Value::Function(NativeFn::new(|args| {
        Value::Int(args.iter().map(Value::to_int).sum())
    }));
    let array = list(&[1, 2, 3]);
    assert_eq!(call(&array, "reduce", vec![add.clone(), 10.into()]), Value::Int(16));
    assert_eq!(call(&Arrayy::new(), "reduce", vec![add]), Value::Array(Arrayy::new()));
}

#[test]
fn callback_argument_type_is_checked() {
    let err = list(&[1]).invoke("map", vec![1.into()]).unwrap_err();
    assert_eq!(err.to_string(), "map() expected callable, got int");
}

// Reordering

#[test]
fn reverse_preserves_keys() {
    let out = call_array(&list(&[1, 2]), "reverse", vec![]);
    assert_eq!(out.keys().cloned().collect::<Vec<_>>(), vec![Key::Int(1), Key::Int(0)]);
}

#[test]
fn sort_directions() {
    let array = list(&[3, 1, 2]);
    assert_eq!(call_array(&array, "sort", vec![]), list(&[1, 2, 3]));
    assert_eq!(call_array(&array, "sort", vec!["desc".into()]), list(&[3, 2, 1]));

    let kept = call_array(&array, "sort", vec!["ASC".into(), true.into()]);
    assert_eq!(
        kept.keys().cloned().collect::<Vec<_>>(),
        vec![Key::Int(1), Key::Int(2), Key::Int(0)]
    );
}

#[test]
fn shuffle_keeps_values() {
    let array = list(&[1, 2, 3, 4]);
    let shuffled = call_array(&array, "shuffle", vec![]);
    assert_eq!(call_array(&shuffled, "sort", vec![]), array);
}

// Restructuring

#[test]
fn unique_keeps_first_occurrence() {
    let out = call_array(&list(&[1, 2, 1, 3, 2]), "unique", vec![]);
    assert_eq!(out.to_vec(), list(&[1, 2, 3]).to_vec());
    assert_eq!(
        out.keys().cloned().collect::<Vec<_>>(),
        vec![Key::Int(0), Key::Int(1), Key::Int(3)]
    );
}

#[test]
fn flip_swaps_keys_and_values() {
    let out = call_array(&list(&["a", "b"]), "flip", vec![]);
    assert_eq!(out, pairs(&[("a", 0), ("b", 1)]));
}

#[test]
fn chunk_splits_values() {
    let out = call_array(&list(&[1, 2, 3]), "chunk", vec![2.into()]);
    assert_eq!(out.to_vec(), vec![Value::from(vec![1, 2]), Value::from(vec![3])]);

    let err = list(&[1]).invoke("chunk", vec![0.into()]).unwrap_err();
    assert_eq!(err.code(), "E_ARGUMENT");
}

#[test]
fn slice_renumbers_unless_preserving() {
    let array = list(&[1, 2, 3, 4]);
    assert_eq!(call_array(&array, "slice", vec![1.into(), 2.into()]), list(&[2, 3]));
    assert_eq!(call_array(&array, "slice", vec![(-2).into()]), list(&[3, 4]));

    let kept = call_array(&array, "slice", vec![2.into(), Value::Null, true.into()]);
    assert_eq!(kept.keys().cloned().collect::<Vec<_>>(), vec![Key::Int(2), Key::Int(3)]);
}

#[test]
fn pad_front_and_back() {
    let array = list(&[1]);
    assert_eq!(call_array(&array, "pad", vec![3.into(), 0.into()]), list(&[1, 0, 0]));
    assert_eq!(call_array(&array, "pad", vec![(-3).into(), 0.into()]), list(&[0, 0, 1]));
    assert_eq!(call_array(&array, "pad", vec![1.into(), 0.into()]), array);
}

#[test]
fn pad_rejects_oversized_size() {
    let array = list(&[1]);
    let err = array.invoke("pad", vec![Value::Int(i64::MIN), 0.into()]).unwrap_err();
    assert_eq!(err.code(), "E_ARGUMENT");

    let too_big = i64::try_from(MAX_ARRAY_SIZE).unwrap() + 1;
    let err = array.invoke("pad", vec![too_big.into(), 0.into()]).unwrap_err();
    assert_eq!(err.code(), "E_ARGUMENT");
}

#[test]
fn replace_values_in_strings_only() {
    let array = list(&[Value::from("foo bar"), Value::Int(5)]);
    let out = call_array(&array, "replaceValues", vec!["foo".into(), "baz".into()]);
    assert_eq!(out, list(&[Value::from("baz bar"), Value::Int(5)]));
}

// Set operations

#[test]
fn merge_new_index_and_keep_index() {
    let left = list(&[1, 2]);
    let right = list(&[9]);
    assert_eq!(
        call_array(&left, "mergeAppendNewIndex", vec![right.clone().into()]),
        list(&[1, 2, 9])
    );
    assert_eq!(
        call_array(&left, "mergeAppendKeepIndex", vec![right.into()]),
        list(&[9, 2])
    );
}

#[test]
fn merge_requires_array() {
    let err = list(&[1]).invoke("mergeAppendNewIndex", vec![1.into()]).unwrap_err();
    assert_eq!(err.code(), "E_TYPE");
}

#[test]
fn diff_and_intersection() {
    let array = list(&[1, 2, 3]);
    let other: Value = list(&[2]).into();
    assert_eq!(call_array(&array, "diff", vec![other.clone()]).to_vec(), list(&[1, 3]).to_vec());
    assert_eq!(call_array(&array, "intersection", vec![other.clone()]), list(&[2]));

    let kept = call_array(&array, "intersection", vec![other, true.into()]);
    assert_eq!(kept.keys().cloned().collect::<Vec<_>>(), vec![Key::Int(1)]);
}

// Aggregates

#[test]
fn max_min_sum() {
    let array = list(&[3, 7, 1]);
    assert_eq!(call(&array, "max", vec![]), Value::Int(7));
    assert_eq!(call(&array, "min", vec![]), Value::Int(1));
    assert_eq!(call(&array, "sum", vec![]), Value::Int(11));
    assert_eq!(call(&Arrayy::new(), "max", vec![]), Value::Bool(false));

    let mixed = list(&[Value::Int(1), Value::Float(0.5), Value::from("2")]);
    assert_eq!(call(&mixed, "sum", vec![]), Value::Float(3.5));
}

#[test]
fn sum_counts_non_numeric_strings_as_zero() {
    let array = list(&[Value::from("abc"), Value::Int(1)]);
    assert_eq!(call(&array, "sum", vec![]), Value::Int(1));

    let fractional = list(&[Value::from("1.5"), Value::from("x"), Value::Int(1)]);
    assert_eq!(call(&fractional, "sum", vec![]), Value::Float(2.5));
}

#[test]
fn implode_nested() {
    let array = list(&[Value::from("a"), Value::from(vec!["b", "c"]), Value::Int(1)]);
    assert_eq!(call(&array, "implode", vec![",".into()]), Value::from("a,b,c,1"));
    assert_eq!(call(&list(&["x", "y"]), "implode", vec![]), Value::from("xy"));
}

// Conversion

#[test]
fn to_array_and_to_json() {
    let array = pairs(&[("a", 1)]);
    assert_eq!(call(&array, "toArray", vec![]), Value::Array(array.clone()));
    assert_eq!(call(&array, "toJson", vec![]), Value::from(r#"{"a":1}"#));
    assert_eq!(call(&array, "toJson", vec![true.into()]), Value::from("{\n  \"a\": 1\n}"));
}
