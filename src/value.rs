/*
 * ==========================================================================
 * PAWX - Code with Claws!
 * ==========================================================================
 * 
 * Author:   Sam Wilcox
 * Email:    sam@pawx-lang.com
 * Website:  https://www.pawx-lang.com
 * Github:   https://github.com/samwilcox/pawx
 * 
 * License:
 * This file is part of the PAWX programming language project.
 * 
 * PAWX is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 * 
 * You may choose either license to govern your use of this software.
 * Full license text available at:
 *    https://license.pawx-lang.com
 * 
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * 
 * ==========================================================================
 */

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use serde::ser::{Serialize, Serializer};

use crate::arrayy::Arrayy;

/// Native callback signature used by `map`, `filter`, `reduce` and friends.
pub type NativeCallback = dyn Fn(Vec<Value>) -> Value + Send + Sync;

/// A shareable native function value.
///
/// Wraps a Rust closure so it can be passed as a method argument.
/// Clones share the same underlying closure.
#[derive(Clone)]
pub struct NativeFn(Arc<NativeCallback>);

impl NativeFn {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(Vec<Value>) -> Value + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Invokes the wrapped closure.
    pub fn call(&self, args: Vec<Value>) -> Value {
        (self.0)(args)
    }

    /// Identity comparison; two handles are equal only when they share a closure.
    pub fn ptr_eq(&self, other: &NativeFn) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for NativeFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[NativeFunction]")
    }
}

/// Array key: either an integer index or a string.
///
/// Numeric strings such as `"7"` normalize to `Key::Int(7)` when built from
/// a [`Value`], so `"7"` and `7` address the same slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
#[serde(untagged)]
pub enum Key {
    Int(i64),
    Str(String),
}

impl Key {
    /// Converts a runtime value into a key.
    ///
    /// Returns `None` for arrays and functions, which cannot be keys.
    pub fn from_value(value: &Value) -> Option<Key> {
        match value {
            Value::Int(n) => Some(Key::Int(*n)),
            Value::Str(s) => Some(Key::from(s.as_str())),
            Value::Bool(b) => Some(Key::Int(i64::from(*b))),
            Value::Float(f) if f.is_finite() => Some(Key::Int(f.trunc() as i64)),
            Value::Float(_) => Some(Key::Int(0)),
            Value::Null => Some(Key::Str(String::new())),
            Value::Array(_) | Value::Function(_) => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Key::Int(n) => Some(*n),
            Key::Str(_) => None,
        }
    }

    /// The key as a runtime value.
    pub fn to_value(&self) -> Value {
        match self {
            Key::Int(n) => Value::Int(*n),
            Key::Str(s) => Value::Str(s.clone()),
        }
    }
}

impl From<i64> for Key {
    fn from(n: i64) -> Self {
        Key::Int(n)
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        match canonical_int(s) {
            Some(n) => Key::Int(n),
            None => Key::Str(s.to_string()),
        }
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        match canonical_int(&s) {
            Some(n) => Key::Int(n),
            None => Key::Str(s),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Int(n) => write!(f, "{n}"),
            Key::Str(s) => write!(f, "{s}"),
        }
    }
}

/// `"12"` → 12, but `"012"`, `"+1"` and `" 1"` stay strings.
fn canonical_int(s: &str) -> Option<i64> {
    let n: i64 = s.parse().ok()?;
    (n.to_string() == s).then_some(n)
}

/// Runtime value stored in an [`Arrayy`].
///
/// Scalars are held inline; nested arrays are full collections so that
/// results of collection methods can be chained or dispatched again.
#[derive(Clone, Debug, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Array(Arrayy),
    Function(NativeFn),
}

impl Value {
    /// Returns a stable type name string (useful for errors).
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null        => "null",
            Value::Bool(_)     => "bool",
            Value::Int(_)      => "int",
            Value::Float(_)    => "float",
            Value::Str(_)      => "string",
            Value::Array(_)    => "array",
            Value::Function(_) => "function",
        }
    }

    /// Truthiness used by filters and by the empty check.
    ///
    /// # Falsy values
    /// - `null`
    /// - `false`
    /// - `0` and `0.0`
    /// - `""` and `"0"`
    /// - an empty array
    ///
    /// Everything else, including every function, is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Int(n) => *n != 0,
            Value::Float(f) => *f != 0.0,
            Value::Str(s) => !(s.is_empty() || s == "0"),
            Value::Array(a) => !a.is_empty(),
            Value::Function(_) => true,
        }
    }

    /// The "empty" notion: the negation of [`Value::is_truthy`].
    pub fn is_empty(&self) -> bool {
        !self.is_truthy()
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Arrayy> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Consumes the value, returning the collection it holds.
    pub fn into_array(self) -> Option<Arrayy> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Integer coercion.
    ///
    /// - bools become `0`/`1`
    /// - floats truncate toward zero (non-finite → `0`)
    /// - strings use their leading integer (`"12abc"` → `12`, `"x"` → `0`)
    /// - arrays become `0` when empty and `1` otherwise
    pub fn to_int(&self) -> i64 {
        match self {
            Value::Null => 0,
            Value::Bool(b) => i64::from(*b),
            Value::Int(n) => *n,
            Value::Float(f) if f.is_finite() => f.trunc() as i64,
            Value::Float(_) => 0,
            Value::Str(s) => leading_int(s),
            Value::Array(a) => i64::from(!a.is_empty()),
            Value::Function(_) => 1,
        }
    }

    /// Numeric view of ints, floats and numeric strings.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(*n as f64),
            Value::Float(f) => Some(*f),
            Value::Str(s) => numeric_str(s),
            _ => None,
        }
    }

    /// String conversion used by `implode` and `replaceValues`.
    pub fn stringify(&self) -> String {
        match self {
            Value::Null => String::new(),
            Value::Bool(true) => "1".to_string(),
            Value::Bool(false) => String::new(),
            Value::Int(n) => n.to_string(),
            Value::Float(f) => format_float(*f),
            Value::Str(s) => s.clone(),
            Value::Array(_) => "Array".to_string(),
            Value::Function(_) => "Closure".to_string(),
        }
    }

    /// Loose equality (`==`).
    ///
    /// - numbers compare numerically across int/float
    /// - numeric strings compare numerically with numbers and each other
    /// - `null` and bools compare by truthiness
    /// - arrays compare entry by entry, keys included
    pub fn equals_loose(a: &Value, b: &Value) -> bool {
        match (a, b) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(x), other) | (other, Value::Bool(x)) => *x == other.is_truthy(),
            (Value::Null, Value::Str(s)) | (Value::Str(s), Value::Null) => s.is_empty(),
            (Value::Null, other) | (other, Value::Null) => !other.is_truthy(),

            (Value::Str(x), Value::Str(y)) => match (numeric_str(x), numeric_str(y)) {
                (Some(p), Some(q)) => p == q,
                _ => x == y,
            },
            (Value::Int(x), Value::Int(y)) => x == y,
            (
                Value::Int(_) | Value::Float(_) | Value::Str(_),
                Value::Int(_) | Value::Float(_) | Value::Str(_),
            ) => match (a.as_number(), b.as_number()) {
                (Some(p), Some(q)) => p == q,
                _ => false,
            },

            (Value::Array(x), Value::Array(y)) => {
                x.len() == y.len()
                    && x.iter().all(|(k, v)| {
                        y.get(k).is_some_and(|other| Value::equals_loose(v, other))
                    })
            }

            (Value::Function(x), Value::Function(y)) => x.ptr_eq(y),

            _ => false,
        }
    }

    /// Ordering used by `sort`, `max` and `min`.
    ///
    /// Numbers (including numeric strings) order numerically, other strings
    /// lexically, and values of unrelated kinds by a fixed type rank.
    pub fn compare(a: &Value, b: &Value) -> Ordering {
        match (a, b) {
            (Value::Int(x), Value::Int(y)) => x.cmp(y),
            (Value::Str(x), Value::Str(y)) => match (numeric_str(x), numeric_str(y)) {
                (Some(p), Some(q)) => p.partial_cmp(&q).unwrap_or(Ordering::Equal),
                _ => x.cmp(y),
            },
            _ => match (a.as_number(), b.as_number()) {
                (Some(p), Some(q)) => p.partial_cmp(&q).unwrap_or(Ordering::Equal),
                _ => match (a, b) {
                    (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
                    (Value::Array(x), Value::Array(y)) => x.len().cmp(&y.len()),
                    _ => a.rank().cmp(&b.rank()),
                },
            },
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Value::Null => 0,
            Value::Bool(_) => 1,
            Value::Int(_) | Value::Float(_) => 2,
            Value::Str(_) => 3,
            Value::Array(_) => 4,
            Value::Function(_) => 5,
        }
    }

    /// Converts a parsed JSON document into a runtime value.
    ///
    /// JSON arrays become list collections, objects keep their key order.
    pub fn from_json(json: serde_json::Value) -> Value {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => Value::Float(n.as_f64().unwrap_or(0.0)),
            },
            serde_json::Value::String(s) => Value::Str(s),
            serde_json::Value::Array(items) => {
                Value::Array(Arrayy::from_values(items.into_iter().map(Value::from_json)))
            }
            serde_json::Value::Object(map) => Value::Array(Arrayy::from_pairs(
                map.into_iter().map(|(k, v)| (Key::from(k), Value::from_json(v))),
            )),
        }
    }
}

/// Strict equality (`===`): same kind and same value.
///
/// Arrays compare entry by entry in order; functions by identity.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(x), Value::Bool(y)) => x == y,
            (Value::Int(x), Value::Int(y)) => x == y,
            (Value::Float(x), Value::Float(y)) => x == y,
            (Value::Str(x), Value::Str(y)) => x == y,
            (Value::Array(x), Value::Array(y)) => x == y,
            (Value::Function(x), Value::Function(y)) => x.ptr_eq(y),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Array(a) => write!(f, "{a}"),
            Value::Str(s) => write!(f, "{s:?}"),
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            other => write!(f, "{}", other.stringify()),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null | Value::Function(_) => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(n) => serializer.serialize_i64(*n),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::Str(s) => serializer.serialize_str(s),
            Value::Array(a) => a.serialize(serializer),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(i64::from(n))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Arrayy> for Value {
    fn from(a: Arrayy) -> Self {
        Value::Array(a)
    }
}

impl From<NativeFn> for Value {
    fn from(f: NativeFn) -> Self {
        Value::Function(f)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Array(Arrayy::from_values(items.into_iter().map(Into::into)))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

fn numeric_str(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|f| f.is_finite())
}

fn leading_int(s: &str) -> i64 {
    let trimmed = s.trim_start();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = digits
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(digits.len(), |(i, _)| i);
    digits[..end].parse::<i64>().map_or(0, |n| sign * n)
}

fn format_float(f: f64) -> String {
    if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 {
        format!("{}", f as i64)
    } else {
        f.to_string()
    }
}

#[cfg(test)]
mod tests;
