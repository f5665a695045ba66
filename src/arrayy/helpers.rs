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

//! Argument validation shared by the collection methods.
//!
//! Argument counts are checked once in [`Arrayy::invoke`](super::Arrayy::invoke);
//! these helpers only check kinds and apply defaults for optional slots.

use crate::error::{ArrayyError, Result};
use crate::value::{Key, NativeFn, Value};

use super::Arrayy;

/// Optional argument: a missing slot reads as `None`.
#[inline]
pub fn arg(args: &[Value], index: usize) -> Option<&Value> {
    args.get(index)
}

/// Like [`arg`], but an explicit `null` also reads as `None`.
#[inline]
pub fn non_null_arg(args: &[Value], index: usize) -> Option<&Value> {
    args.get(index).filter(|v| !matches!(v, Value::Null))
}

pub fn wrong_type(method: &'static str, expected: &'static str, got: &Value) -> ArrayyError {
    ArrayyError::WrongArgType {
        method,
        expected,
        got: got.type_name(),
    }
}

pub fn require_int(method: &'static str, args: &[Value], index: usize) -> Result<i64> {
    match arg(args, index) {
        Some(Value::Int(n)) => Ok(*n),
        Some(other) => Err(wrong_type(method, "int", other)),
        None => Err(wrong_type(method, "int", &Value::Null)),
    }
}

/// Missing or `null` → `None`; otherwise must be an int.
pub fn optional_int(method: &'static str, args: &[Value], index: usize) -> Result<Option<i64>> {
    match non_null_arg(args, index) {
        None => Ok(None),
        Some(Value::Int(n)) => Ok(Some(*n)),
        Some(other) => Err(wrong_type(method, "int or null", other)),
    }
}

/// Flags take the truthiness of whatever was passed.
pub fn optional_flag(args: &[Value], index: usize, default: bool) -> bool {
    arg(args, index).map_or(default, Value::is_truthy)
}

pub fn optional_str(args: &[Value], index: usize, default: &str) -> String {
    arg(args, index).map_or_else(|| default.to_string(), Value::stringify)
}

pub fn require_key(method: &'static str, args: &[Value], index: usize) -> Result<Key> {
    match arg(args, index) {
        Some(value) => {
            Key::from_value(value).ok_or_else(|| wrong_type(method, "int or string", value))
        }
        None => Err(wrong_type(method, "int or string", &Value::Null)),
    }
}

/// Missing or `null` → `None`; otherwise must be usable as a key.
pub fn optional_key(method: &'static str, args: &[Value], index: usize) -> Result<Option<Key>> {
    match non_null_arg(args, index) {
        None => Ok(None),
        Some(value) => Key::from_value(value)
            .map(Some)
            .ok_or_else(|| wrong_type(method, "int or string", value)),
    }
}

pub fn require_array<'a>(
    method: &'static str,
    args: &'a [Value],
    index: usize,
) -> Result<&'a Arrayy> {
    match arg(args, index) {
        Some(Value::Array(array)) => Ok(array),
        Some(other) => Err(wrong_type(method, "array", other)),
        None => Err(wrong_type(method, "array", &Value::Null)),
    }
}

pub fn require_callback<'a>(
    method: &'static str,
    args: &'a [Value],
    index: usize,
) -> Result<&'a NativeFn> {
    match arg(args, index) {
        Some(Value::Function(f)) => Ok(f),
        Some(other) => Err(wrong_type(method, "callable", other)),
        None => Err(wrong_type(method, "callable", &Value::Null)),
    }
}

/// Missing or `null` → `None`; otherwise must be callable.
pub fn optional_callback<'a>(
    method: &'static str,
    args: &'a [Value],
    index: usize,
) -> Result<Option<&'a NativeFn>> {
    match non_null_arg(args, index) {
        None => Ok(None),
        Some(Value::Function(f)) => Ok(Some(f)),
        Some(other) => Err(wrong_type(method, "callable or null", other)),
    }
}

/// Resolves a possibly negative offset/length pair against `len`.
///
/// Negative offsets count from the end; a negative length stops that many
/// entries before the end. Returns a `start..end` range clamped to `len`.
pub fn slice_bounds(len: usize, offset: i64, length: Option<i64>) -> (usize, usize) {
    let len_i = i64::try_from(len).unwrap_or(i64::MAX);
    let start = if offset < 0 {
        (len_i + offset).max(0)
    } else {
        offset.min(len_i)
    };
    let end = match length {
        None => len_i,
        Some(n) if n < 0 => (len_i + n).max(start),
        Some(n) => start.saturating_add(n).min(len_i),
    };
    (to_index(start), to_index(end.max(start)))
}

fn to_index(n: i64) -> usize {
    usize::try_from(n).unwrap_or(0)
}
