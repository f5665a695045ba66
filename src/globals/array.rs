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

use std::sync::OnceLock;

use rustc_hash::FxHashMap;

use crate::arrayy::{Arrayy, MAX_ARRAY_SIZE, METHODS};
use crate::error::{ArrayyError, Result};
use crate::value::Value;

/// Method name → number of arguments a static call may pass.
///
/// Each entry is two more than the method's declared parameter count: one
/// slot for the subject array in front and one for an optional trailing
/// argument that the instance method never receives.
static METHOD_ARGS: OnceLock<FxHashMap<&'static str, usize>> = OnceLock::new();

/// Returns the static argument table, building it on first use.
fn method_args() -> &'static FxHashMap<&'static str, usize> {
    METHOD_ARGS.get_or_init(build_method_args)
}

fn build_method_args() -> FxHashMap<&'static str, usize> {
    let table: FxHashMap<&'static str, usize> = METHODS
        .iter()
        .map(|def| (def.name, def.params + 2))
        .collect();
    tracing::debug!(methods = table.len(), "built static method argument table");
    table
}

/// Number of arguments at which a static call to `name` is treated as
/// carrying the optional trailing argument.
pub fn static_arg_count(name: &str) -> Option<usize> {
    method_args().get(name).copied()
}

/// A single static call: method name plus positional arguments, the first
/// of which is the subject array.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CallRequest {
    pub name: String,
    pub args: Vec<Value>,
}

impl CallRequest {
    pub fn new(name: impl Into<String>, args: Vec<Value>) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }
}

/// Static facade over [`Arrayy`].
///
/// Any method in the collection's method table can be called as
/// `StaticArrayy::dispatch("name", [subject, ...args])`. The subject is
/// wrapped with [`Arrayy::create`] and the method runs on that instance.
///
/// # Example
/// ```text
/// StaticArrayy::dispatch("implode", vec![vec!["a", "b"].into(), "-".into()])
/// // => "a-b"
/// ```
pub struct StaticArrayy;

impl StaticArrayy {
    /// Creates a collection from `arguments[0]` and invokes `name` on it.
    ///
    /// # Behavior
    /// - A missing subject is treated as `""`, i.e. an empty collection.
    /// - When exactly [`static_arg_count`] arguments are passed, the last
    ///   one is the optional trailing argument and is dropped.
    /// - Otherwise everything after the subject is forwarded.
    ///
    /// # Errors
    /// - [`ArrayyError::UnsupportedOperation`] for names outside the method
    ///   table
    /// - any error raised by the method itself, unchanged
    pub fn dispatch(name: &str, arguments: Vec<Value>) -> Result<Value> {
        let expected = static_arg_count(name).ok_or_else(|| ArrayyError::unsupported(name))?;

        let num_args = arguments.len();
        let strip_trailing = num_args == expected;

        let mut arguments = arguments.into_iter();
        let subject = arguments.next().unwrap_or_else(|| Value::Str(String::new()));
        let mut forwarded: Vec<Value> = arguments.collect();
        if strip_trailing {
            forwarded.pop();
        }

        tracing::trace!(
            method = name,
            args = num_args,
            strip_trailing,
            "dispatching static call"
        );

        Arrayy::create(subject).invoke(name, forwarded)
    }

    /// [`StaticArrayy::dispatch`] for a prepared [`CallRequest`].
    pub fn call(request: CallRequest) -> Result<Value> {
        Self::dispatch(&request.name, request.args)
    }

    /// Generates an inclusive integer range.
    ///
    /// # Parameters
    /// - `base`: the start, or the stop when `stop` is `null`
    /// - `stop`: the stop, or `null` to count from `1` up to `base`
    /// - `step`: distance between values; only its magnitude is used, the
    ///   direction follows the bounds
    ///
    /// # Errors
    /// - `base` or `step` not an int, or `stop` neither int nor null
    /// - a zero step
    ///
    /// # Example
    /// ```text
    /// range(5, null, 1)  => [1, 2, 3, 4, 5]
    /// range(1, 10, 3)    => [1, 4, 7, 10]
    /// ```
    pub fn range(base: Value, stop: Value, step: Value) -> Result<Arrayy> {
        let (Value::Int(base), Value::Int(step)) = (base, step) else {
            return Err(ArrayyError::invalid_argument("Passed value must be a int"));
        };
        let stop = match stop {
            Value::Int(n) => Some(n),
            Value::Null => None,
            _ => {
                return Err(ArrayyError::invalid_argument(
                    "Passed value must be a int or null",
                ))
            }
        };
        Self::range_i64(base, stop, step)
    }

    /// Typed form of [`StaticArrayy::range`].
    pub fn range_i64(base: i64, stop: Option<i64>, step: i64) -> Result<Arrayy> {
        let (start, stop) = match stop {
            Some(stop) => (base, stop),
            None => (1, base),
        };
        let values = inclusive_range(start, stop, step)?;
        Ok(values.into_iter().map(Value::Int).collect())
    }

    /// Fills a collection with `times` copies of `data`.
    ///
    /// `times` goes through integer coercion. A zero or negative count, or
    /// empty `data` (`null`, `false`, `0`, `""`, `"0"`, `[]`), yields an
    /// empty collection.
    ///
    /// # Errors
    /// [`ArrayyError::InvalidArgument`] when `times` exceeds
    /// [`MAX_ARRAY_SIZE`] or the collection cannot be allocated.
    pub fn repeat(data: Value, times: Value) -> Result<Arrayy> {
        let times = times.to_int();
        if times <= 0 || data.is_empty() {
            return Ok(Arrayy::new());
        }
        let len = usize::try_from(times).unwrap_or(usize::MAX);
        let mut out = Arrayy::try_with_capacity(len, "repeat")?;
        for _ in 0..len {
            out.push(data.clone());
        }
        Ok(out)
    }
}

fn inclusive_range(start: i64, stop: i64, step: i64) -> Result<Vec<i64>> {
    if step == 0 {
        return Err(ArrayyError::invalid_argument("range(): step cannot be 0"));
    }
    let step = i128::from(step.unsigned_abs());
    let direction: i128 = if start <= stop { 1 } else { -1 };
    let count = i128::from(start.abs_diff(stop)) / step + 1;

    let len = usize::try_from(count)
        .ok()
        .filter(|n| *n <= MAX_ARRAY_SIZE)
        .ok_or_else(range_too_large)?;
    let mut values = Vec::new();
    values.try_reserve_exact(len).map_err(|_| range_too_large())?;

    let mut current = i128::from(start);
    for _ in 0..len {
        // Stays within [start, stop], so the narrowing cannot fail.
        values.push(i64::try_from(current).map_err(|_| range_too_large())?);
        current += direction * step;
    }
    Ok(values)
}

fn range_too_large() -> ArrayyError {
    ArrayyError::invalid_argument("range(): the supplied range exceeds the maximum array size")
}
