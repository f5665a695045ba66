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

//! The collection method table.
//!
//! [`METHODS`] is the single source of truth for which methods a collection
//! exposes by name, how many parameters each declares, and which function
//! implements it. Static callers derive their argument bookkeeping from it.
//!
//! Every method leaves the receiver untouched and returns a new value;
//! collection results come back as [`Value::Array`].

use std::fmt;

use rand::seq::{index, SliceRandom};
use rand::Rng;

use crate::error::{ArrayyError, Result};
use crate::value::{Key, Value};

use super::helpers::{
    arg, optional_callback, optional_flag, optional_int, optional_key, optional_str,
    require_array, require_callback, require_int, require_key, slice_bounds,
};
use super::Arrayy;

/// Native method signature: receiver plus already-sliced arguments.
pub type MethodHandler = fn(&Arrayy, &[Value]) -> Result<Value>;

/// One entry of the method table.
#[derive(Clone, Copy)]
pub struct MethodDef {
    pub name: &'static str,
    /// Declared parameter count, optional parameters included.
    pub params: usize,
    /// Parameters without a default.
    pub required: usize,
    pub handler: MethodHandler,
}

impl fmt::Debug for MethodDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MethodDef")
            .field("name", &self.name)
            .field("params", &self.params)
            .field("required", &self.required)
            .finish_non_exhaustive()
    }
}

const fn method(
    name: &'static str,
    params: usize,
    required: usize,
    handler: MethodHandler,
) -> MethodDef {
    MethodDef {
        name,
        params,
        required,
        handler,
    }
}

/// All methods callable through [`Arrayy::invoke`], grouped by purpose.
pub static METHODS: &[MethodDef] = &[
    // Element access
    method("append", 2, 1, arrayy_append),
    method("prepend", 2, 1, arrayy_prepend),
    method("get", 2, 1, arrayy_get),
    method("set", 2, 2, arrayy_set),
    method("has", 1, 1, arrayy_has),
    method("remove", 1, 1, arrayy_remove),
    method("first", 0, 0, arrayy_first),
    method("last", 0, 0, arrayy_last),
    method("firstsImmutable", 1, 0, arrayy_firsts),
    method("lastsImmutable", 1, 0, arrayy_lasts),
    method("randomValue", 0, 0, arrayy_random_value),
    method("randomValues", 1, 1, arrayy_random_values),
    // Search
    method("contains", 2, 1, arrayy_contains),
    method("indexOf", 1, 1, arrayy_index_of),
    method("find", 1, 1, arrayy_find),
    // Shape
    method("count", 0, 0, arrayy_count),
    method("isEmpty", 0, 0, arrayy_is_empty),
    method("keys", 0, 0, arrayy_keys),
    method("values", 0, 0, arrayy_values),
    // Callbacks
    method("map", 2, 1, arrayy_map),
    method("filter", 2, 0, arrayy_filter),
    method("each", 1, 1, arrayy_each),
    method("reduce", 2, 1, arrayy_reduce),
    // Reordering
    method("reverse", 0, 0, arrayy_reverse),
    method("sort", 2, 0, arrayy_sort),
    method("shuffle", 0, 0, arrayy_shuffle),
    // Restructuring
    method("unique", 0, 0, arrayy_unique),
    method("flip", 0, 0, arrayy_flip),
    method("clean", 0, 0, arrayy_clean),
    method("chunk", 2, 1, arrayy_chunk),
    method("slice", 3, 1, arrayy_slice),
    method("pad", 2, 2, arrayy_pad),
    method("replaceValues", 2, 1, arrayy_replace_values),
    // Set operations
    method("mergeAppendNewIndex", 1, 1, arrayy_merge_append_new_index),
    method("mergeAppendKeepIndex", 1, 1, arrayy_merge_append_keep_index),
    method("diff", 1, 1, arrayy_diff),
    method("intersection", 2, 1, arrayy_intersection),
    // Aggregates
    method("max", 0, 0, arrayy_max),
    method("min", 0, 0, arrayy_min),
    method("sum", 0, 0, arrayy_sum),
    method("implode", 1, 0, arrayy_implode),
    // Conversion
    method("toArray", 0, 0, arrayy_to_array),
    method("toJson", 1, 0, arrayy_to_json),
];

/// Finds a method definition by its exact name.
pub fn lookup(name: &str) -> Option<&'static MethodDef> {
    METHODS.iter().find(|def| def.name == name)
}

/// Names of every method in the table, in table order.
pub fn method_names() -> impl Iterator<Item = &'static str> {
    METHODS.iter().map(|def| def.name)
}

fn collection(array: Arrayy) -> Result<Value> {
    Ok(Value::Array(array))
}

/// Rebuilds entries the way positional operations do: integer keys are
/// renumbered from zero, string keys are kept.
fn reindexed<I>(entries: I) -> Arrayy
where
    I: IntoIterator<Item = (Key, Value)>,
{
    let mut out = Arrayy::new();
    extend_reindexed(&mut out, entries);
    out
}

fn extend_reindexed<I>(out: &mut Arrayy, entries: I)
where
    I: IntoIterator<Item = (Key, Value)>,
{
    for (key, value) in entries {
        match key {
            Key::Int(_) => out.push(value),
            Key::Str(_) => out.insert(key, value),
        }
    }
}

fn cloned_entries(this: &Arrayy) -> impl DoubleEndedIterator<Item = (Key, Value)> + '_ {
    this.iter().map(|(k, v)| (k.clone(), v.clone()))
}

/// Direct lookup first, then `a.b.c` as a path through nested arrays.
fn get_path<'a>(this: &'a Arrayy, key: &Key) -> Option<&'a Value> {
    if let Some(value) = this.get(key) {
        return Some(value);
    }
    let Key::Str(path) = key else {
        return None;
    };
    if !path.contains('.') {
        return None;
    }
    let mut segments = path.split('.');
    let mut current = this.get(&Key::from(segments.next()?))?;
    for segment in segments {
        current = current.as_array()?.get(&Key::from(segment))?;
    }
    Some(current)
}

// ---------------------------------------------------------------------------
// Element access
// ---------------------------------------------------------------------------

/// `append(value, key = null)`
///
/// Adds `value` at the next integer index, or at `key` when given.
fn arrayy_append(this: &Arrayy, args: &[Value]) -> Result<Value> {
    let value = arg(args, 0).cloned().unwrap_or_default();
    let mut out = this.clone();
    match optional_key("append", args, 1)? {
        Some(key) => out.insert(key, value),
        None => out.push(value),
    }
    collection(out)
}

/// `prepend(value, key = null)`
///
/// Without a key the integer keys are renumbered after the new first slot.
fn arrayy_prepend(this: &Arrayy, args: &[Value]) -> Result<Value> {
    let value = arg(args, 0).cloned().unwrap_or_default();
    let out = match optional_key("prepend", args, 1)? {
        Some(key) => {
            let mut out = Arrayy::new();
            out.insert(key.clone(), value);
            for (k, v) in this.iter().filter(|(k, _)| **k != key) {
                out.insert(k.clone(), v.clone());
            }
            out
        }
        None => reindexed(std::iter::once((Key::Int(0), value)).chain(cloned_entries(this))),
    };
    collection(out)
}

/// `get(key, fallback = null)`
///
/// String keys containing dots walk nested arrays (`"user.name"`).
fn arrayy_get(this: &Arrayy, args: &[Value]) -> Result<Value> {
    let key = require_key("get", args, 0)?;
    let fallback = arg(args, 1).cloned().unwrap_or_default();
    Ok(get_path(this, &key).cloned().unwrap_or(fallback))
}

fn arrayy_set(this: &Arrayy, args: &[Value]) -> Result<Value> {
    let key = require_key("set", args, 0)?;
    let mut out = this.clone();
    out.insert(key, arg(args, 1).cloned().unwrap_or_default());
    collection(out)
}

fn arrayy_has(this: &Arrayy, args: &[Value]) -> Result<Value> {
    let key = require_key("has", args, 0)?;
    Ok(Value::Bool(get_path(this, &key).is_some()))
}

fn arrayy_remove(this: &Arrayy, args: &[Value]) -> Result<Value> {
    let key = require_key("remove", args, 0)?;
    let mut out = this.clone();
    out.remove(&key);
    collection(out)
}

fn arrayy_first(this: &Arrayy, _args: &[Value]) -> Result<Value> {
    Ok(this.first().cloned().unwrap_or_default())
}

fn arrayy_last(this: &Arrayy, _args: &[Value]) -> Result<Value> {
    Ok(this.last().cloned().unwrap_or_default())
}

/// `firstsImmutable(number = null)`
///
/// `null` takes only the first value; a negative number drops that many
/// from the end.
fn arrayy_firsts(this: &Arrayy, args: &[Value]) -> Result<Value> {
    let number = optional_int("firstsImmutable", args, 0)?.unwrap_or(1);
    let (start, end) = slice_bounds(this.len(), 0, Some(number));
    collection(this.values().skip(start).take(end - start).cloned().collect())
}

/// `lastsImmutable(number = null)`
///
/// `null` takes only the last value.
fn arrayy_lasts(this: &Arrayy, args: &[Value]) -> Result<Value> {
    let number = optional_int("lastsImmutable", args, 0)?.unwrap_or(1);
    let (start, end) = slice_bounds(this.len(), number.saturating_neg(), None);
    collection(this.values().skip(start).take(end - start).cloned().collect())
}

fn arrayy_random_value(this: &Arrayy, _args: &[Value]) -> Result<Value> {
    if this.is_empty() {
        return Ok(Value::Null);
    }
    let pick = rand::thread_rng().gen_range(0..this.len());
    Ok(this
        .entries
        .get_index(pick)
        .map(|(_, v)| v.clone())
        .unwrap_or_default())
}

/// `randomValues(number)`
///
/// Picks `number` distinct entries in random order.
fn arrayy_random_values(this: &Arrayy, args: &[Value]) -> Result<Value> {
    let number = require_int("randomValues", args, 0)?;
    let amount = usize::try_from(number)
        .ok()
        .filter(|n| *n <= this.len())
        .ok_or_else(|| {
            ArrayyError::invalid_argument(format!(
                "randomValues(): number must be between 0 and {}, got {number}",
                this.len()
            ))
        })?;
    let mut rng = rand::thread_rng();
    let picked = index::sample(&mut rng, this.len(), amount)
        .into_iter()
        .filter_map(|i| this.entries.get_index(i).map(|(_, v)| v.clone()));
    collection(picked.collect())
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// `contains(value, strict = true)`
fn arrayy_contains(this: &Arrayy, args: &[Value]) -> Result<Value> {
    let needle = arg(args, 0).cloned().unwrap_or_default();
    let strict = optional_flag(args, 1, true);
    let found = this.values().any(|v| {
        if strict {
            *v == needle
        } else {
            Value::equals_loose(v, &needle)
        }
    });
    Ok(Value::Bool(found))
}

/// `indexOf(value)` → key of the first loose match, or `false`.
fn arrayy_index_of(this: &Arrayy, args: &[Value]) -> Result<Value> {
    let needle = arg(args, 0).cloned().unwrap_or_default();
    Ok(this
        .iter()
        .find(|(_, v)| Value::equals_loose(v, &needle))
        .map_or(Value::Bool(false), |(k, _)| k.to_value()))
}

/// `find(callback)` → first value for which `callback(value, key)` is
/// truthy, or `false`.
fn arrayy_find(this: &Arrayy, args: &[Value]) -> Result<Value> {
    let callback = require_callback("find", args, 0)?;
    Ok(this
        .iter()
        .find(|(k, v)| callback.call(vec![(*v).clone(), k.to_value()]).is_truthy())
        .map_or(Value::Bool(false), |(_, v)| v.clone()))
}

// ---------------------------------------------------------------------------
// Shape
// ---------------------------------------------------------------------------

fn arrayy_count(this: &Arrayy, _args: &[Value]) -> Result<Value> {
    let len = i64::try_from(this.len())
        .map_err(|_| ArrayyError::invalid_argument("count(): collection too large"))?;
    Ok(Value::Int(len))
}

fn arrayy_is_empty(this: &Arrayy, _args: &[Value]) -> Result<Value> {
    Ok(Value::Bool(this.is_empty()))
}

fn arrayy_keys(this: &Arrayy, _args: &[Value]) -> Result<Value> {
    collection(this.keys().map(Key::to_value).collect())
}

fn arrayy_values(this: &Arrayy, _args: &[Value]) -> Result<Value> {
    collection(this.values().cloned().collect())
}

// ---------------------------------------------------------------------------
// Callbacks
// ---------------------------------------------------------------------------

/// `map(callback, withKey = false)`
///
/// Keys are preserved. With `withKey` the callback receives `(value, key)`.
fn arrayy_map(this: &Arrayy, args: &[Value]) -> Result<Value> {
    let callback = require_callback("map", args, 0)?;
    let with_key = optional_flag(args, 1, false);
    let out = this
        .iter()
        .map(|(k, v)| {
            let call_args = if with_key {
                vec![v.clone(), k.to_value()]
            } else {
                vec![v.clone()]
            };
            (k.clone(), callback.call(call_args))
        })
        .collect();
    collection(out)
}

/// `filter(callback = null, withKey = false)`
///
/// Without a callback, empty values are dropped. Keys are preserved.
fn arrayy_filter(this: &Arrayy, args: &[Value]) -> Result<Value> {
    let Some(callback) = optional_callback("filter", args, 0)? else {
        return arrayy_clean(this, args);
    };
    let with_key = optional_flag(args, 1, false);
    let out = cloned_entries(this)
        .filter(|(k, v)| {
            let call_args = if with_key {
                vec![v.clone(), k.to_value()]
            } else {
                vec![v.clone()]
            };
            callback.call(call_args).is_truthy()
        })
        .collect();
    collection(out)
}

/// `each(callback)`: stores `callback(value, key)` back under each key.
fn arrayy_each(this: &Arrayy, args: &[Value]) -> Result<Value> {
    let callback = require_callback("each", args, 0)?;
    let out = this
        .iter()
        .map(|(k, v)| (k.clone(), callback.call(vec![v.clone(), k.to_value()])))
        .collect();
    collection(out)
}

/// `reduce(callback, initial = [])`: folds `callback(carry, value)`.
fn arrayy_reduce(this: &Arrayy, args: &[Value]) -> Result<Value> {
    let callback = require_callback("reduce", args, 0)?;
    let initial = arg(args, 1)
        .cloned()
        .unwrap_or_else(|| Value::Array(Arrayy::new()));
    Ok(this
        .values()
        .fold(initial, |carry, v| callback.call(vec![carry, v.clone()])))
}

// ---------------------------------------------------------------------------
// Reordering
// ---------------------------------------------------------------------------

fn arrayy_reverse(this: &Arrayy, _args: &[Value]) -> Result<Value> {
    collection(cloned_entries(this).rev().collect())
}

/// `sort(direction = "ASC", keepKeys = false)`
///
/// Stable; `"desc"` in any case sorts descending.
fn arrayy_sort(this: &Arrayy, args: &[Value]) -> Result<Value> {
    let descending = optional_str(args, 0, "ASC").eq_ignore_ascii_case("desc");
    let keep_keys = optional_flag(args, 1, false);
    let mut entries: Vec<(Key, Value)> = cloned_entries(this).collect();
    entries.sort_by(|(_, a), (_, b)| {
        let ord = Value::compare(a, b);
        if descending {
            ord.reverse()
        } else {
            ord
        }
    });
    let out = if keep_keys {
        Arrayy::from_pairs(entries)
    } else {
        entries.into_iter().map(|(_, v)| v).collect()
    };
    collection(out)
}

fn arrayy_shuffle(this: &Arrayy, _args: &[Value]) -> Result<Value> {
    let mut values = this.to_vec();
    values.shuffle(&mut rand::thread_rng());
    collection(Arrayy::from_values(values))
}

// ---------------------------------------------------------------------------
// Restructuring
// ---------------------------------------------------------------------------

/// Keeps the first of each group of loosely equal values, keys preserved.
fn arrayy_unique(this: &Arrayy, _args: &[Value]) -> Result<Value> {
    let mut seen: Vec<&Value> = Vec::new();
    let mut out = Arrayy::new();
    for (k, v) in this.iter() {
        if seen.iter().any(|s| Value::equals_loose(s, v)) {
            continue;
        }
        seen.push(v);
        out.insert(k.clone(), v.clone());
    }
    collection(out)
}

/// Swaps keys and values. Only int and string values can become keys;
/// other entries are skipped.
fn arrayy_flip(this: &Arrayy, _args: &[Value]) -> Result<Value> {
    let out = this
        .iter()
        .filter(|(_, v)| matches!(v, Value::Int(_) | Value::Str(_)))
        .filter_map(|(k, v)| Key::from_value(v).map(|key| (key, k.to_value())))
        .collect();
    collection(out)
}

fn arrayy_clean(this: &Arrayy, _args: &[Value]) -> Result<Value> {
    collection(cloned_entries(this).filter(|(_, v)| v.is_truthy()).collect())
}

/// `chunk(size, preserveKeys = false)`
fn arrayy_chunk(this: &Arrayy, args: &[Value]) -> Result<Value> {
    let size = require_int("chunk", args, 0)?;
    let size = usize::try_from(size)
        .ok()
        .filter(|n| *n > 0)
        .ok_or_else(|| ArrayyError::invalid_argument("chunk(): size must be greater than 0"))?;
    let preserve_keys = optional_flag(args, 1, false);

    let entries: Vec<(Key, Value)> = cloned_entries(this).collect();
    let chunks = entries.chunks(size).map(|chunk| {
        let part = if preserve_keys {
            Arrayy::from_pairs(chunk.iter().cloned())
        } else {
            chunk.iter().map(|(_, v)| v.clone()).collect()
        };
        Value::Array(part)
    });
    collection(chunks.collect())
}

/// `slice(offset, length = null, preserveKeys = false)`
///
/// String keys always survive; integer keys are renumbered unless
/// `preserveKeys` is set.
fn arrayy_slice(this: &Arrayy, args: &[Value]) -> Result<Value> {
    let offset = require_int("slice", args, 0)?;
    let length = optional_int("slice", args, 1)?;
    let preserve_keys = optional_flag(args, 2, false);
    let (start, end) = slice_bounds(this.len(), offset, length);
    let picked = cloned_entries(this).skip(start).take(end - start);
    let out = if preserve_keys {
        picked.collect()
    } else {
        reindexed(picked)
    };
    collection(out)
}

/// `pad(size, value)`
///
/// Pads to `|size|` entries, at the end for positive sizes and at the front
/// for negative ones. Sizes above [`super::MAX_ARRAY_SIZE`] are rejected.
fn arrayy_pad(this: &Arrayy, args: &[Value]) -> Result<Value> {
    let size = require_int("pad", args, 0)?;
    let value = arg(args, 1).cloned().unwrap_or_default();
    let target = usize::try_from(size.unsigned_abs()).unwrap_or(usize::MAX);
    if target <= this.len() {
        return collection(this.clone());
    }
    let mut out = Arrayy::try_with_capacity(target, "pad")?;
    let padding = std::iter::repeat((Key::Int(0), value)).take(target - this.len());
    if size > 0 {
        extend_reindexed(&mut out, cloned_entries(this).chain(padding));
    } else {
        extend_reindexed(&mut out, padding.chain(cloned_entries(this)));
    }
    collection(out)
}

/// `replaceValues(search, replacement = "")`: substring replacement inside
/// string values.
fn arrayy_replace_values(this: &Arrayy, args: &[Value]) -> Result<Value> {
    let search = optional_str(args, 0, "");
    let replacement = optional_str(args, 1, "");
    if search.is_empty() {
        return collection(this.clone());
    }
    let out = this
        .iter()
        .map(|(k, v)| {
            let value = match v {
                Value::Str(s) => Value::Str(s.replace(&search, &replacement)),
                other => other.clone(),
            };
            (k.clone(), value)
        })
        .collect();
    collection(out)
}

// ---------------------------------------------------------------------------
// Set operations
// ---------------------------------------------------------------------------

/// Integer keys of both sides are renumbered; string keys from `array`
/// overwrite.
fn arrayy_merge_append_new_index(this: &Arrayy, args: &[Value]) -> Result<Value> {
    let other = require_array("mergeAppendNewIndex", args, 0)?;
    collection(reindexed(cloned_entries(this).chain(cloned_entries(other))))
}

/// Entries of `array` overwrite or extend by key.
fn arrayy_merge_append_keep_index(this: &Arrayy, args: &[Value]) -> Result<Value> {
    let other = require_array("mergeAppendKeepIndex", args, 0)?;
    let mut out = this.clone();
    for (k, v) in cloned_entries(other) {
        out.insert(k, v);
    }
    collection(out)
}

fn arrayy_diff(this: &Arrayy, args: &[Value]) -> Result<Value> {
    let other = require_array("diff", args, 0)?;
    let out = cloned_entries(this)
        .filter(|(_, v)| !other.values().any(|o| Value::equals_loose(o, v)))
        .collect();
    collection(out)
}

/// `intersection(search, keepKeys = false)`
fn arrayy_intersection(this: &Arrayy, args: &[Value]) -> Result<Value> {
    let search = require_array("intersection", args, 0)?;
    let keep_keys = optional_flag(args, 1, false);
    let matching = cloned_entries(this)
        .filter(|(_, v)| search.values().any(|s| Value::equals_loose(s, v)));
    let out = if keep_keys {
        matching.collect()
    } else {
        matching.map(|(_, v)| v).collect()
    };
    collection(out)
}

// ---------------------------------------------------------------------------
// Aggregates
// ---------------------------------------------------------------------------

fn extreme(this: &Arrayy, wanted: std::cmp::Ordering) -> Value {
    let mut best: Option<&Value> = None;
    for value in this.values() {
        match best {
            Some(current) if Value::compare(value, current) != wanted => {}
            _ => best = Some(value),
        }
    }
    best.cloned().unwrap_or(Value::Bool(false))
}

/// Largest value, or `false` when empty.
fn arrayy_max(this: &Arrayy, _args: &[Value]) -> Result<Value> {
    Ok(extreme(this, std::cmp::Ordering::Greater))
}

/// Smallest value, or `false` when empty.
fn arrayy_min(this: &Arrayy, _args: &[Value]) -> Result<Value> {
    Ok(extreme(this, std::cmp::Ordering::Less))
}

/// Integer sum while every addend is integral, float otherwise.
/// Non-numeric values count as zero.
fn arrayy_sum(this: &Arrayy, _args: &[Value]) -> Result<Value> {
    let mut int_total: Option<i64> = Some(0);
    let mut float_total = 0.0_f64;
    for value in this.values() {
        let addend = match value {
            Value::Int(n) => Value::Int(*n),
            Value::Bool(b) => Value::Int(i64::from(*b)),
            Value::Float(f) => Value::Float(*f),
            Value::Str(s) => match s.trim().parse::<i64>() {
                Ok(n) => Value::Int(n),
                Err(_) => value.as_number().map_or(Value::Int(0), Value::Float),
            },
            _ => Value::Int(0),
        };
        match addend {
            Value::Int(n) => {
                float_total += n as f64;
                int_total = int_total.and_then(|t| t.checked_add(n));
            }
            Value::Float(f) => {
                float_total += f;
                int_total = None;
            }
            _ => {}
        }
    }
    Ok(int_total.map_or(Value::Float(float_total), Value::Int))
}

/// `implode(glue = "")`: joins values as strings; nested arrays are
/// joined with the same glue.
fn arrayy_implode(this: &Arrayy, args: &[Value]) -> Result<Value> {
    let glue = optional_str(args, 0, "");
    Ok(Value::Str(implode_with(this, &glue)))
}

fn implode_with(array: &Arrayy, glue: &str) -> String {
    array
        .values()
        .map(|v| match v {
            Value::Array(inner) => implode_with(inner, glue),
            other => other.stringify(),
        })
        .collect::<Vec<_>>()
        .join(glue)
}

// ---------------------------------------------------------------------------
// Conversion
// ---------------------------------------------------------------------------

fn arrayy_to_array(this: &Arrayy, _args: &[Value]) -> Result<Value> {
    collection(this.clone())
}

/// `toJson(pretty = false)`
fn arrayy_to_json(this: &Arrayy, args: &[Value]) -> Result<Value> {
    let pretty = optional_flag(args, 0, false);
    Ok(Value::Str(this.to_json(pretty)?))
}

#[cfg(test)]
mod tests;
