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

//! The `Arrayy` collection: an ordered key → value map with a fluent,
//! name-addressable method table.
//!
//! # Module Structure
//!
//! - [`methods`]: the method registry and every method implementation
//! - [`helpers`]: argument validation shared by the methods

mod helpers;
pub mod methods;

use std::fmt;

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::error::{ArrayyError, Result};
use crate::value::{Key, Value};

pub use methods::{lookup, method_names, MethodDef, METHODS};

/// Largest number of entries a collection may be asked to allocate up front.
pub const MAX_ARRAY_SIZE: usize = 0x4000_0000;

/// Ordered array collection.
///
/// Entries keep insertion order. Appending without a key uses the next
/// integer index: one past the greatest integer key ever inserted.
#[derive(Clone, Default)]
pub struct Arrayy {
    entries: IndexMap<Key, Value>,
    next_index: i64,
}

impl Arrayy {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty collection with room for `len` entries.
    ///
    /// # Errors
    /// [`ArrayyError::InvalidArgument`] naming `method` when `len` exceeds
    /// [`MAX_ARRAY_SIZE`] or the allocation cannot be made.
    pub fn try_with_capacity(len: usize, method: &str) -> Result<Self> {
        let too_many =
            || ArrayyError::invalid_argument(format!("{method}(): too many elements ({len})"));
        if len > MAX_ARRAY_SIZE {
            return Err(too_many());
        }
        let mut entries = IndexMap::new();
        entries.try_reserve(len).map_err(|_| too_many())?;
        Ok(Self {
            entries,
            next_index: 0,
        })
    }

    /// Builds a collection from arbitrary input data.
    ///
    /// # Behavior
    /// - an array value is taken as-is
    /// - `null` and `""` produce an empty collection
    /// - any other value becomes the single element at key `0`
    pub fn create(data: Value) -> Self {
        match data {
            Value::Array(array) => array,
            Value::Null => Self::new(),
            Value::Str(s) if s.is_empty() => Self::new(),
            other => Self::from_values([other]),
        }
    }

    /// Builds a list with keys `0..n`.
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        let mut array = Self::new();
        for value in values {
            array.push(value);
        }
        array
    }

    /// Builds a collection from explicit key/value pairs.
    ///
    /// Later duplicates overwrite earlier ones in place.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (Key, Value)>,
    {
        let mut array = Self::new();
        for (key, value) in pairs {
            array.insert(key, value);
        }
        array
    }

    /// Parses a JSON document into a collection.
    pub fn from_json(source: &str) -> Result<Self> {
        let json: serde_json::Value = serde_json::from_str(source)?;
        Ok(Self::create(Value::from_json(json)))
    }

    /// Serializes the collection as JSON.
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let text = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(text)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &Key) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &Key) -> bool {
        self.entries.contains_key(key)
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&Key, &Value)> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &Key> {
        self.entries.keys()
    }

    pub fn values(&self) -> impl DoubleEndedIterator<Item = &Value> {
        self.entries.values()
    }

    /// Values in order, keys dropped.
    pub fn to_vec(&self) -> Vec<Value> {
        self.entries.values().cloned().collect()
    }

    pub fn first(&self) -> Option<&Value> {
        self.entries.first().map(|(_, v)| v)
    }

    pub fn last(&self) -> Option<&Value> {
        self.entries.last().map(|(_, v)| v)
    }

    /// Appends a value at the next integer index.
    pub fn push(&mut self, value: Value) {
        let key = Key::Int(self.next_index);
        self.insert(key, value);
    }

    /// Sets `key`, keeping its position when it already exists.
    pub fn insert(&mut self, key: Key, value: Value) {
        if let Key::Int(n) = key {
            if n >= self.next_index {
                self.next_index = n.saturating_add(1);
            }
        }
        self.entries.insert(key, value);
    }

    /// Removes `key`, preserving the order of the remaining entries.
    pub fn remove(&mut self, key: &Key) -> Option<Value> {
        self.entries.shift_remove(key)
    }

    /// True when the keys are exactly `0..len` in order.
    pub fn is_list(&self) -> bool {
        self.entries
            .keys()
            .enumerate()
            .all(|(i, key)| key.as_int() == i64::try_from(i).ok())
    }

    /// Calls a method from the method table by name.
    ///
    /// # Errors
    /// - [`ArrayyError::UnsupportedOperation`] when `name` is unknown
    /// - [`ArrayyError::WrongArgCount`] when `args` does not fit the
    ///   method's declared parameters
    /// - anything the method itself reports
    pub fn invoke(&self, name: &str, args: Vec<Value>) -> Result<Value> {
        let def = lookup(name).ok_or_else(|| ArrayyError::unsupported(name))?;
        if args.len() < def.required || args.len() > def.params {
            return Err(ArrayyError::WrongArgCount {
                method: def.name,
                min: def.required,
                max: def.params,
                got: args.len(),
            });
        }
        tracing::trace!(method = def.name, args = args.len(), "invoking collection method");
        (def.handler)(self, &args)
    }
}

/// Order-sensitive, strict comparison of entries.
impl PartialEq for Arrayy {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|((ka, va), (kb, vb))| ka == kb && va == vb)
    }
}

impl fmt::Debug for Arrayy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries.iter()).finish()
    }
}

impl fmt::Display for Arrayy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_list() {
            let inner = self
                .values()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            write!(f, "[{inner}]")
        } else {
            let inner = self
                .iter()
                .map(|(k, v)| format!("{k} => {v}"))
                .collect::<Vec<_>>()
                .join(", ");
            write!(f, "[{inner}]")
        }
    }
}

/// Lists serialize as JSON arrays, everything else as objects.
impl Serialize for Arrayy {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        if self.is_list() {
            let mut seq = serializer.serialize_seq(Some(self.len()))?;
            for value in self.values() {
                seq.serialize_element(value)?;
            }
            seq.end()
        } else {
            let mut map = serializer.serialize_map(Some(self.len()))?;
            for (key, value) in self.iter() {
                map.serialize_entry(&key.to_string(), value)?;
            }
            map.end()
        }
    }
}

impl FromIterator<Value> for Arrayy {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self::from_values(iter)
    }
}

impl FromIterator<(Key, Value)> for Arrayy {
    fn from_iter<I: IntoIterator<Item = (Key, Value)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}
