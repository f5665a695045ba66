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

//! Fluent ordered arrays with a static call facade.
//!
//! - [`Arrayy`] is an ordered key → value collection whose methods can be
//!   called by name through [`Arrayy::invoke`].
//! - [`StaticArrayy`] lets those same methods be called statically, with
//!   the subject array as the first argument, and adds the `range` and
//!   `repeat` generators.

pub mod arrayy;
pub mod error;
pub mod globals;
pub mod value;

pub use arrayy::{lookup, method_names, Arrayy, MethodDef, MAX_ARRAY_SIZE, METHODS};
pub use error::{ArrayyError, Result};
pub use globals::{static_arg_count, CallRequest, StaticArrayy};
pub use value::{Key, NativeFn, Value};
