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

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ArrayyError>;

/// Errors raised by the static facade and by collection methods.
///
/// Every variant carries a stable error code (see [`ArrayyError::code`])
/// so callers can match on failures without parsing messages.
#[derive(Debug, Error)]
pub enum ArrayyError {
    /// The requested method is not part of the collection's method table.
    #[error("{method} is not a valid method")]
    UnsupportedOperation { method: String },

    /// An argument had an acceptable type but an unusable value, or a
    /// generator received the wrong kind of value.
    #[error("{message}")]
    InvalidArgument { message: String },

    /// A method received fewer or more arguments than it declares.
    #[error("{method}() expects {} argument(s), got {got}", arity_text(.min, .max))]
    WrongArgCount {
        method: &'static str,
        min: usize,
        max: usize,
        got: usize,
    },

    /// A method argument had the wrong runtime type.
    #[error("{method}() expected {expected}, got {got}")]
    WrongArgType {
        method: &'static str,
        expected: &'static str,
        got: &'static str,
    },

    /// JSON input could not be parsed or output could not be produced.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ArrayyError {
    /// Unknown method name.
    pub fn unsupported(method: impl Into<String>) -> Self {
        Self::UnsupportedOperation {
            method: method.into(),
        }
    }

    /// Invalid argument value.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Stable error code (`E_UNSUPPORTED`, `E_ARGUMENT`, …)
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnsupportedOperation { .. } => "E_UNSUPPORTED",
            Self::InvalidArgument { .. } => "E_ARGUMENT",
            Self::WrongArgCount { .. } => "E_ARITY",
            Self::WrongArgType { .. } => "E_TYPE",
            Self::Json(_) => "E_JSON",
        }
    }

    /// Optional help text to show next to the message.
    pub fn help(&self) -> Option<String> {
        match self {
            Self::UnsupportedOperation { .. } => {
                Some("see `pawx_arrayy::method_names()` for the supported methods".to_string())
            }
            Self::WrongArgCount { method, min, max, .. } => Some(format!(
                "call {method}() with {} argument(s)",
                arity_text(min, max)
            )),
            _ => None,
        }
    }
}

fn arity_text(min: &usize, max: &usize) -> String {
    if min == max {
        min.to_string()
    } else {
        format!("{min} to {max}")
    }
}
