//! # Value Classifiers
//!
//! Pure predicates over [`Value`]. Every function is total: it accepts any
//! value, including `Undefined` and `Null`, and never fails.
//!
//! Blank means "string whose trimmed length is zero". The three
//! absence-or-blank predicates differ only in which absence they accept:
//!
//! | Predicate | `Null` | `Undefined` | blank string |
//! |-----------|--------|-------------|--------------|
//! | [`is_null_or_string_and_empty_or_whitespace`] | yes | no | yes |
//! | [`is_undefined_or_string_and_empty_or_whitespace`] | no | yes | yes |
//! | [`is_null_or_undefined_or_string_and_empty_or_whitespace`] | yes | yes | yes |

use crate::Value;

/// `true` iff the value is `Null`.
#[must_use]
pub fn is_null(value: &Value) -> bool {
    matches!(value, Value::Null)
}

/// `true` iff the value is `Undefined`.
#[must_use]
pub fn is_undefined(value: &Value) -> bool {
    matches!(value, Value::Undefined)
}

#[must_use]
pub fn is_null_or_undefined(value: &Value) -> bool {
    is_null(value) || is_undefined(value)
}

/// `true` iff the value is a string.
#[must_use]
pub fn is_string(value: &Value) -> bool {
    matches!(value, Value::String(_))
}

/// `true` iff the value is a string of length exactly zero.
#[must_use]
pub fn is_empty_string(value: &Value) -> bool {
    value.as_str().is_some_and(str::is_empty)
}

/// `true` iff the value is a string that is empty after trimming whitespace.
#[must_use]
pub fn is_empty_or_whitespace_string(value: &Value) -> bool {
    value.as_str().is_some_and(|s| s.trim().is_empty())
}

/// `true` iff the value is `Null` or a blank string. `Undefined` does not match.
#[must_use]
pub fn is_null_or_string_and_empty_or_whitespace(value: &Value) -> bool {
    is_null(value) || is_empty_or_whitespace_string(value)
}

/// `true` iff the value is `Undefined` or a blank string. `Null` does not match.
#[must_use]
pub fn is_undefined_or_string_and_empty_or_whitespace(value: &Value) -> bool {
    is_undefined(value) || is_empty_or_whitespace_string(value)
}

/// `true` iff the value is `Null`, `Undefined`, or a blank string.
///
/// This is the check the stage resolver uses to detect a fresh run.
#[must_use]
pub fn is_null_or_undefined_or_string_and_empty_or_whitespace(value: &Value) -> bool {
    is_null_or_undefined(value) || is_empty_or_whitespace_string(value)
}

/// `true` iff the value is a number, finite or not.
#[must_use]
pub fn is_number(value: &Value) -> bool {
    matches!(value, Value::Number(_))
}

/// `true` iff the value is a number that is neither NaN nor infinite.
#[must_use]
pub fn is_number_and_finite(value: &Value) -> bool {
    matches!(value, Value::Number(n) if n.is_finite())
}

#[must_use]
pub fn is_boolean(value: &Value) -> bool {
    matches!(value, Value::Boolean(_))
}

// =============================================================================
// TESTS
// =============================================================================
