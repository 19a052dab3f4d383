//! # Property-Based Tests
//!
//! Classifier and resolver invariants checked with proptest.

use proptest::prelude::*;
use tristage_core::classify::*;
use tristage_core::{Stage, TristageError, Value, resolve};

fn any_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Undefined),
        Just(Value::Null),
        Just(Value::Object),
        ".*".prop_map(Value::String),
        "[ \t\r\n]{0,8}".prop_map(Value::String),
        any::<f64>().prop_map(Value::Number),
        any::<bool>().prop_map(Value::Boolean),
    ]
}

// =============================================================================
// PROPERTY TESTS
// =============================================================================

proptest! {
    /// Classifiers are pure: same input, same answer, no side effects.
    #[test]
    fn classifiers_are_idempotent(value in any_value()) {
        let predicates: [fn(&Value) -> bool; 12] = [
            is_null,
            is_undefined,
            is_null_or_undefined,
            is_string,
            is_empty_string,
            is_empty_or_whitespace_string,
            is_null_or_string_and_empty_or_whitespace,
            is_undefined_or_string_and_empty_or_whitespace,
            is_null_or_undefined_or_string_and_empty_or_whitespace,
            is_number,
            is_number_and_finite,
            is_boolean,
        ];
        for predicate in predicates {
            prop_assert_eq!(predicate(&value), predicate(&value));
        }
    }

    /// A string is blank iff its trimmed form is empty.
    #[test]
    fn whitespace_string_matches_trim(s in ".*") {
        let value = Value::String(s.clone());
        prop_assert_eq!(is_empty_or_whitespace_string(&value), s.trim().is_empty());
    }

    /// Empty strings are always blank strings.
    #[test]
    fn empty_string_implies_blank(value in any_value()) {
        if is_empty_string(&value) {
            prop_assert!(is_empty_or_whitespace_string(&value));
        }
    }

    /// The union predicate is exactly absence or blank string.
    #[test]
    fn union_predicate_definition(value in any_value()) {
        let expected = match &value {
            Value::Null | Value::Undefined => true,
            Value::String(s) => s.trim().is_empty(),
            _ => false,
        };
        prop_assert_eq!(
            is_null_or_undefined_or_string_and_empty_or_whitespace(&value),
            expected
        );
    }

    /// The union predicate is the disjunction of its two one-sided siblings.
    #[test]
    fn union_is_disjunction_of_siblings(value in any_value()) {
        prop_assert_eq!(
            is_null_or_undefined_or_string_and_empty_or_whitespace(&value),
            is_null_or_string_and_empty_or_whitespace(&value)
                || is_undefined_or_string_and_empty_or_whitespace(&value)
        );
    }

    /// Finite numbers are numbers.
    #[test]
    fn finite_implies_number(n in any::<f64>()) {
        let value = Value::Number(n);
        prop_assert!(is_number(&value));
        prop_assert_eq!(is_number_and_finite(&value), n.is_finite());
    }

    /// Any string other than the two non-terminal identifiers or a blank one
    /// fails, and the error carries the raw value.
    #[test]
    fn resolver_rejects_unknown_strings(s in ".*") {
        prop_assume!(!s.trim().is_empty());
        prop_assume!(s != "pre-run" && s != "run");

        prop_assert_eq!(resolve(&Value::String(s.clone())), Err(TristageError::InvalidStage(s)));
    }

    /// Each non-terminal stage resolves to its successor.
    #[test]
    fn resolver_follows_stage_order(index in 0usize..2) {
        let previous = Stage::ALL[index];
        let resolved = resolve(&Value::from(previous.as_str()));
        prop_assert_eq!(resolved, Ok(Stage::ALL[index + 1]));
        prop_assert_eq!(previous.next(), Some(Stage::ALL[index + 1]));
    }
}
