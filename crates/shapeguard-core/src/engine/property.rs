//! Validation of one named property
//!
//! Copyright (c) 2025 Shapeguard Team
//! Licensed under the Apache-2.0 license

use crate::context::{ErrorMode, ValidationScope};
use crate::result::{ValidationError, ValidationResult, ValidationTree};
use crate::validator::{type_label, Validator, ValidatorKind};
use serde_json::Value;

/// Stand-in handed to validators for absent properties
static ABSENT: Value = Value::Null;

/// Validate the property `name` of the object at `scope`
///
/// `value` is `None` when the object has no such property. Present composite
/// values are traversed with a child scope and their subtree is returned as
/// is; everything else is checked without a context and turned into a leaf
/// here, so paths and expected-type labels stay under the engine's control.
pub fn validate_property(
    name: &str,
    value: Option<&Value>,
    validator: &dyn Validator,
    scope: &ValidationScope,
) -> ValidationResult {
    let child = scope.child(name);

    if let (ValidatorKind::Composite, Some(present)) = (validator.kind(), value) {
        if let Some(result) = validator.inspect(present, &child) {
            tracing::trace!(path = %child.path, valid = result.valid, "composite property checked");
            return result;
        }
    }

    let expected = type_label(validator);
    let valid = validator.validate(value.unwrap_or(&ABSENT), None);
    tracing::trace!(path = %child.path, expected = %expected, valid, "property checked");

    if valid {
        // Single mode never renders the tree, so passing values are not captured
        let captured = match child.mode {
            ErrorMode::Single => None,
            ErrorMode::Multi | ErrorMode::Json => value.cloned(),
        };
        ValidationResult::valid(ValidationTree::leaf(child.path, true, Some(expected), captured))
    } else {
        ValidationResult::invalid(ValidationError::property(child.path, expected, value.cloned()))
    }
}
