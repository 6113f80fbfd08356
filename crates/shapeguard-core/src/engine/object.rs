//! Object Validator: the traversal orchestrator
//!
//! A value first has to be a non-null JSON object. Its schema keys are then
//! visited in declaration order using one of two strategies:
//!
//! - `single`: each property is checked in isolation and the first failure
//!   ends the traversal (fail fast)
//! - `multi` / `json`: every property is checked and the results are merged
//!   by the combiner into one parent node
//!
//! Copyright (c) 2025 Shapeguard Team
//! Licensed under the Apache-2.0 license

use super::combiner::combine_results;
use super::property::validate_property;
use crate::context::{ErrorMode, ReportingContext, ValidationScope};
use crate::reporter::report;
use crate::result::{ValidationError, ValidationResult, ValidationTree};
use crate::schema::Schema;
use crate::validator::{Validator, ValidatorKind};
use serde_json::Value;

/// Validate `value` against `schema` at `scope`
///
/// Never invokes a callback; see [`ObjectValidator::evaluate`] for the
/// reporting entry point.
pub fn validate_object(value: &Value, schema: &Schema, scope: &ValidationScope) -> ValidationResult {
    let Some(object) = value.as_object() else {
        tracing::debug!(path = %scope.path, "value is not a non-null object");
        let error = ValidationError::shape(scope.path.clone(), Some(value.clone()));
        return match scope.mode {
            // json mode reports through the tree only
            ErrorMode::Json => ValidationResult {
                valid: false,
                errors: Vec::new(),
                tree: Some(ValidationTree::failed_leaf(error)),
            },
            ErrorMode::Single | ErrorMode::Multi => ValidationResult::invalid(error),
        };
    };

    tracing::debug!(
        path = %scope.path,
        mode = %scope.mode,
        properties = schema.len(),
        "validating object"
    );

    match scope.mode {
        ErrorMode::Single => {
            for (name, validator) in schema.iter() {
                let result = validate_property(name, object.get(name), validator.as_ref(), scope);
                if !result.valid {
                    tracing::debug!(path = %scope.path, property = name, "stopping at first failing property");
                    return combine_results(vec![(name.to_string(), result)], &scope.path);
                }
            }
            ValidationResult::valid(ValidationTree::leaf(scope.path.clone(), true, None, None))
        }
        ErrorMode::Multi | ErrorMode::Json => {
            let results = schema
                .iter()
                .map(|(name, validator)| {
                    let result = validate_property(name, object.get(name), validator.as_ref(), scope);
                    (name.to_string(), result)
                })
                .collect();
            combine_results(results, &scope.path)
        }
    }
}

/// Composite validator for objects described by a [`Schema`]
#[derive(Debug, Clone, Default)]
pub struct ObjectValidator {
    schema: Schema,
}

impl ObjectValidator {
    pub fn new(schema: Schema) -> Self {
        Self { schema }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Traverse without reporting
    pub fn check(&self, value: &Value, scope: &ValidationScope) -> ValidationResult {
        validate_object(value, &self.schema, scope)
    }

    /// Traverse with the context's identifier and mode, then report through
    /// its callback
    ///
    /// Without a context the traversal runs in single mode at an empty path
    /// and nothing is reported.
    pub fn evaluate(&self, value: &Value, ctx: Option<&ReportingContext>) -> ValidationResult {
        let scope = ctx.map(ReportingContext::scope).unwrap_or_default();
        let result = self.check(value, &scope);
        report(&result, ctx);
        result
    }
}

impl From<Schema> for ObjectValidator {
    fn from(schema: Schema) -> Self {
        Self::new(schema)
    }
}

impl Validator for ObjectValidator {
    fn kind(&self) -> ValidatorKind {
        ValidatorKind::Composite
    }

    fn validate(&self, value: &Value, ctx: Option<&ReportingContext>) -> bool {
        self.evaluate(value, ctx).valid
    }

    fn inspect(&self, value: &Value, scope: &ValidationScope) -> Option<ValidationResult> {
        Some(self.check(value, scope))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::MismatchKind;
    use crate::validators;
    use serde_json::json;

    fn user_schema() -> Schema {
        Schema::new()
            .field("name", validators::string())
            .field("age", validators::number())
    }

    fn scope(mode: ErrorMode) -> ValidationScope {
        ValidationScope::new("user", mode)
    }

    #[test]
    fn test_valid_object_in_every_mode() {
        let value = json!({"name": "John", "age": 30});
        for mode in [ErrorMode::Single, ErrorMode::Multi, ErrorMode::Json] {
            let result = validate_object(&value, &user_schema(), &scope(mode));
            assert!(result.valid, "mode {mode}");
            assert!(result.errors.is_empty(), "mode {mode}");
            assert!(result.tree.unwrap().valid);
        }
    }

    #[test]
    fn test_non_objects_are_shape_mismatches() {
        for value in [json!(null), json!(42), json!("user"), json!([1, 2])] {
            let result = validate_object(&value, &user_schema(), &scope(ErrorMode::Multi));
            assert!(!result.valid);
            assert_eq!(result.errors.len(), 1);
            assert_eq!(result.errors[0].kind, MismatchKind::ShapeMismatch);
            assert_eq!(result.errors[0].path, "user");
            assert_eq!(result.errors[0].expected_type, "non-null object");
        }
    }

    #[test]
    fn test_json_mode_keeps_shape_mismatch_on_tree_only() {
        let result = validate_object(&json!(null), &user_schema(), &scope(ErrorMode::Json));
        assert!(!result.valid);
        assert!(result.errors.is_empty());
        let tree = result.tree.unwrap();
        assert_eq!(tree.errors.len(), 1);
        assert_eq!(tree.expected_type.as_deref(), Some("non-null object"));
    }

    #[test]
    fn test_single_mode_stops_at_first_failure() {
        let result = validate_object(
            &json!({"name": 123, "age": "30"}),
            &user_schema(),
            &scope(ErrorMode::Single),
        );
        assert!(!result.valid);
        assert_eq!(result.messages(), vec!["Expected user.name (123) to be \"string\""]);

        let tree = result.tree.unwrap();
        assert!(tree.child("name").is_some());
        assert!(tree.child("age").is_none());
    }

    #[test]
    fn test_multi_mode_collects_every_failure() {
        let result = validate_object(
            &json!({"name": 123, "age": "30"}),
            &user_schema(),
            &scope(ErrorMode::Multi),
        );
        let paths: Vec<_> = result.errors.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, vec!["user.name", "user.age"]);
    }

    #[test]
    fn test_extra_properties_are_ignored() {
        let result = validate_object(
            &json!({"name": "John", "age": 30, "admin": true}),
            &user_schema(),
            &scope(ErrorMode::Multi),
        );
        assert!(result.valid);
        assert_eq!(result.tree.unwrap().children.len(), 2);
    }

    #[test]
    fn test_nested_failure_keeps_full_path() {
        let schema = Schema::new().field(
            "profile",
            validators::object(Schema::new().field(
                "address",
                validators::object(Schema::new().field("zipCode", validators::string())),
            )),
        );
        let value = json!({"profile": {"address": {"zipCode": 12345}}});

        for mode in [ErrorMode::Single, ErrorMode::Multi] {
            let result = validate_object(&value, &schema, &scope(mode));
            assert_eq!(result.errors.len(), 1);
            assert_eq!(result.errors[0].path, "user.profile.address.zipCode");
        }
    }

    #[test]
    fn test_multi_mode_counts_each_nested_leaf() {
        let schema = Schema::new().field(
            "profile",
            validators::object(
                Schema::new()
                    .field("age", validators::number())
                    .field("city", validators::string()),
            ),
        );
        let result = validate_object(
            &json!({"profile": {"age": "x", "city": 1}}),
            &schema,
            &scope(ErrorMode::Multi),
        );
        assert!(!result.valid);
        let paths: Vec<_> = result.errors.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, vec!["user.profile.age", "user.profile.city"]);
    }

    #[test]
    fn test_dotted_keys_keep_separate_tree_nodes() {
        let schema = Schema::new()
            .field("billing.id", validators::string())
            .field("shipping.id", validators::number());
        let result = validate_object(
            &json!({"billing.id": 1, "shipping.id": 2}),
            &schema,
            &ValidationScope::new("order", ErrorMode::Json),
        );
        assert!(!result.valid);

        let tree = result.tree.unwrap();
        assert_eq!(tree.children.len(), 2);
        let billing = tree.child("billing.id").unwrap();
        assert!(!billing.valid);
        assert_eq!(billing.expected_type.as_deref(), Some("string"));
        assert!(tree.child("shipping.id").unwrap().valid);

        let rendered = tree.to_json();
        assert_eq!(
            rendered["order"]["value"]["billing.id"],
            json!({"valid": false, "value": 1, "expectedType": "string"})
        );
        assert_eq!(rendered["order"]["value"]["shipping.id"], json!({"valid": true, "value": 2}));
    }

    #[test]
    fn test_json_mode_shape_mismatch_into_result_carries_message() {
        let err = validate_object(&json!(null), &user_schema(), &scope(ErrorMode::Json))
            .into_result()
            .unwrap_err();
        assert!(err.to_string().contains("Expected user (null) to be \"non-null object\""));
    }

    #[test]
    fn test_object_validator_without_context() {
        let validator = ObjectValidator::new(user_schema());
        assert!(validator.validate(&json!({"name": "a", "age": 1}), None));
        assert!(!validator.validate(&json!({"name": "a"}), None));
        assert_eq!(validator.kind(), ValidatorKind::Composite);
        assert_eq!(validator.name(), None);
        assert_eq!(validator.schema().len(), 2);
    }
}
