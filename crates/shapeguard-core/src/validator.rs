//! Validator contract and type-label resolution
//!
//! Copyright (c) 2025 Shapeguard Team
//! Licensed under the Apache-2.0 license

use crate::context::{ReportingContext, ValidationScope};
use crate::result::ValidationResult;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Prefix of descriptive validator names (`isString`, `isNumber`, ...)
const NAME_PREFIX: &str = "is";

/// Which family a validator belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidatorKind {
    /// Checks a single JSON-level type or predicate
    Primitive,
    /// Delegates to a nested object traversal
    Composite,
    /// Built from other validators (array-of, union, intersection, ...)
    Combinator,
}

/// A check that a value conforms to an expected shape
///
/// `validate` is the boolean contract every validator honours: without a
/// context it is a pure check; with a context it additionally invokes the
/// context's callback at least once before returning `false`.
///
/// Composite validators also implement `inspect`, returning a full
/// [`ValidationResult`] for the subtree rooted at `scope.path`.
pub trait Validator: Send + Sync + fmt::Debug {
    fn kind(&self) -> ValidatorKind;

    /// Descriptive name following the `is<Type>` convention
    fn name(&self) -> Option<&str> {
        None
    }

    fn validate(&self, value: &Value, ctx: Option<&ReportingContext>) -> bool;

    /// Structured evaluation for composite validators
    fn inspect(&self, _value: &Value, _scope: &ValidationScope) -> Option<ValidationResult> {
        None
    }
}

/// Validators are shared between schemas
pub type SharedValidator = Arc<dyn Validator>;

impl<V: Validator + ?Sized> Validator for Arc<V> {
    fn kind(&self) -> ValidatorKind {
        (**self).kind()
    }

    fn name(&self) -> Option<&str> {
        (**self).name()
    }

    fn validate(&self, value: &Value, ctx: Option<&ReportingContext>) -> bool {
        (**self).validate(value, ctx)
    }

    fn inspect(&self, value: &Value, scope: &ValidationScope) -> Option<ValidationResult> {
        (**self).inspect(value, scope)
    }
}

/// Best-effort display name of the type a validator expects
///
/// `isString` yields `"string"`, an unnamed composite yields `"object"`,
/// anything else yields `"unknown"`.
pub fn type_label(validator: &dyn Validator) -> String {
    if let Some(rest) = validator
        .name()
        .and_then(|name| name.strip_prefix(NAME_PREFIX))
        .filter(|rest| !rest.is_empty())
    {
        return rest.to_lowercase();
    }

    match validator.kind() {
        ValidatorKind::Composite => "object".to_string(),
        _ => "unknown".to_string(),
    }
}
