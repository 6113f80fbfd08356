//! Leaf predicates and combinators implementing the [`Validator`] contract
//!
//! Every constructor returns a validator that, when handed a
//! [`ReportingContext`] and failing, reports
//! `Expected <identifier> (<value>) to be "<label>"` through it. Combinators
//! forward the context to their members so element paths stay precise
//! (`tags[1]`).
//!
//! Copyright (c) 2025 Shapeguard Team
//! Licensed under the Apache-2.0 license

use crate::context::{ReportingContext, ValidationScope};
use crate::diagnostics::format_message;
use crate::engine::ObjectValidator;
use crate::result::{ValidationResult, ValidationTree};
use crate::schema::Schema;
use crate::validator::{type_label, SharedValidator, Validator, ValidatorKind};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Report a mismatch of `validator` through `ctx`, if any, and return `false`
fn mismatch(validator: &dyn Validator, value: &Value, ctx: Option<&ReportingContext>) -> bool {
    if let Some(ctx) = ctx {
        ctx.report(&format_message(ctx.identifier(), Some(value), &type_label(validator)));
    }
    false
}

/// Built-in check of a JSON-level type
#[derive(Debug, Clone, Copy)]
pub struct TypeCheck {
    name: &'static str,
    check: fn(&Value) -> bool,
}

impl Validator for TypeCheck {
    fn kind(&self) -> ValidatorKind {
        ValidatorKind::Primitive
    }

    fn name(&self) -> Option<&str> {
        Some(self.name)
    }

    fn validate(&self, value: &Value, ctx: Option<&ReportingContext>) -> bool {
        (self.check)(value) || mismatch(self, value, ctx)
    }
}

pub fn string() -> TypeCheck {
    TypeCheck {
        name: "isString",
        check: Value::is_string,
    }
}

pub fn number() -> TypeCheck {
    TypeCheck {
        name: "isNumber",
        check: Value::is_number,
    }
}

/// Numbers without a fractional part
pub fn integer() -> TypeCheck {
    TypeCheck {
        name: "isInteger",
        check: |value| value.is_i64() || value.is_u64(),
    }
}

pub fn boolean() -> TypeCheck {
    TypeCheck {
        name: "isBoolean",
        check: Value::is_boolean,
    }
}

pub fn null() -> TypeCheck {
    TypeCheck {
        name: "isNull",
        check: Value::is_null,
    }
}

pub fn any() -> TypeCheck {
    TypeCheck {
        name: "isAny",
        check: |_| true,
    }
}

/// Caller-defined primitive check
#[derive(Clone)]
pub struct Predicate {
    name: String,
    check: Arc<dyn Fn(&Value) -> bool + Send + Sync>,
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate").field("name", &self.name).finish_non_exhaustive()
    }
}

impl Validator for Predicate {
    fn kind(&self) -> ValidatorKind {
        ValidatorKind::Primitive
    }

    fn name(&self) -> Option<&str> {
        Some(self.name.as_str())
    }

    fn validate(&self, value: &Value, ctx: Option<&ReportingContext>) -> bool {
        (self.check)(value) || mismatch(self, value, ctx)
    }
}

/// Wrap a closure as a primitive validator
///
/// Name it `is<Type>` (`"isEmail"`) to have it labelled `"email"` in messages.
pub fn predicate<N, F>(name: N, check: F) -> Predicate
where
    N: Into<String>,
    F: Fn(&Value) -> bool + Send + Sync + 'static,
{
    Predicate {
        name: name.into(),
        check: Arc::new(check),
    }
}

/// Array whose every element passes `element`
#[derive(Debug, Clone)]
pub struct ArrayOf {
    element: SharedValidator,
}

impl Validator for ArrayOf {
    fn kind(&self) -> ValidatorKind {
        ValidatorKind::Combinator
    }

    fn name(&self) -> Option<&str> {
        Some("isArray")
    }

    fn validate(&self, value: &Value, ctx: Option<&ReportingContext>) -> bool {
        let Some(items) = value.as_array() else {
            return mismatch(self, value, ctx);
        };

        let mut valid = true;
        for (index, item) in items.iter().enumerate() {
            let item_ctx = ctx.map(|ctx| ctx.child_index(index));
            if !self.element.validate(item, item_ctx.as_ref()) {
                valid = false;
                if ctx.is_none() {
                    break;
                }
            }
        }
        valid
    }
}

pub fn array_of<V: Validator + 'static>(element: V) -> ArrayOf {
    ArrayOf {
        element: Arc::new(element),
    }
}

/// Passes when at least one member passes
#[derive(Debug, Clone)]
pub struct Union {
    members: Vec<SharedValidator>,
}

impl Validator for Union {
    fn kind(&self) -> ValidatorKind {
        ValidatorKind::Combinator
    }

    fn name(&self) -> Option<&str> {
        Some("isUnion")
    }

    fn validate(&self, value: &Value, ctx: Option<&ReportingContext>) -> bool {
        self.members.iter().any(|member| member.validate(value, None)) || mismatch(self, value, ctx)
    }
}

pub fn union(members: Vec<SharedValidator>) -> Union {
    Union { members }
}

/// Passes when every member passes
#[derive(Debug, Clone)]
pub struct Intersection {
    members: Vec<SharedValidator>,
}

impl Validator for Intersection {
    fn kind(&self) -> ValidatorKind {
        ValidatorKind::Combinator
    }

    fn name(&self) -> Option<&str> {
        Some("isIntersection")
    }

    fn validate(&self, value: &Value, ctx: Option<&ReportingContext>) -> bool {
        match ctx {
            // every failing member reports its own message
            Some(_) => self
                .members
                .iter()
                .fold(true, |valid, member| member.validate(value, ctx) && valid),
            None => self.members.iter().all(|member| member.validate(value, None)),
        }
    }
}

pub fn intersection(members: Vec<SharedValidator>) -> Intersection {
    Intersection { members }
}

/// Accepts `null` (or an absent property) in addition to what `inner` accepts
///
/// Takes on the kind and name of `inner`, so an optional nested object is
/// still traversed as a composite.
#[derive(Debug, Clone)]
pub struct Optional {
    inner: SharedValidator,
}

impl Validator for Optional {
    fn kind(&self) -> ValidatorKind {
        self.inner.kind()
    }

    fn name(&self) -> Option<&str> {
        self.inner.name()
    }

    fn validate(&self, value: &Value, ctx: Option<&ReportingContext>) -> bool {
        value.is_null() || self.inner.validate(value, ctx)
    }

    fn inspect(&self, value: &Value, scope: &ValidationScope) -> Option<ValidationResult> {
        if value.is_null() {
            let label = type_label(self);
            return Some(ValidationResult::valid(ValidationTree::leaf(
                scope.path.clone(),
                true,
                Some(label),
                Some(Value::Null),
            )));
        }
        self.inner.inspect(value, scope)
    }
}

pub fn optional<V: Validator + 'static>(inner: V) -> Optional {
    Optional {
        inner: Arc::new(inner),
    }
}

/// Nested object described by `schema`
pub fn object(schema: Schema) -> ObjectValidator {
    ObjectValidator::new(schema)
}
