//! Validation results, errors and the diagnostic tree
//!
//! Copyright (c) 2025 Shapeguard Team
//! Licensed under the Apache-2.0 license

use crate::context::last_segment;
use crate::diagnostics::format_message;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use thiserror::Error;

/// Expected-type label of values that must be JSON objects
pub const NON_NULL_OBJECT: &str = "non-null object";

/// What kind of mismatch a [`ValidationError`] records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MismatchKind {
    /// The value is not a non-null object
    ShapeMismatch,
    /// A property failed its validator
    PropertyMismatch,
}

/// One failed check at a fully qualified path
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct ValidationError {
    pub kind: MismatchKind,
    /// Dotted/bracketed path to the offending value
    pub path: String,
    pub expected_type: String,
    /// Offending value; `None` when the property was absent
    pub actual: Option<Value>,
    /// Rendered diagnostic message
    pub message: String,
}

impl ValidationError {
    /// Create an error for a property that failed its validator
    pub fn property<P, E>(path: P, expected_type: E, actual: Option<Value>) -> Self
    where
        P: Into<String>,
        E: Into<String>,
    {
        Self::build(MismatchKind::PropertyMismatch, path.into(), expected_type.into(), actual)
    }

    /// Create an error for a value that is not a non-null object
    pub fn shape<P: Into<String>>(path: P, actual: Option<Value>) -> Self {
        Self::build(
            MismatchKind::ShapeMismatch,
            path.into(),
            NON_NULL_OBJECT.to_string(),
            actual,
        )
    }

    fn build(kind: MismatchKind, path: String, expected_type: String, actual: Option<Value>) -> Self {
        let message = format_message(&path, actual.as_ref(), &expected_type);
        Self {
            kind,
            path,
            expected_type,
            actual,
            message,
        }
    }
}

/// Multiple validation errors collected from one traversal
#[derive(Debug, Clone, Default, PartialEq, Error, Serialize, Deserialize)]
pub struct ValidationErrors {
    pub errors: Vec<ValidationError>,
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Validation failed:")?;
        for (i, error) in self.iter().enumerate() {
            write!(f, "\n{}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.errors.iter()
    }
}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        Self {
            errors: vec![error],
        }
    }
}

impl From<Vec<ValidationError>> for ValidationErrors {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self { errors }
    }
}

/// Node of the tree mirroring the validated value
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationTree {
    pub path: String,
    pub valid: bool,
    pub expected_type: Option<String>,
    /// Captured actual value (leaves only)
    pub value: Option<Value>,
    /// Children keyed by property name, in schema order
    pub children: Vec<(String, ValidationTree)>,
    /// Errors rooted at this node
    pub errors: Vec<ValidationError>,
}

impl ValidationTree {
    /// Create a childless node
    pub fn leaf<P: Into<String>>(
        path: P,
        valid: bool,
        expected_type: Option<String>,
        value: Option<Value>,
    ) -> Self {
        Self {
            path: path.into(),
            valid,
            expected_type,
            value,
            children: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Create a leaf node carrying the error it failed with
    pub fn failed_leaf(error: ValidationError) -> Self {
        Self {
            path: error.path.clone(),
            valid: false,
            expected_type: Some(error.expected_type.clone()),
            value: error.actual.clone(),
            children: Vec::new(),
            errors: vec![error],
        }
    }

    /// Create a parent node over already built children
    pub fn branch<P: Into<String>>(
        path: P,
        valid: bool,
        children: Vec<(String, ValidationTree)>,
    ) -> Self {
        Self {
            path: path.into(),
            valid,
            expected_type: None,
            value: None,
            children,
            errors: Vec::new(),
        }
    }

    /// Key of this node when rendered as a root: the last segment of its path
    pub fn key(&self) -> &str {
        last_segment(&self.path)
    }

    pub fn child(&self, key: &str) -> Option<&ValidationTree> {
        self.children
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, node)| node)
    }

    /// Flatten into the `{ key: { valid, value, expectedType? } }` wire shape
    pub fn to_json(&self) -> Value {
        let mut root = Map::new();
        root.insert(self.key().to_string(), self.node_json());
        Value::Object(root)
    }

    /// Serialize [`ValidationTree::to_json`] to a string
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string(&self.to_json())
            .map_err(|e| Error::json(format!("failed to render validation tree at '{}'", self.path), e))
    }

    fn node_json(&self) -> Value {
        let mut node = Map::new();
        node.insert("valid".to_string(), Value::Bool(self.valid));

        let value = if self.children.is_empty() {
            self.value.clone().unwrap_or(Value::Null)
        } else {
            let children: Map<String, Value> = self
                .children
                .iter()
                .map(|(key, child)| (key.clone(), child.node_json()))
                .collect();
            Value::Object(children)
        };
        node.insert("value".to_string(), value);

        if !self.valid {
            if let Some(expected) = &self.expected_type {
                node.insert("expectedType".to_string(), Value::String(expected.clone()));
            }
        }

        Value::Object(node)
    }
}

/// Outcome of any validation step
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationResult {
    pub valid: bool,
    /// Errors actually collected; how many depends on the error mode
    pub errors: Vec<ValidationError>,
    pub tree: Option<ValidationTree>,
}

impl ValidationResult {
    /// A passing result with the given tree
    pub fn valid(tree: ValidationTree) -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            tree: Some(tree),
        }
    }

    /// A failing result carrying one error and its leaf node
    pub fn invalid(error: ValidationError) -> Self {
        Self {
            valid: false,
            tree: Some(ValidationTree::failed_leaf(error.clone())),
            errors: vec![error],
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn first_error(&self) -> Option<&ValidationError> {
        self.errors.first()
    }

    /// Rendered messages of the collected errors, in order
    pub fn messages(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.message.as_str()).collect()
    }

    /// Convert into a `Result`, failing with the collected errors
    ///
    /// When nothing was collected (a json-mode shape mismatch) the errors
    /// attached to the tree root are used instead.
    pub fn into_result(self) -> Result<()> {
        if self.valid {
            return Ok(());
        }
        let errors = if self.errors.is_empty() {
            self.tree.map(|tree| tree.errors).unwrap_or_default()
        } else {
            self.errors
        };
        Err(Error::Invalid(ValidationErrors::from(errors)))
    }
}
