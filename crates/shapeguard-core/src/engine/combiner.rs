//! Merging per-property results into one whole-object result
//!
//! Copyright (c) 2025 Shapeguard Team
//! Licensed under the Apache-2.0 license

use crate::result::{ValidationResult, ValidationTree};

/// Merge ordered `(property name, result)` pairs under `parent_path`
///
/// Validity is the conjunction of the inputs, errors are concatenated in input
/// order, and the tree is a new parent node with one child per input keyed by
/// its property name. Names are used verbatim, so keys containing `.` stay
/// distinct.
pub fn combine_results(results: Vec<(String, ValidationResult)>, parent_path: &str) -> ValidationResult {
    let valid = results.iter().all(|(_, result)| result.valid);
    let mut errors = Vec::new();
    let mut children = Vec::with_capacity(results.len());

    for (name, result) in results {
        errors.extend(result.errors);
        if let Some(tree) = result.tree {
            children.push((name, tree));
        }
    }

    ValidationResult {
        valid,
        errors,
        tree: Some(ValidationTree::branch(parent_path, valid, children)),
    }
}
