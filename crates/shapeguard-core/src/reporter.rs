//! Result Reporter: the only place the caller's callback is invoked
//!
//! Copyright (c) 2025 Shapeguard Team
//! Licensed under the Apache-2.0 license

use crate::context::{ErrorMode, ReportingContext};
use crate::result::{ValidationResult, ValidationTree};

/// Surface a result through the context's callback
///
/// Does nothing for valid results or when no context is given. Otherwise:
/// - `single`: the first error's message, once
/// - `multi`: every error's message, in order
/// - `json`: one JSON rendering of the tree; without a tree this falls back to
///   `single`
pub fn report(result: &ValidationResult, ctx: Option<&ReportingContext>) {
    let Some(ctx) = ctx else {
        return;
    };
    if result.valid {
        return;
    }

    match ctx.error_mode() {
        ErrorMode::Single => report_first(result, ctx),
        ErrorMode::Multi => {
            for error in &result.errors {
                ctx.report(&error.message);
            }
        }
        ErrorMode::Json => match &result.tree {
            Some(tree) => report_tree(tree, result, ctx),
            None => report_first(result, ctx),
        },
    }
}

fn report_first(result: &ValidationResult, ctx: &ReportingContext) {
    if let Some(error) = result.first_error() {
        ctx.report(&error.message);
    }
}

fn report_tree(tree: &ValidationTree, result: &ValidationResult, ctx: &ReportingContext) {
    match tree.to_json_string() {
        Ok(rendered) => ctx.report(&rendered),
        Err(e) => {
            tracing::warn!(identifier = ctx.identifier(), "{}; reporting first error instead", e);
            report_first(result, ctx);
        }
    }
}
