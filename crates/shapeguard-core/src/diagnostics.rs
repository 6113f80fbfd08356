//! Diagnostic message rendering
//!
//! Copyright (c) 2025 Shapeguard Team
//! Licensed under the Apache-2.0 license

use serde_json::Value;

/// Longest rendered value (in characters) that is embedded in a message
pub const MAX_RENDERED_VALUE_LEN: usize = 200;

/// Render a value as compact JSON; an absent value renders as `undefined`
pub fn render_value(value: Option<&Value>) -> String {
    match value {
        Some(value) => value.to_string(),
        None => "undefined".to_string(),
    }
}

/// Build `Expected <path> (<value>) to be "<expected>"`
///
/// The rendered value and its parentheses are dropped when the rendering is
/// longer than [`MAX_RENDERED_VALUE_LEN`] characters.
pub fn format_message(path: &str, value: Option<&Value>, expected: &str) -> String {
    let rendered = render_value(value);
    if rendered.chars().count() > MAX_RENDERED_VALUE_LEN {
        format!("Expected {} to be \"{}\"", path, expected)
    } else {
        format!("Expected {} ({}) to be \"{}\"", path, rendered, expected)
    }
}
