//! Shapeguard Core - schema-driven runtime shape validation
//!
//! This crate decides whether an untrusted [`serde_json::Value`] conforms to a
//! declarative [`Schema`] (property name to [`Validator`]) and reports the
//! mismatches it finds in one of three shapes:
//!
//! - **Single**: fail fast, report the first mismatch only
//! - **Multi**: visit every property, report every mismatch in schema order
//! - **Json**: visit every property, report one structured validation tree
//!
//! # Main Components
//!
//! - **Validator contract**: [`Validator`] with an explicit [`ValidatorKind`] tag
//! - **Object traversal**: [`ObjectValidator`] and the [`engine`] module
//! - **Results**: [`ValidationResult`], [`ValidationError`], [`ValidationTree`]
//! - **Reporting**: [`report`] invokes the caller's callback per [`ErrorMode`]
//!
//! # Example
//!
//! ```rust
//! use std::sync::{Arc, Mutex};
//! use serde_json::json;
//! use shapeguard_core::{validators, ErrorMode, ReportingContext, Schema, Validator};
//!
//! let user = validators::object(
//!     Schema::new()
//!         .field("name", validators::string())
//!         .field("age", validators::number()),
//! );
//!
//! let messages = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&messages);
//! let ctx = ReportingContext::new("user", move |msg: &str| {
//!     sink.lock().unwrap().push(msg.to_string());
//! })
//! .with_mode(ErrorMode::Multi);
//!
//! assert!(!user.validate(&json!({"name": 123, "age": "30"}), Some(&ctx)));
//! assert_eq!(messages.lock().unwrap().len(), 2);
//! ```
//!
//! Copyright (c) 2025 Shapeguard Team
//! Licensed under the Apache-2.0 license

pub mod context;
pub mod diagnostics;
pub mod engine;
pub mod error;
pub mod reporter;
pub mod result;
pub mod schema;
pub mod validator;
pub mod validators;

// Re-export main types for convenience
pub use context::{ErrorCallback, ErrorMode, ReportingContext, ValidationConfig, ValidationScope};
pub use diagnostics::{format_message, render_value, MAX_RENDERED_VALUE_LEN};
pub use engine::{combine_results, validate_object, validate_property, ObjectValidator};
pub use error::{Error, Result};
pub use reporter::report;
pub use result::{
    MismatchKind, ValidationError, ValidationErrors, ValidationResult, ValidationTree,
};
pub use schema::Schema;
pub use validator::{type_label, SharedValidator, Validator, ValidatorKind};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
