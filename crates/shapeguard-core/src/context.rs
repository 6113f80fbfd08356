//! Reporting context, traversal scope and caller configuration
//!
//! A [`ReportingContext`] is built once by the caller per top-level validation
//! call. The traversal itself only ever propagates the callback-free
//! [`ValidationScope`] derived from it, so nested validators can compute paths
//! without being able to fire the caller's callback.
//!
//! Copyright (c) 2025 Shapeguard Team
//! Licensed under the Apache-2.0 license

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Callback invoked with each rendered diagnostic message
pub type ErrorCallback = Arc<dyn Fn(&str) + Send + Sync>;

/// How many mismatches are collected and in what shape they are reported
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorMode {
    /// Stop at the first failing property and report it alone
    #[default]
    Single,
    /// Visit every property and report every mismatch in schema order
    Multi,
    /// Visit every property and report one JSON rendering of the validation tree
    Json,
}

impl fmt::Display for ErrorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorMode::Single => write!(f, "single"),
            ErrorMode::Multi => write!(f, "multi"),
            ErrorMode::Json => write!(f, "json"),
        }
    }
}

impl FromStr for ErrorMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "single" => Ok(ErrorMode::Single),
            "multi" => Ok(ErrorMode::Multi),
            "json" => Ok(ErrorMode::Json),
            _ => Err(Error::UnknownErrorMode {
                mode: s.to_string(),
            }),
        }
    }
}

/// Join a property name onto a dotted path
fn join_path(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", parent, name)
    }
}

/// Caller-visible reporting configuration for one validation call
#[derive(Clone)]
pub struct ReportingContext {
    identifier: String,
    callback: ErrorCallback,
    error_mode: ErrorMode,
}

impl ReportingContext {
    /// Create a context in the default `single` mode
    pub fn new<I, F>(identifier: I, callback: F) -> Self
    where
        I: Into<String>,
        F: Fn(&str) + Send + Sync + 'static,
    {
        Self::from_callback(identifier, Arc::new(callback))
    }

    /// Create a context around an already shared callback
    pub fn from_callback<I: Into<String>>(identifier: I, callback: ErrorCallback) -> Self {
        Self {
            identifier: identifier.into(),
            callback,
            error_mode: ErrorMode::default(),
        }
    }

    /// Set the error mode
    pub fn with_mode(mut self, mode: ErrorMode) -> Self {
        self.error_mode = mode;
        self
    }

    /// Path prefix used as the subject of every message
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn error_mode(&self) -> ErrorMode {
        self.error_mode
    }

    /// Create a child context for a named property
    pub fn child<P: AsRef<str>>(&self, name: P) -> Self {
        Self {
            identifier: join_path(&self.identifier, name.as_ref()),
            callback: Arc::clone(&self.callback),
            error_mode: self.error_mode,
        }
    }

    /// Create a child context for an array index
    pub fn child_index(&self, index: usize) -> Self {
        Self {
            identifier: format!("{}[{}]", self.identifier, index),
            callback: Arc::clone(&self.callback),
            error_mode: self.error_mode,
        }
    }

    /// Invoke the error callback with a rendered message
    pub fn report(&self, message: &str) {
        tracing::trace!(identifier = %self.identifier, "reporting: {}", message);
        (self.callback)(message);
    }

    /// The callback-free traversal scope rooted at this context
    pub fn scope(&self) -> ValidationScope {
        ValidationScope::new(self.identifier.clone(), self.error_mode)
    }
}

impl fmt::Debug for ReportingContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReportingContext")
            .field("identifier", &self.identifier)
            .field("error_mode", &self.error_mode)
            .finish_non_exhaustive()
    }
}

/// Path and mode propagated down the traversal
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationScope {
    /// Fully qualified path of the value being validated
    pub path: String,
    /// Collection strategy
    pub mode: ErrorMode,
}

impl ValidationScope {
    pub fn new<P: Into<String>>(path: P, mode: ErrorMode) -> Self {
        Self {
            path: path.into(),
            mode,
        }
    }

    /// Create a child scope for a named property
    pub fn child<P: AsRef<str>>(&self, name: P) -> Self {
        Self {
            path: join_path(&self.path, name.as_ref()),
            mode: self.mode,
        }
    }

}

/// Last dotted segment of a path (`"user.tags[1]"` yields `"tags[1]"`)
pub fn last_segment(path: &str) -> &str {
    path.rsplit('.').next().unwrap_or(path)
}

/// Serializable reporting configuration
///
/// Lets callers keep the identifier and error mode in a config file and attach
/// the callback at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Path prefix for every reported message
    #[serde(default = "default_identifier")]
    pub identifier: String,
    /// Error collection mode
    #[serde(default, alias = "errorMode")]
    pub error_mode: ErrorMode,
}

fn default_identifier() -> String {
    "value".to_string()
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            identifier: default_identifier(),
            error_mode: ErrorMode::Single,
        }
    }
}

impl ValidationConfig {
    /// Create a configuration reporting only the first mismatch
    pub fn single() -> Self {
        Self::default()
    }

    /// Create a configuration reporting every mismatch
    pub fn multi() -> Self {
        Self {
            error_mode: ErrorMode::Multi,
            ..Self::default()
        }
    }

    /// Create a configuration reporting the validation tree as JSON
    pub fn json() -> Self {
        Self {
            error_mode: ErrorMode::Json,
            ..Self::default()
        }
    }

    /// Set the identifier
    pub fn with_identifier<I: Into<String>>(mut self, identifier: I) -> Self {
        self.identifier = identifier.into();
        self
    }

    /// Attach a callback, producing a reporting context
    pub fn into_context<F>(self, callback: F) -> ReportingContext
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        ReportingContext::new(self.identifier, callback).with_mode(self.error_mode)
    }

    /// The callback-free scope for this configuration
    pub fn scope(&self) -> ValidationScope {
        ValidationScope::new(self.identifier.clone(), self.error_mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn test_error_mode_defaults_to_single() {
        assert_eq!(ErrorMode::default(), ErrorMode::Single);
    }

    #[test]
    fn test_error_mode_from_str() {
        assert_eq!("multi".parse::<ErrorMode>().unwrap(), ErrorMode::Multi);
        assert_eq!(" JSON ".parse::<ErrorMode>().unwrap(), ErrorMode::Json);
        assert!(matches!(
            "verbose".parse::<ErrorMode>(),
            Err(Error::UnknownErrorMode { .. })
        ));
    }

    #[test]
    fn test_child_paths() {
        let ctx = ReportingContext::new("user", |_: &str| {});
        assert_eq!(ctx.child("address").identifier(), "user.address");
        assert_eq!(
            ctx.child("address").child("zipCode").identifier(),
            "user.address.zipCode"
        );
        assert_eq!(ctx.child("tags").child_index(2).identifier(), "user.tags[2]");

        let root = ValidationScope::default();
        assert_eq!(root.child("name").path, "name");
        assert_eq!(root.child("a").child("b").path, "a.b");
    }

    #[test]
    fn test_child_keeps_callback_and_mode() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let ctx = ReportingContext::new("root", move |msg: &str| {
            sink.lock().unwrap().push(msg.to_string());
        })
        .with_mode(ErrorMode::Json);

        let child = ctx.child("nested");
        assert_eq!(child.error_mode(), ErrorMode::Json);
        child.report("hello");
        assert_eq!(*seen.lock().unwrap(), vec!["hello".to_string()]);
    }

    #[test]
    fn test_from_callback_shares_one_callback() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let callback: ErrorCallback = Arc::new(move |msg: &str| {
            sink.lock().unwrap().push(msg.to_string());
        });

        let orders = ReportingContext::from_callback("order", Arc::clone(&callback));
        let users = ReportingContext::from_callback("user", callback).with_mode(ErrorMode::Multi);
        assert_eq!(orders.error_mode(), ErrorMode::Single);
        assert_eq!(users.identifier(), "user");

        orders.report("first");
        users.child("name").report("second");
        assert_eq!(*seen.lock().unwrap(), vec!["first".to_string(), "second".to_string()]);
    }

    #[test]
    fn test_last_segment() {
        assert_eq!(last_segment("user"), "user");
        assert_eq!(last_segment("user.profile.age"), "age");
        assert_eq!(last_segment("user.tags[1]"), "tags[1]");
    }

    #[test]
    fn test_config_deserialize() {
        let config: ValidationConfig =
            serde_json::from_str(r#"{"identifier": "order", "errorMode": "json"}"#).unwrap();
        assert_eq!(config.identifier, "order");
        assert_eq!(config.error_mode, ErrorMode::Json);

        let config: ValidationConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ValidationConfig::default());
    }

    #[test]
    fn test_config_builders() {
        let config = ValidationConfig::multi().with_identifier("payload");
        assert_eq!(config.error_mode, ErrorMode::Multi);
        let ctx = config.into_context(|_: &str| {});
        assert_eq!(ctx.identifier(), "payload");
        assert_eq!(ctx.error_mode(), ErrorMode::Multi);
        assert_eq!(ValidationConfig::json().scope().mode, ErrorMode::Json);
    }
}
