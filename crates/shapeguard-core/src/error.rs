//! Error types for the Shapeguard core library
//!
//! Shape mismatches are ordinary data ([`crate::ValidationError`]) and never
//! surface through this type on their own. [`Error`] covers the few operations
//! that can genuinely fail around the traversal: parsing configuration,
//! serializing the diagnostic tree, and callers opting into `Result`-style
//! handling of a failed validation.
//!
//! Copyright (c) 2025 Shapeguard Team
//! Licensed under the Apache-2.0 license

use crate::result::ValidationErrors;
use thiserror::Error;

/// Main error type for Shapeguard operations
#[derive(Error, Debug)]
pub enum Error {
    /// An error mode string that is not `single`, `multi` or `json`
    #[error("Unknown error mode: {mode} (expected one of: single, multi, json)")]
    UnknownErrorMode { mode: String },

    /// JSON rendering of a validation tree failed
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// A validated value did not conform to its schema
    #[error("{0}")]
    Invalid(ValidationErrors),
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Wrap a serde_json failure with a short description of what was being rendered
    pub fn json<M: Into<String>>(message: M, source: serde_json::Error) -> Self {
        Error::Json {
            message: message.into(),
            source,
        }
    }
}
