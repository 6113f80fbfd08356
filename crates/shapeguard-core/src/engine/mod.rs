//! Schema-driven object traversal
//!
//! The engine is organized into focused modules:
//! - `object`: the Object Validator orchestrating the three traversal strategies
//! - `property`: validation of one named property against one validator
//! - `combiner`: merging per-property results into a whole-object result
//!
//! Copyright (c) 2025 Shapeguard Team
//! Licensed under the Apache-2.0 license

pub mod combiner;
pub mod object;
pub mod property;

// Re-export public API
pub use combiner::combine_results;
pub use object::{validate_object, ObjectValidator};
pub use property::validate_property;
