//! Property name to validator mapping
//!
//! Copyright (c) 2025 Shapeguard Team
//! Licensed under the Apache-2.0 license

use crate::validator::{SharedValidator, Validator};
use std::sync::Arc;

/// Static mapping from property name to the validator for its value
///
/// Keys iterate in declaration order; that order decides which mismatch
/// single mode reports and the order of errors in multi mode.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    fields: Vec<(String, SharedValidator)>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a property (builder style)
    pub fn field<K, V>(mut self, name: K, validator: V) -> Self
    where
        K: Into<String>,
        V: Validator + 'static,
    {
        self.insert(name, Arc::new(validator));
        self
    }

    /// Declare a property with an already shared validator
    ///
    /// Redeclaring a name replaces its validator in place.
    pub fn insert<K: Into<String>>(&mut self, name: K, validator: SharedValidator) {
        let name = name.into();
        match self.fields.iter_mut().find(|(key, _)| *key == name) {
            Some((_, existing)) => *existing = validator,
            None => self.fields.push((name, validator)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&SharedValidator> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, validator)| validator)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SharedValidator)> {
        self.fields.iter().map(|(key, validator)| (key.as_str(), validator))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, SharedValidator)> for Schema {
    fn from_iter<T: IntoIterator<Item = (K, SharedValidator)>>(iter: T) -> Self {
        let mut schema = Schema::new();
        for (name, validator) in iter {
            schema.insert(name, validator);
        }
        schema
    }
}
