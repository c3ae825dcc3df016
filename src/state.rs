//! Render state for template instantiation
//!
//! This module defines [`State`], the flat key-value mapping a template is
//! resolved against. One `State` is built per render call, owned by the
//! caller, and never retained by the engine.
//!
//! # Flatness
//!
//! State values are scalar strings only. There is no nested-object
//! resolution: a directive expression names exactly one key. Constructors
//! that accept structured input ([`State::from_json`],
//! [`State::from_serialize`]) reject nested objects and arrays instead of
//! guessing a flattening scheme.
//!
//! # Truthiness
//!
//! Visibility directives coerce values with string-based rules: a missing
//! key or empty-string value is false, any other string is true. This is
//! deliberate and exact: `"0"` and `"false"` are non-empty strings and
//! therefore true.
//!
//! # Examples
//!
//! ```rust,ignore
//! use html_stamp::State;
//! use serde_json::json;
//!
//! let state = State::from_pairs([("title", "Hello"), ("done", "")]);
//! assert_eq!(state.get("title"), Some("Hello"));
//! assert!(!state.truthy("done"));
//!
//! let state = State::from_json(&json!({"count": 3, "label": "items"}))?;
//! assert_eq!(state.get("count"), Some("3"));
//! ```

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::error::{Error, Result};

/// Flat key-value mapping supplied per render call
///
/// Keys and values are strings; insertion order is preserved so that
/// iteration and debug output are deterministic. Missing keys are never an
/// error at this layer; resolution against an absent key is governed by
/// [`MissingKeyMode`](crate::MissingKeyMode) at render time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct State {
    entries: IndexMap<String, String>,
}

impl State {
    /// Create an empty state
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a key-value pair, replacing any previous value for the key
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Build a state from an iterator of key-value pairs
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        pairs.into_iter().collect()
    }

    /// Build a state from a flat JSON object
    ///
    /// String values are taken as-is; numbers keep their printed form;
    /// `true` becomes `"true"` and `false` becomes `""` so that boolean
    /// flags round-trip through the string-based truthiness rules; `null`
    /// leaves the key unset. A non-object input, or a value that is itself
    /// an object or array, is a [`Error::ParseError`].
    pub fn from_json(value: &JsonValue) -> Result<Self> {
        let object = match value {
            JsonValue::Object(map) => map,
            _ => return Err(Error::parse_static("state input must be a JSON object")),
        };

        let mut state = State::new();
        for (key, value) in object {
            match value {
                JsonValue::String(s) => state.insert(key, s.as_str()),
                JsonValue::Number(n) => state.insert(key, n.to_string()),
                JsonValue::Bool(true) => state.insert(key, "true"),
                JsonValue::Bool(false) => state.insert(key, ""),
                JsonValue::Null => {}
                JsonValue::Object(_) | JsonValue::Array(_) => {
                    return Err(Error::parse_owned(format!(
                        "state values must be flat scalars, key '{}' is not",
                        key
                    )));
                }
            }
        }
        Ok(state)
    }

    /// Build a state from any `Serialize` type
    ///
    /// The value is serialized through `serde_json` and must produce a flat
    /// JSON object, with the same coercions as [`State::from_json`].
    pub fn from_serialize<T: Serialize>(value: &T) -> Result<Self> {
        let json = serde_json::to_value(value)
            .map_err(|e| Error::parse_owned(format!("state serialization failed: {}", e)))?;
        Self::from_json(&json)
    }

    /// Look up a key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// String-based boolean coercion of a key's value
    ///
    /// Missing key or empty string is false; any non-empty string is true.
    pub fn truthy(&self, key: &str) -> bool {
        self.get(key).map(|v| !v.is_empty()).unwrap_or(false)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the state holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for State {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
