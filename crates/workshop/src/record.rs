//! Round-trip value exercise.

use std::fmt;

use serde_json::{Map, Value};
use tracing::debug;
use workshop_json_equal::deep_equal;

use crate::error::ParseError;

/// An immutable wrapper around one JSON-like value.
///
/// Two records are equal when their values are structurally equal: array
/// order matters, object key order does not. Numbers are finite by
/// construction, so equality is reflexive for every record.
#[derive(Debug, Clone)]
pub struct Record {
    value: Value,
}

impl Record {
    pub fn new(value: Value) -> Self {
        Self { value }
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn into_value(self) -> Value {
        self.value
    }

    /// Compact canonical encoding: object keys sorted at every level, no
    /// insignificant whitespace. Equal records encode to the same string.
    pub fn to_serial(&self) -> String {
        canonicalize(&self.value).to_string()
    }

    /// Decodes a serial form. Whitespace and key order are not significant.
    pub fn from_serial(serial: &str) -> Result<Self, ParseError> {
        match serde_json::from_str::<Value>(serial) {
            Ok(value) => Ok(Self::new(value)),
            Err(err) => {
                let err = ParseError::from(err);
                debug!(error = %err, "rejected malformed serial form");
                Err(err)
            }
        }
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        deep_equal(&self.value, &other.value)
    }
}

impl From<Value> for Record {
    fn from(value: Value) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_serial())
    }
}

/// Copy of `value` with every object's keys in sorted order.
fn canonicalize(value: &Value) -> Value {
    match value {
        Value::Array(items) => Value::Array(items.iter().map(canonicalize).collect()),
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_by(|(a, _), (b, _)| a.cmp(b));
            let mut sorted = Map::new();
            for (key, val) in entries {
                sorted.insert(key.clone(), canonicalize(val));
            }
            Value::Object(sorted)
        }
        other => other.clone(),
    }
}
