//! workshop-json-equal - structural equality for JSON-like values.
//!
//! Provides [`deep_equal`] for recursively comparing two
//! [`serde_json::Value`] instances: arrays compare element-wise in order,
//! objects compare by key set and per-key value regardless of insertion
//! order, and values of different kinds are never equal.

mod deep_equal;

pub use deep_equal::{deep_equal, number_equal};
