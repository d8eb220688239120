//! workshop-json-random - depth-bounded JSON-like value generation.
//!
//! [`JsonStrategy`] draws `serde_json::Value`s from the JSON-like domain:
//! null, booleans, finite numbers, strings, arrays and objects. Recursion is
//! driven by an explicit depth counter, so only leaves are drawn at
//! [`JsonOptions::max_depth`] and generation always terminates.

use serde_json::{Map, Number, Value};
use workshop_check::{any_char, any_i64, booleans, finite_floats, text, Source, Strategy};

/// Continuation choice bound for arrays and objects.
const CONTINUE_ODDS: u64 = 3;

/// Kind of a generated node, in order of increasing complexity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootNode {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl RootNode {
    const ALL: [RootNode; 6] = [
        RootNode::Null,
        RootNode::Boolean,
        RootNode::Number,
        RootNode::String,
        RootNode::Array,
        RootNode::Object,
    ];

    pub fn is_container(self) -> bool {
        matches!(self, RootNode::Array | RootNode::Object)
    }
}

/// Relative weights of each node kind. A zero weight disables the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeOdds {
    pub null: u32,
    pub boolean: u32,
    pub number: u32,
    pub string: u32,
    pub array: u32,
    pub object: u32,
}

impl Default for NodeOdds {
    fn default() -> Self {
        Self {
            null: 1,
            boolean: 1,
            number: 1,
            string: 1,
            array: 1,
            object: 1,
        }
    }
}

impl NodeOdds {
    fn weight(&self, kind: RootNode) -> u32 {
        match kind {
            RootNode::Null => self.null,
            RootNode::Boolean => self.boolean,
            RootNode::Number => self.number,
            RootNode::String => self.string,
            RootNode::Array => self.array,
            RootNode::Object => self.object,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonOptions {
    /// Kind of the root value; drawn like any other node when `None`.
    pub root: Option<RootNode>,
    /// Containers are only drawn above this depth (the root has depth 0).
    pub max_depth: usize,
    pub max_collection_len: usize,
    /// Upper bound, in scalar values, for strings and object keys.
    pub max_string_len: usize,
    pub odds: NodeOdds,
}

impl Default for JsonOptions {
    fn default() -> Self {
        Self {
            root: None,
            max_depth: 4,
            max_collection_len: 8,
            max_string_len: 16,
            odds: NodeOdds::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct JsonStrategy {
    options: JsonOptions,
}

/// JSON-like values with default options.
pub fn json_values() -> JsonStrategy {
    JsonStrategy::new(JsonOptions::default())
}

impl JsonStrategy {
    pub fn new(options: JsonOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &JsonOptions {
        &self.options
    }

    /// Draws one value from a fresh source seeded with `seed`.
    pub fn generate(&self, seed: u64) -> Value {
        self.draw(&mut Source::from_seed(seed))
    }

    fn node(&self, src: &mut Source, depth: usize, kind: Option<RootNode>) -> Value {
        let kind = kind.unwrap_or_else(|| self.pick_kind(src, depth));
        match kind {
            RootNode::Null => Value::Null,
            RootNode::Boolean => Value::Bool(booleans().draw(src)),
            RootNode::Number => Value::Number(self.number(src)),
            RootNode::String => Value::String(self.string(src)),
            RootNode::Array => {
                let mut items = Vec::new();
                while items.len() < self.options.max_collection_len
                    && src.draw_upto(CONTINUE_ODDS) != 0
                {
                    items.push(self.node(src, depth + 1, None));
                }
                Value::Array(items)
            }
            RootNode::Object => {
                let mut map = Map::new();
                let mut drawn = 0;
                while drawn < self.options.max_collection_len && src.draw_upto(CONTINUE_ODDS) != 0
                {
                    let key = self.string(src);
                    let value = self.node(src, depth + 1, None);
                    // a repeated key replaces the earlier entry
                    map.insert(key, value);
                    drawn += 1;
                }
                Value::Object(map)
            }
        }
    }

    fn pick_kind(&self, src: &mut Source, depth: usize) -> RootNode {
        let allowed = RootNode::ALL
            .into_iter()
            .filter(|kind| depth < self.options.max_depth || !kind.is_container());
        let total: u64 = allowed
            .clone()
            .map(|kind| u64::from(self.options.odds.weight(kind)))
            .sum();
        if total == 0 {
            return RootNode::Null;
        }
        let mut pick = src.draw_upto(total - 1);
        for kind in allowed {
            let weight = u64::from(self.options.odds.weight(kind));
            if pick < weight {
                return kind;
            }
            pick -= weight;
        }
        RootNode::Null
    }

    fn number(&self, src: &mut Source) -> Number {
        if booleans().draw(src) {
            // finite by construction, so `from_f64` always succeeds
            Number::from_f64(finite_floats().draw(src)).unwrap_or_else(|| Number::from(0))
        } else {
            Number::from(any_i64().draw(src))
        }
    }

    fn string(&self, src: &mut Source) -> String {
        text(any_char(), 0, self.options.max_string_len).draw(src)
    }
}

impl Strategy for JsonStrategy {
    type Value = Value;

    fn draw(&self, src: &mut Source) -> Value {
        self.node(src, 0, self.options.root)
    }
}

/// Nesting depth of a value: scalars and empty containers have depth 0.
pub fn depth(value: &Value) -> usize {
    match value {
        Value::Array(items) => items.iter().map(|v| depth(v) + 1).max().unwrap_or(0),
        Value::Object(map) => map.values().map(|v| depth(v) + 1).max().unwrap_or(0),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn depth_of_nested_values() {
        assert_eq!(depth(&json!(1)), 0);
        assert_eq!(depth(&json!([])), 0);
        assert_eq!(depth(&json!([1])), 1);
        assert_eq!(depth(&json!({"a": [1, {"b": null}]})), 3);
    }

    #[test]
    fn zero_choices_give_null() {
        let mut src = Source::replay(vec![]);
        assert_eq!(json_values().draw(&mut src), Value::Null);
    }

    #[test]
    fn all_zero_odds_give_null() {
        let strategy = JsonStrategy::new(JsonOptions {
            odds: NodeOdds {
                null: 0,
                boolean: 0,
                number: 0,
                string: 0,
                array: 0,
                object: 0,
            },
            ..JsonOptions::default()
        });
        assert_eq!(strategy.generate(1), Value::Null);
    }
}
