//! Structural equality matrix: kinds, numbers, ordering rules, and the
//! algebraic properties that make `deep_equal` usable as a record equality.

use proptest::prelude::*;
use serde_json::{json, Map, Value};
use workshop_json_equal::deep_equal;

// ---------------------------------------------------------------------------
// Kinds
// ---------------------------------------------------------------------------

#[test]
fn null_is_only_equal_to_null() {
    assert!(deep_equal(&json!(null), &json!(null)));
    for other in [json!(0), json!(false), json!(""), json!([]), json!({})] {
        assert!(!deep_equal(&json!(null), &other), "null vs {other}");
    }
}

#[test]
fn kind_mismatches_are_never_equal() {
    assert!(!deep_equal(&json!(1), &json!(true)));
    assert!(!deep_equal(&json!(1), &json!("1")));
    assert!(!deep_equal(&json!("a"), &json!(["a"])));
    assert!(!deep_equal(&json!({}), &json!([])));
    assert!(!deep_equal(&json!(true), &json!("true")));
}

// ---------------------------------------------------------------------------
// Numbers
// ---------------------------------------------------------------------------

#[test]
fn numbers_compare_by_value() {
    assert!(deep_equal(&json!(42), &json!(42)));
    assert!(!deep_equal(&json!(42), &json!(43)));
    assert!(deep_equal(&json!(1.5), &json!(1.5)));
    assert!(!deep_equal(&json!(1.5), &json!(1.6)));
    assert!(deep_equal(&json!(0), &json!(0.0)));
}

#[test]
fn integer_extremes() {
    assert!(deep_equal(&json!(i64::MIN), &json!(i64::MIN)));
    assert!(deep_equal(&json!(i64::MAX), &json!(i64::MAX)));
    assert!(!deep_equal(&json!(i64::MAX), &json!(i64::MIN)));
}

#[test]
fn integers_never_equal_a_rounded_float() {
    let two_53 = 1i64 << 53;
    let parsed: Value = serde_json::from_str("9223372036854775807.0").unwrap();
    assert!(!deep_equal(&json!(i64::MAX), &parsed));
    assert!(!deep_equal(&json!(i64::MAX), &json!(9.223372036854776e18)));
    assert!(!deep_equal(&json!(two_53 + 1), &json!(two_53 as f64)));
    assert!(!deep_equal(&json!([{"n": two_53 + 1}]), &json!([{"n": two_53 as f64}])));
    assert!(deep_equal(&json!(two_53), &json!(two_53 as f64)));
    assert!(deep_equal(&json!(-7), &json!(-7.0)));
}

// ---------------------------------------------------------------------------
// Ordering rules
// ---------------------------------------------------------------------------

#[test]
fn array_order_is_significant() {
    assert!(deep_equal(&json!([1, null, true]), &json!([1, null, true])));
    assert!(!deep_equal(&json!([1, null, true]), &json!([true, null, 1])));
}

#[test]
fn object_key_order_is_not_significant() {
    let mut forward = Map::new();
    forward.insert("a".to_owned(), json!([1, null, true]));
    forward.insert("b".to_owned(), json!("2"));
    let mut backward = Map::new();
    backward.insert("b".to_owned(), json!("2"));
    backward.insert("a".to_owned(), json!([1, null, true]));
    assert!(deep_equal(&Value::Object(forward), &Value::Object(backward)));
}

#[test]
fn object_key_sets_must_match() {
    assert!(!deep_equal(&json!({"a": 1}), &json!({"a": 1, "b": 2})));
    assert!(!deep_equal(&json!({"a": 1}), &json!({"b": 1})));
    assert!(!deep_equal(&json!({"a": 1}), &json!({"a": 2})));
}

#[test]
fn nested_difference_is_found() {
    let a = json!({"a": {"b": [1, 2, {"c": "x"}]}});
    let b = json!({"a": {"b": [1, 2, {"c": "y"}]}});
    assert!(!deep_equal(&a, &b));
}

// ---------------------------------------------------------------------------
// Algebraic properties
// ---------------------------------------------------------------------------

fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        (-1.0e6f64..1.0e6).prop_map(|f| json!(f)),
        "[a-z]{0,6}".prop_map(Value::String),
    ];
    leaf.prop_recursive(3, 32, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::btree_map("[a-z]{1,4}", inner, 0..6)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

proptest! {
    #[test]
    fn equality_agrees_with_an_independent_copy(value in arb_json()) {
        let copy: Value = serde_json::from_str(&value.to_string()).unwrap();
        prop_assert!(deep_equal(&value, &copy));
        prop_assert!(deep_equal(&copy, &value));
    }

    #[test]
    fn equality_is_symmetric(a in arb_json(), b in arb_json()) {
        prop_assert_eq!(deep_equal(&a, &b), deep_equal(&b, &a));
    }

    #[test]
    fn wrapping_in_an_array_distinguishes(value in arb_json()) {
        let wrapped = Value::Array(vec![value.clone()]);
        prop_assert!(!deep_equal(&value, &wrapped));
    }
}
