use serde_json::{Number, Value};

/// Performs a deep structural equality check between two JSON values.
///
/// Numbers compare by exact value: `1` equals `1.0` and `0.0` equals
/// `-0.0`, but an integer never equals a float that merely rounds to it.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use workshop_json_equal::deep_equal;
///
/// assert!(deep_equal(&json!({"a": 1, "b": [true]}), &json!({"b": [true], "a": 1})));
/// assert!(!deep_equal(&json!([1, 2]), &json!([2, 1])));
/// ```
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => number_equal(a, b),
        (Value::String(a), Value::String(b)) => a == b,

        (Value::Array(arr_a), Value::Array(arr_b)) => {
            if arr_a.len() != arr_b.len() {
                return false;
            }
            arr_a
                .iter()
                .zip(arr_b.iter())
                .all(|(item_a, item_b)| deep_equal(item_a, item_b))
        }

        (Value::Object(obj_a), Value::Object(obj_b)) => {
            if obj_a.len() != obj_b.len() {
                return false;
            }
            for (key, val_a) in obj_a {
                match obj_b.get(key) {
                    Some(val_b) => {
                        if !deep_equal(val_a, val_b) {
                            return false;
                        }
                    }
                    None => return false,
                }
            }
            true
        }

        // Different kinds are never equal
        _ => false,
    }
}

/// Numeric equality used by [`deep_equal`].
///
/// Two integers compare exactly and two floats compare as `f64`. An integer
/// equals a float only when the float is integral and converts back to that
/// exact integer, so `1 == 1.0` but `2^53 + 1 != 2^53 as f64`.
pub fn number_equal(a: &Number, b: &Number) -> bool {
    match (integer(a), integer(b)) {
        (Some(a), Some(b)) => a == b,
        (Some(int), None) => b.as_f64().is_some_and(|f| integer_equals_float(int, f)),
        (None, Some(int)) => a.as_f64().is_some_and(|f| integer_equals_float(int, f)),
        (None, None) => match (a.as_f64(), b.as_f64()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        },
    }
}

fn integer(n: &Number) -> Option<i128> {
    if n.is_f64() {
        return None;
    }
    n.as_i64()
        .map(i128::from)
        .or_else(|| n.as_u64().map(i128::from))
}

// -2^63 and 2^64 are exact in f64
const I64_MIN_F64: f64 = -9_223_372_036_854_775_808.0;
const U64_END_F64: f64 = 18_446_744_073_709_551_616.0;

fn integer_equals_float(int: i128, f: f64) -> bool {
    f.fract() == 0.0 && (I64_MIN_F64..U64_END_F64).contains(&f) && f as i128 == int
}
