//! Record serial form: round trip, canonical encoding and decode errors.

use serde_json::json;
use workshop::domains::records;
use workshop::properties::{record_round_trip, serial_form_is_idempotent};
use workshop::{ParseError, Record};
use workshop_check::{assert_property, check_assert, check_assert_eq};

// ---------------------------------------------------------------------------
// Round trip
// ---------------------------------------------------------------------------

#[test]
fn generated_records_round_trip() {
    let report = assert_property(records(), |record| record_round_trip(&record));
    assert!(report.passed > 0);
}

#[test]
fn serial_form_is_canonical() {
    assert_property(records(), |record| serial_form_is_idempotent(&record));
}

#[test]
fn worked_example() {
    let record = Record::new(json!({"a": [1, null, true]}));
    assert_eq!(record.to_serial(), r#"{"a":[1,null,true]}"#);
    let decoded = Record::from_serial(&record.to_serial()).unwrap();
    assert_eq!(decoded, record);
}

#[test]
fn floats_survive_exactly() {
    for x in [0.1, 5e-324, f64::MIN_POSITIVE, f64::MAX, -1.5e300, 1.0] {
        let record = Record::new(json!(x));
        let decoded = Record::from_serial(&record.to_serial()).unwrap();
        let back = decoded.value().as_f64().unwrap();
        assert_eq!(back.to_bits(), x.to_bits(), "{x:e}");
    }
}

#[test]
fn strings_with_escapes_survive() {
    let record = Record::new(json!({"\u{0}\"\\": "\n\t\u{1F600}\u{7F}", "": ""}));
    let decoded = Record::from_serial(&record.to_serial()).unwrap();
    assert_eq!(decoded, record);
}

// ---------------------------------------------------------------------------
// Canonical form
// ---------------------------------------------------------------------------

#[test]
fn key_order_and_whitespace_do_not_matter() {
    let a = Record::from_serial(r#"{"b":1,"a":[2,{"d":3,"c":4}]}"#).unwrap();
    let b = Record::from_serial(" {\n \"a\" : [ 2 , { \"c\":4, \"d\":3 } ] ,\t\"b\": 1 } ").unwrap();
    assert_eq!(a, b);
    assert_eq!(a.to_serial(), b.to_serial());
    assert_eq!(a.to_serial(), r#"{"a":[2,{"c":4,"d":3}],"b":1}"#);
}

#[test]
fn large_integers_do_not_match_rounded_floats() {
    let float = Record::from_serial("9223372036854775807.0").unwrap();
    assert_ne!(Record::new(json!(i64::MAX)), float);
    assert_ne!(
        Record::new(json!(9_007_199_254_740_993i64)),
        Record::new(json!(9_007_199_254_740_992.0))
    );
    assert_eq!(Record::new(json!(1)), Record::new(json!(1.0)));
}

#[test]
fn round_trip_catches_integers_turned_into_floats() {
    let lossy = |record: &Record| match record.value().as_i64() {
        Some(n) => Record::new(json!(n as f64)),
        None => record.clone(),
    };
    let record = Record::new(json!(9_007_199_254_740_993i64));
    assert_ne!(lossy(&record), record);
    let small = Record::new(json!(3));
    assert_eq!(lossy(&small), small);
}

#[test]
fn equality_is_not_vacuous() {
    assert_property(records(), |record| {
        let wrapped = Record::new(json!([record.value().clone()]));
        check_assert!(wrapped != record);
        check_assert_eq!(record.clone(), record);
        Ok(())
    });
}

// ---------------------------------------------------------------------------
// Decode errors
// ---------------------------------------------------------------------------

#[test]
fn malformed_input_is_a_syntax_error() {
    for input in ["{not valid json", "[1] x", "NaN", "{'a':1}", "1e400", "[1,]"] {
        let err = Record::from_serial(input).unwrap_err();
        assert!(matches!(err, ParseError::Syntax { .. }), "{input}: {err:?}");
    }
}

#[test]
fn truncated_input_is_an_unexpected_end() {
    for input in ["", "   ", "[1,", r#"{"a":"#, r#""abc"#] {
        let err = Record::from_serial(input).unwrap_err();
        assert!(
            matches!(err, ParseError::UnexpectedEnd { .. }),
            "{input:?}: {err:?}"
        );
    }
}

#[test]
fn error_reports_position() {
    let err = Record::from_serial("[1,\n  x]").unwrap_err();
    assert_eq!(err.position().0, 2);
    assert!(err.to_string().contains("line 2"), "{err}");
}
