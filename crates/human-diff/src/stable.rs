//! Canonical serialization of [`Value`]s.
//!
//! Two array elements are treated as the same item when their canonical
//! strings are equal, and object or array leaves are rendered with the same
//! encoding. Object keys are sorted so that key order never affects
//! matching. Output is JSON except for a top-level `undefined`.

use crate::format::{format_date, format_number};
use crate::value::Value;

/// Serialize `val` to a deterministic JSON string with sorted object keys.
///
/// Non-finite numbers become `null`, dates become quoted ISO-8601 strings.
/// `undefined` becomes `null` inside arrays and is skipped inside objects.
pub fn stringify(val: &Value) -> String {
    match val {
        Value::Undefined => "undefined".to_owned(),
        _ => {
            let mut out = String::new();
            write_value(&mut out, val);
            out
        }
    }
}

fn write_value(out: &mut String, val: &Value) {
    match val {
        Value::Undefined | Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) if n.is_finite() => out.push_str(&format_number(*n)),
        Value::Number(_) => out.push_str("null"),
        Value::String(s) => write_str(out, s),
        Value::Date(d) => write_str(out, &format_date(d)),
        Value::Array(arr) => {
            out.push('[');
            for (i, item) in arr.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_value(out, item);
            }
            out.push(']');
        }
        Value::Object(obj) => {
            let mut entries: Vec<(&String, &Value)> = obj
                .iter()
                .filter(|(_, v)| !matches!(v, Value::Undefined))
                .collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            out.push('{');
            for (i, (key, item)) in entries.into_iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_str(out, key);
                out.push(':');
                write_value(out, item);
            }
            out.push('}');
        }
    }
}

fn write_str(out: &mut String, s: &str) {
    out.push_str(&serde_json::Value::from(s).to_string());
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    fn s(v: serde_json::Value) -> String {
        stringify(&Value::from(v))
    }

    #[test]
    fn scalars() {
        assert_eq!(s(json!(null)), "null");
        assert_eq!(s(json!(true)), "true");
        assert_eq!(s(json!(42)), "42");
        assert_eq!(s(json!(-1.5)), "-1.5");
        assert_eq!(s(json!("say \"hi\"")), r#""say \"hi\"""#);
    }

    #[test]
    fn undefined_at_top_level() {
        assert_eq!(stringify(&Value::Undefined), "undefined");
    }

    #[test]
    fn undefined_inside_containers() {
        let arr = Value::Array(vec![Value::Undefined, Value::from(1)]);
        assert_eq!(stringify(&arr), "[null,1]");
        let obj: Value = [("a", Value::Undefined), ("b", Value::from(2))]
            .into_iter()
            .collect();
        assert_eq!(stringify(&obj), r#"{"b":2}"#);
    }

    #[test]
    fn non_finite_numbers_are_null() {
        assert_eq!(stringify(&Value::Number(f64::NAN)), "null");
        assert_eq!(stringify(&Value::Number(f64::INFINITY)), "null");
    }

    #[test]
    fn dates_are_iso_strings() {
        let d = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(stringify(&Value::Date(d)), r#""2023-01-01T00:00:00.000Z""#);
    }

    #[test]
    fn far_dates_use_expanded_years() {
        let d = Utc.with_ymd_and_hms(10000, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(stringify(&Value::Date(d)), r#""+010000-01-01T00:00:00.000Z""#);
    }

    #[test]
    fn object_keys_sorted() {
        assert_eq!(s(json!({"b": 2, "a": 1, "c": 3})), r#"{"a":1,"b":2,"c":3}"#);
    }

    #[test]
    fn nested() {
        let val = json!({"z": {"b": 2, "a": 1}, "a": [3, 1, 2]});
        assert_eq!(s(val), r#"{"a":[3,1,2],"z":{"a":1,"b":2}}"#);
    }

    #[test]
    fn key_order_does_not_matter() {
        assert_eq!(s(json!({"x": 1, "y": 2})), s(json!({"y": 2, "x": 1})));
    }
}
