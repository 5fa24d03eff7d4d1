//! The universal input type for the differ.
//!
//! A JSON-like tree extended with `undefined` and dates. Object keys keep
//! their insertion order, which is the order changes are reported in.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;

/// A nested value that can be compared with [`crate::get_human_diff`].
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// An absent value (`undefined`).
    #[default]
    Undefined,
    /// `null`
    Null,
    /// Boolean value
    Bool(bool),
    /// Number, stored as a double like its JSON counterpart
    Number(f64),
    /// String
    String(String),
    /// Point in time, compared with millisecond precision
    Date(DateTime<Utc>),
    /// Ordered sequence
    Array(Vec<Value>),
    /// Ordered key-value mapping
    Object(IndexMap<String, Value>),
}

/// Shared `undefined`, used where a key is missing from an object.
pub(crate) static UNDEFINED: Value = Value::Undefined;

impl Value {
    /// Strict structural identity.
    ///
    /// Unlike `f64` equality, `NaN` is identical to itself so that every value
    /// is identical to a clone of itself. Dates are identical when they name
    /// the same millisecond.
    pub fn is_identical(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) => true,
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Date(a), Value::Date(b)) => a.timestamp_millis() == b.timestamp_millis(),
            (Value::Array(a), Value::Array(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.is_identical(y))
            }
            (Value::Object(a), Value::Object(b)) => {
                if a.len() != b.len() {
                    return false;
                }
                a.iter().all(|(key, x)| match b.get(key) {
                    Some(y) => x.is_identical(y),
                    None => false,
                })
            }
            _ => false,
        }
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Plain key-value container; arrays and dates are not objects here.
    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    pub fn is_date(&self) -> bool {
        matches!(self, Value::Date(_))
    }

    /// `null` or `undefined`.
    pub fn is_nullish(&self) -> bool {
        matches!(self, Value::Null | Value::Undefined)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Looks up a property of an object. Returns `None` for non-objects.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Object(map) => map.get(key),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Value) -> bool {
        self.is_identical(other)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

macro_rules! from_number {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Value::Number(n as f64)
                }
            }
        )*
    };
}

from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(d: DateTime<Utc>) -> Self {
        Value::Date(d)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Array(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

impl From<IndexMap<String, Value>> for Value {
    fn from(map: IndexMap<String, Value>) -> Self {
        Value::Object(map)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Value::Object(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(arr) => {
                Value::Array(arr.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(obj) => {
                Value::Object(obj.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn from_json_keeps_key_order() {
        let v = Value::from(json!({"b": 1, "a": 2, "c": 3}));
        let Value::Object(map) = v else {
            panic!("expected object");
        };
        let keys: Vec<&str> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, ["b", "a", "c"]);
    }

    #[test]
    fn from_json_numbers_are_doubles() {
        assert_eq!(Value::from(json!(10)).as_f64(), Some(10.0));
        assert_eq!(Value::from(json!(-2.5)).as_f64(), Some(-2.5));
    }

    #[test]
    fn nan_is_identical_to_itself() {
        let nan = Value::Number(f64::NAN);
        assert!(nan.is_identical(&nan.clone()));
        assert!(!nan.is_identical(&Value::Number(0.0)));
    }

    #[test]
    fn negative_zero_is_identical_to_zero() {
        assert!(Value::Number(-0.0).is_identical(&Value::Number(0.0)));
    }

    #[test]
    fn null_and_undefined_differ() {
        assert!(!Value::Null.is_identical(&Value::Undefined));
        assert!(Value::Null.is_nullish());
        assert!(Value::Undefined.is_nullish());
    }

    #[test]
    fn dates_compare_by_millisecond() {
        let a = Utc.timestamp_millis_opt(1_000).unwrap();
        let b = a + chrono::Duration::microseconds(300);
        assert!(Value::Date(a).is_identical(&Value::Date(b)));
        let c = a + chrono::Duration::milliseconds(1);
        assert!(!Value::Date(a).is_identical(&Value::Date(c)));
    }

    #[test]
    fn objects_identical_regardless_of_order() {
        let a = Value::from(json!({"a": 1, "b": [1, 2]}));
        let b = Value::from(json!({"b": [1, 2], "a": 1}));
        assert!(a.is_identical(&b));
    }

    #[test]
    fn arrays_are_order_sensitive() {
        let a = Value::from(json!([1, 2]));
        let b = Value::from(json!([2, 1]));
        assert!(!a.is_identical(&b));
    }

    #[test]
    fn kind_predicates() {
        let date = Value::from(Utc.timestamp_millis_opt(0).unwrap());
        assert!(date.is_date());
        assert!(!date.is_object());
        assert!(Value::from(vec![1, 2]).is_array());
        assert!(Value::from(json!({})).is_object());
        assert!(!Value::from(json!([])).is_object());
    }

    #[test]
    fn option_none_is_null() {
        assert!(Value::from(None::<i32>).is_identical(&Value::Null));
        assert!(Value::from(Some("x")).is_identical(&Value::from("x")));
    }

    #[test]
    fn collect_into_object() {
        let v: Value = [("name", "Alice"), ("role", "admin")].into_iter().collect();
        assert_eq!(v.get("name").and_then(Value::as_str), Some("Alice"));
        assert_eq!(v.get("missing"), None);
    }
}
