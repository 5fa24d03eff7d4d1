//! Leaf value formatting.
//!
//! A leaf is rendered either by a custom [`Formatter`] registered for its
//! property name in [`DiffOptions::formatters`], or by [`format_value`].

use std::sync::Arc;

use chrono::{DateTime, Datelike, SecondsFormat, Utc};

use crate::options::DiffOptions;
use crate::stable;
use crate::value::Value;

/// Custom rendering for the values of one property name.
///
/// The returned text is substituted into sentences as-is.
pub type Formatter = Arc<dyn Fn(&Value) -> String + Send + Sync>;

/// Default textual representation of a value.
///
/// ```
/// use human_diff::{format_value, Value};
///
/// assert_eq!(format_value(&Value::from(10)), "10");
/// assert_eq!(format_value(&Value::from("Alice")), "Alice");
/// assert_eq!(format_value(&Value::Undefined), "undefined");
/// ```
pub fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_owned(),
        Value::Undefined => "undefined".to_owned(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => format_number(*n),
        Value::String(s) => s.clone(),
        Value::Date(d) => format_date(d),
        Value::Array(_) | Value::Object(_) => stable::stringify(value),
    }
}

/// Formats `value`, preferring the custom formatter registered for `key`.
///
/// Only bare property names are matched, never full dot paths.
pub fn format_with(value: &Value, key: Option<&str>, options: &DiffOptions) -> String {
    match key.and_then(|k| options.formatters.get(k)) {
        Some(formatter) => formatter(value),
        None => format_value(value),
    }
}

/// ISO-8601 UTC text with millisecond precision.
///
/// Years outside `0..=9999` use the expanded six-digit signed form, e.g.
/// `+010000-01-01T00:00:00.000Z`.
pub fn format_date(d: &DateTime<Utc>) -> String {
    let year = d.year();
    if (0..=9999).contains(&year) {
        return d.to_rfc3339_opts(SecondsFormat::Millis, true);
    }
    let sign = if year < 0 { '-' } else { '+' };
    format!("{sign}{:06}-{}", year.unsigned_abs(), d.format("%m-%dT%H:%M:%S%.3fZ"))
}

/// Number to text the way JavaScript's `String(number)` does it.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_owned();
    }
    if n.is_infinite() {
        let text = if n > 0.0 { "Infinity" } else { "-Infinity" };
        return text.to_owned();
    }
    if n == 0.0 {
        // -0 prints as 0
        return "0".to_owned();
    }
    let abs = n.abs();
    if (1e-6..1e21).contains(&abs) {
        return n.to_string();
    }
    let exp = format!("{n:e}");
    match exp.split_once('e') {
        Some((mantissa, e)) if !e.starts_with('-') => format!("{mantissa}e+{e}"),
        _ => exp,
    }
}
