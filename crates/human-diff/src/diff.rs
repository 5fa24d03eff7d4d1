//! The comparator: walks two values in lockstep and classifies every
//! discrepancy as a [`Change`].
//!
//! Arrays are compared as unordered multisets: an item is reported as removed
//! when no item on the other side has the same canonical serialization, and
//! vice versa. This is a membership heuristic, not a minimal edit script;
//! reordering is never reported, and duplicates are reported once per
//! occurrence only when the value is missing from the other side entirely
//! (`[1, 1]` vs `[1]` yields no change).

use std::collections::HashSet;

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::change::Change;
use crate::format::format_with;
use crate::options::DiffOptions;
use crate::stable;
use crate::value::{Value, UNDEFINED};

/// Describes the differences between `before` and `after` as sentences.
///
/// ```
/// use human_diff::{get_human_diff, DiffOptions, Value};
/// use serde_json::json;
///
/// let before = Value::from(json!({"user": {"name": "Alice", "age": 25}}));
/// let after = Value::from(json!({"user": {"name": "Bob", "age": 25}}));
/// let diff = get_human_diff(&before, &after, &DiffOptions::default());
/// assert_eq!(diff, ["'user.name' changed from 'Alice' to 'Bob'"]);
/// ```
pub fn get_human_diff(before: &Value, after: &Value, options: &DiffOptions) -> Vec<String> {
    get_human_diff_at(before, after, options, "")
}

/// Like [`get_human_diff`], with `before` and `after` located at `prefix`.
pub fn get_human_diff_at(
    before: &Value,
    after: &Value,
    options: &DiffOptions,
    prefix: &str,
) -> Vec<String> {
    let changes = diff_changes_at(before, after, options, prefix);
    debug!(
        lang = %options.lang,
        excluded = options.exclude.len(),
        changes = changes.len(),
        "computed human diff"
    );
    let templates = options.template_set();
    changes.iter().map(|change| change.render(templates)).collect()
}

/// Classifies the differences between `before` and `after` without rendering
/// them.
pub fn diff_changes(before: &Value, after: &Value, options: &DiffOptions) -> Vec<Change> {
    diff_changes_at(before, after, options, "")
}

/// Like [`diff_changes`], with `before` and `after` located at `prefix`.
pub fn diff_changes_at(
    before: &Value,
    after: &Value,
    options: &DiffOptions,
    prefix: &str,
) -> Vec<Change> {
    let mut changes = Vec::new();
    diff_at_path(&mut changes, options, prefix, before, after);
    changes
}

/// Whether `path` is one of `exclude` or lies below one of them.
///
/// ```
/// use human_diff::is_excluded;
///
/// let exclude = ["meta".to_owned()];
/// assert!(is_excluded(&exclude, "meta"));
/// assert!(is_excluded(&exclude, "meta.created"));
/// assert!(!is_excluded(&exclude, "metadata"));
/// ```
pub fn is_excluded(exclude: &[String], path: &str) -> bool {
    exclude.iter().any(|ex| match path.strip_prefix(ex.as_str()) {
        Some(rest) => rest.is_empty() || rest.starts_with('.'),
        None => false,
    })
}

fn join_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_owned()
    } else {
        format!("{prefix}.{key}")
    }
}

// ── Core recursive differ ─────────────────────────────────────────────────

fn diff_at_path(
    out: &mut Vec<Change>,
    options: &DiffOptions,
    prefix: &str,
    before: &Value,
    after: &Value,
) {
    if before.is_identical(after) {
        return;
    }
    match (before, after) {
        (Value::Array(b), Value::Array(a)) => diff_arr(out, options, prefix, b, a),
        (Value::Object(b), Value::Object(a)) => diff_obj(out, options, prefix, b, a),
        _ => diff_root(out, options, prefix, before, after),
    }
}

fn diff_root(
    out: &mut Vec<Change>,
    options: &DiffOptions,
    prefix: &str,
    before: &Value,
    after: &Value,
) {
    if is_excluded(&options.exclude, prefix) {
        return;
    }
    trace!(path = prefix, "value replaced");
    out.push(Change::Changed {
        path: prefix.to_owned(),
        from: format_with(before, None, options),
        to: format_with(after, None, options),
    });
}

fn diff_arr(
    out: &mut Vec<Change>,
    options: &DiffOptions,
    prefix: &str,
    before: &[Value],
    after: &[Value],
) {
    if is_excluded(&options.exclude, prefix) {
        trace!(path = prefix, "array excluded");
        return;
    }
    let before_keys: Vec<String> = before.iter().map(stable::stringify).collect();
    let after_keys: Vec<String> = after.iter().map(stable::stringify).collect();
    let before_set: HashSet<&str> = before_keys.iter().map(String::as_str).collect();
    let after_set: HashSet<&str> = after_keys.iter().map(String::as_str).collect();

    for (item, key) in before.iter().zip(&before_keys) {
        if !after_set.contains(key.as_str()) {
            out.push(Change::ArrayRemoved {
                path: prefix.to_owned(),
                value: format_with(item, None, options),
            });
        }
    }
    for (item, key) in after.iter().zip(&after_keys) {
        if !before_set.contains(key.as_str()) {
            out.push(Change::ArrayAdded {
                path: prefix.to_owned(),
                value: format_with(item, None, options),
            });
        }
    }
}

fn diff_obj(
    out: &mut Vec<Change>,
    options: &DiffOptions,
    prefix: &str,
    before: &IndexMap<String, Value>,
    after: &IndexMap<String, Value>,
) {
    let after_only = after.keys().filter(|key| !before.contains_key(*key));
    for key in before.keys().chain(after_only) {
        let key = key.as_str();
        let path = join_path(prefix, key);
        if is_excluded(&options.exclude, &path) {
            continue;
        }
        let (src, dst) = match (before.get(key), after.get(key)) {
            (Some(src), Some(dst)) => (src, dst),
            (None, Some(dst)) => {
                if !dst.is_identical(&UNDEFINED) {
                    let value = format_with(dst, Some(key), options);
                    out.push(Change::Added { path, value });
                }
                continue;
            }
            (Some(src), None) => {
                if !src.is_identical(&UNDEFINED) {
                    let value = format_with(src, Some(key), options);
                    out.push(Change::Removed { path, value });
                }
                continue;
            }
            (None, None) => continue,
        };
        if src.is_identical(dst) {
            continue;
        }
        match (src, dst) {
            (Value::Object(_), Value::Object(_)) | (Value::Array(_), Value::Array(_)) => {
                diff_at_path(out, options, &path, src, dst);
            }
            (Value::Date(s), Value::Date(d)) => {
                if s.timestamp_millis() != d.timestamp_millis() {
                    out.push(changed(options, path, key, src, dst));
                }
            }
            _ => out.push(changed(options, path, key, src, dst)),
        }
    }
}

fn changed(options: &DiffOptions, path: String, key: &str, src: &Value, dst: &Value) -> Change {
    Change::Changed {
        path,
        from: format_with(src, Some(key), options),
        to: format_with(dst, Some(key), options),
    }
}
