//! Human-readable, localized descriptions of the differences between two
//! nested values.
//!
//! The differ walks two [`Value`]s in lockstep and produces one sentence per
//! discrepancy, e.g. `'user.name' changed from 'Alice' to 'Bob'`. It is meant
//! for audit logs and changelogs; it is not a patch format.
//!
//! # Example
//!
//! ```
//! use human_diff::{get_human_diff, DiffOptions, Value};
//! use serde_json::json;
//!
//! let before = Value::from(json!({"id": 1, "name": "Alice", "tags": ["a", "b"]}));
//! let after = Value::from(json!({"id": 2, "name": "Bob", "tags": ["b", "c"]}));
//!
//! let options = DiffOptions::new().exclude(["id"]);
//! let diff = get_human_diff(&before, &after, &options);
//!
//! assert_eq!(diff, [
//!     "'name' changed from 'Alice' to 'Bob'",
//!     "'tags' removed item 'a'",
//!     "'tags' added item 'c'",
//! ]);
//! ```
//!
//! # Known limitations
//!
//! - Arrays are compared by membership of canonically serialized items, not
//!   by a minimal edit script. Moves are invisible and duplicate items can
//!   produce surprising results.
//! - Custom formatters are matched by property name only. A formatter
//!   registered as `"price"` applies to `order.price` and `item.price` alike;
//!   a key such as `"order.price"` is never consulted.

pub mod change;
pub mod diff;
pub mod error;
pub mod format;
pub mod i18n;
pub mod options;
pub mod stable;
pub mod template;
pub mod value;

pub use change::{Change, ChangeKind, ROOT_MARKER};
pub use diff::{
    diff_changes, diff_changes_at, get_human_diff, get_human_diff_at, is_excluded,
};
pub use error::{DiffError, Result};
pub use format::{format_date, format_value, format_with, Formatter};
pub use i18n::{resolve, Lang, TemplateSet};
pub use options::DiffOptions;
pub use value::Value;
