//! Classified discrepancies between two values.

use std::fmt;

use crate::i18n::TemplateSet;
use crate::template;

/// Key shown for changes at the top of the compared values.
pub const ROOT_MARKER: &str = "root";

/// Which sentence template a [`Change`] is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeKind {
    Changed,
    Added,
    Removed,
    ArrayAdded,
    ArrayRemoved,
}

impl ChangeKind {
    pub const ALL: [ChangeKind; 5] = [
        ChangeKind::Changed,
        ChangeKind::Added,
        ChangeKind::Removed,
        ChangeKind::ArrayAdded,
        ChangeKind::ArrayRemoved,
    ];

    /// Name of the template field for this kind.
    pub fn name(self) -> &'static str {
        match self {
            ChangeKind::Changed => "changed",
            ChangeKind::Added => "added",
            ChangeKind::Removed => "removed",
            ChangeKind::ArrayAdded => "arrayAdded",
            ChangeKind::ArrayRemoved => "arrayRemoved",
        }
    }
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One discrepancy, with its leaf values already formatted.
///
/// `path` is the dot path of the property (or of the array for item
/// changes); an empty path denotes the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    Changed { path: String, from: String, to: String },
    Added { path: String, value: String },
    Removed { path: String, value: String },
    ArrayAdded { path: String, value: String },
    ArrayRemoved { path: String, value: String },
}

impl Change {
    pub fn kind(&self) -> ChangeKind {
        match self {
            Change::Changed { .. } => ChangeKind::Changed,
            Change::Added { .. } => ChangeKind::Added,
            Change::Removed { .. } => ChangeKind::Removed,
            Change::ArrayAdded { .. } => ChangeKind::ArrayAdded,
            Change::ArrayRemoved { .. } => ChangeKind::ArrayRemoved,
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Change::Changed { path, .. }
            | Change::Added { path, .. }
            | Change::Removed { path, .. }
            | Change::ArrayAdded { path, .. }
            | Change::ArrayRemoved { path, .. } => path,
        }
    }

    /// The text substituted for `{key}`: the path, or [`ROOT_MARKER`].
    pub fn key(&self) -> &str {
        match self.path() {
            "" => ROOT_MARKER,
            path => path,
        }
    }

    /// Renders the sentence for this change with `templates`.
    pub fn render(&self, templates: &TemplateSet) -> String {
        let tmpl = templates.get(self.kind());
        let key = self.key();
        match self {
            Change::Changed { from, to, .. } => {
                template::render(
                    tmpl,
                    &[("key", key), ("from", from.as_str()), ("to", to.as_str())],
                )
            }
            Change::Added { value, .. }
            | Change::Removed { value, .. }
            | Change::ArrayAdded { value, .. }
            | Change::ArrayRemoved { value, .. } => {
                template::render(tmpl, &[("key", key), ("value", value.as_str())])
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{EN, KO};

    fn changed(path: &str, from: &str, to: &str) -> Change {
        Change::Changed { path: path.into(), from: from.into(), to: to.into() }
    }

    #[test]
    fn renders_english() {
        assert_eq!(changed("a.b", "1", "2").render(&EN), "'a.b' changed from '1' to '2'");
        let added = Change::Added { path: "b".into(), value: "2".into() };
        assert_eq!(added.render(&EN), "'b' added with value '2'");
        let removed = Change::Removed { path: "a".into(), value: "1".into() };
        assert_eq!(removed.render(&EN), "'a' removed (was '1')");
    }

    #[test]
    fn renders_array_items() {
        let added = Change::ArrayAdded { path: "tags".into(), value: "c".into() };
        assert_eq!(added.render(&EN), "'tags' added item 'c'");
        let removed = Change::ArrayRemoved { path: "tags".into(), value: "a".into() };
        assert_eq!(removed.render(&EN), "'tags' removed item 'a'");
    }

    #[test]
    fn empty_path_renders_root_marker() {
        let change = changed("", "1", "x");
        assert_eq!(change.key(), "root");
        assert_eq!(change.path(), "");
        assert_eq!(change.render(&EN), "'root' changed from '1' to 'x'");
    }

    #[test]
    fn renders_korean() {
        assert_eq!(
            changed("price", "1000", "2000").render(&KO),
            "'price' 값이 '1000'에서 '2000'(으)로 변경되었습니다"
        );
    }

    #[test]
    fn kind_matches_variant() {
        assert_eq!(changed("a", "", "").kind(), ChangeKind::Changed);
        let c = Change::ArrayRemoved { path: "a".into(), value: String::new() };
        assert_eq!(c.kind(), ChangeKind::ArrayRemoved);
        assert_eq!(ChangeKind::ArrayAdded.to_string(), "arrayAdded");
    }
}
