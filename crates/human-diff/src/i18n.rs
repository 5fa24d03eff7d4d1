//! Sentence templates per language.
//!
//! The catalog is a fixed set of `'static` [`TemplateSet`]s, looked up by
//! language tag with [`resolve`]. Unknown tags fall back to English.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use tracing::debug;

use crate::change::ChangeKind;
use crate::error::{DiffError, Result};

/// The five sentence templates of one language.
///
/// Templates reference `{key}` and either `{from}`/`{to}` (changed) or
/// `{value}` (all other kinds).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TemplateSet {
    pub changed: Cow<'static, str>,
    pub added: Cow<'static, str>,
    pub removed: Cow<'static, str>,
    #[serde(rename = "arrayAdded", alias = "array_added")]
    pub array_added: Cow<'static, str>,
    #[serde(rename = "arrayRemoved", alias = "array_removed")]
    pub array_removed: Cow<'static, str>,
}

impl TemplateSet {
    pub fn get(&self, kind: ChangeKind) -> &str {
        match kind {
            ChangeKind::Changed => &self.changed,
            ChangeKind::Added => &self.added,
            ChangeKind::Removed => &self.removed,
            ChangeKind::ArrayAdded => &self.array_added,
            ChangeKind::ArrayRemoved => &self.array_removed,
        }
    }

    /// Checks that every kind has a non-empty template.
    pub fn validate(&self) -> Result<()> {
        match ChangeKind::ALL.into_iter().find(|kind| self.get(*kind).trim().is_empty()) {
            Some(kind) => Err(DiffError::IncompleteTemplates { kind }),
            None => Ok(()),
        }
    }

    /// Parses a template set from a JSON object with the keys `changed`,
    /// `added`, `removed`, `arrayAdded` and `arrayRemoved`.
    ///
    /// ```
    /// use human_diff::TemplateSet;
    ///
    /// let set = TemplateSet::from_json(r#"{
    ///     "changed": "{key}: {from} -> {to}",
    ///     "added": "+{key} {value}",
    ///     "removed": "-{key} {value}",
    ///     "arrayAdded": "{key} += {value}",
    ///     "arrayRemoved": "{key} -= {value}"
    /// }"#).unwrap();
    /// assert_eq!(set.added, "+{key} {value}");
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let set: TemplateSet = serde_json::from_str(json)?;
        set.validate()?;
        Ok(set)
    }
}

pub const EN: TemplateSet = TemplateSet {
    changed: Cow::Borrowed("'{key}' changed from '{from}' to '{to}'"),
    added: Cow::Borrowed("'{key}' added with value '{value}'"),
    removed: Cow::Borrowed("'{key}' removed (was '{value}')"),
    array_added: Cow::Borrowed("'{key}' added item '{value}'"),
    array_removed: Cow::Borrowed("'{key}' removed item '{value}'"),
};

pub const KO: TemplateSet = TemplateSet {
    changed: Cow::Borrowed("'{key}' 값이 '{from}'에서 '{to}'(으)로 변경되었습니다"),
    added: Cow::Borrowed("'{key}' 값이 추가되었습니다: '{value}'"),
    removed: Cow::Borrowed("'{key}' 값이 삭제되었습니다 (이전 값: '{value}')"),
    array_added: Cow::Borrowed("'{key}'에 항목이 추가되었습니다: '{value}'"),
    array_removed: Cow::Borrowed("'{key}'에서 항목이 삭제되었습니다: '{value}'"),
};

static EN_SET: TemplateSet = EN;
static KO_SET: TemplateSet = KO;

pub const DEFAULT_LANG: &str = "en";

/// A language with a built-in template set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Lang {
    #[default]
    En,
    Ko,
}

impl Lang {
    pub const ALL: [Lang; 2] = [Lang::En, Lang::Ko];

    pub fn tag(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Ko => "ko",
        }
    }

    pub fn templates(self) -> &'static TemplateSet {
        match self {
            Lang::En => &EN_SET,
            Lang::Ko => &KO_SET,
        }
    }
}

impl FromStr for Lang {
    type Err = DiffError;

    fn from_str(tag: &str) -> Result<Self> {
        Lang::ALL
            .into_iter()
            .find(|lang| lang.tag() == tag)
            .ok_or_else(|| DiffError::UnknownLanguage(tag.to_owned()))
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Template set for `lang`, or the English one if the tag is unknown.
pub fn resolve(lang: &str) -> &'static TemplateSet {
    match lang.parse::<Lang>() {
        Ok(lang) => lang.templates(),
        Err(_) => {
            debug!(lang, fallback = DEFAULT_LANG, "unknown language tag");
            Lang::default().templates()
        }
    }
}
