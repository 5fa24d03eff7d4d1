//! Options controlling what is compared and how changes are rendered.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Deserializer};

use crate::format::Formatter;
use crate::i18n::{self, TemplateSet, DEFAULT_LANG};
use crate::value::Value;

/// Options for a diff.
///
/// `exclude`, `lang` and `templates` can be loaded from configuration;
/// formatters are registered in code.
///
/// ```
/// use human_diff::{format_value, DiffOptions};
///
/// let options = DiffOptions::new()
///     .exclude(["id", "meta.created"])
///     .formatter("price", |v| format!("${}", format_value(v)))
///     .lang("ko");
/// assert_eq!(options.exclude, ["id", "meta.created"]);
/// ```
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct DiffOptions {
    /// Dot paths to leave out, together with everything below them.
    pub exclude: Vec<String>,
    /// Custom formatters keyed by property name.
    #[serde(skip)]
    pub formatters: HashMap<String, Formatter>,
    /// Language tag of the built-in templates.
    pub lang: String,
    /// Caller-supplied templates, used instead of `lang` when set.
    #[serde(deserialize_with = "validated_templates")]
    pub templates: Option<TemplateSet>,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            exclude: Vec::new(),
            formatters: HashMap::new(),
            lang: DEFAULT_LANG.to_owned(),
            templates: None,
        }
    }
}

impl DiffOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn exclude<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude.extend(paths.into_iter().map(Into::into));
        self
    }

    pub fn formatter<F>(mut self, name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&Value) -> String + Send + Sync + 'static,
    {
        self.formatters.insert(name.into(), Arc::new(f));
        self
    }

    pub fn lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    pub fn templates(mut self, templates: TemplateSet) -> Self {
        self.templates = Some(templates);
        self
    }

    /// Templates sentences are rendered with.
    pub fn template_set(&self) -> &TemplateSet {
        match &self.templates {
            Some(set) => set,
            None => i18n::resolve(&self.lang),
        }
    }
}

fn validated_templates<'de, D>(deserializer: D) -> Result<Option<TemplateSet>, D::Error>
where
    D: Deserializer<'de>,
{
    let templates = Option::<TemplateSet>::deserialize(deserializer)?;
    if let Some(set) = &templates {
        set.validate().map_err(<D::Error as serde::de::Error>::custom)?;
    }
    Ok(templates)
}

impl fmt::Debug for DiffOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&String> = self.formatters.keys().collect();
        names.sort();
        f.debug_struct("DiffOptions")
            .field("exclude", &self.exclude)
            .field("formatters", &names)
            .field("lang", &self.lang)
            .field("templates", &self.templates)
            .finish()
    }
}
