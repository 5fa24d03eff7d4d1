//! `{name}` placeholder substitution.

use std::sync::OnceLock;

use regex::{Captures, Regex};

fn placeholder_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\{([A-Za-z0-9_]+)\}").unwrap())
}

/// Replaces every `{name}` in `template` with the matching replacement.
///
/// Placeholders without a replacement render as the empty string.
///
/// ```
/// use human_diff::template::render;
///
/// assert_eq!(render("'{key}' is {value}", &[("key", "a"), ("value", "1")]), "'a' is 1");
/// assert_eq!(render("'{key}' is {missing}", &[("key", "a")]), "'a' is ");
/// ```
pub fn render(template: &str, replacements: &[(&str, &str)]) -> String {
    placeholder_regex()
        .replace_all(template, |caps: &Captures| {
            let name = &caps[1];
            replacements
                .iter()
                .find(|(k, _)| *k == name)
                .map(|(_, v)| *v)
                .unwrap_or("")
                .to_owned()
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_all_occurrences() {
        assert_eq!(render("{a}-{a}-{b}", &[("a", "x"), ("b", "y")]), "x-x-y");
    }

    #[test]
    fn missing_placeholder_is_empty() {
        assert_eq!(render("from '{from}' to '{to}'", &[("to", "2")]), "from '' to '2'");
    }

    #[test]
    fn text_without_placeholders_is_unchanged() {
        assert_eq!(render("no slots here", &[("key", "k")]), "no slots here");
    }

    #[test]
    fn braces_without_name_are_kept() {
        assert_eq!(render("{} {-} {key}", &[("key", "k")]), "{} {-} k");
    }

    #[test]
    fn replacement_text_is_not_rescanned() {
        assert_eq!(render("{key}", &[("key", "{value}"), ("value", "x")]), "{value}");
    }

    #[test]
    fn non_ascii_templates() {
        assert_eq!(render("'{key}'에서 항목", &[("key", "tags")]), "'tags'에서 항목");
    }
}
