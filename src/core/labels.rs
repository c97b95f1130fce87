//! Effective display labels: markup-stripped host labels, slug-derived
//! fallbacks, and user renames layered on top.

use regex::Regex;

pub struct LabelResolver {
    tag_re: Regex,
}

impl Default for LabelResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl LabelResolver {
    pub fn new() -> Self {
        Self {
            tag_re: Regex::new(r"<[^>]*>").unwrap(),
        }
    }

    /// Remove markup tags and collapse the remaining whitespace.
    pub fn strip_markup(&self, raw: &str) -> String {
        let stripped = self.tag_re.replace_all(raw, " ");
        stripped.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    /// Derive a human-readable label from an identifier: `-`/`_` become
    /// spaces, whitespace collapses, each word is title-cased.
    pub fn generated_label(&self, identifier: &str) -> String {
        identifier
            .replace(['-', '_'], " ")
            .split_whitespace()
            .map(title_case_word)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// The label before any rename: the stripped host label when non-empty,
    /// else the slug-derived fallback.
    pub fn original_label(&self, raw_label: &str, identifier: &str) -> String {
        let stripped = self.strip_markup(raw_label);
        if stripped.is_empty() {
            self.generated_label(identifier)
        } else {
            stripped
        }
    }

    /// Sanitize a stored rename. Empty after stripping means "no override".
    pub fn sanitize_custom(&self, custom: &str) -> Option<String> {
        let cleaned = self.strip_markup(custom);
        if cleaned.is_empty() {
            None
        } else {
            Some(cleaned)
        }
    }

    /// The label to display: the sanitized rename when present, else the
    /// original label. Non-empty whenever `identifier` is non-empty.
    pub fn effective_label(
        &self,
        raw_label: &str,
        identifier: &str,
        custom_label: Option<&str>,
    ) -> String {
        custom_label
            .and_then(|c| self.sanitize_custom(c))
            .unwrap_or_else(|| self.original_label(raw_label, identifier))
    }
}

fn title_case_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_markup() {
        let resolver = LabelResolver::new();
        assert_eq!(
            resolver.strip_markup("Posts <span class=\"count\">4</span>"),
            "Posts 4"
        );
        assert_eq!(resolver.strip_markup("<b></b>"), "");
        assert_eq!(resolver.strip_markup("  Plain   label  "), "Plain label");
    }

    #[test]
    fn test_generated_label_from_slug() {
        let resolver = LabelResolver::new();
        assert_eq!(resolver.generated_label("my-custom_page"), "My Custom Page");
        assert_eq!(resolver.generated_label("edit.php"), "Edit.php");
        assert_eq!(resolver.generated_label("a--b"), "A B");
    }

    #[test]
    fn test_original_label_prefers_stripped_raw() {
        let resolver = LabelResolver::new();
        assert_eq!(resolver.original_label("<em>Dashboard</em>", "index.php"), "Dashboard");
        assert_eq!(resolver.original_label("", "options-general.php"), "Options General.php");
        assert_eq!(resolver.original_label("<img src=x>", "tools.php"), "Tools.php");
    }

    #[test]
    fn test_effective_label_round_trip() {
        let resolver = LabelResolver::new();

        // Empty custom label always equals the original label.
        assert_eq!(
            resolver.effective_label("Settings", "options-general.php", None),
            "Settings"
        );
        assert_eq!(
            resolver.effective_label("Settings", "options-general.php", Some("")),
            "Settings"
        );

        // Non-empty custom label always equals the sanitized custom label.
        assert_eq!(
            resolver.effective_label("Settings", "options-general.php", Some("<b>Site  Options</b>")),
            "Site Options"
        );
    }

    #[test]
    fn test_effective_label_never_empty_for_nonempty_identifier() {
        let resolver = LabelResolver::new();
        assert_eq!(resolver.effective_label("", "x", Some("<i></i>")), "X");
    }
}
