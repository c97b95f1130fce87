//! Best-effort normalization for user-editable configuration values.
//! Malformed entries are dropped, never raised as errors.

use crate::domain::model::HiddenPair;
use serde_json::Value;
use std::collections::HashSet;

/// Coerce a scalar JSON value to a trimmed string. Composite values and
/// nulls yield `None`.
fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Trim, drop empties and non-scalars, de-duplicate preserving first
/// occurrence.
pub fn normalize_identifiers(values: &[Value]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut result = Vec::new();

    for value in values {
        let Some(slug) = scalar_to_string(value) else {
            continue;
        };
        if slug.is_empty() {
            continue;
        }
        if seen.insert(slug.clone()) {
            result.push(slug);
        }
    }

    result
}

/// Decode `(parent, child)` suppression targets. Accepts `"parent|child"`
/// strings (split on the first `|`) or `{parent, child}` objects. A pair is
/// dropped when either side is empty after trimming.
pub fn normalize_hidden_pairs(values: &[Value]) -> Vec<HiddenPair> {
    let mut seen = HashSet::new();
    let mut result = Vec::new();

    for value in values {
        let Some(pair) = decode_pair(value) else {
            continue;
        };
        if seen.insert(pair.clone()) {
            result.push(pair);
        }
    }

    result
}

/// Merge stored values with render-time contributions, stored first, then
/// trim and de-duplicate.
pub fn merge_identifiers(stored: &[String], contributed: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut result = Vec::new();

    for slug in stored.iter().chain(contributed) {
        let slug = slug.trim();
        if slug.is_empty() {
            continue;
        }
        if seen.insert(slug.to_string()) {
            result.push(slug.to_string());
        }
    }

    result
}

/// Same merge for `(parent, child)` pairs; a pair with an empty side is
/// dropped.
pub fn merge_pairs(stored: &[HiddenPair], contributed: &[HiddenPair]) -> Vec<HiddenPair> {
    let mut seen = HashSet::new();
    let mut result = Vec::new();

    for pair in stored.iter().chain(contributed) {
        let parent = pair.parent.trim();
        let child = pair.child.trim();
        if parent.is_empty() || child.is_empty() {
            continue;
        }
        let pair = HiddenPair::new(parent, child);
        if seen.insert(pair.clone()) {
            result.push(pair);
        }
    }

    result
}

fn decode_pair(value: &Value) -> Option<HiddenPair> {
    let (parent, child) = match value {
        Value::String(s) => {
            let (parent, child) = s.split_once('|')?;
            (parent.trim().to_string(), child.trim().to_string())
        }
        Value::Object(map) => {
            let parent = map.get("parent").and_then(scalar_to_string)?;
            let child = map.get("child").and_then(scalar_to_string)?;
            (parent, child)
        }
        _ => return None,
    };

    if parent.is_empty() || child.is_empty() {
        return None;
    }

    Some(HiddenPair { parent, child })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_identifiers_trims_and_dedupes() {
        let values = vec![
            json!("  index.php  "),
            json!("edit.php"),
            json!("index.php"),
            json!(""),
            json!("   "),
        ];

        assert_eq!(
            normalize_identifiers(&values),
            vec!["index.php".to_string(), "edit.php".to_string()]
        );
    }

    #[test]
    fn test_normalize_identifiers_skips_non_scalars() {
        let values = vec![
            json!(["nested"]),
            json!({"slug": "index.php"}),
            json!(null),
            json!(42),
            json!("tools.php"),
        ];

        assert_eq!(
            normalize_identifiers(&values),
            vec!["42".to_string(), "tools.php".to_string()]
        );
    }

    #[test]
    fn test_normalize_hidden_pairs_from_strings() {
        let values = vec![
            json!("options-general.php|options-writing.php"),
            json!("  edit.php | post-new.php "),
            json!("options-general.php|options-writing.php"),
            json!("no-separator"),
            json!("|orphan-child"),
            json!("orphan-parent|"),
        ];

        assert_eq!(
            normalize_hidden_pairs(&values),
            vec![
                HiddenPair::new("options-general.php", "options-writing.php"),
                HiddenPair::new("edit.php", "post-new.php"),
            ]
        );
    }

    #[test]
    fn test_normalize_hidden_pairs_from_records() {
        let values = vec![
            json!({"parent": "edit.php", "child": "post-new.php"}),
            json!({"parent": "edit.php"}),
            json!({"parent": "", "child": "post-new.php"}),
            json!(17),
        ];

        assert_eq!(
            normalize_hidden_pairs(&values),
            vec![HiddenPair::new("edit.php", "post-new.php")]
        );
    }

    #[test]
    fn test_merge_identifiers_stored_first() {
        let stored = vec!["a".to_string(), "b".to_string()];
        let contributed = vec![" b ".to_string(), "c".to_string(), "".to_string()];

        assert_eq!(
            merge_identifiers(&stored, &contributed),
            vec!["a".to_string(), "b".to_string(), "c".to_string()]
        );
    }

    #[test]
    fn test_merge_pairs_dedupes_after_trim() {
        let stored = vec![HiddenPair::new("p", "c")];
        let contributed = vec![
            HiddenPair::new(" p ", "c"),
            HiddenPair::new("p", "d"),
            HiddenPair::new("", "d"),
        ];

        assert_eq!(
            merge_pairs(&stored, &contributed),
            vec![HiddenPair::new("p", "c"), HiddenPair::new("p", "d")]
        );
    }

    #[test]
    fn test_pair_split_uses_first_separator_only() {
        let values = vec![json!("parent|child|extra")];

        assert_eq!(
            normalize_hidden_pairs(&values),
            vec![HiddenPair::new("parent", "child|extra")]
        );
    }
}
