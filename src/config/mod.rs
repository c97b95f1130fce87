pub mod memory_store;
pub mod menu_file;
pub mod toml_store;

#[cfg(feature = "cli")]
pub mod cli;

use crate::core::normalize::{normalize_hidden_pairs, normalize_identifiers};
use crate::domain::model::HiddenPair;
use crate::domain::ports::{OverrideKey, OverrideStore};
use crate::utils::error::Result;
use serde_json::Value;
use std::collections::HashMap;

/// Typed snapshot of the four stored override values, read once at the start
/// of a transformation pass. Stored values are assumed to have been sanitized
/// on write, but are re-normalized defensively here: wrong shapes and empty
/// entries are dropped, never raised.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoredOverrides {
    pub hidden_menus: Vec<String>,
    pub hidden_submenus: Vec<HiddenPair>,
    pub menu_labels: HashMap<String, String>,
    pub submenu_labels: HashMap<String, HashMap<String, String>>,
}

impl StoredOverrides {
    pub fn load(store: &dyn OverrideStore) -> Result<Self> {
        let hidden_menus = store.get(OverrideKey::HiddenMenus, Value::Array(vec![]))?;
        let hidden_submenus = store.get(OverrideKey::HiddenSubmenus, Value::Array(vec![]))?;
        let menu_labels = store.get(OverrideKey::MenuLabels, empty_object())?;
        let submenu_labels = store.get(OverrideKey::SubmenuLabels, empty_object())?;

        Ok(Self {
            hidden_menus: normalize_identifiers(&as_array(hidden_menus)),
            hidden_submenus: normalize_hidden_pairs(&as_array(hidden_submenus)),
            menu_labels: label_map(&menu_labels),
            submenu_labels: nested_label_map(&submenu_labels),
        })
    }
}

fn empty_object() -> Value {
    Value::Object(serde_json::Map::new())
}

fn as_array(value: Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items,
        _ => Vec::new(),
    }
}

/// Identifier-to-label mapping. Non-object values yield an empty map; entries
/// with a blank key or a blank/non-string label are dropped (an empty label
/// means "no override" and is never kept).
pub(crate) fn label_map(value: &Value) -> HashMap<String, String> {
    let Value::Object(map) = value else {
        return HashMap::new();
    };

    map.iter()
        .filter_map(|(key, label)| {
            let key = key.trim();
            let label = label.as_str()?.trim();
            if key.is_empty() || label.is_empty() {
                None
            } else {
                Some((key.to_string(), label.to_string()))
            }
        })
        .collect()
}

pub(crate) fn nested_label_map(value: &Value) -> HashMap<String, HashMap<String, String>> {
    let Value::Object(map) = value else {
        return HashMap::new();
    };

    map.iter()
        .filter_map(|(parent, children)| {
            let parent = parent.trim();
            if parent.is_empty() {
                return None;
            }
            let children = label_map(children);
            if children.is_empty() {
                None
            } else {
                Some((parent.to_string(), children))
            }
        })
        .collect()
}
