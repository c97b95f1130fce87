use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One navigation item. `identifier` is the stable key used for all hide,
/// reorder, and relabel matching; `label` is what the host displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuEntry {
    pub label: String,
    pub capability: String,
    pub identifier: String,
}

impl MenuEntry {
    pub fn new(
        label: impl Into<String>,
        capability: impl Into<String>,
        identifier: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            capability: capability.into(),
            identifier: identifier.into(),
        }
    }
}

/// Ordered top-level entries; insertion order is display order.
pub type MenuTree = Vec<MenuEntry>;

/// Parent identifier to ordered children. A parent with no key has no children.
pub type SubmenuTree = HashMap<String, Vec<MenuEntry>>;

/// A `(parent, child)` suppression target. Stored on the wire as
/// `"parent|child"`; decoded at the boundary and never passed on as a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HiddenPair {
    pub parent: String,
    pub child: String,
}

impl HiddenPair {
    pub fn new(parent: impl Into<String>, child: impl Into<String>) -> Self {
        Self {
            parent: parent.into(),
            child: child.into(),
        }
    }

    /// Wire encoding used by the configuration store.
    pub fn encode(&self) -> String {
        format!("{}|{}", self.parent, self.child)
    }
}

/// Render-time contributions from other code, merged with stored
/// configuration as stored-first, contributed-after.
#[derive(Debug, Clone, Default)]
pub struct Contributions {
    pub hidden_menus: Vec<String>,
    pub hidden_submenus: Vec<HiddenPair>,
    pub menu_order: Vec<String>,
    pub submenu_order: HashMap<String, Vec<String>>,
}

/// Registration facts for the configuration screen itself. The transformer
/// checks exactly this natural parent when deciding whether the screen needs
/// a fallback top-level registration.
#[derive(Debug, Clone)]
pub struct SettingsPage {
    pub identifier: String,
    pub natural_parent: String,
    pub title: String,
    pub capability: String,
}

impl SettingsPage {
    pub fn new(
        identifier: impl Into<String>,
        natural_parent: impl Into<String>,
        title: impl Into<String>,
        capability: impl Into<String>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            natural_parent: natural_parent.into(),
            title: title.into(),
            capability: capability.into(),
        }
    }
}

/// One row of the configuration checklist: current label, the label before
/// any rename, and the stored rename if one exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChecklistRow {
    pub identifier: String,
    pub label: String,
    pub original_label: String,
    pub custom_label: Option<String>,
}

/// Checklist group for one submenu parent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmenuChecklist {
    pub parent: String,
    pub parent_label: String,
    pub parent_original_label: String,
    pub parent_custom_label: Option<String>,
    pub items: Vec<ChecklistRow>,
}

/// Summary of one transformation pass, for caller-side logging.
#[derive(Debug, Clone, Default)]
pub struct PassReport {
    pub fallback_active: bool,
    pub hidden_menus: usize,
    pub hidden_submenus: usize,
}
