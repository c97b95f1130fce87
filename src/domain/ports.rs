use crate::utils::error::Result;
use serde_json::Value;

/// The four named configuration values the core reads and the settings-save
/// path writes. `as_str` is the wire name in every store backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverrideKey {
    HiddenMenus,
    HiddenSubmenus,
    MenuLabels,
    SubmenuLabels,
}

impl OverrideKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            OverrideKey::HiddenMenus => "hidden_menus",
            OverrideKey::HiddenSubmenus => "hidden_submenus",
            OverrideKey::MenuLabels => "menu_labels",
            OverrideKey::SubmenuLabels => "submenu_labels",
        }
    }
}

/// Narrow read/write contract to the persisted-configuration store. Values
/// are loosely typed on the wire; the core re-normalizes defensively on read.
pub trait OverrideStore {
    /// Read one named value, returning `default` when it is absent.
    fn get(&self, key: OverrideKey, default: Value) -> Result<Value>;

    /// Replace one named value. Callers are expected to sanitize first.
    fn set(&self, key: OverrideKey, value: Value) -> Result<()>;
}

/// Delegated capability check. The host decides what a capability string
/// means; the core only asks yes/no.
pub trait Capabilities {
    fn user_can(&self, capability: &str) -> bool;
}

/// Default collaborator: every capability check passes.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowAll;

impl Capabilities for AllowAll {
    fn user_can(&self, _capability: &str) -> bool {
        true
    }
}
