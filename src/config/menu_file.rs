use crate::core::normalize::normalize_hidden_pairs;
use crate::domain::model::{Contributions, MenuEntry, MenuTree, SettingsPage, SubmenuTree};
use crate::utils::error::Result;
use crate::utils::validation::{validate_slug, Validate};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;

/// TOML description of a host menu tree plus render-time contributions.
/// Used by the CLI and as a fixture format; a real host builds the trees
/// directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuFile {
    pub menu: Vec<MenuEntryConfig>,
    #[serde(default)]
    pub submenu: HashMap<String, Vec<MenuEntryConfig>>,
    pub contributions: Option<ContributionsConfig>,
    pub settings: Option<SettingsPageConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuEntryConfig {
    pub label: String,
    pub capability: Option<String>,
    pub identifier: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContributionsConfig {
    #[serde(default)]
    pub hidden_menus: Vec<String>,
    /// `"parent|child"` wire strings, decoded on conversion.
    #[serde(default)]
    pub hidden_submenus: Vec<String>,
    #[serde(default)]
    pub menu_order: Vec<String>,
    #[serde(default)]
    pub submenu_order: HashMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsPageConfig {
    pub identifier: String,
    pub natural_parent: String,
    pub title: Option<String>,
    pub capability: Option<String>,
}

impl MenuFile {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: MenuFile = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn menu_tree(&self) -> MenuTree {
        self.menu.iter().map(to_entry).collect()
    }

    pub fn submenu_tree(&self) -> SubmenuTree {
        self.submenu
            .iter()
            .map(|(parent, children)| (parent.clone(), children.iter().map(to_entry).collect()))
            .collect()
    }

    pub fn contributions(&self) -> Contributions {
        let Some(config) = &self.contributions else {
            return Contributions::default();
        };

        let pair_values: Vec<Value> = config
            .hidden_submenus
            .iter()
            .map(|s| Value::String(s.clone()))
            .collect();

        Contributions {
            hidden_menus: config.hidden_menus.clone(),
            hidden_submenus: normalize_hidden_pairs(&pair_values),
            menu_order: config.menu_order.clone(),
            submenu_order: config.submenu_order.clone(),
        }
    }

    pub fn settings_page(&self) -> SettingsPage {
        match &self.settings {
            Some(config) => SettingsPage::new(
                config.identifier.clone(),
                config.natural_parent.clone(),
                config
                    .title
                    .clone()
                    .unwrap_or_else(|| "Menu Settings".to_string()),
                config
                    .capability
                    .clone()
                    .unwrap_or_else(|| "manage_options".to_string()),
            ),
            None => SettingsPage::new(
                "menukit-settings",
                "options-general.php",
                "Menu Settings",
                "manage_options",
            ),
        }
    }
}

fn to_entry(config: &MenuEntryConfig) -> MenuEntry {
    MenuEntry::new(
        config.label.clone(),
        config.capability.clone().unwrap_or_else(|| "read".to_string()),
        config.identifier.clone(),
    )
}

impl Validate for MenuFile {
    fn validate(&self) -> Result<()> {
        for entry in &self.menu {
            validate_slug("menu.identifier", &entry.identifier)?;
        }
        for (parent, children) in &self.submenu {
            validate_slug("submenu.parent", parent)?;
            for child in children {
                validate_slug("submenu.identifier", &child.identifier)?;
            }
        }
        if let Some(settings) = &self.settings {
            validate_slug("settings.identifier", &settings.identifier)?;
            validate_slug("settings.natural_parent", &settings.natural_parent)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        [[menu]]
        label = "Dashboard"
        capability = "read"
        identifier = "index.php"

        [[menu]]
        label = "Settings"
        capability = "manage_options"
        identifier = "options-general.php"

        [[submenu."options-general.php"]]
        label = "General"
        identifier = "options-general.php"

        [contributions]
        hidden_menus = ["index.php"]
        hidden_submenus = ["options-general.php|options-writing.php"]
        menu_order = ["options-general.php", "index.php"]

        [settings]
        identifier = "menukit-settings"
        natural_parent = "options-general.php"
    "#;

    #[test]
    fn test_parse_sample() {
        let file: MenuFile = toml::from_str(SAMPLE).unwrap();
        assert!(file.validate().is_ok());

        let tree = file.menu_tree();
        assert_eq!(tree.len(), 2);
        assert_eq!(tree[0].capability, "read");

        let submenu = file.submenu_tree();
        assert_eq!(submenu["options-general.php"].len(), 1);
        // Default capability fills in when omitted.
        assert_eq!(submenu["options-general.php"][0].capability, "read");

        let contributions = file.contributions();
        assert_eq!(contributions.hidden_menus, vec!["index.php".to_string()]);
        assert_eq!(contributions.hidden_submenus.len(), 1);
        assert_eq!(contributions.hidden_submenus[0].child, "options-writing.php");
        assert_eq!(contributions.menu_order.len(), 2);

        let settings = file.settings_page();
        assert_eq!(settings.title, "Menu Settings");
        assert_eq!(settings.capability, "manage_options");
    }

    #[test]
    fn test_validate_rejects_blank_identifier() {
        let broken = r#"
            [[menu]]
            label = "Ghost"
            identifier = "  "
        "#;
        let file: MenuFile = toml::from_str(broken).unwrap();
        assert!(file.validate().is_err());
    }
}
