use menukit::{
    Contributions, MemoryStore, MenuEntry, MenuError, MenuTransformer, MenuTree, OverrideKey,
    OverrideStore, SettingsPage, StoredOverrides, SubmenuTree, TomlStore,
};
use serde_json::json;
use tempfile::TempDir;

fn store_in(dir: &TempDir) -> TomlStore {
    let path = dir.path().join("overrides.toml");
    TomlStore::new(path).unwrap()
}

#[test]
fn missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    let stored = StoredOverrides::load(&store).unwrap();
    assert_eq!(stored, StoredOverrides::default());
}

#[test]
fn round_trip_all_four_values() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    store
        .set(OverrideKey::HiddenMenus, json!(["edit.php", "tools.php"]))
        .unwrap();
    store
        .set(
            OverrideKey::HiddenSubmenus,
            json!(["options-general.php|options-writing.php"]),
        )
        .unwrap();
    store
        .set(OverrideKey::MenuLabels, json!({"index.php": "Home"}))
        .unwrap();
    store
        .set(
            OverrideKey::SubmenuLabels,
            json!({"edit.php": {"post-new.php": "Create"}}),
        )
        .unwrap();

    let stored = StoredOverrides::load(&store).unwrap();
    assert_eq!(
        stored.hidden_menus,
        vec!["edit.php".to_string(), "tools.php".to_string()]
    );
    assert_eq!(stored.hidden_submenus.len(), 1);
    assert_eq!(stored.hidden_submenus[0].parent, "options-general.php");
    assert_eq!(stored.menu_labels.get("index.php"), Some(&"Home".to_string()));
    assert_eq!(
        stored.submenu_labels["edit.php"].get("post-new.php"),
        Some(&"Create".to_string())
    );
}

#[test]
fn writes_are_sanitized() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    store
        .set(
            OverrideKey::HiddenMenus,
            json!(["  edit.php ", "edit.php", "", ["junk"]]),
        )
        .unwrap();
    store
        .set(
            OverrideKey::MenuLabels,
            json!({"index.php": "<b>Home</b>", "tools.php": "<i></i>"}),
        )
        .unwrap();

    let stored = StoredOverrides::load(&store).unwrap();
    assert_eq!(stored.hidden_menus, vec!["edit.php".to_string()]);
    // Markup stripped; a rename that strips to nothing is never stored.
    assert_eq!(stored.menu_labels.get("index.php"), Some(&"Home".to_string()));
    assert!(!stored.menu_labels.contains_key("tools.php"));
}

#[test]
fn oversized_label_is_rejected() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    let result = store.set(
        OverrideKey::MenuLabels,
        json!({"index.php": "x".repeat(300)}),
    );

    assert!(matches!(
        result,
        Err(MenuError::InvalidConfigValueError { .. })
    ));
}

#[test]
fn pair_wire_format_is_parent_pipe_child() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    store
        .set(
            OverrideKey::HiddenSubmenus,
            json!([{"parent": "edit.php", "child": "post-new.php"}]),
        )
        .unwrap();

    // Records are re-encoded to the string wire format on disk.
    let raw = store
        .get(OverrideKey::HiddenSubmenus, json!([]))
        .unwrap();
    assert_eq!(raw, json!(["edit.php|post-new.php"]));
}

#[test]
fn full_pass_from_file_backed_store() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    store
        .set(OverrideKey::HiddenMenus, json!(["options-general.php"]))
        .unwrap();
    store
        .set(
            OverrideKey::MenuLabels,
            json!({"options-general.php": "Site Options"}),
        )
        .unwrap();

    let mut tree: MenuTree = vec![
        MenuEntry::new("Dashboard", "read", "index.php"),
        MenuEntry::new("Settings", "manage_options", "options-general.php"),
    ];
    let mut submenu = SubmenuTree::new();
    submenu.insert(
        "options-general.php".to_string(),
        vec![MenuEntry::new(
            "Menu Settings",
            "manage_options",
            "menukit-settings",
        )],
    );

    let transformer = MenuTransformer::new(SettingsPage::new(
        "menukit-settings",
        "options-general.php",
        "Menu Settings",
        "manage_options",
    ));
    let report = transformer
        .transform(&mut tree, &mut submenu, &store, &Contributions::default())
        .unwrap();

    assert!(report.fallback_active);
    let ids: Vec<&str> = tree.iter().map(|e| e.identifier.as_str()).collect();
    assert_eq!(ids, vec!["index.php", "menukit-settings"]);
    // The parent rename carries over to the fallback entry.
    assert_eq!(tree[1].label, "Site Options");
}

#[test]
fn memory_and_toml_stores_agree() {
    let dir = TempDir::new().unwrap();
    let toml_store = store_in(&dir);
    let memory_store = MemoryStore::new();

    for store in [&toml_store as &dyn OverrideStore, &memory_store] {
        store
            .set(OverrideKey::HiddenMenus, json!(["edit.php"]))
            .unwrap();
    }

    let from_toml = StoredOverrides::load(&toml_store).unwrap();
    let from_memory = StoredOverrides::load(&memory_store).unwrap();
    assert_eq!(from_toml, from_memory);
}
