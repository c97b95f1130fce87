//! The menu transformation pass: hide, reorder, and relabel a two-level menu
//! tree, keeping the configuration screen reachable no matter what the
//! configuration says.

use crate::config::StoredOverrides;
use crate::core::labels::LabelResolver;
use crate::core::normalize::{merge_identifiers, merge_pairs};
use crate::domain::model::{
    Contributions, HiddenPair, MenuEntry, MenuTree, PassReport, SettingsPage, SubmenuTree,
};
use crate::domain::ports::{AllowAll, Capabilities, OverrideStore};
use crate::utils::error::Result;
use std::collections::HashSet;

pub struct MenuTransformer<C: Capabilities = AllowAll> {
    settings: SettingsPage,
    labels: LabelResolver,
    capabilities: C,
}

impl MenuTransformer<AllowAll> {
    pub fn new(settings: SettingsPage) -> Self {
        Self::with_capabilities(settings, AllowAll)
    }
}

impl<C: Capabilities> MenuTransformer<C> {
    pub fn with_capabilities(settings: SettingsPage, capabilities: C) -> Self {
        Self {
            settings,
            labels: LabelResolver::new(),
            capabilities,
        }
    }

    /// Run one full pass: read the stored overrides once, then apply them
    /// together with the render-time contributions. The trees are mutated in
    /// place and not retained.
    pub fn transform(
        &self,
        tree: &mut MenuTree,
        submenu: &mut SubmenuTree,
        store: &dyn OverrideStore,
        contributions: &Contributions,
    ) -> Result<PassReport> {
        let stored = StoredOverrides::load(store)?;
        Ok(self.apply(tree, submenu, &stored, contributions))
    }

    /// The pass itself. Pure over its inputs: no I/O, no retained state
    /// beyond the per-pass fallback flag.
    pub fn apply(
        &self,
        tree: &mut MenuTree,
        submenu: &mut SubmenuTree,
        stored: &StoredOverrides,
        contributions: &Contributions,
    ) -> PassReport {
        let hidden_menus = merge_identifiers(&stored.hidden_menus, &contributions.hidden_menus);
        let hidden_pairs = merge_pairs(&stored.hidden_submenus, &contributions.hidden_submenus);

        // Step 1: register the fallback entry before anything is hidden, so
        // the settings screen survives losing its natural parent.
        let fallback_active = self.register_fallback(tree, submenu, &hidden_menus);

        // Step 2: hide top-level entries.
        let removed_menus = self.hide_menus(tree, submenu, &hidden_menus, fallback_active);

        // Step 3: reorder top-level entries.
        reorder(tree, &contributions.menu_order);

        // Step 4: hide (parent, child) pairs.
        let removed_children = hide_submenus(submenu, &hidden_pairs);

        // Step 5: reorder children, independently per parent.
        for (parent, spec) in &contributions.submenu_order {
            if let Some(children) = submenu.get_mut(parent) {
                reorder(children, spec);
            }
        }

        // Step 6: apply stored renames. Labeling runs after all matching so
        // a rename can never affect hide or reorder targets.
        self.apply_labels(tree, submenu, stored);

        // Step 7: keep the rename feature consistent for the fallback entry
        // wherever the settings screen ended up.
        if fallback_active {
            self.sync_fallback_label(tree, submenu, stored);
        }

        tracing::debug!(
            fallback_active,
            removed_menus,
            removed_children,
            "menu transformation pass complete"
        );

        PassReport {
            fallback_active,
            hidden_menus: removed_menus,
            hidden_submenus: removed_children,
        }
    }

    fn register_fallback(
        &self,
        tree: &mut MenuTree,
        submenu: &SubmenuTree,
        hidden_menus: &[String],
    ) -> bool {
        if !hidden_menus.contains(&self.settings.natural_parent) {
            return false;
        }
        if self.registered_elsewhere(tree, submenu) {
            return false;
        }
        // A user who cannot open the settings screen gains nothing from a
        // fallback entry.
        if !self.capabilities.user_can(&self.settings.capability) {
            return false;
        }

        tracing::debug!(
            identifier = %self.settings.identifier,
            "natural parent hidden, registering fallback settings entry"
        );
        tree.push(MenuEntry::new(
            self.settings.title.clone(),
            self.settings.capability.clone(),
            self.settings.identifier.clone(),
        ));
        true
    }

    /// Is the settings screen already registered somewhere other than under
    /// its natural parent?
    fn registered_elsewhere(&self, tree: &MenuTree, submenu: &SubmenuTree) -> bool {
        if tree.iter().any(|e| e.identifier == self.settings.identifier) {
            return true;
        }
        submenu.iter().any(|(parent, children)| {
            *parent != self.settings.natural_parent
                && children.iter().any(|c| c.identifier == self.settings.identifier)
        })
    }

    fn hide_menus(
        &self,
        tree: &mut MenuTree,
        submenu: &SubmenuTree,
        hidden_menus: &[String],
        fallback_active: bool,
    ) -> usize {
        let hidden: HashSet<&str> = hidden_menus.iter().map(String::as_str).collect();
        let before = tree.len();

        tree.retain(|entry| {
            if !hidden.contains(entry.identifier.as_str()) {
                return true;
            }
            // Without a fallback entry, the natural parent must stay visible
            // as long as it still exposes the settings child.
            !fallback_active
                && entry.identifier == self.settings.natural_parent
                && submenu
                    .get(&self.settings.natural_parent)
                    .is_some_and(|children| {
                        children.iter().any(|c| c.identifier == self.settings.identifier)
                    })
        });

        before - tree.len()
    }

    fn apply_labels(&self, tree: &mut MenuTree, submenu: &mut SubmenuTree, stored: &StoredOverrides) {
        for entry in tree.iter_mut() {
            if let Some(custom) = stored.menu_labels.get(&entry.identifier) {
                if let Some(label) = self.labels.sanitize_custom(custom) {
                    entry.label = label;
                }
            }
        }

        for (parent, children) in submenu.iter_mut() {
            let Some(overrides) = stored.submenu_labels.get(parent) else {
                continue;
            };
            for child in children.iter_mut() {
                if let Some(custom) = overrides.get(&child.identifier) {
                    if let Some(label) = self.labels.sanitize_custom(custom) {
                        child.label = label;
                    }
                }
            }
        }
    }

    /// Force every occurrence of the settings identifier to the configured
    /// rename: the screen's own custom label first (top-level map, then the
    /// nested map under the natural parent), then the natural parent's
    /// custom label, else the default title stands.
    fn sync_fallback_label(
        &self,
        tree: &mut MenuTree,
        submenu: &mut SubmenuTree,
        stored: &StoredOverrides,
    ) {
        let custom = stored
            .menu_labels
            .get(&self.settings.identifier)
            .or_else(|| {
                stored
                    .submenu_labels
                    .get(&self.settings.natural_parent)
                    .and_then(|m| m.get(&self.settings.identifier))
            })
            .or_else(|| stored.menu_labels.get(&self.settings.natural_parent))
            .and_then(|c| self.labels.sanitize_custom(c));

        let Some(label) = custom else {
            return;
        };

        for entry in tree.iter_mut() {
            if entry.identifier == self.settings.identifier {
                entry.label = label.clone();
            }
        }
        for children in submenu.values_mut() {
            for child in children.iter_mut() {
                if child.identifier == self.settings.identifier {
                    child.label = label.clone();
                }
            }
        }
    }
}

/// Prefix-order reorder: consume the first remaining match per spec entry
/// (duplicates in the spec each consume one entry), then append everything
/// unconsumed in original relative order. An empty spec is a no-op, not a
/// "remove everything" instruction.
fn reorder(entries: &mut Vec<MenuEntry>, spec: &[String]) {
    if spec.is_empty() {
        return;
    }

    let mut consumed = vec![false; entries.len()];
    let mut ordered = Vec::with_capacity(entries.len());

    for slug in spec {
        let next = entries
            .iter()
            .enumerate()
            .position(|(i, entry)| !consumed[i] && entry.identifier == *slug);
        if let Some(i) = next {
            consumed[i] = true;
            ordered.push(entries[i].clone());
        }
    }

    for (i, entry) in entries.iter().enumerate() {
        if !consumed[i] {
            ordered.push(entry.clone());
        }
    }

    *entries = ordered;
}

fn hide_submenus(submenu: &mut SubmenuTree, hidden_pairs: &[HiddenPair]) -> usize {
    let mut removed = 0;

    for pair in hidden_pairs {
        // Unknown parents are nothing to do, not an error.
        if let Some(children) = submenu.get_mut(&pair.parent) {
            let before = children.len();
            children.retain(|c| c.identifier != pair.child);
            removed += before - children.len();
        }
    }

    removed
}
