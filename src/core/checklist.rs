//! View models for the configuration screen. Reconciles the live tree with
//! stored selections so a hidden or renamed item stays editable even after
//! it disappears from the rendered menu.

use crate::core::labels::LabelResolver;
use crate::domain::model::{ChecklistRow, HiddenPair, MenuTree, SubmenuChecklist, SubmenuTree};
use std::collections::{HashMap, HashSet};

#[derive(Default)]
pub struct ChecklistBuilder {
    labels: LabelResolver,
}

impl ChecklistBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// One row per known top-level identifier: live tree entries in tree
    /// order, then hidden-only identifiers, then rename-only identifiers
    /// (sorted for determinism). Nothing previously configured is dropped.
    pub fn menu_checklist(
        &self,
        tree: &MenuTree,
        hidden_menus: &[String],
        menu_labels: &HashMap<String, String>,
    ) -> Vec<ChecklistRow> {
        let mut seen = HashSet::new();
        let mut rows = Vec::new();

        for entry in tree {
            if seen.insert(entry.identifier.clone()) {
                rows.push(self.row(
                    &entry.identifier,
                    &entry.label,
                    menu_labels.get(&entry.identifier),
                ));
            }
        }

        for slug in hidden_menus {
            if seen.insert(slug.clone()) {
                rows.push(self.row(slug, "", menu_labels.get(slug)));
            }
        }

        let mut renamed_only: Vec<&String> =
            menu_labels.keys().filter(|k| !seen.contains(*k)).collect();
        renamed_only.sort();
        for slug in renamed_only {
            rows.push(self.row(slug, "", menu_labels.get(slug)));
        }

        rows
    }

    /// The same reconciliation two levels deep. Parents are ordered by the
    /// top-level checklist when present there, then by hidden-pair order,
    /// then sorted; the parent label comes from the top-level rows when
    /// available, else is synthesized from the slug.
    pub fn submenu_checklist(
        &self,
        submenu: &SubmenuTree,
        hidden_pairs: &[HiddenPair],
        parent_rows: &[ChecklistRow],
        submenu_labels: &HashMap<String, HashMap<String, String>>,
    ) -> Vec<SubmenuChecklist> {
        let parents = self.parent_order(submenu, hidden_pairs, parent_rows, submenu_labels);
        let empty = HashMap::new();

        parents
            .into_iter()
            .map(|parent| {
                let overrides = submenu_labels.get(&parent).unwrap_or(&empty);
                let items = self.child_rows(&parent, submenu, hidden_pairs, overrides);

                let (parent_label, parent_original_label, parent_custom_label) =
                    match parent_rows.iter().find(|r| r.identifier == parent) {
                        Some(row) => (
                            row.label.clone(),
                            row.original_label.clone(),
                            row.custom_label.clone(),
                        ),
                        None => {
                            let generated = self.labels.generated_label(&parent);
                            (generated.clone(), generated, None)
                        }
                    };

                SubmenuChecklist {
                    parent,
                    parent_label,
                    parent_original_label,
                    parent_custom_label,
                    items,
                }
            })
            .collect()
    }

    fn parent_order(
        &self,
        submenu: &SubmenuTree,
        hidden_pairs: &[HiddenPair],
        parent_rows: &[ChecklistRow],
        submenu_labels: &HashMap<String, HashMap<String, String>>,
    ) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut parents = Vec::new();

        // Tree-derived parents, in top-level display order.
        for row in parent_rows {
            if submenu.contains_key(&row.identifier) && seen.insert(row.identifier.clone()) {
                parents.push(row.identifier.clone());
            }
        }
        let mut unlisted: Vec<&String> = submenu.keys().filter(|p| !seen.contains(*p)).collect();
        unlisted.sort();
        for parent in unlisted {
            seen.insert(parent.clone());
            parents.push(parent.clone());
        }

        // Parents known only through hidden pairs.
        for pair in hidden_pairs {
            if seen.insert(pair.parent.clone()) {
                parents.push(pair.parent.clone());
            }
        }

        // Parents known only through renames.
        let mut renamed_only: Vec<&String> =
            submenu_labels.keys().filter(|p| !seen.contains(*p)).collect();
        renamed_only.sort();
        for parent in renamed_only {
            parents.push(parent.clone());
        }

        parents
    }

    fn child_rows(
        &self,
        parent: &str,
        submenu: &SubmenuTree,
        hidden_pairs: &[HiddenPair],
        overrides: &HashMap<String, String>,
    ) -> Vec<ChecklistRow> {
        let mut seen = HashSet::new();
        let mut items = Vec::new();

        if let Some(children) = submenu.get(parent) {
            for child in children {
                if seen.insert(child.identifier.clone()) {
                    items.push(self.row(
                        &child.identifier,
                        &child.label,
                        overrides.get(&child.identifier),
                    ));
                }
            }
        }

        for pair in hidden_pairs.iter().filter(|p| p.parent == parent) {
            if seen.insert(pair.child.clone()) {
                items.push(self.row(&pair.child, "", overrides.get(&pair.child)));
            }
        }

        let mut renamed_only: Vec<&String> =
            overrides.keys().filter(|c| !seen.contains(*c)).collect();
        renamed_only.sort();
        for child in renamed_only {
            items.push(self.row(child, "", overrides.get(child)));
        }

        items
    }

    fn row(&self, identifier: &str, raw_label: &str, custom: Option<&String>) -> ChecklistRow {
        let original_label = self.labels.original_label(raw_label, identifier);
        let custom_label = custom.and_then(|c| self.labels.sanitize_custom(c));
        let label = custom_label
            .clone()
            .unwrap_or_else(|| original_label.clone());

        ChecklistRow {
            identifier: identifier.to_string(),
            label,
            original_label,
            custom_label,
        }
    }
}
