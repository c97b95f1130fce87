use crate::config::{label_map, nested_label_map};
use crate::core::labels::LabelResolver;
use crate::core::normalize::{normalize_hidden_pairs, normalize_identifiers};
use crate::domain::ports::{OverrideKey, OverrideStore};
use crate::utils::error::Result;
use crate::utils::validation::{validate_label, validate_path};
use serde_json::Value;
use std::path::PathBuf;

/// File-backed override store: one TOML document holding the four named
/// values. Writes sanitize through the same normalization rules the
/// transformer applies on read, so the file only ever contains clean values.
pub struct TomlStore {
    path: PathBuf,
}

impl TomlStore {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        validate_path("store_path", path.to_str().unwrap_or(""))?;
        Ok(Self { path })
    }

    fn read_document(&self) -> Result<toml::Table> {
        if !self.path.exists() {
            return Ok(toml::Table::new());
        }
        let content = std::fs::read_to_string(&self.path)?;
        Ok(toml::from_str(&content)?)
    }
}

impl OverrideStore for TomlStore {
    fn get(&self, key: OverrideKey, default: Value) -> Result<Value> {
        let document = self.read_document()?;
        match document.get(key.as_str()) {
            Some(value) => Ok(serde_json::to_value(value)?),
            None => Ok(default),
        }
    }

    fn set(&self, key: OverrideKey, value: Value) -> Result<()> {
        let sanitized = sanitize_value(key, &value)?;

        let mut document = self.read_document()?;
        document.insert(key.as_str().to_string(), toml::Value::try_from(&sanitized)?);
        std::fs::write(&self.path, toml::to_string_pretty(&document)?)?;

        tracing::debug!(
            key = key.as_str(),
            path = %self.path.display(),
            "override value written"
        );
        Ok(())
    }
}

/// User-entered settings pass through the normalizer and label rules before
/// they reach disk. Malformed entries are dropped; oversized labels are the
/// one condition reported back to the settings form.
fn sanitize_value(key: OverrideKey, value: &Value) -> Result<Value> {
    let items: &[Value] = match value {
        Value::Array(items) => items.as_slice(),
        _ => &[],
    };

    match key {
        OverrideKey::HiddenMenus => {
            let slugs = normalize_identifiers(items);
            Ok(Value::Array(slugs.into_iter().map(Value::String).collect()))
        }
        OverrideKey::HiddenSubmenus => {
            let pairs = normalize_hidden_pairs(items);
            Ok(Value::Array(
                pairs.iter().map(|p| Value::String(p.encode())).collect(),
            ))
        }
        OverrideKey::MenuLabels => sanitize_label_object(&label_map(value)),
        OverrideKey::SubmenuLabels => {
            let mut parents = serde_json::Map::new();
            for (parent, children) in nested_label_map(value) {
                let cleaned = sanitize_label_object(&children)?;
                if cleaned.as_object().is_some_and(|m| !m.is_empty()) {
                    parents.insert(parent, cleaned);
                }
            }
            Ok(Value::Object(parents))
        }
    }
}

fn sanitize_label_object(labels: &std::collections::HashMap<String, String>) -> Result<Value> {
    let resolver = LabelResolver::new();
    let mut object = serde_json::Map::new();

    for (slug, label) in labels {
        validate_label(slug, label)?;
        // Stripping may leave nothing; an empty rename is never stored.
        if let Some(cleaned) = resolver.sanitize_custom(label) {
            object.insert(slug.clone(), Value::String(cleaned));
        }
    }

    Ok(Value::Object(object))
}
