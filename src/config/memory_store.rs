use crate::domain::ports::{OverrideKey, OverrideStore};
use crate::utils::error::Result;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory override store, for hosts that manage persistence themselves
/// and for tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OverrideStore for MemoryStore {
    fn get(&self, key: OverrideKey, default: Value) -> Result<Value> {
        let values = self.values.lock().unwrap();
        Ok(values.get(key.as_str()).cloned().unwrap_or(default))
    }

    fn set(&self, key: OverrideKey, value: Value) -> Result<()> {
        let mut values = self.values.lock().unwrap();
        values.insert(key.as_str().to_string(), value);
        Ok(())
    }
}
