//! The durable key-value store behind the calendar.
//!
//! Values are plain strings; anything structured is JSON-encoded by the caller.
//! Handlers receive the store explicitly instead of reaching for a global, so
//! tests can drive the controller with an in-memory [`StoreData`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const KEY_LAST_OPENED_DATE: &str = "adventLastOpenedDate";
pub const KEY_LAST_MESSAGE: &str = "adventLastMessage";
pub const KEY_USED_INDICES: &str = "adventUsedIndices";

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String);
    fn remove(&mut self, key: &str);
    fn clear(&mut self);
}

/// String map persisted as a flat JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoreData {
    entries: BTreeMap<String, String>,
}

impl KeyValueStore for StoreData {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }

    fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_overwrites_and_remove_is_idempotent() {
        let mut store = StoreData::default();
        store.set(KEY_LAST_MESSAGE, "first".into());
        store.set(KEY_LAST_MESSAGE, "second".into());
        assert_eq!(store.get(KEY_LAST_MESSAGE).as_deref(), Some("second"));

        store.remove(KEY_LAST_MESSAGE);
        store.remove(KEY_LAST_MESSAGE);
        assert_eq!(store.get(KEY_LAST_MESSAGE), None);
    }

    #[test]
    fn serializes_as_flat_object() {
        let mut store = StoreData::default();
        store.set(KEY_USED_INDICES, "[0,2]".into());
        let json = serde_json::to_string(&store).unwrap();
        assert_eq!(json, r#"{"adventUsedIndices":"[0,2]"}"#);
    }
}
