use std::collections::BTreeMap;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Per-respondent persisted key-value state.
///
/// The surrounding HTTP framework supplies the real implementation (cookie
/// store, redis, ...); the engine only needs string get/put/remove. Holds the
/// in-progress `Questionnaire` and the verified `Login`.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn put(&mut self, key: &str, value: String);
    fn remove(&mut self, key: &str);
}

/// JSON-typed convenience layer over any `SessionStore`.
pub trait SessionStoreExt: SessionStore {
    fn get_object<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.get(key)?;
        serde_json::from_str(&raw).ok()
    }

    fn put_object<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), serde_json::Error> {
        let raw = serde_json::to_string(value)?;
        self.put(key, raw);
        Ok(())
    }
}

impl<S: SessionStore + ?Sized> SessionStoreExt for S {}

/// In-memory session; the default for tests and single-process servers.
#[derive(Debug, Clone, Default)]
pub struct MemorySession {
    entries: BTreeMap<String, String>,
}

impl MemorySession {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySession {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn put(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}
