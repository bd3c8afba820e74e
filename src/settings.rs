use std::collections::{BTreeMap, HashMap};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::ServiceError;

/// String-keyed persistent settings (sound flags, volume, sound assignments).
pub trait SettingsStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String) -> Result<(), ServiceError>;
}

/// Settings kept for the lifetime of the process only.
#[derive(Debug, Default, Clone)]
pub struct MemorySettingsStore {
    values: HashMap<String, String>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemorySettingsStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), ServiceError> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}

/// Settings persisted as a single JSON object file, rewritten on every set.
#[derive(Debug, Clone)]
pub struct JsonFileSettingsStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl JsonFileSettingsStore {
    /// Load the store at `path`. A missing file yields an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, ServiceError> {
        let path = path.into();
        let values = match std::fs::read_to_string(&path) {
            Ok(text) => serde_json::from_str(&text)?,
            Err(e) if e.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(ServiceError::Io { path, source: e }),
        };
        debug!(path = %path.display(), keys = values.len(), "settings loaded");
        Ok(Self { path, values })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self, values: &BTreeMap<String, String>) -> Result<(), ServiceError> {
        let text = serde_json::to_string_pretty(values)?;
        std::fs::write(&self.path, text).map_err(|e| ServiceError::Io {
            path: self.path.clone(),
            source: e,
        })
    }
}

impl SettingsStore for JsonFileSettingsStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), ServiceError> {
        let mut values = self.values.clone();
        values.insert(key.to_string(), value);
        self.flush(&values)?;
        self.values = values;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_get_set() {
        let mut store = MemorySettingsStore::new();
        assert_eq!(store.get("volume"), None);
        store.set("volume", "0.5".to_string()).unwrap();
        assert_eq!(store.get("volume").as_deref(), Some("0.5"));
    }

    #[test]
    fn test_json_file_store_persists_between_opens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let mut store = JsonFileSettingsStore::open(&path).unwrap();
        assert_eq!(store.get("soundEnabled"), None);
        store.set("soundEnabled", "false".to_string()).unwrap();

        let reopened = JsonFileSettingsStore::open(&path).unwrap();
        assert_eq!(reopened.get("soundEnabled").as_deref(), Some("false"));
        assert_eq!(reopened.path(), path.as_path());
    }

    #[test]
    fn test_failed_write_leaves_store_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("settings.json");

        let mut store = JsonFileSettingsStore::open(&path).unwrap();
        let err = store.set("volume", "0.3".to_string()).unwrap_err();

        assert!(matches!(err, ServiceError::Io { .. }));
        assert_eq!(store.get("volume"), None);
        assert!(!path.exists());
    }

    #[test]
    fn test_json_file_store_rejects_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "[1, 2").unwrap();
        assert!(matches!(
            JsonFileSettingsStore::open(&path),
            Err(ServiceError::Json(_))
        ));
    }
}
