// storage.rs — Key-value slots that hold the serialized goal collection.
//
// The goal store only ever needs "read this string" and "replace this string",
// so storage is a tiny trait. `FileStorage` keeps each key as a JSON file
// (`<dir>/<key>.json`); `MemoryStorage` keeps everything in a map and is what
// tests and embedders use when nothing should touch disk.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::GoalError;

/// A string-valued key-value store.
pub trait KeyValueStorage {
    /// Read the value stored under `key`, or `None` if the slot is empty.
    fn get(&self, key: &str) -> Result<Option<String>, GoalError>;

    /// Replace the value stored under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<(), GoalError>;

    /// Clear the slot. Returns whether anything was stored.
    fn remove(&mut self, key: &str) -> Result<bool, GoalError>;
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, GoalError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), GoalError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<bool, GoalError> {
        (**self).remove(key)
    }
}

/// Directory-backed storage: one JSON file per key.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Open storage rooted at `dir`, creating the directory if needed.
    pub fn new(dir: impl AsRef<Path>) -> Result<Self, GoalError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir).map_err(|source| GoalError::io(&dir, source))?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing `key`.
    pub fn slot_path(&self, key: &str) -> Result<PathBuf, GoalError> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, GoalError> {
        let path = self.slot_path(key)?;
        if !path.exists() {
            return Ok(None);
        }
        let value = fs::read_to_string(&path).map_err(|source| GoalError::io(&path, source))?;
        Ok(Some(value))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), GoalError> {
        let path = self.slot_path(key)?;
        // Write beside the target and rename over it so readers never see a
        // partially written slot.
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value).map_err(|source| GoalError::io(&tmp, source))?;
        fs::rename(&tmp, &path).map_err(|source| GoalError::io(&path, source))?;
        tracing::debug!(path = %path.display(), bytes = value.len(), "slot written");
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<bool, GoalError> {
        let path = self.slot_path(key)?;
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(&path).map_err(|source| GoalError::io(&path, source))?;
        Ok(true)
    }
}

/// In-process storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slots: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, GoalError> {
        validate_key(key)?;
        Ok(self.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), GoalError> {
        validate_key(key)?;
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<bool, GoalError> {
        validate_key(key)?;
        Ok(self.slots.remove(key).is_some())
    }
}

/// Keys are file names for `FileStorage`; the same rule applies everywhere
/// so a key that works in memory also works on disk.
pub(crate) fn validate_key(key: &str) -> Result<(), GoalError> {
    let valid = !key.is_empty()
        && key != "."
        && key != ".."
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));
    if valid {
        Ok(())
    } else {
        Err(GoalError::InvalidKey(key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn file_storage_empty_slot_returns_none() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("data")).unwrap();
        assert!(storage.get("longterm-goals").unwrap().is_none());
    }

    #[test]
    fn file_storage_set_and_get() {
        let dir = tempdir().unwrap();
        let mut storage = FileStorage::new(dir.path()).unwrap();

        storage.set("longterm-goals", "[]").unwrap();
        assert_eq!(storage.get("longterm-goals").unwrap().as_deref(), Some("[]"));
        assert!(dir.path().join("longterm-goals.json").exists());
        assert!(!dir.path().join("longterm-goals.json.tmp").exists());
    }

    #[test]
    fn file_storage_overwrites_whole_value() {
        let dir = tempdir().unwrap();
        let mut storage = FileStorage::new(dir.path()).unwrap();

        storage.set("k", "a much longer first value").unwrap();
        storage.set("k", "short").unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("short"));
    }

    #[test]
    fn file_storage_survives_reopen() {
        let dir = tempdir().unwrap();
        {
            let mut storage = FileStorage::new(dir.path()).unwrap();
            storage.set("k", "persisted").unwrap();
        }
        let storage = FileStorage::new(dir.path()).unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("persisted"));
    }

    #[test]
    fn file_storage_remove() {
        let dir = tempdir().unwrap();
        let mut storage = FileStorage::new(dir.path()).unwrap();
        storage.set("k", "v").unwrap();

        assert!(storage.remove("k").unwrap());
        assert!(!storage.remove("k").unwrap());
        assert!(storage.get("k").unwrap().is_none());
    }

    #[test]
    fn keys_with_path_separators_are_rejected() {
        let dir = tempdir().unwrap();
        let mut storage = FileStorage::new(dir.path()).unwrap();

        for key in ["", "..", "../escape", "a/b", "a\\b"] {
            let result = storage.set(key, "v");
            assert!(
                matches!(result, Err(GoalError::InvalidKey(_))),
                "key {:?} should be rejected",
                key
            );
        }
    }

    #[test]
    fn memory_storage_round_trip() {
        let mut storage = MemoryStorage::new();
        assert!(storage.get("k").unwrap().is_none());
        storage.set("k", "v").unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("v"));
        assert!(storage.remove("k").unwrap());
        assert!(storage.get("k").unwrap().is_none());
    }

    #[test]
    fn boxed_storage_delegates() {
        let mut storage: Box<dyn KeyValueStorage> = Box::new(MemoryStorage::new());
        storage.set("k", "v").unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("v"));
    }
}
