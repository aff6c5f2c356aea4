use directories::ProjectDirs;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::{debug, warn};

/// Synchronous string key-value storage backing the favourites list
///
/// Implementations never surface errors to callers: a failed read is an
/// absent value and a failed write is dropped (with a log line), mirroring
/// how a browser page treats unavailable local storage.
pub trait KeyValueStorage: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// File-backed storage: one file per key in a user data directory
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Storage rooted at the per-user data directory for this application.
    /// Returns `None` when no such directory can be determined.
    pub fn new() -> Option<Self> {
        let dirs = ProjectDirs::from("", "", "property-scout")?;
        Some(Self::with_dir(dirs.data_local_dir().to_path_buf()))
    }

    /// Storage rooted at an explicit directory (used by tests)
    pub fn with_dir(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(value) => Some(value),
            Err(e) => {
                debug!("No readable value for key '{}' at {:?}: {}", key, path, e);
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(e) = fs::create_dir_all(&self.dir) {
            warn!("Could not create storage directory {:?}: {}", self.dir, e);
            return;
        }
        let path = self.path_for(key);
        if let Err(e) = fs::write(&path, value) {
            warn!("Could not persist key '{}' to {:?}: {}", key, path, e);
        }
    }
}

/// In-memory storage for tests and contexts without a usable data directory
#[derive(Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), value.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn file_storage_round_trips_a_value() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::with_dir(dir.path().to_path_buf());

        assert_eq!(storage.get("favourites"), None);
        storage.set("favourites", r#"["prop1"]"#);
        assert_eq!(storage.get("favourites"), Some(r#"["prop1"]"#.to_string()));
    }

    #[test]
    fn file_storage_overwrites_wholesale() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::with_dir(dir.path().to_path_buf());

        storage.set("favourites", "[1]");
        storage.set("favourites", "[2]");
        assert_eq!(storage.get("favourites"), Some("[2]".to_string()));
    }

    #[test]
    fn memory_storage_round_trips_a_value() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("favourites"), None);
        storage.set("favourites", "[]");
        assert_eq!(storage.get("favourites"), Some("[]".to_string()));
    }
}
