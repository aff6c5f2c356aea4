use crate::favourites::storage::KeyValueStorage;
use tokio::sync::broadcast;
use tracing::{debug, warn};

/// Storage key the favourites list is persisted under
pub const FAVOURITES_KEY: &str = "favourites";

// Capacity only matters to subscribers that stop polling; mutations never block.
const CHANGE_CHANNEL_CAPACITY: usize = 16;

/// Append `id` to the list unless it is already present
pub fn add_favourite(list: &[String], id: &str) -> Vec<String> {
    if list.iter().any(|existing| existing == id) {
        return list.to_vec();
    }
    let mut updated = list.to_vec();
    updated.push(id.to_string());
    updated
}

/// Remove every occurrence of `id` from the list
pub fn remove_favourite(list: &[String], id: &str) -> Vec<String> {
    list.iter().filter(|existing| *existing != id).cloned().collect()
}

/// Persisted favourites list with change notification
///
/// A single store owns the persisted key; every view of the data mutates
/// through it and subscribes for updates, so bookmark state stays consistent
/// without each view re-reading storage on its own schedule.
pub struct FavouritesStore {
    storage: Option<Box<dyn KeyValueStorage>>,
    changes: broadcast::Sender<Vec<String>>,
}

impl FavouritesStore {
    pub fn new(storage: Box<dyn KeyValueStorage>) -> Self {
        let (changes, _) = broadcast::channel(CHANGE_CHANNEL_CAPACITY);
        Self {
            storage: Some(storage),
            changes,
        }
    }

    /// Store with no backing storage: reads are empty, writes are dropped,
    /// notifications still reach subscribers.
    pub fn detached() -> Self {
        let (changes, _) = broadcast::channel(CHANGE_CHANNEL_CAPACITY);
        Self {
            storage: None,
            changes,
        }
    }

    /// Current persisted list; absent or corrupt data reads as empty
    pub fn read(&self) -> Vec<String> {
        let Some(storage) = self.storage.as_deref() else {
            return Vec::new();
        };
        let Some(raw) = storage.get(FAVOURITES_KEY) else {
            return Vec::new();
        };
        match serde_json::from_str(&raw) {
            Ok(ids) => ids,
            Err(e) => {
                warn!("Ignoring corrupt favourites data: {}", e);
                Vec::new()
            }
        }
    }

    /// Overwrite the persisted list wholesale and notify subscribers
    pub fn write(&self, ids: &[String]) {
        if let Some(storage) = self.storage.as_deref() {
            match serde_json::to_string(ids) {
                Ok(raw) => storage.set(FAVOURITES_KEY, &raw),
                Err(e) => warn!("Could not encode favourites list: {}", e),
            }
        }
        // Nobody listening is fine
        let _ = self.changes.send(ids.to_vec());
    }

    /// Add a property id; a no-op when it is already a favourite
    pub fn add(&self, id: &str) -> Vec<String> {
        let current = self.read();
        let updated = add_favourite(&current, id);
        if updated.len() != current.len() {
            debug!("Adding favourite '{}'", id);
            self.write(&updated);
        }
        updated
    }

    /// Remove a property id; a no-op when it is not a favourite
    pub fn remove(&self, id: &str) -> Vec<String> {
        let current = self.read();
        let updated = remove_favourite(&current, id);
        if updated.len() != current.len() {
            debug!("Removing favourite '{}'", id);
            self.write(&updated);
        }
        updated
    }

    /// Persist an empty list
    pub fn clear(&self) {
        self.write(&[]);
    }

    pub fn is_favourite(&self, id: &str) -> bool {
        self.read().iter().any(|existing| existing == id)
    }

    /// Subscribe to list changes; each mutation delivers the full new list
    pub fn subscribe(&self) -> broadcast::Receiver<Vec<String>> {
        self.changes.subscribe()
    }
}
