use log::warn;
use slot_shared::{KeyValueStore, StorageError};
use web_sys::{window, Storage};

/// `window.localStorage`, scoped to the page origin.
pub struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    pub fn new() -> Self {
        let storage = window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            warn!("localStorage is unavailable, progress will not be saved");
        }
        Self { storage }
    }

    fn storage(&self) -> Result<&Storage, StorageError> {
        self.storage.as_ref().ok_or(StorageError::Unavailable)
    }
}

impl Default for LocalStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage()?
            .get_item(key)
            .map_err(|e| StorageError::Read(format!("{:?}", e)))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Write(format!("{:?}", e)))
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.storage()?
            .remove_item(key)
            .map_err(|e| StorageError::Write(format!("{:?}", e)))
    }
}
