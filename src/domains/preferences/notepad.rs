//! Notepad blob.

use std::sync::Arc;

use crate::core::storage::{KeyValueStore, StorageResult, keys};

/// The single persisted note.
pub struct NotepadStore {
    storage: Arc<dyn KeyValueStore>,
}

impl NotepadStore {
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self { storage }
    }

    /// Current note, empty if nothing was saved.
    pub fn load(&self) -> StorageResult<String> {
        Ok(self.storage.get(keys::NOTEPAD)?.unwrap_or_default())
    }

    pub fn save(&self, content: &str) -> StorageResult<()> {
        self.storage.set(keys::NOTEPAD, content)
    }

    pub fn clear(&self) -> StorageResult<()> {
        self.storage.remove(keys::NOTEPAD)
    }
}
