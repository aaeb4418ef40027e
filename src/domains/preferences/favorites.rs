//! Favorited tool ids.

use std::sync::{Arc, RwLock};

use tracing::{debug, warn};

use crate::core::storage::{KeyValueStore, StorageError, StorageResult, keys};

/// The visitor's favorite tools, in the order they were added.
///
/// The list is read once when the store is built; afterwards the in-memory
/// copy is authoritative and each change writes the whole list back.
pub struct FavoritesStore {
    storage: Arc<dyn KeyValueStore>,
    ids: RwLock<Vec<String>>,
}

impl FavoritesStore {
    /// Load the persisted favorites.
    ///
    /// A value that is not a JSON array of strings is discarded.
    pub fn load(storage: Arc<dyn KeyValueStore>) -> StorageResult<Self> {
        let ids = match storage.get(keys::FAVORITES)? {
            Some(raw) => serde_json::from_str::<Vec<String>>(&raw).unwrap_or_else(|e| {
                warn!("Ignoring unreadable favorites list: {}", e);
                Vec::new()
            }),
            None => Vec::new(),
        };
        debug!("Loaded {} favorites", ids.len());

        Ok(Self {
            storage,
            ids: RwLock::new(ids),
        })
    }

    /// Add `id` if absent, remove it otherwise. Returns whether it is now a favorite.
    pub fn toggle(&self, id: &str) -> StorageResult<bool> {
        let mut ids = self.ids.write().map_err(|_| StorageError::Poisoned)?;

        let now_favorite = match ids.iter().position(|f| f == id) {
            Some(index) => {
                ids.remove(index);
                false
            }
            None => {
                ids.push(id.to_string());
                true
            }
        };

        let serialized = serde_json::to_string(&*ids)
            .map_err(|e| StorageError::invalid_value(keys::FAVORITES, e.to_string()))?;
        self.storage.set(keys::FAVORITES, &serialized)?;

        Ok(now_favorite)
    }

    /// Whether `id` is a favorite.
    pub fn is_favorite(&self, id: &str) -> bool {
        self.ids
            .read()
            .map(|ids| ids.iter().any(|f| f == id))
            .unwrap_or(false)
    }

    /// Snapshot of the favorite ids.
    pub fn list(&self) -> Vec<String> {
        self.ids.read().map(|ids| ids.clone()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::storage::MemoryStore;

    fn store() -> (Arc<MemoryStore>, FavoritesStore) {
        let backing = Arc::new(MemoryStore::new());
        let favorites = FavoritesStore::load(backing.clone()).unwrap();
        (backing, favorites)
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let (backing, favorites) = store();

        assert!(favorites.toggle("qr-gen").unwrap());
        assert!(favorites.is_favorite("qr-gen"));
        assert_eq!(
            backing.get(keys::FAVORITES).unwrap().as_deref(),
            Some(r#"["qr-gen"]"#)
        );

        assert!(!favorites.toggle("qr-gen").unwrap());
        assert!(!favorites.is_favorite("qr-gen"));
        assert_eq!(backing.get(keys::FAVORITES).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_double_toggle_restores_list() {
        let (_, favorites) = store();
        favorites.toggle("a").unwrap();
        favorites.toggle("b").unwrap();
        let before = favorites.list();

        favorites.toggle("c").unwrap();
        favorites.toggle("c").unwrap();
        assert_eq!(favorites.list(), before);

        favorites.toggle("a").unwrap();
        favorites.toggle("a").unwrap();
        assert_eq!(favorites.list(), vec!["b".to_string(), "a".to_string()]);
    }

    #[test]
    fn test_loads_existing_list() {
        let backing = Arc::new(MemoryStore::with_entries([(
            keys::FAVORITES,
            r#"["json-format","pass-gen"]"#,
        )]));
        let favorites = FavoritesStore::load(backing).unwrap();
        assert_eq!(favorites.list(), vec!["json-format", "pass-gen"]);
        assert!(favorites.is_favorite("pass-gen"));
    }

    #[test]
    fn test_corrupt_list_starts_empty() {
        let backing = Arc::new(MemoryStore::with_entries([(keys::FAVORITES, "not json")]));
        let favorites = FavoritesStore::load(backing).unwrap();
        assert!(favorites.list().is_empty());
    }
}
