//! Key-value storage layer.
//!
//! Favorites, theme, notepad and the admin session all persist through the
//! [`KeyValueStore`] trait so they can be exercised without a real backing
//! file. Two implementations are provided:
//!
//! - [`MemoryStore`]: process-local map, used by tests and when no storage path is configured
//! - [`FileStore`]: a single JSON object file rewritten on every change

mod error;
mod file;
mod memory;

use std::sync::Arc;

use tracing::info;

pub use error::{StorageError, StorageResult};
pub use file::FileStore;
pub use memory::MemoryStore;

use super::config::StorageConfig;

/// Well-known storage keys.
pub mod keys {
    /// JSON array of favorited tool ids.
    pub const FAVORITES: &str = "toolly_favorites";
    /// Theme preference ("light" or "dark").
    pub const THEME: &str = "toolly_theme";
    /// Notepad text blob.
    pub const NOTEPAD: &str = "toolly_notepad";
    /// Admin session sentinel.
    pub const ADMIN_TOKEN: &str = "admin_token";
    /// Admin username.
    pub const ADMIN_USER: &str = "admin_user";
}

/// A string-to-string store with whole-value writes.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Replace the value stored under `key`.
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Delete `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> StorageResult<()>;
}

/// Open the store described by the configuration.
pub fn open_store(config: &StorageConfig) -> StorageResult<Arc<dyn KeyValueStore>> {
    match &config.path {
        Some(path) => {
            info!("Opening file store at {}", path.display());
            Ok(Arc::new(FileStore::open(path)?))
        }
        None => {
            info!("Using in-memory store");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}
