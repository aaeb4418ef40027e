//! Visitor preferences persisted through the key-value store.
//!
//! - [`FavoritesStore`] - the favorited tool ids
//! - [`ThemeStore`] - light or dark theme
//! - [`NotepadStore`] - the single notepad text blob
//!
//! Every write replaces the whole value under its key.

mod favorites;
mod notepad;
mod theme;

pub use favorites::FavoritesStore;
pub use notepad::NotepadStore;
pub use theme::{Theme, ThemeStore};
