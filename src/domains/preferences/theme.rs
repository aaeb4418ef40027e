//! Theme preference.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::core::storage::{KeyValueStore, StorageError, StorageResult, keys};

/// Site color theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = StorageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(StorageError::invalid_value(
                keys::THEME,
                format!("unknown theme '{}'", other),
            )),
        }
    }
}

/// Reads and writes the theme preference.
pub struct ThemeStore {
    storage: Arc<dyn KeyValueStore>,
}

impl ThemeStore {
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self { storage }
    }

    /// Current theme; light when unset or unrecognized.
    pub fn get(&self) -> StorageResult<Theme> {
        Ok(self
            .storage
            .get(keys::THEME)?
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_default())
    }

    pub fn set(&self, theme: Theme) -> StorageResult<()> {
        self.storage.set(keys::THEME, theme.as_str())
    }

    /// Flip the theme and return the new one.
    pub fn toggle(&self) -> StorageResult<Theme> {
        let next = self.get()?.toggled();
        self.set(next)?;
        Ok(next)
    }
}
