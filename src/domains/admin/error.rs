//! Admin-specific error types.

use thiserror::Error;

use crate::core::storage::StorageError;

/// Errors raised by the admin login and dashboard.
#[derive(Debug, Error)]
pub enum AdminError {
    /// Wrong username or password.
    #[error("Invalid credentials. {remaining} attempts remaining.")]
    InvalidCredentials { remaining: u32 },

    /// Too many failed attempts.
    #[error("Too many attempts. Access locked for {minutes} minutes.")]
    Locked { minutes: u64 },

    /// The action needs a logged-in admin.
    #[error("Admin login required")]
    NotAuthenticated,

    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// An edit would give two tools the same slug.
    #[error("Slug '{0}' is already used by another tool")]
    SlugTaken(String),

    #[error("Invalid edit: {0}")]
    InvalidEdit(String),

    #[error("Unknown dashboard tab: {0}")]
    UnknownTab(String),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl AdminError {
    pub fn invalid_edit(msg: impl Into<String>) -> Self {
        Self::InvalidEdit(msg.into())
    }
}
