//! Shell-specific error types.

use thiserror::Error;

use crate::core::storage::StorageError;
use crate::domains::admin::AdminError;
use crate::domains::catalog::CatalogError;

/// Errors raised while resolving routes and building pages.
#[derive(Debug, Error)]
pub enum ShellError {
    /// A query parameter named an unknown category.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Admin(#[from] AdminError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    /// A share link query string could not be encoded.
    #[error("Failed to encode share link: {0}")]
    Encode(#[from] serde_urlencoded::ser::Error),

    #[error("Failed to serialize structured data: {0}")]
    Json(#[from] serde_json::Error),
}
