//! Catalog-specific error types.

use thiserror::Error;

/// Errors raised while building or querying the tool catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Two records share the same id.
    #[error("Duplicate tool id: {0}")]
    DuplicateId(String),

    /// Two records share the same URL slug.
    #[error("Duplicate slug '{slug}' (tools '{first}' and '{second}')")]
    DuplicateSlug {
        slug: String,
        first: String,
        second: String,
    },

    /// No record has the requested id.
    #[error("Unknown tool id: {0}")]
    UnknownTool(String),

    /// The category name is not one of the six known categories.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
}

impl CatalogError {
    /// Create a new "unknown tool" error.
    pub fn unknown_tool(id: impl Into<String>) -> Self {
        Self::UnknownTool(id.into())
    }
}
