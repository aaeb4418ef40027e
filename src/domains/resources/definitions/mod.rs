//! Resource definitions module.
//!
//! Each resource is defined in its own file with:
//! - URI and metadata
//! - Content provider
//!
//! ## Adding a New Resource
//!
//! 1. Create a new file (e.g., `my_resource.rs`)
//! 2. Implement the `ResourceDefinition` trait
//! 3. Export it here
//! 4. Register in `registry.rs`

mod catalog;
mod docs_readme;
mod favorites;
mod server_info;
mod tool_page;

use rmcp::model::ResourceContents;
use serde::Serialize;

pub use catalog::CatalogResource;
pub use docs_readme::DocsReadmeResource;
pub use favorites::FavoritesResource;
pub use server_info::ServerInfoResource;
pub use tool_page::ToolPageTemplate;

use super::error::ResourceError;
use super::service::ResourceContent;
use crate::domains::shell::Shell;

/// Trait for resource definitions.
///
/// Each resource must implement this trait to provide its metadata and content.
pub trait ResourceDefinition {
    /// The unique URI of the resource.
    const URI: &'static str;

    /// The display name of the resource.
    const NAME: &'static str;

    /// A description of the resource.
    const DESCRIPTION: &'static str;

    /// The MIME type of the resource content.
    const MIME_TYPE: &'static str;

    /// Get the content for this resource.
    fn content() -> ResourceContent;
}

/// Trait for resources whose content is computed on every read.
pub trait DynamicResourceProvider {
    /// Resolve the content against the current site state.
    fn resolve(uri: &str, shell: &Shell) -> Result<ResourceContents, ResourceError>;
}

/// Pretty-printed JSON resource contents.
pub(crate) fn json_contents<T: Serialize>(
    value: &T,
    uri: &str,
) -> Result<ResourceContents, ResourceError> {
    let text =
        serde_json::to_string_pretty(value).map_err(|e| ResourceError::internal(e.to_string()))?;
    Ok(ResourceContents::text(text, uri))
}
