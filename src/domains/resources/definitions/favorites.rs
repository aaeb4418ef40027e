//! Favorites resource definition.

use rmcp::model::ResourceContents;

use super::{DynamicResourceProvider, ResourceDefinition, json_contents};
use crate::domains::resources::error::ResourceError;
use crate::domains::resources::service::{DynamicResourceType, ResourceContent};
use crate::domains::shell::Shell;

/// The visitor's favorite tool ids.
pub struct FavoritesResource;

impl ResourceDefinition for FavoritesResource {
    const URI: &'static str = "toolly://favorites";
    const NAME: &'static str = "Favorite Tools";
    const DESCRIPTION: &'static str = "Ids of the tools marked as favorite, in the order they were added";
    const MIME_TYPE: &'static str = "application/json";

    fn content() -> ResourceContent {
        ResourceContent::Dynamic(DynamicResourceType::Favorites)
    }
}

impl DynamicResourceProvider for FavoritesResource {
    fn resolve(uri: &str, shell: &Shell) -> Result<ResourceContents, ResourceError> {
        json_contents(&shell.favorites().list(), uri)
    }
}
