//! Resource service implementation.
//!
//! The ResourceService manages resource discovery and access.
//! Resources are defined in `definitions/` and registered via `registry.rs`.
//! Adding a new resource does NOT require modifying this file.

use std::collections::BTreeMap;
use std::sync::Arc;

use rmcp::model::{ReadResourceResult, Resource, ResourceContents, ResourceTemplate};
use tracing::{debug, info};

use super::definitions::{
    CatalogResource, DynamicResourceProvider, FavoritesResource, ServerInfoResource,
    ToolPageTemplate,
};
use super::error::ResourceError;
use super::registry::{get_all_resource_templates, get_all_resources};
use crate::domains::shell::Shell;

/// Service for managing and accessing resources.
pub struct ResourceService {
    shell: Arc<Shell>,

    /// Registry of available resources, keyed by URI.
    resources: BTreeMap<String, ResourceEntry>,

    /// Resource templates for parameterized resources.
    templates: Vec<ResourceTemplate>,
}

/// An entry in the resource registry.
#[derive(Debug, Clone)]
pub struct ResourceEntry {
    /// The resource metadata.
    pub resource: Resource,

    /// The content provider for this resource.
    pub content: ResourceContent,
}

/// Different types of resource content.
#[derive(Debug, Clone)]
pub enum ResourceContent {
    /// Static text content.
    Text(String),

    /// Dynamic content that requires computation.
    Dynamic(DynamicResourceType),
}

/// Types of dynamic resources.
#[derive(Debug, Clone, Copy)]
pub enum DynamicResourceType {
    ServerInfo,
    Catalog,
    Favorites,
}

impl ResourceService {
    pub fn new(shell: Arc<Shell>) -> Self {
        info!("Initializing ResourceService");

        let resources = get_all_resources()
            .into_iter()
            .map(|entry| (entry.resource.raw.uri.to_string(), entry))
            .collect::<BTreeMap<_, _>>();
        info!("Registered {} resources", resources.len());

        Self {
            shell,
            resources,
            templates: get_all_resource_templates(),
        }
    }

    /// List all available resources.
    pub async fn list_resources(&self) -> Vec<Resource> {
        self.resources
            .values()
            .map(|entry| entry.resource.clone())
            .collect()
    }

    /// List all available resource templates.
    pub async fn list_resource_templates(&self) -> Vec<ResourceTemplate> {
        self.templates.clone()
    }

    /// Read a resource by URI.
    pub async fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        let content = match self.resources.get(uri) {
            Some(entry) => match &entry.content {
                ResourceContent::Text(text) => ResourceContents::text(text, uri),
                ResourceContent::Dynamic(dynamic_type) => {
                    self.resolve_dynamic_content(uri, *dynamic_type)?
                }
            },
            None if uri.starts_with(ToolPageTemplate::URI_PREFIX) => {
                debug!("Resolving tool page template for {}", uri);
                ToolPageTemplate::resolve(uri, &self.shell)?
            }
            None => return Err(ResourceError::not_found(uri)),
        };

        Ok(ReadResourceResult {
            contents: vec![content],
        })
    }

    fn resolve_dynamic_content(
        &self,
        uri: &str,
        dynamic_type: DynamicResourceType,
    ) -> Result<ResourceContents, ResourceError> {
        match dynamic_type {
            DynamicResourceType::ServerInfo => ServerInfoResource::resolve(uri, &self.shell),
            DynamicResourceType::Catalog => CatalogResource::resolve(uri, &self.shell),
            DynamicResourceType::Favorites => FavoritesResource::resolve(uri, &self.shell),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::shell::tests::test_shell;

    fn service() -> ResourceService {
        ResourceService::new(Arc::new(test_shell()))
    }

    #[tokio::test]
    async fn test_resource_service_creation() {
        let service = service();
        assert_eq!(service.list_resources().await.len(), 4);
        assert_eq!(service.list_resource_templates().await.len(), 1);
    }

    #[tokio::test]
    async fn test_read_existing_resource() {
        let result = service().read_resource("toolly://docs/readme").await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_read_template_resource() {
        let result = service()
            .read_resource("toolly://tools/qr-code-generator")
            .await
            .unwrap();
        assert_eq!(result.contents.len(), 1);
    }

    #[tokio::test]
    async fn test_read_nonexistent_resource() {
        let service = service();
        assert!(service.read_resource("toolly://nonexistent").await.is_err());
        assert!(service.read_resource("toolly://tools/nope").await.is_err());
    }
}
