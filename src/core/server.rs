//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating to domain-specific services.
//!
//! ## Tool Architecture
//!
//! Tools are defined in `domains/tools/definitions/` with one file per tool.
//! Each tool defines:
//! - Parameters struct (for rmcp)
//! - `execute()` method (core logic)
//! - `create_route()` for the rmcp router
//!
//! The ToolRouter is built dynamically in `domains/tools/router.rs`.
//! HTTP calls go through the ToolRegistry instead.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, handler::server::tool::ToolRouter, model::*,
    service::RequestContext, tool_handler,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use super::storage::{KeyValueStore, open_store};
use crate::domains::admin::{AdminDashboard, AdminSession, ConfiguredAuthenticator};
use crate::domains::catalog::Catalog;
use crate::domains::preferences::{FavoritesStore, ThemeStore};
use crate::domains::resources::ResourceService;
use crate::domains::shell::Shell;
use crate::domains::tools::{ToolContext, ToolRegistry, build_tool_router};

#[cfg(feature = "http")]
use crate::domains::catalog::WidgetBinding;
#[cfg(feature = "http")]
use crate::domains::tools::ToolError;

const INSTRUCTIONS: &str = "Toolly.online utility toolbox. Every widget of the site is a tool: \
text, developer, media, utility and AI helpers. Images and documents are exchanged as data URLs. \
Resources expose the tool catalog, favorites and per-tool pages.";

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp and coordinates
/// between different domain services to handle MCP protocol messages.
#[derive(Clone)]
pub struct ToollyServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Site pages, preferences and admin area.
    shell: Arc<Shell>,

    /// Service for handling resource-related requests.
    resource_service: Arc<ResourceService>,

    /// Tool dispatch for HTTP callers.
    registry: Arc<ToolRegistry>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl ToollyServer {
    /// Create a server over the store described by the configuration.
    pub fn new(config: Config) -> super::error::Result<Self> {
        let storage = open_store(&config.storage)?;
        Self::with_storage(config, storage)
    }

    /// Create a server over an existing store.
    pub fn with_storage(
        config: Config,
        storage: Arc<dyn KeyValueStore>,
    ) -> super::error::Result<Self> {
        let config = Arc::new(config);

        let catalog = Arc::new(Catalog::builtin()?);
        let authenticator = Arc::new(ConfiguredAuthenticator::new(&config.admin));
        let shell = Arc::new(Shell::new(
            config.site.clone(),
            catalog.clone(),
            Arc::new(FavoritesStore::load(storage.clone())?),
            Arc::new(ThemeStore::new(storage.clone())),
            Arc::new(AdminSession::new(storage.clone(), authenticator, &config.admin)),
            Arc::new(AdminDashboard::new(&catalog)),
        ));

        let context = Arc::new(ToolContext::new(config.clone(), storage));
        let resource_service = Arc::new(ResourceService::new(shell.clone()));

        info!("Server ready with {} catalog tools", catalog.len());

        Ok(Self {
            tool_router: build_tool_router::<Self>(context.clone()),
            registry: Arc::new(ToolRegistry::new(context)),
            config,
            shell,
            resource_service,
        })
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Site pages, preferences and admin area.
    pub fn shell(&self) -> &Shell {
        &self.shell
    }

    /// Server instructions sent on initialize.
    pub fn instructions(&self) -> &'static str {
        INSTRUCTIONS
    }

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// List all available tools (for HTTP transport).
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        self.tool_router
            .list_all()
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect()
    }

    /// Call a tool by name (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> std::result::Result<CallToolResult, ToolError> {
        self.registry.call_tool(name, arguments).await
    }

    /// Run the widget of the tool at `slug`.
    ///
    /// Returns `None` when no tool has that slug.
    #[cfg(feature = "http")]
    pub async fn call_widget(
        &self,
        slug: &str,
        arguments: serde_json::Value,
    ) -> Option<std::result::Result<CallToolResult, ToolError>> {
        let entry = self.shell.catalog().find_by_slug(slug)?;
        Some(match entry.binding {
            WidgetBinding::Ready(widget) => self.registry.call_widget(widget, arguments).await,
            WidgetBinding::ComingSoon => Err(ToolError::unsupported(entry.coming_soon_title())),
        })
    }

    /// List all available resources (for HTTP transport).
    pub async fn list_resources(&self) -> Vec<serde_json::Value> {
        let resources = self.resource_service.list_resources().await;

        resources
            .into_iter()
            .map(|r| {
                serde_json::json!({
                    "uri": r.uri,
                    "name": r.name,
                    "description": r.description,
                    "mimeType": r.mime_type
                })
            })
            .collect()
    }

    /// Read a resource by URI (for HTTP transport).
    pub async fn read_resource(&self, uri: &str) -> std::result::Result<serde_json::Value, String> {
        match self.resource_service.read_resource(uri).await {
            Ok(result) => Ok(serde_json::json!({
                "contents": result.contents
            })),
            Err(e) => Err(e.to_string()),
        }
    }

    /// List all available resource templates (for HTTP transport).
    pub async fn list_resource_templates(&self) -> Vec<serde_json::Value> {
        let templates = self.resource_service.list_resource_templates().await;

        templates
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "uriTemplate": t.raw.uri_template,
                    "name": t.raw.name,
                    "title": t.raw.title,
                    "description": t.raw.description,
                    "mimeType": t.raw.mime_type
                })
            })
            .collect()
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for ToollyServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            server_info: Implementation {
                name: self.config.server.name.clone(),
                version: self.config.server.version.clone(),
                ..Implementation::from_build_env()
            },
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListResourcesResult, McpError> {
        info!("Listing resources");
        let resources = self.resource_service.list_resources().await;
        Ok(ListResourcesResult {
            resources,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn list_resource_templates(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListResourceTemplatesResult, McpError> {
        info!("Listing resource templates");
        let templates = self.resource_service.list_resource_templates().await;
        Ok(ListResourceTemplatesResult {
            resource_templates: templates,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ReadResourceResult, McpError> {
        info!("Reading resource: {}", request.uri);
        self.resource_service
            .read_resource(&request.uri)
            .await
            .map_err(|e| McpError::resource_not_found(e.to_string(), None))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::core::storage::MemoryStore;

    /// Server over an in-memory store with admin account `operator`/`s3cret`.
    pub(crate) fn test_server() -> ToollyServer {
        let mut config = Config::default();
        config.admin.username = Some("operator".to_string());
        config.admin.password = Some("s3cret".to_string());
        ToollyServer::with_storage(config, Arc::new(MemoryStore::new())).unwrap()
    }

    #[test]
    fn test_new_builds_router_from_config() {
        let server = ToollyServer::new(Config::default()).unwrap();
        assert_eq!(server.tool_router.list_all().len(), 19);
    }

    #[test]
    fn test_new_reports_corrupt_store() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("store.json");
        std::fs::write(&path, "not json").unwrap();

        let mut config = Config::default();
        config.storage.path = Some(path);
        let result = ToollyServer::new(config);
        assert!(matches!(result, Err(crate::core::Error::Storage(_))));
    }

    #[test]
    fn test_server_lists_tools() {
        let server = test_server();
        let tools = server.list_tools();
        assert_eq!(tools.len(), 19);
        assert!(tools.iter().all(|t| t["inputSchema"].is_object()));
    }

    #[test]
    fn test_server_info() {
        let server = test_server();
        let info = server.get_info();
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.resources.is_some());
        assert!(info.capabilities.prompts.is_none());
        assert_eq!(info.server_info.name, server.name());
    }

    #[tokio::test]
    async fn test_server_resources() {
        let server = test_server();
        assert_eq!(server.list_resources().await.len(), 4);
        assert_eq!(server.list_resource_templates().await.len(), 1);
        assert!(server.read_resource("toolly://catalog").await.is_ok());
        assert!(server.read_resource("toolly://missing").await.is_err());
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_call_widget_by_slug() {
        let server = test_server();

        let result = server
            .call_widget("word-counter", serde_json::json!({ "text": "a b c" }))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(result.structured_content.unwrap()["words"], 3);

        let placeholder = server
            .call_widget("video-converter", serde_json::json!({}))
            .await
            .unwrap();
        assert!(matches!(placeholder, Err(ToolError::Unsupported(_))));

        assert!(server.call_widget("nope", serde_json::json!({})).await.is_none());
    }
}
