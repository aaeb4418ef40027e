//! Server info resource definition.

use rmcp::model::ResourceContents;

use super::{DynamicResourceProvider, ResourceDefinition, json_contents};
use crate::domains::resources::error::ResourceError;
use crate::domains::resources::service::{DynamicResourceType, ResourceContent};
use crate::domains::shell::Shell;
use crate::domains::tools::ToolRegistry;

/// Server information resource (dynamic).
pub struct ServerInfoResource;

impl ResourceDefinition for ServerInfoResource {
    const URI: &'static str = "toolly://server/info";
    const NAME: &'static str = "Server Information";
    const DESCRIPTION: &'static str = "Version, site URL and tool counts";
    const MIME_TYPE: &'static str = "application/json";

    fn content() -> ResourceContent {
        ResourceContent::Dynamic(DynamicResourceType::ServerInfo)
    }
}

impl DynamicResourceProvider for ServerInfoResource {
    fn resolve(uri: &str, shell: &Shell) -> Result<ResourceContents, ResourceError> {
        let catalog = shell.catalog();
        let with_widget = catalog
            .entries()
            .iter()
            .filter(|e| e.binding.widget().is_some())
            .count();

        let info = serde_json::json!({
            "server": shell.site().brand,
            "version": env!("CARGO_PKG_VERSION"),
            "base_url": shell.site().base_url,
            "catalog_tools": catalog.len(),
            "catalog_tools_with_widget": with_widget,
            "mcp_tools": ToolRegistry::get_all_tools().len(),
        });

        json_contents(&info, uri)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::shell::tests::test_shell;

    #[test]
    fn test_server_info_metadata() {
        assert_eq!(ServerInfoResource::URI, "toolly://server/info");
        assert_eq!(ServerInfoResource::MIME_TYPE, "application/json");
    }

    #[test]
    fn test_server_info_resolve() {
        let contents = ServerInfoResource::resolve(ServerInfoResource::URI, &test_shell()).unwrap();
        let ResourceContents::TextResourceContents { text, .. } = contents else {
            panic!("expected text");
        };
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["catalog_tools"], 24);
        assert_eq!(value["catalog_tools_with_widget"], 21);
        assert_eq!(value["mcp_tools"], 19);
    }
}
