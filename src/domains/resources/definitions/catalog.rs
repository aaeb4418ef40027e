//! Tool catalog resource definition.

use rmcp::model::ResourceContents;
use serde::Serialize;

use super::{DynamicResourceProvider, ResourceDefinition, json_contents};
use crate::domains::catalog::ToolRecord;
use crate::domains::resources::error::ResourceError;
use crate::domains::resources::service::{DynamicResourceType, ResourceContent};
use crate::domains::shell::Shell;

/// Every catalog record with the MCP tool behind it.
pub struct CatalogResource;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CatalogItem<'a> {
    #[serde(flatten)]
    record: &'a ToolRecord,
    /// MCP tool name, absent for placeholder records.
    mcp_tool: Option<&'static str>,
}

impl ResourceDefinition for CatalogResource {
    const URI: &'static str = "toolly://catalog";
    const NAME: &'static str = "Tool Catalog";
    const DESCRIPTION: &'static str = "Every tool on the site with its category, slug and SEO fields";
    const MIME_TYPE: &'static str = "application/json";

    fn content() -> ResourceContent {
        ResourceContent::Dynamic(DynamicResourceType::Catalog)
    }
}

impl DynamicResourceProvider for CatalogResource {
    fn resolve(uri: &str, shell: &Shell) -> Result<ResourceContents, ResourceError> {
        let items: Vec<_> = shell
            .catalog()
            .entries()
            .iter()
            .map(|entry| CatalogItem {
                record: &entry.record,
                mcp_tool: entry.binding.widget().map(|w| w.tool_name()),
            })
            .collect();

        json_contents(&items, uri)
    }
}
