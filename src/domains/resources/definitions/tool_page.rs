//! Per-tool page resource template.

use rmcp::model::{AnnotateAble, RawResourceTemplate, ResourceContents, ResourceTemplate};

use super::json_contents;
use crate::domains::resources::error::ResourceError;
use crate::domains::shell::Shell;

/// `toolly://tools/{slug}`: the page view of one tool.
pub struct ToolPageTemplate;

impl ToolPageTemplate {
    pub const URI_PREFIX: &'static str = "toolly://tools/";
    pub const URI_TEMPLATE: &'static str = "toolly://tools/{slug}";

    pub fn template() -> ResourceTemplate {
        RawResourceTemplate {
            uri_template: Self::URI_TEMPLATE.to_string(),
            name: "Tool Page".to_string(),
            title: Some("Tool page by slug".to_string()),
            description: Some(
                "Page view of a tool: SEO head, share links, breadcrumb and widget".to_string(),
            ),
            mime_type: Some("application/json".to_string()),
        }
        .no_annotation()
    }

    /// Slug addressed by `uri`, if it matches the template.
    pub fn slug(uri: &str) -> Option<&str> {
        uri.strip_prefix(Self::URI_PREFIX)
            .filter(|slug| !slug.is_empty() && !slug.contains('/'))
    }

    pub fn resolve(uri: &str, shell: &Shell) -> Result<ResourceContents, ResourceError> {
        let slug = Self::slug(uri).ok_or_else(|| ResourceError::invalid_uri(uri))?;
        let entry = shell
            .catalog()
            .find_by_slug(slug)
            .ok_or_else(|| ResourceError::not_found(uri))?;

        let view = shell
            .tool_view(entry)
            .map_err(|e| ResourceError::internal(e.to_string()))?;
        json_contents(&view, uri)
    }
}
