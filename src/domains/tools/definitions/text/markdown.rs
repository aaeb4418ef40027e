//! Markdown preview tool definition.
//!
//! A deliberately small, line-based renderer: headings (`# `, `## `), list
//! items (`- `), fenced code blocks and plain paragraphs. Everything else is
//! passed through as escaped text.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::super::common::{parse_route_params, structured_result};

/// Parameters for the markdown preview tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct MarkdownPreviewParams {
    /// Markdown source.
    #[serde(default)]
    pub markdown: String,
}

/// Rendered preview.
#[derive(Debug, Serialize, JsonSchema)]
pub struct MarkdownOutput {
    pub html: String,
}

/// Escape text for inclusion in HTML.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render markdown to an HTML fragment.
pub fn render(markdown: &str) -> String {
    let mut html = Vec::new();
    let mut in_list = false;
    let mut code: Option<(String, Vec<String>)> = None;

    for line in markdown.lines() {
        if let Some((language, lines)) = code.as_mut() {
            if line.trim_start().starts_with("```") {
                let class = if language.is_empty() {
                    String::new()
                } else {
                    format!(" class=\"language-{}\"", escape_html(language))
                };
                html.push(format!("<pre><code{}>{}</code></pre>", class, lines.join("\n")));
                code = None;
            } else {
                lines.push(escape_html(line));
            }
            continue;
        }

        let is_item = line.starts_with("- ");
        if in_list && !is_item {
            html.push("</ul>".to_string());
            in_list = false;
        }

        if let Some(fence) = line.trim_start().strip_prefix("```") {
            code = Some((fence.trim().to_string(), Vec::new()));
        } else if let Some(text) = line.strip_prefix("# ") {
            html.push(format!("<h1>{}</h1>", escape_html(text)));
        } else if let Some(text) = line.strip_prefix("## ") {
            html.push(format!("<h2>{}</h2>", escape_html(text)));
        } else if let Some(text) = line.strip_prefix("- ") {
            if !in_list {
                html.push("<ul>".to_string());
                in_list = true;
            }
            html.push(format!("<li>{}</li>", escape_html(text)));
        } else if !line.trim().is_empty() {
            html.push(format!("<p>{}</p>", escape_html(line)));
        }
    }

    if in_list {
        html.push("</ul>".to_string());
    }
    // Unterminated fence: keep what we have.
    if let Some((_, lines)) = code {
        html.push(format!("<pre><code>{}</code></pre>", lines.join("\n")));
    }

    html.join("\n")
}

/// Markdown preview tool.
pub struct MarkdownPreviewTool;

impl MarkdownPreviewTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "markdown_preview";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Render markdown (headings, lists, code fences, paragraphs) to an HTML preview.";

    #[instrument(skip_all, fields(len = params.markdown.len()))]
    pub fn execute(params: &MarkdownPreviewParams) -> CallToolResult {
        let output = MarkdownOutput {
            html: render(&params.markdown),
        };
        structured_result(output.html.clone(), &output)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<MarkdownPreviewParams>().into(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO/TCP transport.
    pub fn create_route<S>() -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            async move {
                let params: MarkdownPreviewParams = parse_route_params(args)?;
                Ok(Self::execute(&params))
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headings_and_paragraphs() {
        let html = render("# Title\n\n## Sub\nplain text");
        assert_eq!(html, "<h1>Title</h1>\n<h2>Sub</h2>\n<p>plain text</p>");
    }

    #[test]
    fn test_list_is_wrapped() {
        let html = render("- one\n- two\nafter");
        assert_eq!(html, "<ul>\n<li>one</li>\n<li>two</li>\n</ul>\n<p>after</p>");
    }

    #[test]
    fn test_code_fence() {
        let html = render("```js\nconsole.log(\"<hi>\");\n```");
        assert_eq!(
            html,
            "<pre><code class=\"language-js\">console.log(&quot;&lt;hi&gt;&quot;);</code></pre>"
        );
    }

    #[test]
    fn test_unterminated_fence() {
        assert_eq!(render("```\nx"), "<pre><code>x</code></pre>");
    }

    #[test]
    fn test_escapes_markup() {
        assert_eq!(render("<script>"), "<p>&lt;script&gt;</p>");
    }
}
