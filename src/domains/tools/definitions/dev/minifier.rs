//! Code minifier tool definition.
//!
//! One tool serves the HTML, CSS and JavaScript minifier pages; the page
//! fixes the language. The rules are plain regex passes, not a parser.

use std::fmt;
use std::str::FromStr;

use futures::FutureExt;
use regex::Regex;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use super::super::common::{into_call_result, parse_route_params, reduction_percent};
use crate::domains::tools::ToolError;

/// Source language to minify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum MinifyLanguage {
    Html,
    Css,
    Js,
}

impl MinifyLanguage {
    pub fn as_str(self) -> &'static str {
        match self {
            MinifyLanguage::Html => "html",
            MinifyLanguage::Css => "css",
            MinifyLanguage::Js => "js",
        }
    }
}

impl fmt::Display for MinifyLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MinifyLanguage {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "html" => Ok(MinifyLanguage::Html),
            "css" => Ok(MinifyLanguage::Css),
            "js" | "javascript" => Ok(MinifyLanguage::Js),
            other => Err(ToolError::invalid_arguments(format!(
                "Unknown language: {}",
                other
            ))),
        }
    }
}

/// Parameters for the minifier tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct MinifierParams {
    /// Source code to minify.
    #[serde(default)]
    pub input: String,

    /// `html`, `css` or `js`.
    pub language: MinifyLanguage,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct MinifyOutput {
    pub output: String,
    pub language: MinifyLanguage,
    pub original_length: usize,
    pub minified_length: usize,
    /// Size reduction as a whole percentage.
    pub reduction_percent: i64,
}

fn regex(pattern: &str) -> Result<Regex, ToolError> {
    Regex::new(pattern).map_err(|e| ToolError::internal(format!("Regex error: {}", e)))
}

/// Minify `input` according to the rules for `language`.
pub fn minify(input: &str, language: MinifyLanguage) -> Result<String, ToolError> {
    let whitespace = regex(r"\s+")?;
    let block_comment = regex(r"/\*[\s\S]*?\*/")?;

    let result = match language {
        MinifyLanguage::Html => {
            let collapsed = whitespace.replace_all(input, " ");
            regex(r">\s+<")?.replace_all(&collapsed, "><").into_owned()
        }
        MinifyLanguage::Css => {
            let collapsed = whitespace.replace_all(input, " ");
            let stripped = block_comment.replace_all(&collapsed, "");
            regex(r"\s*([{};:])\s*")?
                .replace_all(&stripped, "$1")
                .into_owned()
        }
        MinifyLanguage::Js => {
            let no_line_comments = regex(r"//.*")?.replace_all(input, "");
            let no_comments = block_comment.replace_all(&no_line_comments, "");
            whitespace.replace_all(&no_comments, " ").into_owned()
        }
    };

    Ok(result.trim().to_string())
}

/// Code minifier tool.
pub struct MinifierTool;

impl MinifierTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "code_minifier";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Minify HTML, CSS or JavaScript by stripping comments and collapsing whitespace. Reports the size reduction.";

    #[instrument(skip_all, fields(language = %params.language))]
    pub fn execute(params: &MinifierParams) -> CallToolResult {
        let outcome = minify(&params.input, params.language).map(|output| {
            let original_length = params.input.chars().count();
            let minified_length = output.chars().count();
            info!("Minified {} -> {} chars", original_length, minified_length);
            MinifyOutput {
                reduction_percent: reduction_percent(original_length, minified_length),
                output,
                language: params.language,
                original_length,
                minified_length,
            }
        });
        into_call_result(outcome, |out| out.output.clone())
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<MinifierParams>().into(),
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
                let params: MinifierParams = parse_route_params(args)?;
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
    fn test_html() {
        let out = minify("<div>\n  <p>Hi   there</p>\n</div>\n", MinifyLanguage::Html).unwrap();
        assert_eq!(out, "<div><p>Hi there</p></div>");
    }

    #[test]
    fn test_css() {
        let css = "/* header */\nbody {\n  color : red;\n  margin: 0;\n}\n";
        assert_eq!(minify(css, MinifyLanguage::Css).unwrap(), "body{color:red;margin:0;}");
    }

    #[test]
    fn test_js() {
        let js = "// greet\nfunction hi() {\n  /* body */\n  return 1; // one\n}\n";
        assert_eq!(
            minify(js, MinifyLanguage::Js).unwrap(),
            "function hi() { return 1; }"
        );
    }

    #[test]
    fn test_language_parsing() {
        assert_eq!("CSS".parse::<MinifyLanguage>().unwrap(), MinifyLanguage::Css);
        assert_eq!("javascript".parse::<MinifyLanguage>().unwrap(), MinifyLanguage::Js);
        assert!("rust".parse::<MinifyLanguage>().is_err());
    }

    #[test]
    fn test_execute_reports_reduction() {
        let result = MinifierTool::execute(&MinifierParams {
            input: "a    b".to_string(),
            language: MinifyLanguage::Html,
        });
        let structured = result.structured_content.unwrap();
        assert_eq!(structured["output"], "a b");
        assert_eq!(structured["reduction_percent"], 50);
    }
}
