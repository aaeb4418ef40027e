//! URL shortener tool definition.
//!
//! There is no redirect service behind this: the short link is a random code
//! under the site's `/s/` path and nothing is stored.

use futures::FutureExt;
use rand::{Rng, distributions::Alphanumeric};
use reqwest::Url;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument};

use super::super::common::{into_call_result, parse_route_params};
use crate::core::config::Config;
use crate::domains::tools::ToolError;

const CODE_LENGTH: usize = 6;

/// Parameters for the URL shortener tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UrlShortenerParams {
    /// Long http(s) URL to shorten.
    pub url: String,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct ShortLink {
    pub original_url: String,
    pub code: String,
    pub short_url: String,
}

/// Fabricate a short link for `url` under `base_url`.
pub fn shorten_with<R: Rng>(rng: &mut R, base_url: &str, url: &str) -> Result<ShortLink, ToolError> {
    let parsed = Url::parse(url.trim())
        .map_err(|e| ToolError::invalid_arguments(format!("Invalid URL: {}", e)))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ToolError::invalid_arguments(
            "Only http and https URLs can be shortened",
        ));
    }

    let code: String = rng
        .sample_iter(&Alphanumeric)
        .take(CODE_LENGTH)
        .map(char::from)
        .collect();

    Ok(ShortLink {
        original_url: parsed.to_string(),
        short_url: format!("{}/s/{}", base_url, code),
        code,
    })
}

/// URL shortener tool.
pub struct UrlShortenerTool;

impl UrlShortenerTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "url_shortener";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Create a short link for an http(s) URL. Links are illustrative only and are not stored.";

    #[instrument(skip_all, fields(url = %params.url))]
    pub fn execute(params: &UrlShortenerParams, config: &Config) -> CallToolResult {
        let outcome = shorten_with(&mut rand::thread_rng(), &config.site.base_url, &params.url);
        if let Ok(link) = &outcome {
            info!("Fabricated short code {}", link.code);
        }
        into_call_result(outcome, |link| link.short_url.clone())
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<UrlShortenerParams>().into(),
            annotations: None,
            output_schema: Some(schema_for_type::<ShortLink>().into()),
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO/TCP transport.
    pub fn create_route<S>(config: Arc<Config>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let config = config.clone();
            async move {
                let params: UrlShortenerParams = parse_route_params(args)?;
                Ok(Self::execute(&params, &config))
            }
            .boxed()
        })
    }
}
