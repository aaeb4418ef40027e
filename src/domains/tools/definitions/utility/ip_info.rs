//! IP information tool definition.
//!
//! Fetches network details from the configured geolocation endpoint and pairs
//! them with whatever the caller reports about its own device.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, instrument, warn};

use super::super::common::{into_call_result, parse_route_params};
use crate::domains::tools::ToolError;
use crate::domains::tools::context::ToolContext;

/// Parameters for the IP info tool.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct IpInfoParams {
    /// Caller's user agent string, if known.
    #[serde(default)]
    pub user_agent: Option<String>,

    /// Caller's platform (OS) name, if known.
    #[serde(default)]
    pub platform: Option<String>,

    /// Caller's preferred language, if known.
    #[serde(default)]
    pub language: Option<String>,
}

#[derive(Debug, Default, Serialize, JsonSchema)]
pub struct NetworkInfo {
    pub ip: Option<String>,
    /// ISP / organisation.
    pub org: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub timezone: Option<String>,
}

#[derive(Debug, Default, Serialize, JsonSchema)]
pub struct DeviceInfo {
    /// Last token of the user agent, usually the browser.
    pub browser: Option<String>,
    pub platform: Option<String>,
    pub language: Option<String>,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct IpInfoOutput {
    pub network: NetworkInfo,
    pub device: DeviceInfo,
}

fn field(body: &Value, key: &str) -> Option<String> {
    match body.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Null => None,
        other => Some(other.to_string()),
    }
}

/// Build the output from a lookup response body and the caller's details.
pub fn assemble(body: &Value, params: &IpInfoParams) -> IpInfoOutput {
    IpInfoOutput {
        network: NetworkInfo {
            ip: field(body, "ip"),
            org: field(body, "org"),
            city: field(body, "city"),
            country: field(body, "country_name").or_else(|| field(body, "country")),
            timezone: field(body, "timezone"),
        },
        device: DeviceInfo {
            browser: params
                .user_agent
                .as_deref()
                .and_then(|ua| ua.split(' ').next_back())
                .filter(|s| !s.is_empty())
                .map(str::to_string),
            platform: params.platform.clone(),
            language: params.language.clone(),
        },
    }
}

/// IP information tool.
pub struct IpInfoTool;

impl IpInfoTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "ip_info";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Look up the public IP address with its ISP, city, country and timezone. Optionally echo the caller's browser, OS and language.";

    async fn lookup(ctx: &ToolContext) -> Result<Value, ToolError> {
        let url = &ctx.config.network.ip_lookup_url;
        let response = ctx
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| ToolError::execution_failed(format!("IP lookup failed: {}", e)))?;

        if !response.status().is_success() {
            warn!("IP lookup returned {}", response.status());
            return Err(ToolError::execution_failed(format!(
                "IP lookup returned {}",
                response.status()
            )));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| ToolError::execution_failed(format!("Invalid IP lookup response: {}", e)))
    }

    #[instrument(skip_all)]
    pub async fn execute(params: &IpInfoParams, ctx: &ToolContext) -> CallToolResult {
        let outcome = Self::lookup(ctx).await.map(|body| assemble(&body, params));
        if let Ok(out) = &outcome {
            info!("Resolved IP info for {:?}", out.network.ip);
        }
        into_call_result(outcome, |out| {
            format!(
                "IP {} ({}, {})",
                out.network.ip.as_deref().unwrap_or("unknown"),
                out.network.city.as_deref().unwrap_or("unknown city"),
                out.network.country.as_deref().unwrap_or("unknown country"),
            )
        })
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<IpInfoParams>().into(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO/TCP transport.
    pub fn create_route<S>(context: Arc<ToolContext>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let context = context.clone();
            async move {
                let params: IpInfoParams = parse_route_params(args)?;
                Ok(Self::execute(&params, &context).await)
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assemble_from_lookup_body() {
        let body = serde_json::json!({
            "ip": "203.0.113.7",
            "org": "Example ISP",
            "city": "Lyon",
            "country_name": "France",
            "timezone": "Europe/Paris",
            "asn": 64500
        });
        let params = IpInfoParams {
            user_agent: Some("Mozilla/5.0 (X11) Firefox/131.0".to_string()),
            platform: Some("Linux x86_64".to_string()),
            language: None,
        };
        let out = assemble(&body, &params);
        assert_eq!(out.network.ip.as_deref(), Some("203.0.113.7"));
        assert_eq!(out.network.country.as_deref(), Some("France"));
        assert_eq!(out.network.timezone.as_deref(), Some("Europe/Paris"));
        assert_eq!(out.device.browser.as_deref(), Some("Firefox/131.0"));
        assert_eq!(out.device.platform.as_deref(), Some("Linux x86_64"));
        assert!(out.device.language.is_none());
    }

    #[test]
    fn test_assemble_tolerates_missing_fields() {
        let out = assemble(&serde_json::json!({ "country": "FR" }), &IpInfoParams::default());
        assert!(out.network.ip.is_none());
        assert_eq!(out.network.country.as_deref(), Some("FR"));
        assert!(out.device.browser.is_none());
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_inline_error() {
        let mut config = crate::core::config::Config::default();
        config.network.ip_lookup_url = "http://127.0.0.1:9/json/".to_string();
        let ctx = ToolContext::new(
            Arc::new(config),
            Arc::new(crate::core::storage::MemoryStore::new()),
        );
        let result = IpInfoTool::execute(&IpInfoParams::default(), &ctx).await;
        assert!(result.is_error.unwrap_or(false));
    }
}
