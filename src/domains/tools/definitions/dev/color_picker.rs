//! Color picker tool definition.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::super::common::{into_call_result, parse_route_params};
use crate::domains::tools::ToolError;

/// Opacity steps used for the shade strip.
const SHADE_OPACITIES: [f32; 5] = [0.2, 0.4, 0.6, 0.8, 1.0];

/// Parameters for the color picker tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ColorPickerParams {
    /// Color as `#rrggbb` (the `#` and case are optional).
    #[serde(default = "default_color")]
    pub color: String,
}

fn default_color() -> String {
    "#3b82f6".to_string()
}

/// A 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Parse `#rrggbb` or `rrggbb`.
    pub fn parse_hex(input: &str) -> Result<Self, ToolError> {
        let hex = input.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ToolError::invalid_arguments(format!(
                "Invalid hex color: {}",
                input
            )));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|e| ToolError::invalid_arguments(e.to_string()))
        };
        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// Uppercase `#RRGGBB`.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// CSS `rgb(r, g, b)`.
    pub fn to_css_rgb(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    fn to_css_rgba(self, alpha: f32) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct Shade {
    pub opacity: f32,
    pub css: String,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct ColorOutput {
    pub hex: String,
    pub rgb: String,
    pub shades: Vec<Shade>,
}

/// Describe `color` in hex, rgb and opacity shades.
pub fn describe(color: &str) -> Result<ColorOutput, ToolError> {
    let rgb = Rgb::parse_hex(color)?;
    Ok(ColorOutput {
        hex: rgb.to_hex(),
        rgb: rgb.to_css_rgb(),
        shades: SHADE_OPACITIES
            .iter()
            .map(|&opacity| Shade {
                opacity,
                css: rgb.to_css_rgba(opacity),
            })
            .collect(),
    })
}

/// Color picker tool.
pub struct ColorPickerTool;

impl ColorPickerTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "color_picker";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Convert a hex color to uppercase HEX and RGB values and list its opacity shades.";

    #[instrument(skip_all, fields(color = %params.color))]
    pub fn execute(params: &ColorPickerParams) -> CallToolResult {
        into_call_result(describe(&params.color), |out| {
            format!("{} / {}", out.hex, out.rgb)
        })
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<ColorPickerParams>().into(),
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
                let params: ColorPickerParams = parse_route_params(args)?;
                Ok(Self::execute(&params))
            }
            .boxed()
        })
    }
}
