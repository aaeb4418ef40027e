//! QR code generator tool definition.

use std::io::Cursor;

use futures::FutureExt;
use image::{DynamicImage, ImageFormat, Rgb};
use qrcode::{EcLevel, QrCode};
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use super::super::common::{into_call_result, parse_route_params, to_data_url};
use crate::domains::tools::ToolError;
use crate::domains::tools::definitions::dev::Rgb as Color;

const MIN_SIZE: u32 = 64;
const MAX_SIZE: u32 = 2048;

/// Parameters for the QR code tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct QrCodeParams {
    /// URL or text to encode.
    pub text: String,

    /// Module color as hex.
    #[serde(default = "default_foreground")]
    pub foreground: String,

    /// Background color as hex.
    #[serde(default = "default_background")]
    pub background: String,

    /// Target edge length in pixels (64-2048).
    #[serde(default = "default_size")]
    pub size: u32,
}

fn default_foreground() -> String {
    "#000000".to_string()
}

fn default_background() -> String {
    "#ffffff".to_string()
}

fn default_size() -> u32 {
    256
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct QrCodeOutput {
    /// PNG as a `data:image/png;base64,` URL.
    pub data_url: String,
    pub width: u32,
    pub height: u32,
    /// Suggested download file name.
    pub file_name: String,
}

/// Render `params.text` into a PNG.
pub fn render(params: &QrCodeParams) -> Result<QrCodeOutput, ToolError> {
    if params.text.trim().is_empty() {
        return Err(ToolError::invalid_arguments("Enter a URL or text to encode"));
    }

    let dark = Color::parse_hex(&params.foreground)?;
    let light = Color::parse_hex(&params.background)?;
    let size = params.size.clamp(MIN_SIZE, MAX_SIZE);

    let code = QrCode::with_error_correction_level(params.text.as_bytes(), EcLevel::M)
        .map_err(|e| ToolError::invalid_arguments(format!("Invalid QR content: {}", e)))?;

    let image = code
        .render::<Rgb<u8>>()
        .dark_color(Rgb([dark.r, dark.g, dark.b]))
        .light_color(Rgb([light.r, light.g, light.b]))
        .min_dimensions(size, size)
        .max_dimensions(size, size)
        .build();
    let (width, height) = image.dimensions();

    let mut buffer = Vec::new();
    DynamicImage::ImageRgb8(image)
        .write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
        .map_err(|e| ToolError::execution_failed(format!("Encode image failed: {}", e)))?;

    Ok(QrCodeOutput {
        data_url: to_data_url("image/png", &buffer),
        width,
        height,
        file_name: format!("qrcode-{}.png", chrono::Utc::now().timestamp_millis()),
    })
}

/// QR code generator tool.
pub struct QrCodeTool;

impl QrCodeTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "qr_code_generator";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Generate a QR code PNG for a URL or text with custom foreground and background colors. Returns a data URL for download.";

    #[instrument(skip_all, fields(size = params.size))]
    pub fn execute(params: &QrCodeParams) -> CallToolResult {
        let outcome = render(params);
        if let Ok(out) = &outcome {
            info!("Rendered QR code {}x{}", out.width, out.height);
        }
        into_call_result(outcome, |out| {
            format!("QR code {}x{} ready as {}", out.width, out.height, out.file_name)
        })
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<QrCodeParams>().into(),
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
                let params: QrCodeParams = parse_route_params(args)?;
                Ok(Self::execute(&params))
            }
            .boxed()
        })
    }
}
