//! Image compressor tool definition.
//!
//! Re-encodes a raster image as JPEG at a chosen quality. No resizing.

use futures::FutureExt;
use image::{ExtendedColorType, codecs::jpeg::JpegEncoder};
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use super::super::common::{
    decode_data_url, error_result, into_call_result, parse_route_params, reduction_percent,
    to_data_url,
};
use crate::domains::tools::ToolError;

const MIN_QUALITY: f32 = 0.1;
const MAX_QUALITY: f32 = 1.0;

/// Parameters for the image compressor tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ImageCompressorParams {
    /// Image as base64 or a `data:` URL (PNG or JPEG).
    pub image: String,

    /// Quality factor between 0.1 and 1.0.
    #[serde(default = "default_quality")]
    pub quality: f32,

    /// Original file name, used to name the download.
    #[serde(default)]
    pub file_name: Option<String>,
}

fn default_quality() -> f32 {
    0.8
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct CompressedImage {
    /// JPEG as a `data:image/jpeg;base64,` URL.
    pub data_url: String,
    pub width: u32,
    pub height: u32,
    pub original_bytes: usize,
    pub compressed_bytes: usize,
    pub reduction_percent: i64,
    pub file_name: String,
}

/// Compress the image described by `params`.
pub fn compress(params: &ImageCompressorParams) -> Result<CompressedImage, ToolError> {
    if !(MIN_QUALITY..=MAX_QUALITY).contains(&params.quality) {
        return Err(ToolError::invalid_arguments(format!(
            "Quality must be between {} and {}",
            MIN_QUALITY, MAX_QUALITY
        )));
    }

    let (_, original) = decode_data_url(&params.image)?;
    let decoded = image::load_from_memory(&original)
        .map_err(|e| ToolError::invalid_arguments(format!("Unsupported image: {}", e)))?;
    let rgb = decoded.to_rgb8();
    let (width, height) = rgb.dimensions();

    let quality = (params.quality * 100.0).round().clamp(1.0, 100.0) as u8;
    let mut buffer = Vec::new();
    JpegEncoder::new_with_quality(&mut buffer, quality)
        .encode(rgb.as_raw(), width, height, ExtendedColorType::Rgb8)
        .map_err(|e| ToolError::execution_failed(format!("JPEG encoding failed: {}", e)))?;

    let stem = params
        .file_name
        .as_deref()
        .map(|name| name.rsplit_once('.').map_or(name, |(stem, _)| stem))
        .filter(|stem| !stem.is_empty())
        .unwrap_or("image");

    Ok(CompressedImage {
        data_url: to_data_url("image/jpeg", &buffer),
        width,
        height,
        original_bytes: original.len(),
        compressed_bytes: buffer.len(),
        reduction_percent: reduction_percent(original.len(), buffer.len()),
        file_name: format!("compressed-{}.jpg", stem),
    })
}

/// Image compressor tool.
pub struct ImageCompressorTool;

impl ImageCompressorTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "image_compressor";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Compress a PNG or JPEG image by re-encoding it as JPEG at a quality between 0.1 and 1.0. Returns the result as a data URL with size statistics.";

    #[instrument(skip_all, fields(quality = params.quality))]
    pub fn execute(params: &ImageCompressorParams) -> CallToolResult {
        let outcome = compress(params);
        if let Ok(out) = &outcome {
            info!(
                "Compressed {} -> {} bytes",
                out.original_bytes, out.compressed_bytes
            );
        }
        into_call_result(outcome, |out| {
            format!(
                "Compressed {:.2} KB to {:.2} KB ({}% smaller)",
                out.original_bytes as f64 / 1024.0,
                out.compressed_bytes as f64 / 1024.0,
                out.reduction_percent
            )
        })
    }

    /// Run on the blocking pool; decoding and encoding are CPU bound.
    pub async fn run(params: ImageCompressorParams) -> CallToolResult {
        tokio::task::spawn_blocking(move || Self::execute(&params))
            .await
            .unwrap_or_else(|e| error_result(format!("Task failed: {:?}", e)))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<ImageCompressorParams>().into(),
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
                let params: ImageCompressorParams = parse_route_params(args)?;
                Ok(Self::run(params).await)
            }
            .boxed()
        })
    }
}
