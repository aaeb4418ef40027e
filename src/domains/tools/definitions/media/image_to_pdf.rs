//! Image to PDF tool definition.
//!
//! Each image becomes one A4 page. The image is scaled to fit a 190x277 mm
//! box whose top-left corner sits 10 mm from the top and left edges.

use futures::FutureExt;
use image::{ExtendedColorType, codecs::jpeg::JpegEncoder};
use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, dictionary};
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use super::super::common::{
    decode_data_url, error_result, into_call_result, parse_route_params, to_data_url,
};
use crate::domains::tools::ToolError;

const POINTS_PER_MM: f32 = 72.0 / 25.4;
const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 10.0;
const BOX_WIDTH_MM: f32 = 190.0;
const BOX_HEIGHT_MM: f32 = 277.0;
const EMBED_QUALITY: u8 = 92;

/// Parameters for the image to PDF tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ImageToPdfParams {
    /// Images as base64 or `data:` URLs, one page each, in order.
    pub images: Vec<String>,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct PdfOutput {
    /// PDF as a `data:application/pdf;base64,` URL.
    pub data_url: String,
    pub pages: usize,
    pub bytes: usize,
    pub file_name: String,
}

/// Placement of an image on the page, in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Fit a `width` x `height` pixel image into the page box, keeping its aspect.
pub fn place(width: u32, height: u32) -> Placement {
    let scale = (BOX_WIDTH_MM / width as f32).min(BOX_HEIGHT_MM / height as f32);
    let w_mm = width as f32 * scale;
    let h_mm = height as f32 * scale;
    Placement {
        x: MARGIN_MM * POINTS_PER_MM,
        // PDF y grows upwards.
        y: (PAGE_HEIGHT_MM - MARGIN_MM - h_mm) * POINTS_PER_MM,
        width: w_mm * POINTS_PER_MM,
        height: h_mm * POINTS_PER_MM,
    }
}

struct Jpeg {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

fn to_jpeg(index: usize, input: &str) -> Result<Jpeg, ToolError> {
    let (_, bytes) = decode_data_url(input)?;
    let rgb = image::load_from_memory(&bytes)
        .map_err(|e| ToolError::invalid_arguments(format!("Image {}: {}", index + 1, e)))?
        .to_rgb8();
    let (width, height) = rgb.dimensions();

    let mut data = Vec::new();
    JpegEncoder::new_with_quality(&mut data, EMBED_QUALITY)
        .encode(rgb.as_raw(), width, height, ExtendedColorType::Rgb8)
        .map_err(|e| ToolError::execution_failed(format!("JPEG encoding failed: {}", e)))?;
    Ok(Jpeg { width, height, data })
}

fn pdf_error(e: lopdf::Error) -> ToolError {
    ToolError::execution_failed(format!("PDF assembly failed: {}", e))
}

/// Assemble the PDF bytes for `images`.
pub fn build_pdf(images: &[String]) -> Result<Vec<u8>, ToolError> {
    if images.is_empty() {
        return Err(ToolError::invalid_arguments("Add at least one image"));
    }

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let mut kids: Vec<Object> = Vec::with_capacity(images.len());

    for (index, input) in images.iter().enumerate() {
        let jpeg = to_jpeg(index, input)?;
        let placement = place(jpeg.width, jpeg.height);
        debug!("Page {} at {:?}", index + 1, placement);

        let mut image_stream = Stream::new(
            dictionary! {
                "Type" => "XObject",
                "Subtype" => "Image",
                "Width" => jpeg.width as i64,
                "Height" => jpeg.height as i64,
                "ColorSpace" => "DeviceRGB",
                "BitsPerComponent" => 8,
                "Filter" => "DCTDecode",
            },
            jpeg.data,
        );
        image_stream.allows_compression = false;
        let image_id = doc.add_object(image_stream);

        let name = format!("Im{}", index);
        let content = Content {
            operations: vec![
                Operation::new("q", vec![]),
                Operation::new(
                    "cm",
                    vec![
                        placement.width.into(),
                        0.into(),
                        0.into(),
                        placement.height.into(),
                        placement.x.into(),
                        placement.y.into(),
                    ],
                ),
                Operation::new("Do", vec![Object::Name(name.clone().into_bytes())]),
                Operation::new("Q", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().map_err(pdf_error)?,
        ));

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => dictionary! {
                "XObject" => dictionary! { name => image_id },
            },
            "MediaBox" => vec![
                0.into(),
                0.into(),
                (PAGE_WIDTH_MM * POINTS_PER_MM).into(),
                (PAGE_HEIGHT_MM * POINTS_PER_MM).into(),
            ],
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer)
        .map_err(|e| ToolError::execution_failed(format!("PDF write failed: {}", e)))?;
    Ok(buffer)
}

/// Image to PDF tool.
pub struct ImageToPdfTool;

impl ImageToPdfTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "image_to_pdf";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Combine one or more PNG or JPEG images into an A4 PDF, one image per page. Returns the PDF as a data URL.";

    #[instrument(skip_all, fields(images = params.images.len()))]
    pub fn execute(params: &ImageToPdfParams) -> CallToolResult {
        let outcome = build_pdf(&params.images).map(|bytes| PdfOutput {
            data_url: to_data_url("application/pdf", &bytes),
            pages: params.images.len(),
            bytes: bytes.len(),
            file_name: "toolly-converted.pdf".to_string(),
        });
        if let Ok(out) = &outcome {
            info!("Built {}-page PDF ({} bytes)", out.pages, out.bytes);
        }
        into_call_result(outcome, |out| {
            format!("{} ready with {} page(s)", out.file_name, out.pages)
        })
    }

    /// Run on the blocking pool.
    pub async fn run(params: ImageToPdfParams) -> CallToolResult {
        tokio::task::spawn_blocking(move || Self::execute(&params))
            .await
            .unwrap_or_else(|e| error_result(format!("Task failed: {:?}", e)))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<ImageToPdfParams>().into(),
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
                let params: ImageToPdfParams = parse_route_params(args)?;
                Ok(Self::run(params).await)
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::media::image_compressor::tests::sample_png;

    #[test]
    fn test_placement_fits_box() {
        // Portrait with the box's own aspect fills it exactly.
        let p = place(190, 277);
        assert!((p.x - 28.346).abs() < 0.01);
        assert!((p.y - 28.346).abs() < 0.01);
        assert!((p.width - 190.0 * POINTS_PER_MM).abs() < 0.01);

        // Landscape is limited by width and hangs from the top margin.
        let p = place(400, 200);
        assert!((p.width - 190.0 * POINTS_PER_MM).abs() < 0.01);
        assert!((p.height - 95.0 * POINTS_PER_MM).abs() < 0.01);
        assert!((p.y + p.height - 287.0 * POINTS_PER_MM).abs() < 0.01);
    }

    #[test]
    fn test_builds_one_page_per_image() {
        let images = vec![
            to_data_url("image/png", &sample_png(20, 10)),
            to_data_url("image/png", &sample_png(10, 20)),
        ];
        let bytes = build_pdf(&images).unwrap();
        assert!(bytes.starts_with(b"%PDF-1.5"));

        let doc = Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 2);
    }

    #[test]
    fn test_requires_images() {
        assert!(build_pdf(&[]).is_err());
        let result = ImageToPdfTool::execute(&ImageToPdfParams {
            images: vec!["bm90IGFuIGltYWdl".to_string()],
        });
        assert!(result.is_error.unwrap_or(false));
    }
}
