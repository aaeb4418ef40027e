//! Image tools.

pub mod image_compressor;
pub mod image_to_pdf;

pub use image_compressor::{ImageCompressorParams, ImageCompressorTool};
pub use image_to_pdf::{ImageToPdfParams, ImageToPdfTool};
