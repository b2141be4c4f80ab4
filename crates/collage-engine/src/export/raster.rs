use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::codecs::webp::WebPEncoder;
use image::{DynamicImage, ImageResult};

use crate::error::{EditError, EditResult};
use crate::render::Surface;

use super::ExportFormat;

/// Encodes the surface's pixels.
///
/// JPEG has no alpha channel; the surface is flattened to RGB first (the
/// canvas background is opaque, so nothing is lost). WebP is lossless.
pub fn encode_raster(surface: &Surface, format: ExportFormat, jpeg_quality: u8) -> EditResult<Vec<u8>> {
    let image = surface.to_rgba_image();
    let mut out = Vec::new();

    let result: ImageResult<()> = match format {
        ExportFormat::Png => image.write_with_encoder(PngEncoder::new(&mut out)),
        ExportFormat::Jpeg => {
            let rgb = DynamicImage::ImageRgba8(image).to_rgb8();
            rgb.write_with_encoder(JpegEncoder::new_with_quality(&mut out, jpeg_quality.clamp(1, 100)))
        }
        ExportFormat::Webp => image.write_with_encoder(WebPEncoder::new_lossless(&mut out)),
        ExportFormat::Svg => {
            return Err(EditError::UnsupportedFormat("svg is not a raster format".into()));
        }
    };

    result.map_err(|e| {
        log::warn!("{format} encode failed: {e}");
        EditError::EncodeFailed(e.to_string())
    })?;
    Ok(out)
}
