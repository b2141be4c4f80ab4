//! Export of the composite.
//!
//! Raster formats render the document offscreen with the selection overlay
//! hidden and encode the pixels. SVG walks the object list and emits one
//! element per visible object.

mod raster;
mod svg;

pub use raster::encode_raster;
pub use svg::to_svg;

use core::fmt;
use core::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::{EditError, EditResult};
use crate::render::Renderer;
use crate::scene::Document;

/// JPEG quality used unless configured otherwise (0–100).
pub const DEFAULT_JPEG_QUALITY: u8 = 95;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ExportFormat {
    Png,
    Jpeg,
    Webp,
    Svg,
}

impl ExportFormat {
    #[inline]
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Jpeg => "jpeg",
            ExportFormat::Webp => "webp",
            ExportFormat::Svg => "svg",
        }
    }

    #[inline]
    pub fn mime(self) -> &'static str {
        match self {
            ExportFormat::Png => "image/png",
            ExportFormat::Jpeg => "image/jpeg",
            ExportFormat::Webp => "image/webp",
            ExportFormat::Svg => "image/svg+xml",
        }
    }

    #[inline]
    pub fn is_raster(self) -> bool {
        !matches!(self, ExportFormat::Svg)
    }
}

impl FromStr for ExportFormat {
    type Err = EditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "png" => Ok(ExportFormat::Png),
            "jpeg" | "jpg" => Ok(ExportFormat::Jpeg),
            "webp" => Ok(ExportFormat::Webp),
            "svg" => Ok(ExportFormat::Svg),
            _ => Err(EditError::UnsupportedFormat(s.to_string())),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Encoded export ready to hand to a download/save collaborator.
#[derive(Debug, Clone, PartialEq)]
pub struct Export {
    pub format: ExportFormat,
    /// `export-<unix millis>.<ext>`
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl Export {
    #[inline]
    pub fn mime(&self) -> &'static str {
        self.format.mime()
    }
}

pub fn export_filename(format: ExportFormat, unix_millis: u128) -> String {
    format!("export-{unix_millis}.{}", format.extension())
}

fn unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default()
}

/// Exports `document` in `format`.
///
/// Raster export clears the selection for the offscreen render and puts the
/// previous selection back afterwards, whether or not encoding succeeded.
pub fn export_document(
    document: &mut Document,
    renderer: &Renderer,
    format: ExportFormat,
    jpeg_quality: u8,
) -> EditResult<Export> {
    let bytes = match format {
        ExportFormat::Svg => to_svg(document)?.into_bytes(),
        raster => {
            let prior = document.selection();
            document.select(None)?;
            let encoded = renderer
                .render_offscreen(document)
                .and_then(|surface| encode_raster(&surface, raster, jpeg_quality));
            document.select(prior)?;
            encoded?
        }
    };

    let export = Export { format, filename: export_filename(format, unix_millis()), bytes };
    log::info!("exported {} ({} bytes)", export.filename, export.bytes.len());
    Ok(export)
}
