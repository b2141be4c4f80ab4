use core::fmt;
use std::io::Cursor;
use std::sync::Arc;

use image::{ImageFormat, RgbaImage};
use resvg::tiny_skia::{Pixmap, PixmapRef};

use crate::error::{EditError, EditResult};
use crate::render::surface::pixmap_from_rgba;

/// Decoded, immutable bitmap content.
///
/// Holds the straight-alpha RGBA buffer (what filters and encoders read) and a
/// premultiplied pixmap prepared once for the rasterizer. Both live behind
/// `Arc`, so cloning is cheap and history snapshots share pixels with the live
/// document. Filters never write into a `Bitmap`; they build a new one.
#[derive(Clone)]
pub struct Bitmap {
    image: Arc<RgbaImage>,
    pixmap: Arc<Pixmap>,
}

impl Bitmap {
    /// Wraps an already-decoded RGBA buffer.
    pub fn new(image: RgbaImage) -> EditResult<Self> {
        if image.width() == 0 || image.height() == 0 {
            return Err(EditError::invalid_dimension(image.width(), image.height()));
        }
        let pixmap = pixmap_from_rgba(&image)?;
        Ok(Self { image: Arc::new(image), pixmap: Arc::new(pixmap) })
    }

    /// Decodes encoded image bytes (PNG, JPEG or WebP).
    pub fn decode(bytes: &[u8]) -> EditResult<Self> {
        let decoded = image::load_from_memory(bytes).map_err(|e| {
            log::warn!("bitmap decode failed: {e}");
            EditError::DecodeFailed(e.to_string())
        })?;
        Self::new(decoded.to_rgba8())
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Natural width / height.
    #[inline]
    pub fn aspect_ratio(&self) -> f32 {
        self.width() as f32 / self.height() as f32
    }

    #[inline]
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    #[inline]
    pub(crate) fn pixmap(&self) -> PixmapRef<'_> {
        Pixmap::as_ref(&self.pixmap)
    }

    /// True when both handles point at the same pixel storage.
    #[inline]
    pub fn shares_pixels_with(&self, other: &Bitmap) -> bool {
        Arc::ptr_eq(&self.image, &other.image)
    }

    /// PNG encoding of the natural-size content.
    pub fn encode_png(&self) -> EditResult<Vec<u8>> {
        let mut out = Cursor::new(Vec::new());
        self.image
            .write_to(&mut out, ImageFormat::Png)
            .map_err(|e| EditError::EncodeFailed(e.to_string()))?;
        Ok(out.into_inner())
    }
}

impl fmt::Debug for Bitmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bitmap")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish_non_exhaustive()
    }
}
