use core::fmt;

use image::{Rgba, RgbaImage};
use resvg::tiny_skia::{ColorU8, Pixmap};

use crate::coords::CanvasSize;
use crate::error::{EditError, EditResult};
use crate::paint::Color;

/// CPU raster target the renderer paints into.
///
/// Pixels are premultiplied RGBA (tiny-skia's native layout). Use
/// [`to_rgba_image`](Self::to_rgba_image) for straight-alpha data.
#[derive(Clone)]
pub struct Surface {
    pixmap: Pixmap,
}

impl Surface {
    pub fn new(canvas: CanvasSize) -> EditResult<Self> {
        let pixmap = Pixmap::new(canvas.width(), canvas.height()).ok_or_else(|| {
            EditError::Surface(format!("cannot allocate {}x{} pixmap", canvas.width(), canvas.height()))
        })?;
        Ok(Self { pixmap })
    }

    /// Builds a surface holding `image`'s pixels.
    pub fn from_rgba_image(image: &RgbaImage) -> EditResult<Self> {
        Ok(Self { pixmap: pixmap_from_rgba(image)? })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    #[inline]
    pub fn matches(&self, canvas: CanvasSize) -> bool {
        self.width() == canvas.width() && self.height() == canvas.height()
    }

    pub fn clear(&mut self, color: Color) {
        self.pixmap.fill(color.to_skia());
    }

    /// Straight-alpha color at `(x, y)`, `None` outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        // tiny-skia indexes `y * width + x` without checking `x`.
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let c = self.pixmap.pixel(x, y)?.demultiply();
        Some(Color::rgba(c.red(), c.green(), c.blue(), c.alpha()))
    }

    /// Copies the whole surface out as a straight-alpha buffer.
    pub fn to_rgba_image(&self) -> RgbaImage {
        let mut out = RgbaImage::new(self.width(), self.height());
        for (dst, src) in out.pixels_mut().zip(self.pixmap.pixels()) {
            let c = src.demultiply();
            *dst = Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
        }
        out
    }

    /// Replaces this surface's pixels (and size) with `other`'s.
    pub fn copy_from(&mut self, other: &Surface) {
        self.pixmap.clone_from(&other.pixmap);
    }

    #[inline]
    pub(crate) fn pixmap_mut(&mut self) -> &mut Pixmap {
        &mut self.pixmap
    }
}

impl PartialEq for Surface {
    fn eq(&self, other: &Self) -> bool {
        self.width() == other.width()
            && self.height() == other.height()
            && self.pixmap.data() == other.pixmap.data()
    }
}

impl fmt::Debug for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Surface")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish_non_exhaustive()
    }
}

/// Premultiplies a straight-alpha buffer into a fresh pixmap.
pub(crate) fn pixmap_from_rgba(image: &RgbaImage) -> EditResult<Pixmap> {
    let mut pixmap = Pixmap::new(image.width(), image.height()).ok_or_else(|| {
        EditError::Surface(format!("cannot allocate {}x{} pixmap", image.width(), image.height()))
    })?;
    for (dst, src) in pixmap.pixels_mut().iter_mut().zip(image.pixels()) {
        let [r, g, b, a] = src.0;
        *dst = ColorU8::from_rgba(r, g, b, a).premultiply();
    }
    Ok(pixmap)
}
