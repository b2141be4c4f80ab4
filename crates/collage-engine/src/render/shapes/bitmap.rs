use resvg::tiny_skia::{FilterQuality, PixmapPaint, Pixmap, Transform};

use crate::coords::Rect;
use crate::scene::Bitmap;

/// Draws `bitmap` stretched to exactly fill `bounds`.
pub(crate) fn draw_bitmap(pixmap: &mut Pixmap, bitmap: &Bitmap, bounds: Rect, transform: Transform) {
    if bounds.is_empty() {
        return;
    }
    let sx = bounds.size.x / bitmap.width() as f32;
    let sy = bounds.size.y / bitmap.height() as f32;
    // Scale into the box first, then apply the object's rotation.
    let placement = Transform::from_row(sx, 0.0, 0.0, sy, bounds.origin.x, bounds.origin.y);
    let paint = PixmapPaint { quality: FilterQuality::Bilinear, ..PixmapPaint::default() };

    pixmap.draw_pixmap(0, 0, bitmap.pixmap(), &paint, transform.pre_concat(placement), None);
}
