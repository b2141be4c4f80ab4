use resvg::tiny_skia::{self, Paint, Transform};

use crate::coords::Rect;
use crate::paint::Color;
use crate::scene::Geometry;

/// Anti-aliased solid paint.
#[inline]
pub(crate) fn solid_paint(color: Color) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(color.to_skia());
    paint.anti_alias = true;
    paint
}

/// Rotation about the box center, in degrees mod 360.
#[inline]
pub(crate) fn object_transform(geometry: &Geometry) -> Transform {
    let center = geometry.bounds().center();
    Transform::from_rotate_at(geometry.normalized_rotation(), center.x, center.y)
}

/// `None` for empty or non-finite rects, which callers skip.
#[inline]
pub(crate) fn skia_rect(rect: Rect) -> Option<tiny_skia::Rect> {
    tiny_skia::Rect::from_xywh(rect.origin.x, rect.origin.y, rect.size.x, rect.size.y)
}
