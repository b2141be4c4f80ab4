use resvg::tiny_skia::{Pixmap, Transform};

use crate::coords::Rect;
use crate::paint::Color;

use super::common::{skia_rect, solid_paint};

/// Fills `rect` with a solid color.
pub(crate) fn fill_rect(pixmap: &mut Pixmap, rect: Rect, fill: Color, transform: Transform) {
    let Some(r) = skia_rect(rect) else {
        log::debug!("fill_rect: skipping degenerate rect {rect:?}");
        return;
    };
    pixmap.fill_rect(r, &solid_paint(fill), transform, None);
}
