use resvg::tiny_skia::{FillRule, PathBuilder, Pixmap, Transform};

use crate::coords::Rect;
use crate::paint::Color;

use super::common::solid_paint;

/// Fills the circle inscribed in `bounds`: radius `min(w, h) / 2`, centered.
pub(crate) fn fill_circle(pixmap: &mut Pixmap, bounds: Rect, fill: Color, transform: Transform) {
    let center = bounds.center();
    let radius = bounds.size.x.min(bounds.size.y) / 2.0;
    let Some(path) = PathBuilder::from_circle(center.x, center.y, radius) else {
        log::debug!("fill_circle: skipping degenerate circle r={radius}");
        return;
    };
    pixmap.fill_path(&path, &solid_paint(fill), FillRule::Winding, transform, None);
}
