use resvg::tiny_skia::{PathBuilder, Pixmap, Stroke, StrokeDash, Transform};

use crate::coords::Rect;
use crate::paint::Color;

use super::common::{skia_rect, solid_paint};

/// Appearance of the selection overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayStyle {
    pub accent: Color,
    pub line_width: f32,
    /// On/off lengths of the outline dash.
    pub dash: [f32; 2],
    /// Side length of the square corner handles.
    pub handle_size: f32,
    pub handle_fill: Color,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            accent: Color::default(),
            line_width: 2.0,
            dash: [5.0, 5.0],
            handle_size: 10.0,
            handle_fill: Color::WHITE,
        }
    }
}

/// Dashed outline of `bounds` plus four square handles centered on its
/// corners. Handles are visual only.
pub(crate) fn draw_selection(pixmap: &mut Pixmap, bounds: Rect, style: &OverlayStyle, transform: Transform) {
    let accent = solid_paint(style.accent);

    if let Some(outline) = skia_rect(bounds) {
        let path = PathBuilder::from_rect(outline);
        let stroke = Stroke {
            width: style.line_width,
            dash: StrokeDash::new(style.dash.to_vec(), 0.0),
            ..Stroke::default()
        };
        pixmap.stroke_path(&path, &accent, &stroke, transform, None);
    }

    let half = style.handle_size / 2.0;
    let handle_stroke = Stroke { width: style.line_width, ..Stroke::default() };
    let fill = solid_paint(style.handle_fill);

    for corner in bounds.corners() {
        let handle = Rect::new(corner.x - half, corner.y - half, style.handle_size, style.handle_size);
        let Some(r) = skia_rect(handle) else { continue };
        pixmap.fill_rect(r, &fill, transform, None);
        pixmap.stroke_path(&PathBuilder::from_rect(r), &accent, &handle_stroke, transform, None);
    }
}
