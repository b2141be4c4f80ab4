use crate::scene::{ObjectKind, SceneObject, ShapeKind};

use super::shapes::{bitmap, circle, common, rect, selection};
use super::{OverlayStyle, Surface};

impl SceneObject {
    /// Paints this object onto `surface`, rotated about its center.
    ///
    /// The selection overlay is drawn as part of the same call, in the same
    /// rotated frame, so any object painted later can cover it.
    pub fn draw(&self, surface: &mut Surface, overlay: &OverlayStyle) {
        if !self.visible {
            return;
        }

        let pixmap = surface.pixmap_mut();
        let transform = common::object_transform(&self.geometry);
        let bounds = self.bounds();

        match &self.kind {
            ObjectKind::Bitmap(bmp) => bitmap::draw_bitmap(pixmap, bmp, bounds, transform),
            ObjectKind::Shape { shape: ShapeKind::Rectangle, fill } => {
                rect::fill_rect(pixmap, bounds, *fill, transform)
            }
            ObjectKind::Shape { shape: ShapeKind::Circle, fill } => {
                circle::fill_circle(pixmap, bounds, *fill, transform)
            }
        }

        if self.is_selected() {
            selection::draw_selection(pixmap, bounds, overlay, transform);
        }
    }
}
