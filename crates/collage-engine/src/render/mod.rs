//! CPU rendering subsystem.
//!
//! Paints a `Document` into a `Surface` using tiny-skia.
//!
//! Convention:
//! - geometry is in canvas pixels (top-left origin, +Y down)
//! - every object is drawn in its own frame: rotation about the box center
//! - the canvas background is opaque white

mod object;
mod shapes;
pub(crate) mod surface;

pub use shapes::selection::OverlayStyle;
pub use surface::Surface;

use crate::error::EditResult;
use crate::paint::Color;
use crate::scene::Document;

/// Paints documents back-to-front.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    overlay: OverlayStyle,
}

impl Renderer {
    pub fn new(overlay: OverlayStyle) -> Self {
        Self { overlay }
    }

    #[inline]
    pub fn overlay(&self) -> &OverlayStyle {
        &self.overlay
    }

    /// Clears to white and draws every visible object in ascending z.
    pub fn render(&self, surface: &mut Surface, document: &Document) {
        if !surface.matches(document.canvas()) {
            log::warn!(
                "rendering {}x{} document into {}x{} surface",
                document.canvas().width(),
                document.canvas().height(),
                surface.width(),
                surface.height()
            );
        }
        surface.clear(Color::WHITE);
        for object in document.objects() {
            object.draw(surface, &self.overlay);
        }
    }

    /// Renders into a freshly allocated surface sized to the canvas.
    pub fn render_offscreen(&self, document: &Document) -> EditResult<Surface> {
        let mut surface = Surface::new(document.canvas())?;
        self.render(&mut surface, document);
        Ok(surface)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::CanvasSize;
    use crate::scene::{Bitmap, SceneObject, ShapeKind};
    use image::{Rgba, RgbaImage};

    const RED: Color = Color::rgb(255, 0, 0);
    const BLUE: Color = Color::rgb(0, 0, 255);

    fn doc(w: i64, h: i64) -> Document {
        Document::new(CanvasSize::new(w, h).unwrap())
    }

    fn render(doc: &Document) -> Surface {
        Renderer::default().render_offscreen(doc).unwrap()
    }

    // ── background / visibility ───────────────────────────────────────────

    #[test]
    fn empty_document_is_white() {
        let s = render(&doc(20, 10));
        assert_eq!(s.pixel(0, 0), Some(Color::WHITE));
        assert_eq!(s.pixel(19, 9), Some(Color::WHITE));
    }

    #[test]
    fn invisible_objects_are_skipped() {
        let mut d = doc(300, 300);
        let id = d.add(SceneObject::shape(ShapeKind::Rectangle, RED));
        d.toggle_visible(id).unwrap();
        assert_eq!(render(&d).pixel(150, 150), Some(Color::WHITE));
    }

    // ── shapes ────────────────────────────────────────────────────────────

    #[test]
    fn rectangle_fills_its_box() {
        let mut d = doc(300, 300);
        d.add(SceneObject::shape(ShapeKind::Rectangle, RED));
        let s = render(&d);
        assert_eq!(s.pixel(60, 60), Some(RED));
        assert_eq!(s.pixel(240, 240), Some(RED));
        assert_eq!(s.pixel(40, 40), Some(Color::WHITE));
    }

    #[test]
    fn circle_leaves_box_corners_empty() {
        let mut d = doc(300, 300);
        d.add(SceneObject::shape(ShapeKind::Circle, BLUE));
        let s = render(&d);
        assert_eq!(s.pixel(150, 150), Some(BLUE));
        assert_eq!(s.pixel(55, 55), Some(Color::WHITE));
    }

    #[test]
    fn rotation_turns_about_center() {
        let mut d = doc(300, 300);
        let id = d.add(SceneObject::shape(ShapeKind::Rectangle, RED));
        let obj = d.get_mut(id).unwrap();
        obj.geometry.height = 20.0; // 50..250 x 50..70, center (150, 60)
        obj.geometry.rotation_degrees = 450.0; // same as 90
        let s = render(&d);
        // Rotated bar spans x 140..160, y -40..160.
        assert_eq!(s.pixel(150, 140), Some(RED));
        assert_eq!(s.pixel(60, 60), Some(Color::WHITE));
    }

    // ── bitmaps ───────────────────────────────────────────────────────────

    #[test]
    fn bitmap_is_stretched_to_box() {
        let img = RgbaImage::from_pixel(4, 2, Rgba([0, 255, 0, 255]));
        let mut d = doc(300, 300);
        let id = d.add(SceneObject::bitmap(Bitmap::new(img).unwrap()));
        d.get_mut(id).unwrap().set_size(200.0, 0.0, true).unwrap(); // 200x100
        let s = render(&d);
        assert_eq!(s.pixel(150, 100), Some(Color::rgb(0, 255, 0)));
        assert_eq!(s.pixel(150, 160), Some(Color::WHITE));
    }

    // ── ordering / overlay ────────────────────────────────────────────────

    #[test]
    fn higher_z_paints_on_top() {
        let mut d = doc(300, 300);
        let red = d.add(SceneObject::shape(ShapeKind::Rectangle, RED));
        d.add(SceneObject::shape(ShapeKind::Rectangle, BLUE));
        assert_eq!(render(&d).pixel(150, 150), Some(BLUE));

        d.bring_to_front(red).unwrap();
        assert_eq!(render(&d).pixel(150, 150), Some(RED));
    }

    #[test]
    fn selection_overlay_draws_handles() {
        let mut d = doc(300, 300);
        let id = d.add(SceneObject::shape(ShapeKind::Rectangle, RED));
        let before = render(&d);
        d.select(Some(id)).unwrap();
        let after = render(&d);
        // Handle just outside the top-left corner is white fill with accent stroke.
        assert_eq!(before.pixel(47, 47), Some(Color::WHITE));
        assert_ne!(after, before);
        assert_ne!(after.pixel(45, 45), Some(Color::WHITE));
    }

    #[test]
    fn overlay_is_covered_by_higher_objects() {
        let mut d = doc(300, 300);
        let low = d.add(SceneObject::shape(ShapeKind::Rectangle, RED));
        d.add(SceneObject::shape(ShapeKind::Rectangle, BLUE));
        d.select(Some(low)).unwrap();
        let s = render(&d);
        // The outline's inner half sits under the blue box...
        assert_eq!(s.pixel(150, 50), Some(BLUE));
        // ...while handle corners outside the box stay visible.
        assert_ne!(s.pixel(45, 45), Some(Color::WHITE));
    }
}
