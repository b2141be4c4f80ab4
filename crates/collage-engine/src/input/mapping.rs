use crate::coords::{CanvasSize, Vec2, Viewport};

/// Maps element-local device coordinates to canvas pixels.
///
/// The canvas element may be shown at any size; each axis is scaled by
/// `canvas / element`. An invalid (zero or non-finite) element size maps
/// one-to-one so a collapsed layout cannot produce NaN positions.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerMapper {
    element: Viewport,
    canvas: CanvasSize,
}

impl PointerMapper {
    #[inline]
    pub fn new(element: Viewport, canvas: CanvasSize) -> Self {
        Self { element, canvas }
    }

    /// Mapper for an element displayed at exactly canvas size.
    #[inline]
    pub fn identity(canvas: CanvasSize) -> Self {
        Self::new(Viewport::new(canvas.width() as f32, canvas.height() as f32), canvas)
    }

    #[inline]
    pub fn element(&self) -> Viewport {
        self.element
    }

    /// Per-axis scale factor from element to canvas space.
    pub fn scale(&self) -> Vec2 {
        if !self.element.is_valid() {
            return Vec2::new(1.0, 1.0);
        }
        Vec2::new(
            self.canvas.width() as f32 / self.element.width,
            self.canvas.height() as f32 / self.element.height,
        )
    }

    #[inline]
    pub fn to_canvas(&self, element_pos: Vec2) -> Vec2 {
        element_pos.scaled_by(self.scale())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas(w: i64, h: i64) -> CanvasSize {
        CanvasSize::new(w, h).unwrap()
    }

    #[test]
    fn half_size_element_doubles_coordinates() {
        let m = PointerMapper::new(Viewport::new(540.0, 540.0), canvas(1080, 1080));
        assert_eq!(m.to_canvas(Vec2::new(100.0, 270.0)), Vec2::new(200.0, 540.0));
    }

    #[test]
    fn axes_scale_independently() {
        let m = PointerMapper::new(Viewport::new(400.0, 100.0), canvas(800, 600));
        assert_eq!(m.to_canvas(Vec2::new(10.0, 10.0)), Vec2::new(20.0, 60.0));
    }

    #[test]
    fn collapsed_element_maps_one_to_one() {
        let m = PointerMapper::new(Viewport::new(0.0, 300.0), canvas(800, 600));
        assert_eq!(m.to_canvas(Vec2::new(7.0, 9.0)), Vec2::new(7.0, 9.0));
    }

    #[test]
    fn identity_is_unscaled() {
        let m = PointerMapper::identity(canvas(640, 480));
        assert_eq!(m.scale(), Vec2::new(1.0, 1.0));
    }
}
