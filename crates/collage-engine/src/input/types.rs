use crate::coords::Vec2;

/// Phase of a pointer (mouse or primary touch) event.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PointerPhase {
    Pressed,
    Moved,
    Released,
}

/// Pointer event in element-local coordinates.
///
/// Coordinates are carried on every phase, including release, so handling
/// never depends on an externally tracked "current position".
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerEvent {
    pub phase: PointerPhase,
    pub x: f32,
    pub y: f32,
}

impl PointerEvent {
    #[inline]
    pub const fn pressed(x: f32, y: f32) -> Self {
        Self { phase: PointerPhase::Pressed, x, y }
    }

    #[inline]
    pub const fn moved(x: f32, y: f32) -> Self {
        Self { phase: PointerPhase::Moved, x, y }
    }

    #[inline]
    pub const fn released(x: f32, y: f32) -> Self {
        Self { phase: PointerPhase::Released, x, y }
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Value submitted from the property panel for the selected object.
///
/// Panels send integers; sizes come as a pair because a bitmap derives its
/// height from the width.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PropertyEdit {
    Size { width: i32, height: i32 },
    Position { x: i32, y: i32 },
    Rotation(i32),
}
