use crate::error::{EditError, EditResult};

/// Logical canvas dimensions in pixels. Both sides are always positive.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct CanvasSize {
    width: u32,
    height: u32,
}

impl CanvasSize {
    /// Validates and builds a canvas size.
    ///
    /// Accepts signed input because resize dialogs hand over whatever the user
    /// typed; anything non-positive is rejected.
    pub fn new(width: i64, height: i64) -> EditResult<Self> {
        if width <= 0 || height <= 0 || width > u32::MAX as i64 || height > u32::MAX as i64 {
            return Err(EditError::invalid_dimension(width, height));
        }
        Ok(Self { width: width as u32, height: height as u32 })
    }

    #[inline]
    pub const fn width(self) -> u32 {
        self.width
    }

    #[inline]
    pub const fn height(self) -> u32 {
        self.height
    }
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self { width: 1080, height: 1080 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_sides() {
        assert_eq!(
            CanvasSize::new(0, 10),
            Err(EditError::InvalidDimension { width: 0, height: 10 })
        );
        assert!(CanvasSize::new(10, -3).is_err());
    }

    #[test]
    fn accepts_positive_sides() {
        let c = CanvasSize::new(1920, 1080).unwrap();
        assert_eq!((c.width(), c.height()), (1920, 1080));
    }
}
