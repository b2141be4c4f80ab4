use crate::coords::{Rect, Vec2};
use crate::error::{EditError, EditResult};
use crate::paint::Color;

use super::{Bitmap, ObjectId, ZIndex};

/// Geometry every new object starts with.
pub const DEFAULT_ORIGIN: Vec2 = Vec2::new(50.0, 50.0);
pub const DEFAULT_SIZE: Vec2 = Vec2::new(200.0, 200.0);

/// Vector primitive drawn by a shape object.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShapeKind {
    Rectangle,
    /// Circle of radius `min(w, h) / 2`, centered in the object's box.
    Circle,
}

impl ShapeKind {
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Circle => "circle",
        }
    }
}

/// What an object draws, with exactly the data that kind needs.
#[derive(Debug, Clone)]
pub enum ObjectKind {
    Bitmap(Bitmap),
    Shape { shape: ShapeKind, fill: Color },
}

/// Position, size and rotation in canvas pixels.
///
/// `x`/`y` are the top-left of the untransformed box. Rotation is in degrees
/// about the box center and is unrestricted; renderers reduce it mod 360.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Geometry {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub rotation_degrees: f32,
}

impl Geometry {
    #[inline]
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Rotation folded into `[0, 360)`.
    #[inline]
    pub fn normalized_rotation(&self) -> f32 {
        self.rotation_degrees.rem_euclid(360.0)
    }
}

impl Default for Geometry {
    fn default() -> Self {
        Self {
            x: DEFAULT_ORIGIN.x,
            y: DEFAULT_ORIGIN.y,
            width: DEFAULT_SIZE.x,
            height: DEFAULT_SIZE.y,
            rotation_degrees: 0.0,
        }
    }
}

/// A drawable entity on the canvas.
#[derive(Debug, Clone)]
pub struct SceneObject {
    id: ObjectId,
    pub kind: ObjectKind,
    pub geometry: Geometry,
    pub visible: bool,
    pub z: ZIndex,
    pub(crate) selected: bool,
    /// Natural width / height, fixed at creation. Only bitmaps carry one.
    aspect_ratio: Option<f32>,
}

impl SceneObject {
    /// Creates an object with default geometry.
    ///
    /// Bitmaps keep the default width and derive their height from the natural
    /// aspect ratio, which is recorded for later constrained resizes.
    pub fn new(kind: ObjectKind) -> Self {
        let mut geometry = Geometry::default();
        let aspect_ratio = match &kind {
            ObjectKind::Bitmap(bitmap) => {
                let ratio = bitmap.aspect_ratio();
                geometry.height = geometry.width / ratio;
                Some(ratio)
            }
            ObjectKind::Shape { .. } => None,
        };

        Self {
            id: ObjectId::next(),
            kind,
            geometry,
            visible: true,
            z: ZIndex::default(),
            selected: false,
            aspect_ratio,
        }
    }

    #[inline]
    pub fn bitmap(bitmap: Bitmap) -> Self {
        Self::new(ObjectKind::Bitmap(bitmap))
    }

    #[inline]
    pub fn shape(shape: ShapeKind, fill: Color) -> Self {
        Self::new(ObjectKind::Shape { shape, fill })
    }

    #[inline]
    pub fn id(&self) -> ObjectId {
        self.id
    }

    #[inline]
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    #[inline]
    pub fn aspect_ratio(&self) -> Option<f32> {
        self.aspect_ratio
    }

    #[inline]
    pub fn is_bitmap(&self) -> bool {
        matches!(self.kind, ObjectKind::Bitmap(_))
    }

    /// Label shown in object lists.
    pub fn display_name(&self) -> &'static str {
        match &self.kind {
            ObjectKind::Bitmap(_) => "Image",
            ObjectKind::Shape { shape, .. } => shape.name(),
        }
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        self.geometry.bounds()
    }

    /// Resizes the object.
    ///
    /// With `maintain_aspect` and a recorded aspect ratio, `height` is ignored
    /// and derived as `width / aspect`. Otherwise both sides are taken as given.
    /// Non-positive results are rejected without touching the geometry.
    pub fn set_size(&mut self, width: f32, height: f32, maintain_aspect: bool) -> EditResult<()> {
        let height = match self.aspect_ratio {
            Some(ratio) if maintain_aspect => width / ratio,
            _ => height,
        };
        if !(width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite()) {
            return Err(EditError::invalid_dimension(width as i64, height as i64));
        }
        self.geometry.width = width;
        self.geometry.height = height;
        Ok(())
    }

    /// Axis-aligned hit test against the untransformed box.
    ///
    /// Rotation is ignored, so the corners of a rotated object's visible shape
    /// can miss and empty corners of its box can hit.
    #[inline]
    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        self.bounds().contains(Vec2::new(x, y))
    }

    /// Swaps in new bitmap content. Shapes are left untouched and report
    /// `NotABitmap`.
    pub(crate) fn replace_bitmap(&mut self, bitmap: Bitmap) -> EditResult<()> {
        match &mut self.kind {
            ObjectKind::Bitmap(current) => {
                *current = bitmap;
                Ok(())
            }
            ObjectKind::Shape { .. } => Err(EditError::NotABitmap(self.id)),
        }
    }
}
