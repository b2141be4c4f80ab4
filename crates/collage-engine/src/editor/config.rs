use crate::coords::CanvasSize;
use crate::export::DEFAULT_JPEG_QUALITY;
use crate::history::DEFAULT_CAPACITY;
use crate::paint::Color;
use crate::render::OverlayStyle;

/// Fraction of the canvas an imported bitmap may cover on either axis.
pub const DEFAULT_IMPORT_FIT: f32 = 0.6;

/// Editor-wide settings.
///
/// ```
/// use collage_engine::editor::EditorConfig;
/// use collage_engine::coords::CanvasSize;
///
/// let config = EditorConfig::default()
///     .canvas(CanvasSize::new(1920, 1080).unwrap())
///     .history_capacity(50);
/// assert_eq!(config.history_capacity, 50);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct EditorConfig {
    /// Canvas size of a fresh editor.
    pub canvas: CanvasSize,
    pub history_capacity: usize,
    pub jpeg_quality: u8,
    /// Initial fill for new shapes.
    pub fill: Color,
    /// Imported bitmaps larger than this fraction of the canvas are scaled down.
    pub import_fit: f32,
    pub overlay: OverlayStyle,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            canvas: CanvasSize::default(),
            history_capacity: DEFAULT_CAPACITY,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            fill: Color::default(),
            import_fit: DEFAULT_IMPORT_FIT,
            overlay: OverlayStyle::default(),
        }
    }
}

impl EditorConfig {
    pub fn canvas(mut self, canvas: CanvasSize) -> Self {
        self.canvas = canvas;
        self
    }

    pub fn history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }

    pub fn jpeg_quality(mut self, quality: u8) -> Self {
        self.jpeg_quality = quality.min(100);
        self
    }

    pub fn fill(mut self, fill: Color) -> Self {
        self.fill = fill;
        self
    }

    /// Clamped to `(0, 1]`; anything else falls back to the default.
    pub fn import_fit(mut self, fraction: f32) -> Self {
        self.import_fit = if fraction > 0.0 && fraction <= 1.0 { fraction } else { DEFAULT_IMPORT_FIT };
        self
    }

    pub fn overlay(mut self, overlay: OverlayStyle) -> Self {
        self.overlay = overlay;
        self
    }
}
