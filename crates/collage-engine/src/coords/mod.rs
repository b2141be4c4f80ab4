//! Coordinate and geometry types shared by the scene, renderer and input code.
//!
//! Canonical space is the canvas:
//! - logical canvas pixels (the export resolution)
//! - origin top-left
//! - +X right, +Y down
//!
//! Device pointer positions live in element space and are mapped into canvas
//! space by `input::PointerMapper` before any hit-testing.

mod canvas;
mod rect;
mod vec2;
mod viewport;

pub use canvas::CanvasSize;
pub use rect::Rect;
pub use vec2::Vec2;
pub use viewport::Viewport;
