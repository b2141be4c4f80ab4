//! Paint model shared between the scene and the renderers.
//!
//! Scope: color representation only. Geometry lives in `coords`, pixel
//! buffers in `scene::Bitmap`.

pub mod color;

pub use color::Color;
