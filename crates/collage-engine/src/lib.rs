//! Collage engine crate.
//!
//! Scene engine for a raster/vector composition editor: the object model,
//! CPU renderer, pointer interaction, snapshot undo/redo, pixel filters and
//! export. UI chrome and asset loading stay outside; they hand decoded
//! bitmaps and pointer positions in and take encoded bytes out.
//!
//! [`Editor`] is the entry point; the modules below are usable on their own.

pub mod coords;
pub mod editor;
pub mod error;
pub mod export;
pub mod filter;
pub mod history;
pub mod input;
pub mod interaction;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;

pub use editor::{Editor, EditorConfig};
pub use error::{EditError, EditResult};
pub use export::{Export, ExportFormat};
