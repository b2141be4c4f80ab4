//! Scene model: objects, their z-order and the document that owns them.
//!
//! Responsibilities:
//! - store renderer-agnostic object state (geometry, style, visibility)
//! - provide deterministic paint order (z-index + stable insertion order)
//! - track the single selection
//!
//! Drawing lives in `render`; this module never touches pixels except to hold
//! decoded bitmap handles.

mod bitmap;
mod document;
mod id;
mod object;
mod z_index;

pub use bitmap::Bitmap;
pub use document::{Document, ObjectSummary};
pub use id::ObjectId;
pub use object::{Geometry, ObjectKind, SceneObject, ShapeKind, DEFAULT_ORIGIN, DEFAULT_SIZE};
pub use z_index::ZIndex;
