//! Input subsystem.
//!
//! Public API is platform-agnostic. Collaborators normalize mouse and touch
//! into `PointerEvent`s in element-local device pixels; `PointerMapper` turns
//! those into canvas pixels before the interaction controller sees them.

mod mapping;
mod types;

pub use mapping::PointerMapper;
pub use types::{PointerEvent, PointerPhase, PropertyEdit};
