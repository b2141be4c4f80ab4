//! Undo/redo history.
//!
//! `History<T>` is the bounded ring with a cursor; `Snapshot` is what the
//! editor stores in it: the rendered pixels together with the document state
//! that produced them, so stepping through history restores both.

mod ring;
mod snapshot;

pub use ring::{History, DEFAULT_CAPACITY};
pub use snapshot::Snapshot;
