//! Per-kind painters.
//!
//! Each painter takes the object's transform (rotation about its center)
//! and draws in untransformed canvas coordinates. Adding a kind means adding
//! a module here and a match arm in `render::object`.

pub(crate) mod bitmap;
pub(crate) mod circle;
pub(crate) mod common;
pub(crate) mod rect;
pub(crate) mod selection;
