//! Pointer interaction: hit-testing, selection and drag-to-move, plus
//! property-panel edits of the selected object.

mod controller;
mod properties;

pub use controller::{DragState, InteractionController, Outcome};
pub use properties::apply_property_edit;
