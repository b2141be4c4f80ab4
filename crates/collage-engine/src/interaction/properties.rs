use crate::error::{EditError, EditResult};
use crate::input::PropertyEdit;
use crate::scene::Document;

/// Applies a property-panel edit to the selected object.
///
/// Sizes go through `SceneObject::set_size`, keeping a bitmap's aspect ratio
/// (the submitted height is ignored for bitmaps). Positions are not clamped
/// to the canvas. Callers repaint afterwards; edits are not history commits.
pub fn apply_property_edit(doc: &mut Document, edit: PropertyEdit) -> EditResult<()> {
    let obj = doc.selected_mut().ok_or(EditError::NoSelection)?;
    match edit {
        PropertyEdit::Size { width, height } => {
            let keep_aspect = obj.is_bitmap();
            obj.set_size(width as f32, height as f32, keep_aspect)?;
        }
        PropertyEdit::Position { x, y } => {
            obj.geometry.x = x as f32;
            obj.geometry.y = y as f32;
        }
        PropertyEdit::Rotation(degrees) => {
            obj.geometry.rotation_degrees = degrees as f32;
        }
    }
    log::debug!("{} edited: {edit:?}", obj.id());
    Ok(())
}
