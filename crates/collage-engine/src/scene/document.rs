use crate::coords::CanvasSize;
use crate::error::{EditError, EditResult};

use super::{ObjectId, SceneObject, ZIndex};

/// Row of an object-list panel.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectSummary {
    pub id: ObjectId,
    pub name: &'static str,
    pub z: ZIndex,
    pub width: i64,
    pub height: i64,
    pub visible: bool,
    pub selected: bool,
}

/// Ordered scene objects plus canvas size and selection.
///
/// Ordering rules:
/// 1) `z`: ascending (back-to-front)
/// 2) previous relative order for equal `z` (every re-sort is stable)
///
/// At most one object is selected; the `selected` flag on objects and the
/// `selection` field are kept in sync by every method here.
#[derive(Debug, Clone)]
pub struct Document {
    canvas: CanvasSize,
    objects: Vec<SceneObject>,
    selection: Option<ObjectId>,
}

impl Document {
    pub fn new(canvas: CanvasSize) -> Self {
        Self { canvas, objects: Vec::new(), selection: None }
    }

    #[inline]
    pub fn canvas(&self) -> CanvasSize {
        self.canvas
    }

    pub fn set_canvas_size(&mut self, width: i64, height: i64) -> EditResult<()> {
        self.canvas = CanvasSize::new(width, height)?;
        log::debug!("canvas resized to {}x{}", self.canvas.width(), self.canvas.height());
        Ok(())
    }

    /// Drops every object and the selection; keeps nothing from before.
    pub fn reset(&mut self, canvas: CanvasSize) {
        self.canvas = canvas;
        self.objects.clear();
        self.selection = None;
    }

    /// Objects in paint order (back-to-front).
    #[inline]
    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    /// Objects front-to-back, the order hit-testing walks.
    pub fn iter_top_down(&self) -> impl Iterator<Item = &SceneObject> {
        self.objects.iter().rev()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn get(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.iter().find(|o| o.id() == id)
    }

    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut SceneObject> {
        self.objects.iter_mut().find(|o| o.id() == id)
    }

    // ── membership ────────────────────────────────────────────────────────

    /// Appends `object` with `z` equal to the object count before insertion.
    pub fn add(&mut self, mut object: SceneObject) -> ObjectId {
        object.z = ZIndex::new(self.objects.len() as i32);
        object.selected = false;
        let id = object.id();
        log::debug!("add {} {id} at z={}", object.display_name(), object.z.0);
        self.objects.push(object);
        // A count-based z can tie with or undercut a raised object.
        self.sort_by_z();
        id
    }

    /// Removes the object; clears the selection if it pointed at it.
    pub fn remove(&mut self, id: ObjectId) -> EditResult<SceneObject> {
        let index = self
            .objects
            .iter()
            .position(|o| o.id() == id)
            .ok_or(EditError::UnknownObject(id))?;
        if self.selection == Some(id) {
            self.selection = None;
        }
        let mut removed = self.objects.remove(index);
        removed.selected = false;
        log::debug!("removed {id}");
        Ok(removed)
    }

    // ── selection ─────────────────────────────────────────────────────────

    /// Selects `id`, or clears the selection with `None`.
    pub fn select(&mut self, id: Option<ObjectId>) -> EditResult<()> {
        if let Some(id) = id {
            if self.get(id).is_none() {
                return Err(EditError::UnknownObject(id));
            }
        }
        for obj in &mut self.objects {
            obj.selected = Some(obj.id()) == id;
        }
        self.selection = id;
        Ok(())
    }

    #[inline]
    pub fn selection(&self) -> Option<ObjectId> {
        self.selection
    }

    pub fn selected(&self) -> Option<&SceneObject> {
        self.selection.and_then(|id| self.get(id))
    }

    pub fn selected_mut(&mut self) -> Option<&mut SceneObject> {
        let id = self.selection?;
        self.get_mut(id)
    }

    // ── z-order ───────────────────────────────────────────────────────────

    /// `z := max(all z, 0) + 1`.
    pub fn bring_to_front(&mut self, id: ObjectId) -> EditResult<()> {
        let max = self.objects.iter().map(|o| o.z).max().unwrap_or_default();
        self.set_z(id, max.max(ZIndex::new(0)).raised())
    }

    /// `z := min(all z, 0) - 1`.
    pub fn send_to_back(&mut self, id: ObjectId) -> EditResult<()> {
        let min = self.objects.iter().map(|o| o.z).min().unwrap_or_default();
        self.set_z(id, min.min(ZIndex::new(0)).lowered())
    }

    pub fn move_up(&mut self, id: ObjectId) -> EditResult<()> {
        let z = self.get(id).ok_or(EditError::UnknownObject(id))?.z;
        self.set_z(id, z.raised())
    }

    pub fn move_down(&mut self, id: ObjectId) -> EditResult<()> {
        let z = self.get(id).ok_or(EditError::UnknownObject(id))?.z;
        self.set_z(id, z.lowered())
    }

    fn set_z(&mut self, id: ObjectId, z: ZIndex) -> EditResult<()> {
        let obj = self.get_mut(id).ok_or(EditError::UnknownObject(id))?;
        obj.z = z;
        log::debug!("{id} moved to z={}", z.0);
        self.sort_by_z();
        Ok(())
    }

    fn sort_by_z(&mut self) {
        // `sort_by_key` is stable: equal z keep their previous relative order.
        self.objects.sort_by_key(|o| o.z);
    }

    // ── visibility ────────────────────────────────────────────────────────

    /// Flips visibility and returns the new state.
    pub fn toggle_visible(&mut self, id: ObjectId) -> EditResult<bool> {
        let obj = self.get_mut(id).ok_or(EditError::UnknownObject(id))?;
        obj.visible = !obj.visible;
        Ok(obj.visible)
    }

    /// Rows for an object-list panel, topmost object first.
    pub fn object_summaries(&self) -> Vec<ObjectSummary> {
        self.iter_top_down()
            .map(|o| ObjectSummary {
                id: o.id(),
                name: o.display_name(),
                z: o.z,
                width: o.geometry.width.round() as i64,
                height: o.geometry.height.round() as i64,
                visible: o.visible,
                selected: o.is_selected(),
            })
            .collect()
    }

    /// Replaces objects, canvas and selection with `state`'s.
    pub(crate) fn restore_from(&mut self, state: &Document) {
        self.canvas = state.canvas;
        self.objects.clone_from(&state.objects);
        self.selection = state.selection;
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new(CanvasSize::default())
    }
}
