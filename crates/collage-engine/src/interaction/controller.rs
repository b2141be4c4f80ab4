use crate::coords::Vec2;
use crate::input::PointerPhase;
use crate::scene::{Document, ObjectId};

/// Controller state.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    /// `offset` is pointer minus object origin at press time.
    Dragging { id: ObjectId, offset: Vec2 },
}

/// What the caller must do after an event was handled.
#[must_use]
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Outcome {
    /// Nothing changed.
    Unchanged,
    /// Document changed; repaint, but do not record history.
    Redraw,
    /// Document changed and the gesture ended; repaint and commit once.
    Commit,
}

/// Idle/Dragging state machine driving select-and-move.
///
/// All positions are canvas pixels; map device coordinates through
/// `input::PointerMapper` first.
#[derive(Debug, Default)]
pub struct InteractionController {
    state: DragState,
}

impl InteractionController {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn state(&self) -> DragState {
        self.state
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Drops any gesture in progress without committing.
    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
    }

    pub fn handle(&mut self, doc: &mut Document, phase: PointerPhase, pos: Vec2) -> Outcome {
        match phase {
            PointerPhase::Pressed => self.pointer_down(doc, pos),
            PointerPhase::Moved => self.pointer_move(doc, pos),
            PointerPhase::Released => self.pointer_up(),
        }
    }

    /// Selects the topmost object under `pos` and starts dragging it, or
    /// clears the selection when nothing is hit.
    ///
    /// A press while already dragging starts over from the new position.
    pub fn pointer_down(&mut self, doc: &mut Document, pos: Vec2) -> Outcome {
        let hit = doc
            .iter_top_down()
            .find(|o| o.contains_point(pos.x, pos.y))
            .map(|o| (o.id(), o.geometry.origin()));

        match hit {
            Some((id, origin)) => {
                if let Err(e) = doc.select(Some(id)) {
                    log::warn!("pointer_down: hit object vanished: {e}");
                    self.state = DragState::Idle;
                    return Outcome::Unchanged;
                }
                self.state = DragState::Dragging { id, offset: pos - origin };
                log::debug!("drag start {id} at ({}, {})", pos.x, pos.y);
            }
            None => {
                // Clearing cannot fail.
                let _ = doc.select(None);
                self.state = DragState::Idle;
            }
        }
        Outcome::Redraw
    }

    /// Moves the dragged object so it keeps its offset to the pointer.
    pub fn pointer_move(&mut self, doc: &mut Document, pos: Vec2) -> Outcome {
        let DragState::Dragging { id, offset } = self.state else {
            return Outcome::Unchanged;
        };
        let Some(obj) = doc.get_mut(id) else {
            self.state = DragState::Idle;
            return Outcome::Unchanged;
        };
        let origin = pos - offset;
        obj.geometry.x = origin.x;
        obj.geometry.y = origin.y;
        Outcome::Redraw
    }

    /// Ends a drag. Exactly one commit per drag, moved or not.
    pub fn pointer_up(&mut self) -> Outcome {
        match std::mem::take(&mut self.state) {
            DragState::Dragging { id, .. } => {
                log::debug!("drag end {id}");
                Outcome::Commit
            }
            DragState::Idle => Outcome::Unchanged,
        }
    }
}
