//! Editor facade.
//!
//! `Editor` owns the document, the pointer state machine, the history ring
//! and the visible surface, and is the only entry point collaborators need.
//! Every mutating operation repaints; the ones that end a user action also
//! commit a snapshot.

mod config;

pub use config::{EditorConfig, DEFAULT_IMPORT_FIT};

use crate::coords::{CanvasSize, Vec2};
use crate::error::{EditError, EditResult};
use crate::export::{export_document, Export, ExportFormat};
use crate::filter::{self, Effect, Tonal};
use crate::history::{History, Snapshot};
use crate::input::{PointerEvent, PointerMapper, PropertyEdit};
use crate::interaction::{apply_property_edit, DragState, InteractionController, Outcome};
use crate::paint::Color;
use crate::render::{Renderer, Surface};
use crate::scene::{Bitmap, Document, ObjectId, ObjectKind, SceneObject, ShapeKind};

pub struct Editor {
    config: EditorConfig,
    document: Document,
    controller: InteractionController,
    history: History<Snapshot>,
    renderer: Renderer,
    surface: Surface,
    fill: Color,
}

impl Editor {
    /// Blank editor at the configured canvas size, with the empty state
    /// committed as the first history entry.
    pub fn new(config: EditorConfig) -> EditResult<Self> {
        let surface = Surface::new(config.canvas)?;
        let mut editor = Self {
            document: Document::new(config.canvas),
            controller: InteractionController::new(),
            history: History::new(config.history_capacity),
            renderer: Renderer::new(config.overlay.clone()),
            fill: config.fill,
            surface,
            config,
        };
        editor.repaint();
        editor.commit();
        log::info!(
            "editor ready: {}x{} canvas, {} history entries",
            editor.document.canvas().width(),
            editor.document.canvas().height(),
            editor.history.capacity()
        );
        Ok(editor)
    }

    // ── accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn document(&self) -> &Document {
        &self.document
    }

    #[inline]
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    #[inline]
    pub fn history(&self) -> &History<Snapshot> {
        &self.history
    }

    #[inline]
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    #[inline]
    pub fn drag_state(&self) -> DragState {
        self.controller.state()
    }

    #[inline]
    pub fn fill_color(&self) -> Color {
        self.fill
    }

    /// Fill used by shapes added from now on. Existing shapes keep theirs.
    pub fn set_fill_color(&mut self, fill: Color) {
        self.fill = fill;
    }

    // ── project / canvas ──────────────────────────────────────────────────

    /// Drops every object and all history, keeping the canvas size.
    pub fn new_project(&mut self) {
        self.controller.cancel();
        self.document.reset(self.document.canvas());
        self.history.clear();
        self.repaint();
        self.commit();
        log::info!("new project");
    }

    /// Resizes the canvas and reallocates the surface. Objects keep their
    /// positions. Not a history entry.
    pub fn resize_canvas(&mut self, width: i64, height: i64) -> EditResult<()> {
        let canvas = CanvasSize::new(width, height).inspect_err(|e| log::debug!("resize rejected: {e}"))?;
        let surface = Surface::new(canvas)?;
        self.document.set_canvas_size(width, height)?;
        self.surface = surface;
        self.repaint();
        Ok(())
    }

    // ── objects ───────────────────────────────────────────────────────────

    /// Adds a shape in the current fill color and selects it.
    pub fn add_shape(&mut self, shape: ShapeKind) -> EditResult<ObjectId> {
        self.insert(SceneObject::shape(shape, self.fill))
    }

    /// Adds a bitmap at its natural size and selects it.
    ///
    /// Bitmaps wider or taller than the configured fraction of the canvas are
    /// scaled down uniformly to fit.
    pub fn add_bitmap(&mut self, bitmap: Bitmap) -> EditResult<ObjectId> {
        let (width, height) = (bitmap.width() as f32, bitmap.height() as f32);
        let mut object = SceneObject::bitmap(bitmap);
        object.set_size(width, height, false)?;

        let canvas = self.document.canvas();
        let max_width = canvas.width() as f32 * self.config.import_fit;
        let max_height = canvas.height() as f32 * self.config.import_fit;
        if width > max_width || height > max_height {
            let scale = (max_width / width).min(max_height / height);
            object.set_size(width * scale, height * scale, true)?;
            log::debug!("imported bitmap scaled by {scale:.3}");
        }

        self.insert(object)
    }

    /// Decodes encoded image bytes and adds the result.
    pub fn add_encoded_bitmap(&mut self, bytes: &[u8]) -> EditResult<ObjectId> {
        let bitmap = Bitmap::decode(bytes)?;
        self.add_bitmap(bitmap)
    }

    fn insert(&mut self, object: SceneObject) -> EditResult<ObjectId> {
        let id = self.document.add(object);
        self.document.select(Some(id))?;
        self.repaint();
        self.commit();
        Ok(id)
    }

    pub fn delete_selected(&mut self) -> EditResult<ObjectId> {
        let id = self.selected_id()?;
        self.delete_object(id)?;
        Ok(id)
    }

    pub fn delete_object(&mut self, id: ObjectId) -> EditResult<()> {
        self.document.remove(id)?;
        if matches!(self.controller.state(), DragState::Dragging { id: dragged, .. } if dragged == id) {
            self.controller.cancel();
        }
        self.repaint();
        self.commit();
        Ok(())
    }

    /// Flips visibility and returns the new state. Not a history entry.
    pub fn toggle_visibility(&mut self, id: ObjectId) -> EditResult<bool> {
        let visible = self.document.toggle_visible(id)?;
        self.repaint();
        Ok(visible)
    }

    /// Selects `id`, or clears the selection. Not a history entry.
    pub fn select(&mut self, id: Option<ObjectId>) -> EditResult<()> {
        self.document.select(id)?;
        self.repaint();
        Ok(())
    }

    // ── z-order ───────────────────────────────────────────────────────────

    pub fn bring_to_front(&mut self) -> EditResult<()> {
        self.reorder_selected(Document::bring_to_front)
    }

    pub fn send_to_back(&mut self) -> EditResult<()> {
        self.reorder_selected(Document::send_to_back)
    }

    pub fn move_up(&mut self) -> EditResult<()> {
        self.reorder_selected(Document::move_up)
    }

    pub fn move_down(&mut self) -> EditResult<()> {
        self.reorder_selected(Document::move_down)
    }

    fn reorder_selected(&mut self, op: fn(&mut Document, ObjectId) -> EditResult<()>) -> EditResult<()> {
        let id = self.selected_id()?;
        op(&mut self.document, id)?;
        self.repaint();
        self.commit();
        Ok(())
    }

    // ── pointer ───────────────────────────────────────────────────────────

    /// Feeds an element-local pointer event through `mapper`.
    pub fn pointer(&mut self, event: PointerEvent, mapper: &PointerMapper) -> Outcome {
        let pos = mapper.to_canvas(event.position());
        let outcome = self.controller.handle(&mut self.document, event.phase, pos);
        self.settle(outcome)
    }

    /// Press at a canvas-space position.
    pub fn pointer_down(&mut self, pos: Vec2) -> Outcome {
        let outcome = self.controller.pointer_down(&mut self.document, pos);
        self.settle(outcome)
    }

    pub fn pointer_move(&mut self, pos: Vec2) -> Outcome {
        let outcome = self.controller.pointer_move(&mut self.document, pos);
        self.settle(outcome)
    }

    pub fn pointer_up(&mut self) -> Outcome {
        let outcome = self.controller.pointer_up();
        self.settle(outcome)
    }

    fn settle(&mut self, outcome: Outcome) -> Outcome {
        match outcome {
            Outcome::Unchanged => {}
            Outcome::Redraw => self.repaint(),
            Outcome::Commit => {
                self.repaint();
                self.commit();
            }
        }
        outcome
    }

    // ── properties / filters ──────────────────────────────────────────────

    /// Applies a property-panel value to the selected object. Not a history
    /// entry.
    pub fn edit_property(&mut self, edit: PropertyEdit) -> EditResult<()> {
        apply_property_edit(&mut self.document, edit)?;
        self.repaint();
        Ok(())
    }

    /// Brightness/contrast on the selected bitmap; inputs are clamped to
    /// `[-100, 100]`.
    pub fn apply_tonal(&mut self, brightness: i32, contrast: i32) -> EditResult<()> {
        let (id, bitmap) = self.selected_bitmap()?;
        let filtered = filter::apply_tonal(&bitmap, Tonal::new(brightness, contrast))?;
        self.replace_bitmap(id, filtered)
    }

    pub fn apply_effect(&mut self, effect: Effect) -> EditResult<()> {
        let (id, bitmap) = self.selected_bitmap()?;
        let filtered = filter::apply_effect(&bitmap, effect)?;
        self.replace_bitmap(id, filtered)
    }

    fn selected_bitmap(&self) -> EditResult<(ObjectId, Bitmap)> {
        let object = self.document.selected().ok_or(EditError::NoSelection)?;
        match &object.kind {
            ObjectKind::Bitmap(bitmap) => Ok((object.id(), bitmap.clone())),
            ObjectKind::Shape { .. } => {
                log::debug!("filter skipped: {} is a {}", object.id(), object.display_name());
                Err(EditError::NotABitmap(object.id()))
            }
        }
    }

    fn replace_bitmap(&mut self, id: ObjectId, bitmap: Bitmap) -> EditResult<()> {
        self.document
            .get_mut(id)
            .ok_or(EditError::UnknownObject(id))?
            .replace_bitmap(bitmap)?;
        self.repaint();
        self.commit();
        Ok(())
    }

    // ── history ───────────────────────────────────────────────────────────

    /// Restores the previous snapshot (pixels and document).
    pub fn undo(&mut self) -> EditResult<()> {
        self.controller.cancel();
        let snapshot = self.history.undo().ok_or(EditError::HistoryExhausted)?;
        snapshot.restore_into(&mut self.document, &mut self.surface);
        log::debug!("undo -> {:?}", self.history.cursor());
        Ok(())
    }

    pub fn redo(&mut self) -> EditResult<()> {
        self.controller.cancel();
        let snapshot = self.history.redo().ok_or(EditError::HistoryExhausted)?;
        snapshot.restore_into(&mut self.document, &mut self.surface);
        log::debug!("redo -> {:?}", self.history.cursor());
        Ok(())
    }

    // ── export ────────────────────────────────────────────────────────────

    pub fn export(&mut self, format: ExportFormat) -> EditResult<Export> {
        export_document(&mut self.document, &self.renderer, format, self.config.jpeg_quality)
    }

    // ── internals ─────────────────────────────────────────────────────────

    fn selected_id(&self) -> EditResult<ObjectId> {
        self.document.selection().ok_or(EditError::NoSelection)
    }

    fn repaint(&mut self) {
        self.renderer.render(&mut self.surface, &self.document);
    }

    fn commit(&mut self) {
        self.history.commit(Snapshot::capture(&self.document, &self.surface));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Viewport;
    use crate::scene::ZIndex;
    use image::{Rgba, RgbaImage};

    fn editor() -> Editor {
        Editor::new(EditorConfig::default()).unwrap()
    }

    fn small_editor() -> Editor {
        Editor::new(EditorConfig::default().canvas(CanvasSize::new(300, 300).unwrap())).unwrap()
    }

    fn bitmap(w: u32, h: u32) -> Bitmap {
        Bitmap::new(RgbaImage::from_fn(w, h, |x, y| Rgba([(x % 256) as u8, (y % 256) as u8, 90, 255]))).unwrap()
    }

    fn size_of(ed: &Editor, id: ObjectId) -> (f32, f32) {
        let g = ed.document().get(id).unwrap().geometry;
        (g.width, g.height)
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn starts_with_one_blank_entry() {
        let ed = small_editor();
        assert_eq!(ed.history().len(), 1);
        assert_eq!(ed.history().cursor(), Some(0));
        assert_eq!(ed.surface().pixel(0, 0), Some(Color::WHITE));
        assert!(ed.document().is_empty());
    }

    #[test]
    fn new_project_clears_objects_and_history() {
        let mut ed = small_editor();
        ed.add_shape(ShapeKind::Rectangle).unwrap();
        ed.add_shape(ShapeKind::Circle).unwrap();
        ed.new_project();
        assert!(ed.document().is_empty());
        assert_eq!(ed.history().len(), 1);
        assert_eq!(ed.undo(), Err(EditError::HistoryExhausted));
    }

    #[test]
    fn resize_rejects_non_positive_without_mutation() {
        let mut ed = small_editor();
        assert_eq!(
            ed.resize_canvas(0, 500),
            Err(EditError::InvalidDimension { width: 0, height: 500 })
        );
        assert_eq!(ed.document().canvas(), CanvasSize::new(300, 300).unwrap());
        assert_eq!((ed.surface().width(), ed.surface().height()), (300, 300));

        ed.resize_canvas(640, 480).unwrap();
        assert_eq!((ed.surface().width(), ed.surface().height()), (640, 480));
        assert_eq!(ed.history().len(), 1);
    }

    // ── adding ────────────────────────────────────────────────────────────

    #[test]
    fn add_shape_selects_and_commits() {
        let mut ed = small_editor();
        ed.set_fill_color(Color::rgb(255, 0, 0));
        let id = ed.add_shape(ShapeKind::Rectangle).unwrap();
        assert_eq!(ed.document().selection(), Some(id));
        assert_eq!(ed.history().len(), 2);
        assert_eq!(ed.surface().pixel(150, 150), Some(Color::rgb(255, 0, 0)));
    }

    #[test]
    fn bitmap_within_fit_keeps_natural_size() {
        let mut ed = editor();
        let id = ed.add_bitmap(bitmap(400, 300)).unwrap();
        assert_eq!(size_of(&ed, id), (400.0, 300.0));
    }

    #[test]
    fn oversized_bitmap_is_scaled_to_fit() {
        let mut ed = editor();
        let id = ed.add_bitmap(bitmap(2000, 1000)).unwrap();
        let (w, h) = size_of(&ed, id);
        assert!((w - 648.0).abs() < 1e-3);
        assert!((h - 324.0).abs() < 1e-3);
    }

    #[test]
    fn undecodable_bytes_leave_document_alone() {
        let mut ed = small_editor();
        assert!(matches!(ed.add_encoded_bitmap(b"nope"), Err(EditError::DecodeFailed(_))));
        assert!(ed.document().is_empty());
        assert_eq!(ed.history().len(), 1);
    }

    // ── deletion / visibility ─────────────────────────────────────────────

    #[test]
    fn delete_selected_requires_selection() {
        let mut ed = small_editor();
        assert_eq!(ed.delete_selected(), Err(EditError::NoSelection));
        let id = ed.add_shape(ShapeKind::Circle).unwrap();
        assert_eq!(ed.delete_selected(), Ok(id));
        assert!(ed.document().is_empty());
        assert_eq!(ed.history().len(), 3);
    }

    #[test]
    fn toggle_visibility_repaints_without_commit() {
        let mut ed = small_editor();
        ed.set_fill_color(Color::rgb(0, 0, 255));
        let id = ed.add_shape(ShapeKind::Rectangle).unwrap();
        ed.select(None).unwrap();
        assert_eq!(ed.toggle_visibility(id), Ok(false));
        assert_eq!(ed.surface().pixel(150, 150), Some(Color::WHITE));
        assert_eq!(ed.history().len(), 2);
    }

    // ── z-order ───────────────────────────────────────────────────────────

    #[test]
    fn z_order_ops_need_selection() {
        let mut ed = small_editor();
        assert_eq!(ed.bring_to_front(), Err(EditError::NoSelection));
        assert_eq!(ed.move_down(), Err(EditError::NoSelection));
    }

    #[test]
    fn added_rect_over_existing_gets_z_one_and_front_keeps_it_on_top() {
        let mut ed = small_editor();
        let first = ed.add_shape(ShapeKind::Circle).unwrap();
        let rect = ed.add_shape(ShapeKind::Rectangle).unwrap();
        assert_eq!(ed.document().get(first).unwrap().z, ZIndex::new(0));
        assert_eq!(ed.document().get(rect).unwrap().z, ZIndex::new(1));

        ed.bring_to_front().unwrap();
        let top = ed.document().objects().last().unwrap().id();
        assert_eq!(top, rect);
        assert_eq!(ed.history().len(), 4);
    }

    #[test]
    fn send_to_back_reorders_paint() {
        let mut ed = small_editor();
        ed.set_fill_color(Color::rgb(255, 0, 0));
        ed.add_shape(ShapeKind::Rectangle).unwrap();
        ed.set_fill_color(Color::rgb(0, 0, 255));
        ed.add_shape(ShapeKind::Rectangle).unwrap();
        ed.select(None).unwrap();
        assert_eq!(ed.surface().pixel(150, 150), Some(Color::rgb(0, 0, 255)));

        let _ = ed.pointer_down(Vec2::new(150.0, 150.0));
        let _ = ed.pointer_up();
        ed.send_to_back().unwrap();
        ed.select(None).unwrap();
        assert_eq!(ed.surface().pixel(150, 150), Some(Color::rgb(255, 0, 0)));
    }

    // ── pointer ───────────────────────────────────────────────────────────

    #[test]
    fn drag_commits_once_and_undo_restores_position() {
        let mut ed = small_editor();
        let id = ed.add_shape(ShapeKind::Rectangle).unwrap();
        let before = ed.history().len();

        assert_eq!(ed.pointer_down(Vec2::new(60.0, 60.0)), Outcome::Redraw);
        assert_eq!(ed.pointer_move(Vec2::new(80.0, 90.0)), Outcome::Redraw);
        assert_eq!(ed.pointer_move(Vec2::new(100.0, 100.0)), Outcome::Redraw);
        assert_eq!(ed.pointer_up(), Outcome::Commit);
        assert_eq!(ed.history().len(), before + 1);
        assert_eq!(ed.document().get(id).unwrap().geometry.origin(), Vec2::new(90.0, 90.0));

        ed.undo().unwrap();
        assert_eq!(ed.document().get(id).unwrap().geometry.origin(), Vec2::new(50.0, 50.0));
        ed.redo().unwrap();
        assert_eq!(ed.document().get(id).unwrap().geometry.origin(), Vec2::new(90.0, 90.0));
    }

    #[test]
    fn mapped_pointer_events_scale_to_canvas() {
        let mut ed = editor();
        let id = ed.add_shape(ShapeKind::Rectangle).unwrap();
        let mapper = PointerMapper::new(Viewport::new(540.0, 540.0), ed.document().canvas());

        // (30, 30) on a half-size element is (60, 60) on the canvas.
        let _ = ed.pointer(PointerEvent::pressed(30.0, 30.0), &mapper);
        let _ = ed.pointer(PointerEvent::moved(40.0, 40.0), &mapper);
        assert_eq!(ed.pointer(PointerEvent::released(40.0, 40.0), &mapper), Outcome::Commit);
        assert_eq!(ed.document().get(id).unwrap().geometry.origin(), Vec2::new(70.0, 70.0));
    }

    #[test]
    fn press_on_empty_space_clears_selection_without_commit() {
        let mut ed = small_editor();
        ed.add_shape(ShapeKind::Rectangle).unwrap();
        let len = ed.history().len();
        let _ = ed.pointer_down(Vec2::new(290.0, 290.0));
        assert_eq!(ed.document().selection(), None);
        assert_eq!(ed.pointer_up(), Outcome::Unchanged);
        assert_eq!(ed.history().len(), len);
    }

    // ── properties / filters ──────────────────────────────────────────────

    #[test]
    fn property_edits_do_not_commit() {
        let mut ed = small_editor();
        ed.add_shape(ShapeKind::Rectangle).unwrap();
        let len = ed.history().len();
        ed.edit_property(PropertyEdit::Position { x: -20, y: 400 }).unwrap();
        ed.edit_property(PropertyEdit::Rotation(45)).unwrap();
        assert_eq!(ed.history().len(), len);
        let g = ed.document().selected().unwrap().geometry;
        assert_eq!((g.x, g.y, g.rotation_degrees), (-20.0, 400.0, 45.0));
        assert!(matches!(
            ed.edit_property(PropertyEdit::Size { width: 0, height: 10 }),
            Err(EditError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn filters_reject_shapes_and_empty_selection() {
        let mut ed = small_editor();
        assert_eq!(ed.apply_effect(Effect::Invert), Err(EditError::NoSelection));
        let id = ed.add_shape(ShapeKind::Circle).unwrap();
        assert_eq!(ed.apply_tonal(10, 10), Err(EditError::NotABitmap(id)));
        assert_eq!(ed.history().len(), 2);
    }

    #[test]
    fn filter_replaces_pixels_and_commits() {
        let mut ed = small_editor();
        let id = ed.add_bitmap(bitmap(8, 8)).unwrap();
        let original = ed.document().get(id).unwrap().kind.clone();
        let len = ed.history().len();

        ed.apply_effect(Effect::Invert).unwrap();
        assert_eq!(ed.history().len(), len + 1);
        let ObjectKind::Bitmap(inverted) = &ed.document().get(id).unwrap().kind else {
            panic!("not a bitmap");
        };
        assert_eq!(inverted.image().get_pixel(3, 5).0, [252, 250, 165, 255]);

        ed.undo().unwrap();
        let (ObjectKind::Bitmap(restored), ObjectKind::Bitmap(first)) =
            (&ed.document().get(id).unwrap().kind, &original)
        else {
            panic!("not a bitmap");
        };
        assert!(restored.shares_pixels_with(first));
    }

    // ── history ───────────────────────────────────────────────────────────

    #[test]
    fn undo_redo_walk_and_exhaust() {
        let mut ed = small_editor();
        for _ in 0..4 {
            ed.add_shape(ShapeKind::Rectangle).unwrap();
        }
        assert_eq!(ed.history().cursor(), Some(4));
        for _ in 0..4 {
            ed.undo().unwrap();
        }
        assert!(ed.document().is_empty());
        assert_eq!(ed.surface().pixel(150, 150), Some(Color::WHITE));
        assert_eq!(ed.undo(), Err(EditError::HistoryExhausted));

        ed.redo().unwrap();
        assert_eq!(ed.document().len(), 1);
    }

    #[test]
    fn history_caps_at_capacity() {
        let mut ed = small_editor();
        for _ in 0..40 {
            ed.add_shape(ShapeKind::Circle).unwrap();
        }
        assert_eq!(ed.history().len(), 30);
        let mut undos = 0;
        while ed.undo().is_ok() {
            undos += 1;
        }
        assert_eq!(undos, 29);
        assert_eq!(ed.document().len(), 11);
    }

    // ── export ────────────────────────────────────────────────────────────

    #[test]
    fn export_keeps_selection_and_surface() {
        let mut ed = small_editor();
        let id = ed.add_shape(ShapeKind::Rectangle).unwrap();
        let shown = ed.surface().clone();
        let png = ed.export(ExportFormat::Png).unwrap();
        assert_eq!(ed.document().selection(), Some(id));
        assert_eq!(ed.surface(), &shown);
        assert_eq!(png.mime(), "image/png");

        let svg = ed.export(ExportFormat::Svg).unwrap();
        assert!(String::from_utf8(svg.bytes).unwrap().contains("<rect x=\"50\""));
    }
}
