//! Batch gestures, history replay, camera and grid settings.

use mediacanvas_core::{CanvasError, CanvasResult, ObjectId};

use super::{ensure_finite, ensure_size, CanvasSession};
use crate::commands::{BatchMoveBuilder, BatchResizeBuilder, MoveObject, ResizeObject};
use crate::geometry::Aabb;
use crate::object_store::CanvasObject;
use crate::viewport::{Camera, ObjectTransform};

impl CanvasSession {
    /// Opens a move batch. An already open move batch is discarded.
    pub fn begin_batch_move(&mut self) {
        if let Some(pending) = self.pending_move.take() {
            tracing::warn!(entries = pending.len(), "discarding unfinished move batch");
        }
        self.pending_move = Some(BatchMoveBuilder::new());
    }

    /// Stages a move of `id` to the snapped `(x, y)`. The start position is
    /// read from the store now; nothing moves until
    /// [`end_batch_move`](Self::end_batch_move).
    pub fn add_to_batch_move(&mut self, id: ObjectId, x: f32, y: f32) -> CanvasResult<()> {
        let object = self.existing(id)?;
        ensure_finite(x, y)?;
        let (new_x, new_y) = self.grid.snap(x, y);
        let builder = self
            .pending_move
            .as_mut()
            .ok_or(CanvasError::NoBatchInProgress { kind: "move" })?;
        builder.add(MoveObject {
            id,
            old_x: object.x,
            old_y: object.y,
            new_x,
            new_y,
        });
        Ok(())
    }

    /// Commits the open move batch as one undo step. Returns `false` when it
    /// was empty and therefore dropped.
    pub fn end_batch_move(&mut self) -> CanvasResult<bool> {
        let builder = self
            .pending_move
            .take()
            .ok_or(CanvasError::NoBatchInProgress { kind: "move" })?;
        match builder.build() {
            Some(command) => {
                self.commit(command);
                Ok(true)
            }
            None => {
                tracing::debug!("empty move batch dropped");
                Ok(false)
            }
        }
    }

    /// Opens a resize batch. An already open resize batch is discarded.
    pub fn begin_batch_resize(&mut self) {
        if let Some(pending) = self.pending_resize.take() {
            tracing::warn!(entries = pending.len(), "discarding unfinished resize batch");
        }
        self.pending_resize = Some(BatchResizeBuilder::new());
    }

    pub fn add_to_batch_resize(
        &mut self,
        id: ObjectId,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    ) -> CanvasResult<()> {
        let object = self.existing(id)?;
        ensure_finite(x, y)?;
        ensure_size(width, height)?;
        let new = self.snapped_rect(x, y, width, height);
        let builder = self
            .pending_resize
            .as_mut()
            .ok_or(CanvasError::NoBatchInProgress { kind: "resize" })?;
        builder.add(ResizeObject {
            id,
            old: object.rect(),
            new,
        });
        Ok(())
    }

    pub fn end_batch_resize(&mut self) -> CanvasResult<bool> {
        let builder = self
            .pending_resize
            .take()
            .ok_or(CanvasError::NoBatchInProgress { kind: "resize" })?;
        match builder.build() {
            Some(command) => {
                self.commit(command);
                Ok(true)
            }
            None => {
                tracing::debug!("empty resize batch dropped");
                Ok(false)
            }
        }
    }

    pub fn is_batch_move_open(&self) -> bool {
        self.pending_move.is_some()
    }

    pub fn is_batch_resize_open(&self) -> bool {
        self.pending_resize.is_some()
    }

    pub fn undo(&mut self) -> bool {
        if !self.history.undo(&mut self.store) {
            return false;
        }
        self.resync_index();
        self.bump_version();
        true
    }

    pub fn redo(&mut self) -> bool {
        if !self.history.redo(&mut self.store) {
            return false;
        }
        self.resync_index();
        self.bump_version();
        true
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn camera(&self) -> Camera {
        self.viewport.camera()
    }

    /// Pans by a screen-space delta.
    pub fn pan(&mut self, dx: f32, dy: f32) {
        if !(dx.is_finite() && dy.is_finite()) || (dx == 0.0 && dy == 0.0) {
            return;
        }
        self.viewport.pan(dx, dy);
        self.bump_version();
    }

    /// Adds `delta` to the zoom around the screen point `(center_x, center_y)`.
    /// Returns whether the zoom changed.
    pub fn zoom(&mut self, center_x: f32, center_y: f32, delta: f32) -> bool {
        if !(center_x.is_finite() && center_y.is_finite() && delta.is_finite()) {
            return false;
        }
        let changed = self.viewport.zoom_at(center_x, center_y, delta);
        if changed {
            self.bump_version();
        }
        changed
    }

    pub fn reset_camera(&mut self) {
        self.viewport.reset();
        self.bump_version();
    }

    /// Frames every object, leaving `padding` (a fraction of each canvas
    /// dimension) free on every edge. Returns `false` on an empty canvas.
    pub fn fit_to_content(&mut self, padding: f32) -> bool {
        let Some(bounds) = self.store.content_bounds() else {
            return false;
        };
        self.fit_to(&bounds, padding);
        true
    }

    pub fn fit_to(&mut self, bounds: &Aabb, padding: f32) {
        self.viewport.fit_to_bounds(bounds, padding);
        self.bump_version();
    }

    pub fn screen_to_world(&self, screen_x: f32, screen_y: f32) -> (f32, f32) {
        self.viewport.screen_to_world(screen_x, screen_y)
    }

    pub fn world_to_screen(&self, world_x: f32, world_y: f32) -> (f32, f32) {
        self.viewport.world_to_screen(world_x, world_y)
    }

    /// Recomputes the visible list. Must be called before reading visible
    /// entries or transforms; indices are only valid until the next call.
    pub fn update_viewport(&mut self) -> usize {
        self.viewport.update_visible(&self.index, &self.store)
    }

    pub fn visible_count(&self) -> usize {
        self.viewport.visible().len()
    }

    pub fn visible_ids(&self) -> &[ObjectId] {
        self.viewport.visible()
    }

    pub fn visible_object(&self, index: usize) -> Option<&CanvasObject> {
        self.viewport
            .visible_id(index)
            .and_then(|id| self.store.get(id))
    }

    /// Screen-space rectangle of the visible entry at `index`.
    pub fn transform(&self, index: usize) -> Option<ObjectTransform> {
        self.visible_object(index)
            .map(|object| self.viewport.transform(object))
    }

    /// Updates the canvas dimensions used for culling and transforms.
    pub fn resize_canvas(&mut self, width: f32, height: f32) -> CanvasResult<()> {
        ensure_size(width, height)?;
        self.viewport.set_canvas_size(width, height);
        self.bump_version();
        Ok(())
    }

    /// Toggles snapping for later edits.
    pub fn set_snap_enabled(&mut self, enabled: bool) {
        self.grid.set_enabled(enabled);
    }

    pub fn set_grid_size(&mut self, size: f32) -> CanvasResult<()> {
        self.grid.set_size(size)
    }

    pub fn grid_size(&self) -> f32 {
        self.grid.size()
    }
}
