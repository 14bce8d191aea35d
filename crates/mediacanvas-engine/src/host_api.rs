//! Flat, sentinel-returning entry points for embedding hosts.
//!
//! Hosts that cannot carry `Option`/`Result` across their boundary (script
//! VMs, FFI shims) drive a [`CanvasHost`]. Every call is safe before
//! [`create_canvas`](CanvasHost::create_canvas): it returns `0`, `0.0`, or
//! `false`. Unknown ids and out-of-range indices map to the same sentinels.
//! Id `0` is never assigned to an object.

use mediacanvas_core::{CanvasResult, ObjectId, NULL_OBJECT_ID};

use crate::canvas::CanvasSession;
use crate::object_store::CanvasObject;
use crate::viewport::ObjectTransform;

/// Optional session plus the sentinel mapping of its API.
#[derive(Debug, Clone, Default)]
pub struct CanvasHost {
    session: Option<CanvasSession>,
}

fn index(i: i32) -> Option<usize> {
    usize::try_from(i).ok()
}

fn count(n: usize) -> i32 {
    i32::try_from(n).unwrap_or(i32::MAX)
}

/// Logs a rejected call and reports whether it succeeded.
fn accepted(op: &'static str, result: CanvasResult<()>) -> bool {
    match result {
        Ok(()) => true,
        Err(err) => {
            tracing::debug!(op, %err, "host call rejected");
            false
        }
    }
}

impl CanvasHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates (or replaces) the session. Returns `false` and keeps the
    /// previous session when the dimensions are invalid.
    pub fn create_canvas(&mut self, width: f32, height: f32, grid_size: f32) -> bool {
        match CanvasSession::new(width, height, grid_size) {
            Ok(session) => {
                self.session = Some(session);
                true
            }
            Err(err) => {
                tracing::warn!(%err, width, height, grid_size, "canvas not created");
                false
            }
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&CanvasSession> {
        self.session.as_ref()
    }

    pub fn session_mut(&mut self) -> Option<&mut CanvasSession> {
        self.session.as_mut()
    }

    fn read<T: Default>(&self, f: impl FnOnce(&CanvasSession) -> Option<T>) -> T {
        self.session.as_ref().and_then(f).unwrap_or_default()
    }

    fn object_field<T: Default>(&self, id: ObjectId, f: impl FnOnce(&CanvasObject) -> T) -> T {
        self.read(|s| s.object(id).map(f))
    }

    fn visible_field<T: Default>(&self, i: i32, f: impl FnOnce(&CanvasObject) -> T) -> T {
        self.read(|s| s.visible_object(index(i)?).map(f))
    }

    fn transform_field(&self, i: i32, f: impl FnOnce(&ObjectTransform) -> f32) -> f32 {
        self.read(|s| s.transform(index(i)?).map(|t| f(&t)))
    }

    pub fn clear_canvas(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.clear();
        }
    }

    /// Returns the new id, or `0` when rejected.
    pub fn add_object(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        asset_id: u32,
        object_type: u8,
    ) -> ObjectId {
        let Some(session) = self.session.as_mut() else {
            return NULL_OBJECT_ID;
        };
        match session.add_object(x, y, width, height, asset_id, object_type) {
            Ok(id) => id,
            Err(err) => {
                tracing::debug!(%err, "add_object rejected");
                NULL_OBJECT_ID
            }
        }
    }

    pub fn move_object(&mut self, id: ObjectId, x: f32, y: f32) -> bool {
        self.session
            .as_mut()
            .is_some_and(|s| accepted("move_object", s.move_object(id, x, y)))
    }

    pub fn resize_object(&mut self, id: ObjectId, x: f32, y: f32, width: f32, height: f32) -> bool {
        self.session.as_mut().is_some_and(|s| {
            accepted("resize_object", s.resize_object(id, x, y, width, height))
        })
    }

    pub fn delete_object(&mut self, id: ObjectId) -> bool {
        self.session
            .as_mut()
            .is_some_and(|s| accepted("delete_object", s.delete_object(id)))
    }

    /// Returns how many objects were deleted.
    pub fn delete_objects(&mut self, ids: &[ObjectId]) -> i32 {
        self.session
            .as_mut()
            .map_or(0, |s| count(s.delete_objects(ids)))
    }

    pub fn begin_batch_move(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.begin_batch_move();
        }
    }

    /// Stages a move. The store's current position is authoritative for the
    /// start point; `old_x`/`old_y` are only compared for diagnostics.
    pub fn add_to_batch_move(
        &mut self,
        id: ObjectId,
        old_x: f32,
        old_y: f32,
        new_x: f32,
        new_y: f32,
    ) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        if let Some(object) = session.object(id) {
            if object.x != old_x || object.y != old_y {
                tracing::debug!(
                    id,
                    old_x,
                    old_y,
                    stored_x = object.x,
                    stored_y = object.y,
                    "batch move start differs from stored position"
                );
            }
        }
        accepted("add_to_batch_move", session.add_to_batch_move(id, new_x, new_y))
    }

    pub fn end_batch_move(&mut self) -> bool {
        self.session
            .as_mut()
            .is_some_and(|s| s.end_batch_move().unwrap_or(false))
    }

    pub fn begin_batch_resize(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.begin_batch_resize();
        }
    }

    /// Stages a resize. As with moves, the stored rectangle wins over the
    /// supplied old values.
    #[allow(clippy::too_many_arguments)]
    pub fn add_to_batch_resize(
        &mut self,
        id: ObjectId,
        old_x: f32,
        old_y: f32,
        old_width: f32,
        old_height: f32,
        new_x: f32,
        new_y: f32,
        new_width: f32,
        new_height: f32,
    ) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        if let Some(object) = session.object(id) {
            let stored = (object.x, object.y, object.width, object.height);
            if stored != (old_x, old_y, old_width, old_height) {
                tracing::debug!(id, ?stored, "batch resize start differs from stored rectangle");
            }
        }
        accepted(
            "add_to_batch_resize",
            session.add_to_batch_resize(id, new_x, new_y, new_width, new_height),
        )
    }

    pub fn end_batch_resize(&mut self) -> bool {
        self.session
            .as_mut()
            .is_some_and(|s| s.end_batch_resize().unwrap_or(false))
    }

    pub fn object_count(&self) -> i32 {
        self.read(|s| Some(count(s.object_count())))
    }

    /// Id at `i` in creation order, `0` when out of range.
    pub fn object_id_at_index(&self, i: i32) -> ObjectId {
        self.read(|s| s.object_id_at(index(i)?))
    }

    pub fn object_exists(&self, id: ObjectId) -> bool {
        self.read(|s| Some(s.contains(id)))
    }

    pub fn object_x(&self, id: ObjectId) -> f32 {
        self.object_field(id, |o| o.x)
    }

    pub fn object_y(&self, id: ObjectId) -> f32 {
        self.object_field(id, |o| o.y)
    }

    pub fn object_width(&self, id: ObjectId) -> f32 {
        self.object_field(id, |o| o.width)
    }

    pub fn object_height(&self, id: ObjectId) -> f32 {
        self.object_field(id, |o| o.height)
    }

    pub fn object_asset_id(&self, id: ObjectId) -> u32 {
        self.object_field(id, |o| o.asset_id)
    }

    pub fn object_type(&self, id: ObjectId) -> u8 {
        self.object_field(id, |o| o.object_type)
    }

    pub fn pan(&mut self, dx: f32, dy: f32) {
        if let Some(session) = self.session.as_mut() {
            session.pan(dx, dy);
        }
    }

    pub fn zoom(&mut self, center_x: f32, center_y: f32, delta: f32) {
        if let Some(session) = self.session.as_mut() {
            session.zoom(center_x, center_y, delta);
        }
    }

    pub fn camera_x(&self) -> f32 {
        self.read(|s| Some(s.camera().x))
    }

    pub fn camera_y(&self) -> f32 {
        self.read(|s| Some(s.camera().y))
    }

    pub fn camera_zoom(&self) -> f32 {
        self.read(|s| Some(s.camera().zoom))
    }

    /// Recomputes the visible list and returns its length.
    pub fn update_viewport(&mut self) -> i32 {
        self.session
            .as_mut()
            .map_or(0, |s| count(s.update_viewport()))
    }

    pub fn visible_object_id(&self, i: i32) -> ObjectId {
        self.visible_field(i, |o| o.id)
    }

    pub fn visible_object_asset_id(&self, i: i32) -> u32 {
        self.visible_field(i, |o| o.asset_id)
    }

    pub fn visible_object_type(&self, i: i32) -> u8 {
        self.visible_field(i, |o| o.object_type)
    }

    pub fn transform_x(&self, i: i32) -> f32 {
        self.transform_field(i, |t| t.x)
    }

    pub fn transform_y(&self, i: i32) -> f32 {
        self.transform_field(i, |t| t.y)
    }

    pub fn transform_width(&self, i: i32) -> f32 {
        self.transform_field(i, |t| t.width)
    }

    pub fn transform_height(&self, i: i32) -> f32 {
        self.transform_field(i, |t| t.height)
    }

    pub fn transform_rotation(&self, i: i32) -> f32 {
        self.transform_field(i, |t| t.rotation)
    }

    pub fn undo(&mut self) -> bool {
        self.session.as_mut().is_some_and(CanvasSession::undo)
    }

    pub fn redo(&mut self) -> bool {
        self.session.as_mut().is_some_and(CanvasSession::redo)
    }

    pub fn can_undo(&self) -> bool {
        self.read(|s| Some(s.can_undo()))
    }

    pub fn can_redo(&self) -> bool {
        self.read(|s| Some(s.can_redo()))
    }

    pub fn set_grid_snap(&mut self, enabled: bool) {
        if let Some(session) = self.session.as_mut() {
            session.set_snap_enabled(enabled);
        }
    }

    pub fn set_grid_size(&mut self, size: f32) -> bool {
        self.session
            .as_mut()
            .is_some_and(|s| accepted("set_grid_size", s.set_grid_size(size)))
    }

    pub fn get_grid_size(&self) -> f32 {
        self.read(|s| Some(s.grid_size()))
    }

    pub fn get_state_version(&self) -> u32 {
        self.read(|s| Some(s.state_version()))
    }

    pub fn update_canvas_size(&mut self, width: f32, height: f32) -> bool {
        self.session
            .as_mut()
            .is_some_and(|s| accepted("update_canvas_size", s.resize_canvas(width, height)))
    }
}
