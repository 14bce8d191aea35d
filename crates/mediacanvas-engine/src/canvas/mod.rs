//! Canvas session: the façade composing store, index, grid, history and
//! viewport.
//!
//! Every edit goes through a [`CanvasCommand`] recorded in the history.
//! Executed commands update the spatial index incrementally for the ids
//! they touch; undo and redo rebuild the index from the store.

mod operations;

use mediacanvas_core::{CanvasConfig, CanvasError, CanvasResult, ObjectId};

use crate::commands::{
    AddObject, BatchDelete, BatchMoveBuilder, BatchResizeBuilder, CanvasCommand, DeleteObject,
    MoveObject, ReorderObject, ResizeObject, RotateObject,
};
use crate::geometry::Aabb;
use crate::grid::GridSystem;
use crate::history::CommandHistory;
use crate::object_store::{CanvasObject, NewObject, ObjectStore};
use crate::spatial_index::{SpatialIndex, SpatialIndexStats};
use crate::viewport::Viewport;

/// One canvas and everything needed to edit and view it.
///
/// Single-threaded; see [`mediacanvas_core::SharedSession`] for sharing a
/// session across threads.
#[derive(Debug, Clone)]
pub struct CanvasSession {
    store: ObjectStore,
    index: SpatialIndex,
    viewport: Viewport,
    grid: GridSystem,
    history: CommandHistory,
    pending_move: Option<BatchMoveBuilder>,
    pending_resize: Option<BatchResizeBuilder>,
    state_version: u32,
}

fn ensure_finite(x: f32, y: f32) -> CanvasResult<()> {
    if x.is_finite() && y.is_finite() {
        Ok(())
    } else {
        Err(CanvasError::NonFiniteCoordinate { x, y })
    }
}

fn ensure_size(width: f32, height: f32) -> CanvasResult<()> {
    if width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0 {
        Ok(())
    } else {
        Err(CanvasError::InvalidSize { width, height })
    }
}

impl CanvasSession {
    /// Creates a session with default limits, the given canvas size, and
    /// snapping enabled at `grid_size`.
    pub fn new(width: f32, height: f32, grid_size: f32) -> CanvasResult<Self> {
        Self::with_config(&CanvasConfig::new(width, height, grid_size))
    }

    pub fn with_config(config: &CanvasConfig) -> CanvasResult<Self> {
        config.validate()?;

        let mut viewport = Viewport::new(config.width, config.height);
        viewport.set_zoom_limits(config.min_zoom, config.max_zoom);

        tracing::debug!(
            width = config.width,
            height = config.height,
            grid_size = config.grid_size,
            "canvas session created"
        );

        Ok(Self {
            store: ObjectStore::new(),
            index: SpatialIndex::with_extent(
                config.world_extent,
                config.node_capacity,
                config.max_depth,
            ),
            viewport,
            grid: GridSystem::new(config.grid_size, config.snap_enabled)?,
            history: CommandHistory::new(config.max_history),
            pending_move: None,
            pending_resize: None,
            state_version: 0,
        })
    }

    /// Counter bumped by every change to visible state. Wraps on overflow.
    pub fn state_version(&self) -> u32 {
        self.state_version
    }

    fn bump_version(&mut self) {
        self.state_version = self.state_version.wrapping_add(1);
    }

    /// Executes `command` through the history and re-indexes the ids it
    /// touched.
    fn commit(&mut self, command: CanvasCommand) {
        let ids = command.affected_ids();
        let stale: Vec<(ObjectId, Aabb)> = ids
            .iter()
            .filter_map(|id| self.store.get(*id).map(|o| (*id, o.bounds())))
            .collect();

        self.history.execute(command, &mut self.store);

        for (id, bounds) in &stale {
            self.index.remove(*id, bounds);
        }
        for id in ids {
            if let Some(object) = self.store.get(id) {
                self.index.insert(id, &object.bounds());
            }
        }
        self.bump_version();
    }

    /// Rebuilds the index from the store after history replay.
    fn resync_index(&mut self) {
        self.index
            .rebuild(self.store.iter().map(|o| (o.id, o.bounds())));
    }

    fn existing(&self, id: ObjectId) -> CanvasResult<CanvasObject> {
        self.store
            .get(id)
            .copied()
            .ok_or(CanvasError::UnknownObject(id))
    }

    /// Adds an object, snapping its position and size when snapping is on.
    pub fn add_object(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        asset_id: u32,
        object_type: u8,
    ) -> CanvasResult<ObjectId> {
        self.add(
            NewObject::new(x, y, width, height)
                .asset(asset_id)
                .kind(object_type),
        )
    }

    /// Adds an object described by `request`.
    pub fn add(&mut self, mut request: NewObject) -> CanvasResult<ObjectId> {
        ensure_finite(request.x, request.y)?;
        ensure_size(request.width, request.height)?;
        if !request.rotation.is_finite() {
            request.rotation = 0.0;
        }
        self.grid.snap_object(&mut request);

        let id = self.store.allocate_id()?;
        let object = request.into_object(id);
        self.commit(CanvasCommand::Add(AddObject { object }));
        Ok(id)
    }

    /// Moves an object's top-left corner to the snapped `(x, y)`.
    pub fn move_object(&mut self, id: ObjectId, x: f32, y: f32) -> CanvasResult<()> {
        let object = self.existing(id)?;
        ensure_finite(x, y)?;
        let (new_x, new_y) = self.grid.snap(x, y);
        self.commit(CanvasCommand::Move(MoveObject {
            id,
            old_x: object.x,
            old_y: object.y,
            new_x,
            new_y,
        }));
        Ok(())
    }

    /// Sets position and size, snapping each independently.
    pub fn resize_object(
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
        self.commit(CanvasCommand::Resize(ResizeObject {
            id,
            old: object.rect(),
            new,
        }));
        Ok(())
    }

    fn snapped_rect(&self, x: f32, y: f32, width: f32, height: f32) -> Aabb {
        let (x, y) = self.grid.snap(x, y);
        Aabb::new(
            x,
            y,
            self.grid.snap_size(width),
            self.grid.snap_size(height),
        )
    }

    pub fn delete_object(&mut self, id: ObjectId) -> CanvasResult<()> {
        let object = self.existing(id)?;
        self.commit(CanvasCommand::Delete(DeleteObject { object }));
        Ok(())
    }

    /// Deletes every listed object that exists as one undo step. Unknown
    /// and repeated ids are skipped. Returns how many were deleted; nothing
    /// is recorded when that is zero.
    pub fn delete_objects(&mut self, ids: &[ObjectId]) -> usize {
        let mut objects: Vec<CanvasObject> = Vec::with_capacity(ids.len());
        for id in ids {
            if objects.iter().any(|o| o.id == *id) {
                continue;
            }
            if let Some(object) = self.store.get(*id) {
                objects.push(*object);
            }
        }

        let count = objects.len();
        if count > 0 {
            self.commit(CanvasCommand::BatchDelete(BatchDelete { objects }));
        }
        count
    }

    /// Sets an object's paint order.
    pub fn set_z_index(&mut self, id: ObjectId, z_index: i32) -> CanvasResult<()> {
        let object = self.existing(id)?;
        self.commit(CanvasCommand::Reorder(ReorderObject {
            id,
            old_z: object.z_index,
            new_z: z_index,
        }));
        Ok(())
    }

    /// Raises an object above every other object. Returns its new z-index.
    pub fn bring_to_front(&mut self, id: ObjectId) -> CanvasResult<i32> {
        self.existing(id)?;
        let top = self
            .store
            .iter()
            .filter(|o| o.id != id)
            .map(|o| o.z_index)
            .max()
            .map_or(0, |z| z.saturating_add(1));
        self.set_z_index(id, top)?;
        Ok(top)
    }

    /// Sets an object's rotation in radians.
    pub fn rotate_object(&mut self, id: ObjectId, rotation: f32) -> CanvasResult<()> {
        let object = self.existing(id)?;
        if !rotation.is_finite() {
            return Err(CanvasError::NonFiniteCoordinate {
                x: rotation,
                y: rotation,
            });
        }
        self.commit(CanvasCommand::Rotate(RotateObject {
            id,
            old_rotation: object.rotation,
            new_rotation: rotation,
        }));
        Ok(())
    }

    /// Removes every object and forgets history and pending batches. Ids
    /// keep counting from where they were.
    pub fn clear(&mut self) {
        self.store.clear();
        self.index.clear();
        self.history.clear();
        self.viewport.clear_visible();
        self.pending_move = None;
        self.pending_resize = None;
        self.bump_version();
        tracing::debug!("canvas cleared");
    }

    pub fn object(&self, id: ObjectId) -> Option<&CanvasObject> {
        self.store.get(id)
    }

    pub fn contains(&self, id: ObjectId) -> bool {
        self.store.contains(id)
    }

    pub fn object_count(&self) -> usize {
        self.store.len()
    }

    /// Id at `index` in creation order.
    pub fn object_id_at(&self, index: usize) -> Option<ObjectId> {
        self.store.id_at(index)
    }

    /// Objects in creation order.
    pub fn objects(&self) -> impl Iterator<Item = &CanvasObject> {
        self.store.iter()
    }

    /// Top-most object whose bounds contain the world point: highest
    /// z-index, then most recently created.
    pub fn object_at(&self, world_x: f32, world_y: f32) -> Option<ObjectId> {
        self.index
            .query_point(world_x, world_y)
            .into_iter()
            .filter_map(|id| self.store.get(id))
            .max_by_key(|o| (o.z_index, o.id))
            .map(|o| o.id)
    }

    /// Like [`object_at`](Self::object_at) for a screen position.
    pub fn object_at_screen(&self, screen_x: f32, screen_y: f32) -> Option<ObjectId> {
        let (x, y) = self.viewport.screen_to_world(screen_x, screen_y);
        self.object_at(x, y)
    }

    pub fn index_stats(&self) -> SpatialIndexStats {
        self.index.stats()
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    pub fn grid(&self) -> &GridSystem {
        &self.grid
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }
}
