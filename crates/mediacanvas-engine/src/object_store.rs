//! Authoritative storage for canvas objects.

use std::collections::HashMap;

use mediacanvas_core::{CanvasError, CanvasResult, ObjectId};
use serde::{Deserialize, Serialize};

use crate::geometry::Aabb;

/// One rectangular media item on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasObject {
    pub id: ObjectId,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Radians. Only widens the indexed bounds; never rendered here.
    pub rotation: f32,
    pub z_index: i32,
    /// Opaque discriminator owned by the host (image = 1, ...).
    pub object_type: u8,
    /// Opaque key into the host's asset registry.
    pub asset_id: u32,
}

impl CanvasObject {
    /// The unrotated rectangle.
    pub fn rect(&self) -> Aabb {
        Aabb::new(self.x, self.y, self.width, self.height)
    }

    /// Bounds used for indexing and culling, widened for rotation.
    pub fn bounds(&self) -> Aabb {
        self.rect().rotated(self.rotation)
    }
}

/// Parameters for a new object. The id is assigned by the session.
///
/// ```
/// use mediacanvas_engine::NewObject;
///
/// let object = NewObject::new(10.0, 20.0, 64.0, 48.0).asset(7).kind(1).z_index(3);
/// assert_eq!(object.asset_id, 7);
/// assert_eq!(object.z_index, 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewObject {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub rotation: f32,
    pub z_index: i32,
    pub object_type: u8,
    pub asset_id: u32,
}

impl NewObject {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            rotation: 0.0,
            z_index: 0,
            object_type: 0,
            asset_id: 0,
        }
    }

    pub fn asset(mut self, asset_id: u32) -> Self {
        self.asset_id = asset_id;
        self
    }

    pub fn kind(mut self, object_type: u8) -> Self {
        self.object_type = object_type;
        self
    }

    pub fn rotation(mut self, radians: f32) -> Self {
        self.rotation = radians;
        self
    }

    pub fn z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    pub(crate) fn into_object(self, id: ObjectId) -> CanvasObject {
        CanvasObject {
            id,
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
            rotation: self.rotation,
            z_index: self.z_index,
            object_type: self.object_type,
            asset_id: self.asset_id,
        }
    }
}

/// Map from id to object plus the creation-ordered id list.
///
/// Ids are handed out from 1 upward and never reused, even after `clear`, so
/// ordering by id is ordering by creation.
#[derive(Debug, Clone)]
pub struct ObjectStore {
    objects: HashMap<ObjectId, CanvasObject>,
    order: Vec<ObjectId>,
    next_id: ObjectId,
}

impl ObjectStore {
    pub fn new() -> Self {
        Self {
            objects: HashMap::new(),
            order: Vec::new(),
            next_id: 1,
        }
    }

    /// An empty store that hands out ids from `next_id` upward. Used when
    /// restoring a saved canvas so new ids continue past the saved ones.
    pub fn starting_at(next_id: ObjectId) -> Self {
        Self {
            next_id: next_id.max(1),
            ..Self::new()
        }
    }

    /// Reserves the next id. Fails once the id range is used up rather than
    /// wrapping around to ids that may still be live.
    pub fn allocate_id(&mut self) -> CanvasResult<ObjectId> {
        let id = self.next_id;
        self.next_id = id.checked_add(1).ok_or(CanvasError::IdsExhausted)?;
        Ok(id)
    }

    /// The id the next `allocate_id` call will return.
    pub fn next_id(&self) -> ObjectId {
        self.next_id
    }

    /// Inserts or replaces an object, keeping the id list in creation order.
    pub fn insert(&mut self, object: CanvasObject) {
        if self.objects.insert(object.id, object).is_none() {
            if let Err(pos) = self.order.binary_search(&object.id) {
                self.order.insert(pos, object.id);
            }
        }
    }

    pub fn remove(&mut self, id: ObjectId) -> Option<CanvasObject> {
        let object = self.objects.remove(&id)?;
        if let Ok(pos) = self.order.binary_search(&id) {
            self.order.remove(pos);
        }
        Some(object)
    }

    pub fn get(&self, id: ObjectId) -> Option<&CanvasObject> {
        self.objects.get(&id)
    }

    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut CanvasObject> {
        self.objects.get_mut(&id)
    }

    pub fn contains(&self, id: ObjectId) -> bool {
        self.objects.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Id at position `index` of the creation-ordered list.
    pub fn id_at(&self, index: usize) -> Option<ObjectId> {
        self.order.get(index).copied()
    }

    /// Ids in creation order.
    pub fn ids(&self) -> &[ObjectId] {
        &self.order
    }

    /// Objects in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &CanvasObject> {
        self.order.iter().filter_map(|id| self.objects.get(id))
    }

    /// Smallest box covering every object's bounds.
    pub fn content_bounds(&self) -> Option<Aabb> {
        self.iter()
            .map(CanvasObject::bounds)
            .reduce(|acc, b| acc.union(&b))
    }

    /// Removes every object. The id counter keeps counting.
    pub fn clear(&mut self) {
        self.objects.clear();
        self.order.clear();
    }
}

impl Default for ObjectStore {
    fn default() -> Self {
        Self::new()
    }
}
