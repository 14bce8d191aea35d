//! Reversible canvas edits.
//!
//! Every command carries the before and after values it needs, so
//! `execute` and `undo` never read live object state beyond the ids they
//! captured. Commands mutate the [`ObjectStore`] only; keeping the spatial
//! index in step is the session's job.

use mediacanvas_core::ObjectId;

use crate::geometry::Aabb;
use crate::object_store::{CanvasObject, ObjectStore};

#[derive(Debug, Clone, PartialEq)]
pub enum CanvasCommand {
    Add(AddObject),
    Delete(DeleteObject),
    Move(MoveObject),
    Resize(ResizeObject),
    BatchMove(BatchMove),
    BatchResize(BatchResize),
    BatchDelete(BatchDelete),
    Reorder(ReorderObject),
    Rotate(RotateObject),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AddObject {
    pub object: CanvasObject,
}

/// Holds a full copy so undo can restore every field.
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteObject {
    pub object: CanvasObject,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveObject {
    pub id: ObjectId,
    pub old_x: f32,
    pub old_y: f32,
    pub new_x: f32,
    pub new_y: f32,
}

/// Position and size change; `old`/`new` are unrotated rectangles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeObject {
    pub id: ObjectId,
    pub old: Aabb,
    pub new: Aabb,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BatchMove {
    pub entries: Vec<MoveObject>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BatchResize {
    pub entries: Vec<ResizeObject>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BatchDelete {
    pub objects: Vec<CanvasObject>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReorderObject {
    pub id: ObjectId,
    pub old_z: i32,
    pub new_z: i32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotateObject {
    pub id: ObjectId,
    pub old_rotation: f32,
    pub new_rotation: f32,
}

impl MoveObject {
    fn apply(&self, store: &mut ObjectStore, x: f32, y: f32) {
        if let Some(obj) = store.get_mut(self.id) {
            obj.x = x;
            obj.y = y;
        }
    }
}

impl ResizeObject {
    fn apply(&self, store: &mut ObjectStore, rect: &Aabb) {
        if let Some(obj) = store.get_mut(self.id) {
            obj.x = rect.x;
            obj.y = rect.y;
            obj.width = rect.width;
            obj.height = rect.height;
        }
    }
}

impl CanvasCommand {
    pub fn execute(&self, store: &mut ObjectStore) {
        match self {
            CanvasCommand::Add(cmd) => store.insert(cmd.object),
            CanvasCommand::Delete(cmd) => {
                store.remove(cmd.object.id);
            }
            CanvasCommand::Move(cmd) => cmd.apply(store, cmd.new_x, cmd.new_y),
            CanvasCommand::Resize(cmd) => cmd.apply(store, &cmd.new),
            CanvasCommand::BatchMove(cmd) => {
                for entry in &cmd.entries {
                    entry.apply(store, entry.new_x, entry.new_y);
                }
            }
            CanvasCommand::BatchResize(cmd) => {
                for entry in &cmd.entries {
                    entry.apply(store, &entry.new);
                }
            }
            CanvasCommand::BatchDelete(cmd) => {
                for object in &cmd.objects {
                    store.remove(object.id);
                }
            }
            CanvasCommand::Reorder(cmd) => {
                if let Some(obj) = store.get_mut(cmd.id) {
                    obj.z_index = cmd.new_z;
                }
            }
            CanvasCommand::Rotate(cmd) => {
                if let Some(obj) = store.get_mut(cmd.id) {
                    obj.rotation = cmd.new_rotation;
                }
            }
        }
    }

    pub fn undo(&self, store: &mut ObjectStore) {
        match self {
            CanvasCommand::Add(cmd) => {
                store.remove(cmd.object.id);
            }
            CanvasCommand::Delete(cmd) => store.insert(cmd.object),
            CanvasCommand::Move(cmd) => cmd.apply(store, cmd.old_x, cmd.old_y),
            CanvasCommand::Resize(cmd) => cmd.apply(store, &cmd.old),
            CanvasCommand::BatchMove(cmd) => {
                for entry in cmd.entries.iter().rev() {
                    entry.apply(store, entry.old_x, entry.old_y);
                }
            }
            CanvasCommand::BatchResize(cmd) => {
                for entry in cmd.entries.iter().rev() {
                    entry.apply(store, &entry.old);
                }
            }
            CanvasCommand::BatchDelete(cmd) => {
                for object in cmd.objects.iter().rev() {
                    store.insert(*object);
                }
            }
            CanvasCommand::Reorder(cmd) => {
                if let Some(obj) = store.get_mut(cmd.id) {
                    obj.z_index = cmd.old_z;
                }
            }
            CanvasCommand::Rotate(cmd) => {
                if let Some(obj) = store.get_mut(cmd.id) {
                    obj.rotation = cmd.old_rotation;
                }
            }
        }
    }

    /// Short label for history menus.
    pub fn name(&self) -> &'static str {
        match self {
            CanvasCommand::Add(_) => "Add Object",
            CanvasCommand::Delete(_) => "Delete Object",
            CanvasCommand::Move(_) => "Move Object",
            CanvasCommand::Resize(_) => "Resize Object",
            CanvasCommand::BatchMove(_) => "Move Objects",
            CanvasCommand::BatchResize(_) => "Resize Objects",
            CanvasCommand::BatchDelete(_) => "Delete Objects",
            CanvasCommand::Reorder(_) => "Reorder Object",
            CanvasCommand::Rotate(_) => "Rotate Object",
        }
    }

    /// Ids whose bounds or existence this command changes.
    pub fn affected_ids(&self) -> Vec<ObjectId> {
        match self {
            CanvasCommand::Add(cmd) => vec![cmd.object.id],
            CanvasCommand::Delete(cmd) => vec![cmd.object.id],
            CanvasCommand::Move(cmd) => vec![cmd.id],
            CanvasCommand::Resize(cmd) => vec![cmd.id],
            CanvasCommand::BatchMove(cmd) => cmd.entries.iter().map(|e| e.id).collect(),
            CanvasCommand::BatchResize(cmd) => cmd.entries.iter().map(|e| e.id).collect(),
            CanvasCommand::BatchDelete(cmd) => cmd.objects.iter().map(|o| o.id).collect(),
            CanvasCommand::Reorder(cmd) => vec![cmd.id],
            CanvasCommand::Rotate(cmd) => vec![cmd.id],
        }
    }
}

/// Accumulates move entries for one drag gesture.
///
/// Adding an id that is already staged keeps its original start position
/// and replaces only the target.
#[derive(Debug, Clone, Default)]
pub struct BatchMoveBuilder {
    entries: Vec<MoveObject>,
}

impl BatchMoveBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, entry: MoveObject) {
        match self.entries.iter_mut().find(|e| e.id == entry.id) {
            Some(existing) => {
                existing.new_x = entry.new_x;
                existing.new_y = entry.new_y;
            }
            None => self.entries.push(entry),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `None` when nothing was staged.
    pub fn build(self) -> Option<CanvasCommand> {
        if self.entries.is_empty() {
            return None;
        }
        Some(CanvasCommand::BatchMove(BatchMove {
            entries: self.entries,
        }))
    }
}

/// Accumulates resize entries for one gesture.
#[derive(Debug, Clone, Default)]
pub struct BatchResizeBuilder {
    entries: Vec<ResizeObject>,
}

impl BatchResizeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, entry: ResizeObject) {
        match self.entries.iter_mut().find(|e| e.id == entry.id) {
            Some(existing) => existing.new = entry.new,
            None => self.entries.push(entry),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn build(self) -> Option<CanvasCommand> {
        if self.entries.is_empty() {
            return None;
        }
        Some(CanvasCommand::BatchResize(BatchResize {
            entries: self.entries,
        }))
    }
}
