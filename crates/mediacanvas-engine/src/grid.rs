//! Grid snapping.

use mediacanvas_core::{CanvasError, CanvasResult};

use crate::object_store::NewObject;

/// Snaps values to the nearest multiple of the cell size.
///
/// Changing the size or toggling snapping only affects later calls; existing
/// objects are never re-snapped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSystem {
    size: f32,
    enabled: bool,
}

impl GridSystem {
    pub fn new(size: f32, enabled: bool) -> CanvasResult<Self> {
        let mut grid = Self { size: 1.0, enabled };
        grid.set_size(size)?;
        Ok(grid)
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn set_size(&mut self, size: f32) -> CanvasResult<()> {
        if !(size.is_finite() && size > 0.0) {
            return Err(CanvasError::InvalidGridSize(size));
        }
        self.size = size;
        Ok(())
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Rounds to the nearest multiple of the cell size, halves rounding up.
    /// Identity when snapping is disabled.
    pub fn snap_value(&self, value: f32) -> f32 {
        if !self.enabled {
            return value;
        }
        (value / self.size + 0.5).floor() * self.size
    }

    pub fn snap(&self, x: f32, y: f32) -> (f32, f32) {
        (self.snap_value(x), self.snap_value(y))
    }

    /// Snaps a dimension, never below one cell.
    pub fn snap_size(&self, value: f32) -> f32 {
        if !self.enabled {
            return value;
        }
        self.snap_value(value).max(self.size)
    }

    /// Snaps position and dimensions of an object about to be created.
    pub fn snap_object(&self, object: &mut NewObject) {
        (object.x, object.y) = self.snap(object.x, object.y);
        object.width = self.snap_size(object.width);
        object.height = self.snap_size(object.height);
    }
}
