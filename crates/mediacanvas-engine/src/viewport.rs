//! Camera, coordinate conversion, and the visible-object list.
//!
//! The camera position is the world point shown at the center of the
//! canvas. Screen coordinates are pixels from the canvas' top-left corner:
//!
//! ```text
//! screen = (world - camera) * zoom + canvas / 2
//! world  = (screen - canvas / 2) / zoom + camera
//! ```

use std::fmt;

use mediacanvas_core::constants::{DEFAULT_MAX_ZOOM, DEFAULT_MIN_ZOOM};
use mediacanvas_core::ObjectId;
use serde::{Deserialize, Serialize};

use crate::geometry::Aabb;
use crate::object_store::{CanvasObject, ObjectStore};
use crate::spatial_index::SpatialIndex;

/// Camera focus point and zoom.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub x: f32,
    pub y: f32,
    pub zoom: f32,
}

impl Camera {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y, zoom: 1.0 }
    }
}

/// Screen-space placement of one visible object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObjectTransform {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub rotation: f32,
}

/// Camera state bound to a canvas size, plus the last culling result.
#[derive(Debug, Clone)]
pub struct Viewport {
    camera: Camera,
    home: Camera,
    min_zoom: f32,
    max_zoom: f32,
    canvas_width: f32,
    canvas_height: f32,
    visible: Vec<ObjectId>,
}

impl Viewport {
    /// Creates a viewport whose camera starts centered on the canvas, so
    /// world `(0, 0)` sits at the screen's top-left corner.
    pub fn new(canvas_width: f32, canvas_height: f32) -> Self {
        let home = Camera::new(canvas_width / 2.0, canvas_height / 2.0);
        Self {
            camera: home,
            home,
            min_zoom: DEFAULT_MIN_ZOOM,
            max_zoom: DEFAULT_MAX_ZOOM,
            canvas_width,
            canvas_height,
            visible: Vec::new(),
        }
    }

    /// Sets the zoom clamp range and re-clamps the current zoom.
    pub fn set_zoom_limits(&mut self, min_zoom: f32, max_zoom: f32) {
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;
        self.camera.zoom = self.camera.zoom.clamp(min_zoom, max_zoom);
    }

    pub fn zoom_limits(&self) -> (f32, f32) {
        (self.min_zoom, self.max_zoom)
    }

    pub fn camera(&self) -> Camera {
        self.camera
    }

    pub fn canvas_size(&self) -> (f32, f32) {
        (self.canvas_width, self.canvas_height)
    }

    /// Sets the canvas dimensions (typically called when the host resizes).
    pub fn set_canvas_size(&mut self, width: f32, height: f32) {
        self.canvas_width = width;
        self.canvas_height = height;
    }

    /// Pans by a screen-space delta. The world offset is `delta / zoom`, so
    /// panning feels the same at every zoom level.
    pub fn pan(&mut self, dx: f32, dy: f32) {
        self.camera.x += dx / self.camera.zoom;
        self.camera.y += dy / self.camera.zoom;
    }

    /// Adds `delta` to the zoom (clamped) while keeping the world point under
    /// screen position `(screen_x, screen_y)` fixed. Returns whether the zoom
    /// changed.
    pub fn zoom_at(&mut self, screen_x: f32, screen_y: f32, delta: f32) -> bool {
        let old_zoom = self.camera.zoom;
        let new_zoom = (old_zoom + delta).clamp(self.min_zoom, self.max_zoom);
        if new_zoom == old_zoom {
            return false;
        }

        let (anchor_x, anchor_y) = self.screen_to_world(screen_x, screen_y);
        self.camera.zoom = new_zoom;
        self.camera.x = anchor_x - (screen_x - self.canvas_width / 2.0) / new_zoom;
        self.camera.y = anchor_y - (screen_y - self.canvas_height / 2.0) / new_zoom;
        true
    }

    /// Sets the zoom directly, clamped to the configured range.
    pub fn set_zoom(&mut self, zoom: f32) {
        self.camera.zoom = zoom.clamp(self.min_zoom, self.max_zoom);
    }

    /// Centers the camera on a world point.
    pub fn center_on(&mut self, world_x: f32, world_y: f32) {
        self.camera.x = world_x;
        self.camera.y = world_y;
    }

    /// Returns the camera to where it started.
    pub fn reset(&mut self) {
        self.camera = self.home;
        self.camera.zoom = self.camera.zoom.clamp(self.min_zoom, self.max_zoom);
    }

    /// Fits `bounds` into the canvas, reserving `padding` (a fraction of
    /// each dimension) on every edge, and centers on it.
    pub fn fit_to_bounds(&mut self, bounds: &Aabb, padding: f32) {
        let (cx, cy) = bounds.center();
        self.center_on(cx, cy);

        let usable = (1.0 - padding * 2.0).max(0.0);
        let zoom_x = if bounds.width > 0.0 {
            self.canvas_width * usable / bounds.width
        } else {
            f32::INFINITY
        };
        let zoom_y = if bounds.height > 0.0 {
            self.canvas_height * usable / bounds.height
        } else {
            f32::INFINITY
        };
        let zoom = zoom_x.min(zoom_y);
        if zoom.is_finite() && zoom > 0.0 {
            self.set_zoom(zoom);
        }
    }

    pub fn screen_to_world(&self, screen_x: f32, screen_y: f32) -> (f32, f32) {
        (
            (screen_x - self.canvas_width / 2.0) / self.camera.zoom + self.camera.x,
            (screen_y - self.canvas_height / 2.0) / self.camera.zoom + self.camera.y,
        )
    }

    pub fn world_to_screen(&self, world_x: f32, world_y: f32) -> (f32, f32) {
        (
            (world_x - self.camera.x) * self.camera.zoom + self.canvas_width / 2.0,
            (world_y - self.camera.y) * self.camera.zoom + self.canvas_height / 2.0,
        )
    }

    /// World-space rectangle currently on screen.
    pub fn bounds(&self) -> Aabb {
        let width = self.canvas_width / self.camera.zoom;
        let height = self.canvas_height / self.camera.zoom;
        Aabb::new(
            self.camera.x - width / 2.0,
            self.camera.y - height / 2.0,
            width,
            height,
        )
    }

    /// Re-runs culling and stably sorts the hits by ascending z-index.
    /// Objects with equal z keep the index's traversal order.
    pub fn update_visible(&mut self, index: &SpatialIndex, store: &ObjectStore) -> usize {
        let area = self.bounds();
        index.query_into(&area, &mut self.visible);
        self.visible
            .sort_by_key(|id| store.get(*id).map_or(0, |o| o.z_index));
        self.visible.len()
    }

    /// Ids from the last [`update_visible`](Self::update_visible), back to front.
    pub fn visible(&self) -> &[ObjectId] {
        &self.visible
    }

    /// Id at `index` in the last visible list.
    pub fn visible_id(&self, index: usize) -> Option<ObjectId> {
        self.visible.get(index).copied()
    }

    pub fn clear_visible(&mut self) {
        self.visible.clear();
    }

    /// Screen-space rectangle for `object` under the current camera.
    pub fn transform(&self, object: &CanvasObject) -> ObjectTransform {
        let (x, y) = self.world_to_screen(object.x, object.y);
        ObjectTransform {
            x,
            y,
            width: object.width * self.camera.zoom,
            height: object.height * self.camera.zoom,
            rotation: object.rotation,
        }
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Zoom: {:.2}x | Camera: ({:.1}, {:.1}) | Visible: {}",
            self.camera.zoom,
            self.camera.x,
            self.camera.y,
            self.visible.len()
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(
            mediacanvas_core::constants::DEFAULT_CANVAS_WIDTH,
            mediacanvas_core::constants::DEFAULT_CANVAS_HEIGHT,
        )
    }
}
