//! Canvas session configuration.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::{CanvasError, CanvasResult};

/// Settings a canvas session is created from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Canvas width in screen pixels
    pub width: f32,
    /// Canvas height in screen pixels
    pub height: f32,
    /// Grid cell size in world units
    pub grid_size: f32,
    /// Whether positions and sizes snap to the grid
    pub snap_enabled: bool,
    /// Lower zoom clamp
    pub min_zoom: f32,
    /// Upper zoom clamp
    pub max_zoom: f32,
    /// Undo steps retained
    pub max_history: usize,
    /// Half-width of the indexed world square
    pub world_extent: f32,
    /// Items per quadtree leaf before subdividing
    pub node_capacity: usize,
    /// Maximum quadtree depth
    pub max_depth: usize,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS_WIDTH,
            height: DEFAULT_CANVAS_HEIGHT,
            grid_size: DEFAULT_GRID_SIZE,
            snap_enabled: true,
            min_zoom: DEFAULT_MIN_ZOOM,
            max_zoom: DEFAULT_MAX_ZOOM,
            max_history: DEFAULT_MAX_HISTORY,
            world_extent: DEFAULT_WORLD_EXTENT,
            node_capacity: DEFAULT_NODE_CAPACITY,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl CanvasConfig {
    /// Defaults with the given canvas size and grid cell.
    pub fn new(width: f32, height: f32, grid_size: f32) -> Self {
        Self {
            width,
            height,
            grid_size,
            ..Self::default()
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> CanvasResult<()> {
        fn positive(key: &'static str, value: f32) -> CanvasResult<()> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(CanvasError::InvalidConfig {
                    key,
                    reason: format!("must be finite and > 0, got {value}"),
                })
            }
        }

        positive("width", self.width)?;
        positive("height", self.height)?;
        positive("grid_size", self.grid_size)?;
        positive("min_zoom", self.min_zoom)?;
        positive("max_zoom", self.max_zoom)?;
        positive("world_extent", self.world_extent)?;

        if self.min_zoom > self.max_zoom {
            return Err(CanvasError::InvalidConfig {
                key: "min_zoom",
                reason: format!(
                    "min_zoom {} exceeds max_zoom {}",
                    self.min_zoom, self.max_zoom
                ),
            });
        }

        for (key, value) in [
            ("max_history", self.max_history),
            ("node_capacity", self.node_capacity),
            ("max_depth", self.max_depth),
        ] {
            if value == 0 {
                return Err(CanvasError::InvalidConfig {
                    key,
                    reason: "must be > 0".to_string(),
                });
            }
        }

        Ok(())
    }
}
