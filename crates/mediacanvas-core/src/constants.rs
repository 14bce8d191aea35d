//! Engine-wide defaults.

/// Smallest zoom factor the camera accepts.
pub const DEFAULT_MIN_ZOOM: f32 = 0.1;

/// Largest zoom factor the camera accepts.
pub const DEFAULT_MAX_ZOOM: f32 = 10.0;

/// Number of undo steps retained before the oldest is evicted.
pub const DEFAULT_MAX_HISTORY: usize = 100;

/// Half-width of the square world covered by the quadtree root.
///
/// The root spans `[-extent, extent]` on both axes. Objects wholly outside
/// this square still work, but they live in the index's overflow bucket
/// and are scanned linearly on every query.
pub const DEFAULT_WORLD_EXTENT: f32 = 100_000.0;

/// Objects a quadtree leaf holds before it subdivides.
pub const DEFAULT_NODE_CAPACITY: usize = 4;

/// Depth at which quadtree leaves stop subdividing.
pub const DEFAULT_MAX_DEPTH: usize = 16;

/// Grid cell size used when none is configured.
pub const DEFAULT_GRID_SIZE: f32 = 20.0;

/// Canvas dimensions used when none are configured.
pub const DEFAULT_CANVAS_WIDTH: f32 = 1200.0;
pub const DEFAULT_CANVAS_HEIGHT: f32 = 800.0;

/// Per-edge padding fraction used by fit-to-content.
pub const VIEW_PADDING: f32 = 0.05;
